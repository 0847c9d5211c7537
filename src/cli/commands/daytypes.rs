use crate::core::registry;
use crate::errors::AppResult;
use crate::models::{DayType, Family};
use crate::utils::table::{Column, Table};

/// Print the fixed day-type vocabulary. This is the data a selection
/// widget would be generated from.
pub fn handle() -> AppResult<()> {
    let mut table = Table::new(vec![
        Column { header: "Code".into(), width: 6 },
        Column { header: "Label".into(), width: 26 },
        Column { header: "Family".into(), width: 7 },
    ]);

    for (code, label) in registry::all_codes() {
        let family = match DayType::from_code(code).map(|d| d.family()) {
            Some(Family::Working) => "working",
            _ => "absent",
        };
        table.add_row(vec![code.to_string(), label.to_string(), family.to_string()]);
    }

    print!("{}", table.render());
    Ok(())
}
