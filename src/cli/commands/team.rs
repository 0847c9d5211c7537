use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::team::resolve_team;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Team { requester_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        // A missing authorization link is an empty team, not a failure.
        let team = match resolve_team(&pool, *requester_id) {
            Ok(team) => team,
            Err(AppError::NoTeamAssigned(_)) => {
                println!("No team assigned to user #{}.", requester_id);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut table = Table::new(vec![
            Column { header: "ID".into(), width: 4 },
            Column { header: "Name".into(), width: 24 },
            Column { header: "Type".into(), width: 8 },
            Column { header: "Shift".into(), width: 6 },
        ]);
        for member in team {
            table.add_row(vec![
                member.id.to_string(),
                member.name.clone(),
                member.user_type.to_db_str().to_string(),
                format_minutes(member.shift_minutes),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
