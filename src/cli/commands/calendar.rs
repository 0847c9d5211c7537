use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{build_month, DayCell};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{color_for_cell, GREY, RESET};
use crate::utils::date;

use chrono::Datelike;

const CELL_WIDTH: usize = 9;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        user_id,
        year,
        month,
    } = cmd
    {
        // Defaults resolve at call time, never at startup.
        let now = date::today();
        let y = year.unwrap_or_else(|| now.year());
        let m = month.unwrap_or_else(|| now.month());

        let pool = DbPool::new(&cfg.database)?;
        let grid = build_month(&pool, *user_id, y, m)?;

        println!();
        println!("{} {} — user #{}", date::month_name(m), y, user_id);
        for wd in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
            print!("{:<width$}", wd, width = CELL_WIDTH);
        }
        println!();

        for week in &grid.weeks {
            for cell in week {
                print!("{}", render_cell(cell));
            }
            println!();
        }
        println!();
    }

    Ok(())
}

fn render_cell(cell: &DayCell) -> String {
    match cell {
        DayCell::Padding => " ".repeat(CELL_WIDTH),
        DayCell::Weekend(d) => format!(
            "{}{:<width$}{}",
            GREY,
            format!("{:2} ·", d.day()),
            RESET,
            width = CELL_WIDTH
        ),
        DayCell::Day { date, day_type } => {
            let color = color_for_cell(false, day_type.is_absent());
            format!(
                "{}{:<width$}{}",
                color,
                format!("{:2} {}", date.day(), day_type.code()),
                RESET,
                width = CELL_WIDTH
            )
        }
    }
}
