use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::team::holiday_report;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

use chrono::Datelike;
use serde::Serialize;

#[derive(Serialize)]
struct ReportRow<'a> {
    user_id: i64,
    name: &'a str,
    absences: Vec<AbsenceRow>,
}

#[derive(Serialize)]
struct AbsenceRow {
    date: String,
    code: &'static str,
    label: &'static str,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holidays {
        requester_id,
        year,
        month,
        json,
    } = cmd
    {
        let now = date::today();
        let y = year.unwrap_or_else(|| now.year());
        let m = month.unwrap_or_else(|| now.month());

        let pool = DbPool::new(&cfg.database)?;

        let report = match holiday_report(&pool, *requester_id, y, m) {
            Ok(report) => report,
            Err(AppError::NoTeamAssigned(_)) => {
                if *json {
                    println!("[]");
                } else {
                    println!("No team assigned to user #{}.", requester_id);
                }
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if *json {
            let rows: Vec<ReportRow> = report
                .iter()
                .map(|(member, entries)| ReportRow {
                    user_id: member.id,
                    name: &member.name,
                    absences: entries
                        .iter()
                        .map(|e| AbsenceRow {
                            date: e.date_str(),
                            code: e.day_type.code(),
                            label: e.day_type.label(),
                        })
                        .collect(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .map_err(|e| AppError::Other(e.to_string()))?
            );
            return Ok(());
        }

        println!();
        println!("Absences — {} {}", date::month_name(m), y);
        for (member, entries) in report {
            println!("\n{} (#{})", member.name, member.id);
            if entries.is_empty() {
                println!("  none");
                continue;
            }
            for e in entries {
                println!("  {}  {}  {}", e.date_str(), e.day_type.code(), e.day_type.label());
            }
        }
        println!();
    }

    Ok(())
}
