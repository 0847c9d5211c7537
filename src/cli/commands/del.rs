use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        user_id,
        date: date_str,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        if !*yes {
            let prompt = format!(
                "Delete the entry of user #{} for {}? This action is irreversible.",
                user_id, d
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let pool = DbPool::new(&cfg.database)?;
        if pool.delete_entry(*user_id, d)? {
            ttlog(
                &pool.conn,
                "del",
                &format!("{}/{}", user_id, d),
                &format!("Deleted entry of user {} for {}", user_id, d),
            )?;
            info(format!("Entry of user #{} for {} deleted.", user_id, d));
        } else {
            info(format!("No entry of user #{} for {}.", user_id, d));
        }
    }

    Ok(())
}
