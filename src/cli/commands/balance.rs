use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::balance::{compute_balance, tracked_days};
use crate::core::registry::AccrualPolicy;
use crate::db::pool::DbPool;
use crate::db::Store;
use crate::errors::AppResult;
use crate::utils::colors::{color_for_balance, RESET};
use crate::utils::time::{format_balance, format_balance_hours, format_minutes};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { user_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let policy = AccrualPolicy::from_config(cfg)?;

        let minutes = compute_balance(&pool, &policy, *user_id)?;
        let days = tracked_days(&pool, *user_id)?;

        let shown = if cfg.balance_unit == "hours" {
            format_balance_hours(minutes)
        } else {
            format_balance(minutes)
        };

        println!();
        println!(
            "Balance for user #{}: {}{}{}",
            user_id,
            color_for_balance(minutes),
            shown,
            RESET
        );
        println!("Tracked days: {}", days);
        if let Some(profile) = pool.profile(*user_id)? {
            println!("Shift length: {}", format_minutes(profile.shift_minutes));
        }
        println!();
    }

    Ok(())
}
