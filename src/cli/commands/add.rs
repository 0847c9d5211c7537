use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{DayType, TrackingEntry};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_duration;

/// Add or update a tracking entry. One entry per (user, date): a second
/// add for the same day replaces the first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        user_id,
        date: date_str,
        day_type,
        hours,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        //
        // 2. Parse day type code
        //
        let dt = DayType::from_code(day_type)
            .ok_or_else(|| AppError::UnknownDayType(day_type.to_string()))?;

        //
        // 3. Optional partial-day override
        //
        let minutes_override = match hours {
            Some(h) => Some(parse_duration(h)?),
            None => None,
        };

        //
        // 4. Open DB and check the user exists
        //
        let pool = DbPool::new(&cfg.database)?;
        pool.profile(*user_id)?
            .ok_or(AppError::UserNotFound(*user_id))?;

        //
        // 5. Upsert
        //
        let entry = TrackingEntry::new(*user_id, d, dt, minutes_override);
        pool.upsert_entry(&entry)?;

        ttlog(
            &pool.conn,
            "add",
            &format!("{}/{}", user_id, entry.date_str()),
            &format!("Entry {} for user {}", dt.code(), user_id),
        )?;
        success(format!(
            "Recorded {} ({}) for user #{} on {}",
            dt.code(),
            dt.label(),
            user_id,
            d
        ));
    }

    Ok(())
}
