use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{AuthorizationLink, DayType, TrackingEntry, UserProfile, UserType};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Result, Row};

fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn map_entry_row(row: &Row) -> Result<TrackingEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let code: String = row.get("day_type")?;
    let day_type = DayType::from_db_str(&code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::UnknownDayType(code.clone())),
        )
    })?;

    Ok(TrackingEntry {
        user_id: row.get("user_id")?,
        date,
        day_type,
        minutes_override: row.get("minutes_override")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_user_row(row: &Row) -> Result<UserProfile> {
    let type_str: String = row.get("user_type")?;
    let user_type = UserType::from_db_str(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidUserType(type_str.clone())),
        )
    })?;

    Ok(UserProfile {
        id: row.get("id")?,
        name: row.get("name")?,
        user_type,
        shift_minutes: row.get("shift_minutes")?,
        manager_id: row.get("manager_id")?,
    })
}

// ---------------------------
// Tracking entries
// ---------------------------

pub fn load_entry(
    pool: &DbPool,
    user_id: i64,
    date: NaiveDate,
) -> AppResult<Option<TrackingEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         WHERE user_id = ?1 AND date = ?2",
    )?;

    let entry = stmt
        .query_row(params![user_id, date_to_db(date)], map_entry_row)
        .optional()?;
    Ok(entry)
}

pub fn load_entries_between(
    pool: &DbPool,
    user_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<TrackingEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![user_id, date_to_db(start), date_to_db(end)],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_for_user(pool: &DbPool, user_id: i64) -> AppResult<Vec<TrackingEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         WHERE user_id = ?1
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([user_id], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Write-or-replace by (user, date). The ON CONFLICT clause is what keeps
/// the one-entry-per-day invariant under concurrent edits.
pub fn upsert_entry(pool: &DbPool, entry: &TrackingEntry) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO entries (user_id, date, day_type, minutes_override, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(user_id, date) DO UPDATE SET
             day_type = excluded.day_type,
             minutes_override = excluded.minutes_override",
        params![
            entry.user_id,
            entry.date_str(),
            entry.day_type.to_db_str(),
            entry.minutes_override,
            entry.created_at,
        ],
    )?;
    Ok(())
}

pub fn delete_entry(pool: &DbPool, user_id: i64, date: NaiveDate) -> AppResult<bool> {
    let affected = pool.conn.execute(
        "DELETE FROM entries WHERE user_id = ?1 AND date = ?2",
        params![user_id, date_to_db(date)],
    )?;
    Ok(affected > 0)
}

// ---------------------------
// User profiles
// ---------------------------

pub fn load_profile(pool: &DbPool, user_id: i64) -> AppResult<Option<UserProfile>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM users WHERE id = ?1")?;

    let user = stmt.query_row([user_id], map_user_row).optional()?;
    Ok(user)
}

pub fn insert_user(
    pool: &DbPool,
    name: &str,
    user_type: UserType,
    shift_minutes: i64,
    manager_id: Option<i64>,
) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO users (name, user_type, shift_minutes, manager_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, user_type.to_db_str(), shift_minutes, manager_id],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn list_users(pool: &DbPool) -> AppResult<Vec<UserProfile>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM users ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Authorization links
// ---------------------------

pub fn load_auth_link(pool: &DbPool, admin_id: i64) -> AppResult<Option<AuthorizationLink>> {
    let mut stmt = pool.conn.prepare(
        "SELECT user_id FROM auth_links
         WHERE admin_id = ?1
         ORDER BY user_id ASC",
    )?;

    let rows = stmt.query_map([admin_id], |row| row.get::<_, i64>(0))?;

    let mut employee_ids = Vec::new();
    for r in rows {
        employee_ids.push(r?);
    }

    if employee_ids.is_empty() {
        return Ok(None);
    }
    Ok(Some(AuthorizationLink {
        admin_id,
        employee_ids,
    }))
}

/// Attach an employee to an admin. The UNIQUE(user_id) constraint means a
/// reassignment must replace the old row, so this is an upsert too.
pub fn link_employee(pool: &DbPool, admin_id: i64, user_id: i64) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO auth_links (admin_id, user_id)
         VALUES (?1, ?2)
         ON CONFLICT(user_id) DO UPDATE SET admin_id = excluded.admin_id",
        params![admin_id, user_id],
    )?;
    Ok(())
}

pub fn unlink_employee(pool: &DbPool, user_id: i64) -> AppResult<bool> {
    let affected = pool
        .conn
        .execute("DELETE FROM auth_links WHERE user_id = ?1", [user_id])?;
    Ok(affected > 0)
}
