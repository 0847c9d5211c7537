use super::day_type::DayType;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One tracked record per (user, calendar date). The store enforces the
/// uniqueness with UNIQUE(user_id, date); writing twice updates in place.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingEntry {
    pub user_id: i64,           // ⇔ entries.user_id
    pub date: NaiveDate,        // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub day_type: DayType,      // ⇔ entries.day_type (5-char code)
    /// Worked/absent minutes for a partial day. None means "full day of
    /// the day type's canonical effect".
    pub minutes_override: Option<i64>, // ⇔ entries.minutes_override
    pub created_at: String,     // ⇔ entries.created_at (TEXT, ISO8601)
}

impl TrackingEntry {
    /// High-level constructor for entries created by the CLI.
    pub fn new(
        user_id: i64,
        date: NaiveDate,
        day_type: DayType,
        minutes_override: Option<i64>,
    ) -> Self {
        Self {
            user_id,
            date,
            day_type,
            minutes_override,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
