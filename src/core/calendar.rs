//! Calendar grid builder: one month of a user's entries laid out as
//! Monday-first week rows, ready for any renderer.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::DayType;
use crate::utils::date;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Outside the requested month, rendered blank.
    Padding,
    /// Saturday/Sunday without an entry.
    Weekend(NaiveDate),
    /// A real tracked (or implied) day.
    Day { date: NaiveDate, day_type: DayType },
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Padding => None,
            DayCell::Weekend(d) => Some(*d),
            DayCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            DayCell::Day { day_type, .. } => Some(day_type.label()),
            _ => None,
        }
    }

    pub fn is_real(&self) -> bool {
        !matches!(self, DayCell::Padding)
    }
}

/// A month of cells. Every week row holds exactly 7 cells, Monday first;
/// padding appears only in the first and last row.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthGrid {
    /// Number of non-padding cells, always the number of days in the month.
    pub fn real_cell_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|c| c.is_real())
            .count()
    }
}

/// Build the grid for one user and month.
///
/// Classification per real date: an entry wins; otherwise Saturday/Sunday
/// is `Weekend` and a weekday is an implicit `WKDAY` — an unlogged weekday
/// is a workday, not an error.
///
/// `month` outside 1..=12 is rejected with `InvalidMonth`, never
/// normalized into an adjacent year.
pub fn build_month(
    store: &dyn Store,
    user_id: i64,
    year: i32,
    month: u32,
) -> AppResult<MonthGrid> {
    store
        .profile(user_id)?
        .ok_or(AppError::UserNotFound(user_id))?;

    let (first, last) = date::month_bounds(year, month)?;

    let by_date: HashMap<NaiveDate, DayType> = store
        .entries_between(user_id, first, last)?
        .into_iter()
        .map(|e| (e.date, e.day_type))
        .collect();

    let mut weeks: Vec<Vec<DayCell>> = Vec::new();
    let mut week: Vec<DayCell> = Vec::with_capacity(7);

    // Pad before day 1 so the first row starts on Monday.
    for _ in 0..first.weekday().num_days_from_monday() {
        week.push(DayCell::Padding);
    }

    for day in date::all_days_of_month(year, month)? {
        let cell = match by_date.get(&day) {
            Some(day_type) => DayCell::Day {
                date: day,
                day_type: *day_type,
            },
            None if date::is_weekend(day) => DayCell::Weekend(day),
            None => DayCell::Day {
                date: day,
                day_type: DayType::WorkDay,
            },
        };
        week.push(cell);

        if week.len() == 7 {
            weeks.push(week);
            week = Vec::with_capacity(7);
        }
    }

    // Pad after the last day so the final row is full as well.
    if !week.is_empty() {
        while week.len() < 7 {
            week.push(DayCell::Padding);
        }
        weeks.push(week);
    }

    Ok(MonthGrid { year, month, weeks })
}
