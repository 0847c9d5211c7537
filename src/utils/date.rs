use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

/// Resolved at call time on purpose. Command handlers must never capture
/// "today" at startup or in a default argument.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Reject out-of-range months instead of normalizing them into adjacent
/// years. Wrap-around arithmetic here has bitten before.
pub fn check_month(month: u32) -> AppResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(AppError::InvalidMonth(month))
    }
}

pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    check_month(month)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(AppError::InvalidMonth(month))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(AppError::InvalidMonth(month))?;
    Ok((next - first).num_days() as u32)
}

pub fn all_days_of_month(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    check_month(month)?;
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(AppError::InvalidMonth(month))?;

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    Ok(out)
}

pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let days = days_in_month(year, month)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(AppError::InvalidMonth(month))?;
    let last = NaiveDate::from_ymd_opt(year, month, days)
        .ok_or(AppError::InvalidMonth(month))?;
    Ok((first, last))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}
