//! Duration parsing and formatting: shift lengths and balances are plain
//! integer minutes everywhere, strings only at the edges.

use crate::errors::{AppError, AppResult};

/// Parse a human duration into minutes. Accepts "8h", "7h30m", "45m" and
/// a bare minute count like "480".
pub fn parse_duration(s: &str) -> AppResult<i64> {
    let trimmed = s.trim().to_lowercase();
    if trimmed.is_empty() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    if let Ok(mins) = trimmed.parse::<i64>() {
        if mins < 0 {
            return Err(AppError::InvalidDuration(s.to_string()));
        }
        return Ok(mins);
    }

    let mut total: i64 = 0;
    let mut digits = String::new();
    let mut seen_unit = false;

    for c in trimmed.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' => {
                if digits.is_empty() {
                    return Err(AppError::InvalidDuration(s.to_string()));
                }
                let value: i64 = digits
                    .parse()
                    .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
                total += if c == 'h' { value * 60 } else { value };
                digits.clear();
                seen_unit = true;
            }
            ' ' => {}
            _ => return Err(AppError::InvalidDuration(s.to_string())),
        }
    }

    if !digits.is_empty() || !seen_unit {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    Ok(total)
}

/// "HH:MM" with a leading minus for deficits.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Signed rendering for balances: always carries a sign, e.g. "+08:00".
pub fn format_balance(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Balance in decimal hours, for `balance_unit: hours`.
pub fn format_balance_hours(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let m = mins.abs();
    format!("{}{}.{:02}h", sign, m / 60, (m % 60) * 100 / 60)
}
