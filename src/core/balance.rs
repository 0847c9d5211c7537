//! Balance calculator: accrued surplus/deficit in signed minutes,
//! recomputed from stored entries on every call. Nothing is persisted, so
//! the figure can never drift from the entries that justify it.

use crate::core::registry::AccrualPolicy;
use crate::db::Store;
use crate::errors::{AppError, AppResult};

/// Total signed balance for a user, in minutes.
pub fn compute_balance(store: &dyn Store, policy: &AccrualPolicy, user_id: i64) -> AppResult<i64> {
    let profile = store
        .profile(user_id)?
        .ok_or(AppError::UserNotFound(user_id))?;

    let entries = store.entries_for_user(user_id)?;

    let total = entries
        .iter()
        .map(|e| {
            policy
                .effect(e.day_type)
                .delta(profile.shift_minutes, e.minutes_override)
        })
        .sum();

    Ok(total)
}

/// How many days the user has tracked altogether, for the balance
/// explanation view.
pub fn tracked_days(store: &dyn Store, user_id: i64) -> AppResult<usize> {
    store
        .profile(user_id)?
        .ok_or(AppError::UserNotFound(user_id))?;
    Ok(store.entries_for_user(user_id)?.len())
}
