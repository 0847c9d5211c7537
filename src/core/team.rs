//! Team/authorization aggregation: who a manager can see, and the
//! per-employee absence report for the holiday planning view.

use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{TrackingEntry, UserProfile, UserType};
use crate::utils::date;

/// Resolve the set of employees visible to a requester.
///
/// Two-branch policy, stated explicitly:
/// - ADMIN: look up the requester's own authorization link.
/// - TEAML: follow the requester's `manager_id` to their administrator and
///   use that admin's link. Team leaders see their peers, themselves
///   included; they have no authorization record of their own.
///
/// A missing link yields `NoTeamAssigned`, which callers treat as an empty
/// team rather than a failure.
pub fn resolve_team(store: &dyn Store, requester_id: i64) -> AppResult<Vec<UserProfile>> {
    let requester = store
        .profile(requester_id)?
        .ok_or(AppError::UserNotFound(requester_id))?;

    let admin_id = match requester.user_type {
        UserType::Admin => requester.id,
        UserType::TeamLeader => requester
            .manager_id
            .ok_or(AppError::NoTeamAssigned(requester_id))?,
        UserType::Employee => return Err(AppError::NoTeamAssigned(requester_id)),
    };

    let link = store
        .auth_link(admin_id)?
        .ok_or(AppError::NoTeamAssigned(requester_id))?;

    let mut team = Vec::with_capacity(link.employee_ids.len());
    for id in link.employee_ids {
        if let Some(profile) = store.profile(id)? {
            team.push(profile);
        }
    }
    Ok(team)
}

/// Absent-family entries of every visible employee within one month,
/// grouped per employee in team order, entries ordered by date.
pub fn holiday_report(
    store: &dyn Store,
    requester_id: i64,
    year: i32,
    month: u32,
) -> AppResult<Vec<(UserProfile, Vec<TrackingEntry>)>> {
    let (first, last) = date::month_bounds(year, month)?;

    let team = resolve_team(store, requester_id)?;

    let mut report = Vec::with_capacity(team.len());
    for member in team {
        let absences: Vec<TrackingEntry> = store
            .entries_between(member.id, first, last)?
            .into_iter()
            .filter(|e| e.day_type.is_absent())
            .collect();
        report.push((member, absences));
    }
    Ok(report)
}
