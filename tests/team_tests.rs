mod common;
use common::{mem_store, seed_user};

use chrono::NaiveDate;
use timetracker::core::team::{holiday_report, resolve_team};
use timetracker::db::queries::{link_employee, unlink_employee};
use timetracker::db::Store;
use timetracker::errors::AppError;
use timetracker::models::{DayType, TrackingEntry, UserType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Admin A manages team leader T and employees E1, E2.
struct Org {
    admin: i64,
    leader: i64,
    e1: i64,
    e2: i64,
}

fn seed_org(pool: &timetracker::db::pool::DbPool) -> Org {
    let admin = seed_user(pool, "Alice", UserType::Admin, 480, None);
    let leader = seed_user(pool, "Tom", UserType::TeamLeader, 480, Some(admin));
    let e1 = seed_user(pool, "Eve", UserType::Employee, 480, Some(admin));
    let e2 = seed_user(pool, "Eli", UserType::Employee, 450, Some(admin));
    link_employee(pool, admin, leader).unwrap();
    link_employee(pool, admin, e1).unwrap();
    link_employee(pool, admin, e2).unwrap();
    Org {
        admin,
        leader,
        e1,
        e2,
    }
}

#[test]
fn test_admin_sees_their_link() {
    let pool = mem_store();
    let org = seed_org(&pool);

    let team = resolve_team(&pool, org.admin).unwrap();
    let mut ids: Vec<i64> = team.iter().map(|m| m.id).collect();
    ids.sort();
    assert_eq!(ids, vec![org.leader, org.e1, org.e2]);
}

#[test]
fn test_team_leader_sees_peers_including_self() {
    let pool = mem_store();
    let org = seed_org(&pool);

    // The leader borrows their admin's authorization record.
    let team = resolve_team(&pool, org.leader).unwrap();
    let mut ids: Vec<i64> = team.iter().map(|m| m.id).collect();
    ids.sort();
    assert_eq!(ids, vec![org.leader, org.e1, org.e2]);
}

#[test]
fn test_admin_without_link_gets_no_team_assigned() {
    let pool = mem_store();
    let lonely = seed_user(&pool, "Ada", UserType::Admin, 480, None);

    assert!(matches!(
        resolve_team(&pool, lonely),
        Err(AppError::NoTeamAssigned(id)) if id == lonely
    ));
}

#[test]
fn test_plain_employee_has_no_team_view() {
    let pool = mem_store();
    let org = seed_org(&pool);

    assert!(matches!(
        resolve_team(&pool, org.e1),
        Err(AppError::NoTeamAssigned(_))
    ));
}

#[test]
fn test_missing_requester_is_user_not_found() {
    let pool = mem_store();
    assert!(matches!(
        resolve_team(&pool, 404),
        Err(AppError::UserNotFound(404))
    ));
}

#[test]
fn test_relink_moves_employee_between_admins() {
    let pool = mem_store();
    let org = seed_org(&pool);
    let other_admin = seed_user(&pool, "Bea", UserType::Admin, 480, None);

    // An employee belongs to at most one link: relinking replaces.
    link_employee(&pool, other_admin, org.e2).unwrap();

    let old_team: Vec<i64> = resolve_team(&pool, org.admin)
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert!(!old_team.contains(&org.e2));

    let new_team: Vec<i64> = resolve_team(&pool, other_admin)
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(new_team, vec![org.e2]);

    unlink_employee(&pool, org.e2).unwrap();
    assert!(matches!(
        resolve_team(&pool, other_admin),
        Err(AppError::NoTeamAssigned(_))
    ));
}

#[test]
fn test_holiday_report_filters_family_and_month() {
    let pool = mem_store();
    let org = seed_org(&pool);

    // In range, absent family
    pool.upsert_entry(&TrackingEntry::new(org.e1, d(2024, 6, 10), DayType::Vacation, None))
        .unwrap();
    pool.upsert_entry(&TrackingEntry::new(org.e1, d(2024, 6, 12), DayType::Sickness, None))
        .unwrap();
    // In range, working family: must not appear
    pool.upsert_entry(&TrackingEntry::new(org.e1, d(2024, 6, 11), DayType::WorkDay, None))
        .unwrap();
    // Out of range
    pool.upsert_entry(&TrackingEntry::new(org.e1, d(2024, 7, 1), DayType::Vacation, None))
        .unwrap();

    let report = holiday_report(&pool, org.admin, 2024, 6).unwrap();
    assert_eq!(report.len(), 3); // one row per team member

    let (_, absences) = report
        .iter()
        .find(|(member, _)| member.id == org.e1)
        .unwrap();
    let dates: Vec<NaiveDate> = absences.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![d(2024, 6, 10), d(2024, 6, 12)]);
    assert!(absences.iter().all(|e| e.day_type.is_absent()));

    // Members without absences still get an (empty) row.
    let (_, empty) = report
        .iter()
        .find(|(member, _)| member.id == org.e2)
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_holiday_report_validates_month() {
    let pool = mem_store();
    let org = seed_org(&pool);

    assert!(matches!(
        holiday_report(&pool, org.admin, 2024, 13),
        Err(AppError::InvalidMonth(13))
    ));
}
