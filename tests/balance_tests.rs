mod common;
use common::{mem_store, seed_user};

use chrono::NaiveDate;
use timetracker::config::Config;
use timetracker::core::balance::{compute_balance, tracked_days};
use timetracker::core::registry::{Accrual, AccrualPolicy};
use timetracker::db::Store;
use timetracker::errors::AppError;
use timetracker::models::{DayType, TrackingEntry, UserType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn add(pool: &timetracker::db::pool::DbPool, user: i64, date: NaiveDate, dt: DayType, mins: Option<i64>) {
    pool.upsert_entry(&TrackingEntry::new(user, date, dt, mins))
        .unwrap();
}

#[test]
fn test_zero_entries_zero_balance() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), 0);
    assert_eq!(tracked_days(&pool, user).unwrap(), 0);
}

#[test]
fn test_exempt_absences_leave_balance_untouched() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    add(&pool, user, d(2024, 6, 10), DayType::Vacation, None);
    add(&pool, user, d(2024, 6, 11), DayType::PublicHoliday, None);
    add(&pool, user, d(2024, 6, 12), DayType::Training, None);

    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), 0);
}

#[test]
fn test_deducting_absences_cost_one_shift_each() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    add(&pool, user, d(2024, 6, 10), DayType::Sickness, None);
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), -480);

    add(&pool, user, d(2024, 6, 11), DayType::MedicalLeave, None);
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), -960);
}

#[test]
fn test_spec_scenario_wkday_holis_sickd() {
    // shift 8h; WKDAY → 0, HOLIS (exempt) → 0, SICKD (deducts) → -8h.
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    add(&pool, user, d(2024, 6, 3), DayType::WorkDay, None);
    add(&pool, user, d(2024, 6, 4), DayType::Vacation, None);
    add(&pool, user, d(2024, 6, 5), DayType::Sickness, None);

    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), -480);
}

#[test]
fn test_working_day_override_creates_surplus_or_deficit() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    // 9h worked on a normal day: +1h.
    add(&pool, user, d(2024, 6, 3), DayType::WorkDay, Some(540));
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), 60);

    // 6h worked from home the day after: -2h on top.
    add(&pool, user, d(2024, 6, 4), DayType::WorkFromHome, Some(360));
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), -60);
}

#[test]
fn test_saturday_work_credits_in_full() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    // Full extra day: one shift of surplus.
    add(&pool, user, d(2024, 6, 8), DayType::WorkSaturday, None);
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), 480);

    // Partial extra day: only the recorded time.
    add(&pool, user, d(2024, 6, 15), DayType::WorkSaturday, Some(180));
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), 660);
}

#[test]
fn test_partial_absence_deducts_only_recorded_minutes() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    // Half-day sick leave.
    add(&pool, user, d(2024, 6, 10), DayType::Sickness, Some(240));
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), -240);
}

#[test]
fn test_recomputation_is_idempotent() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 450, None);
    let policy = AccrualPolicy::default();

    add(&pool, user, d(2024, 6, 3), DayType::WorkDay, Some(500));
    add(&pool, user, d(2024, 6, 4), DayType::Sickness, None);

    let first = compute_balance(&pool, &policy, user).unwrap();
    let second = compute_balance(&pool, &policy, user).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 50 - 450);
}

#[test]
fn test_upsert_replaces_same_day_entry() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);
    let policy = AccrualPolicy::default();

    add(&pool, user, d(2024, 6, 10), DayType::Sickness, None);
    // Correction: it was actually a vacation day.
    add(&pool, user, d(2024, 6, 10), DayType::Vacation, None);

    assert_eq!(tracked_days(&pool, user).unwrap(), 1);
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), 0);
}

#[test]
fn test_policy_override_flips_vacation_to_deducts() {
    let pool = mem_store();
    let user = seed_user(&pool, "Bo", UserType::Employee, 480, None);

    let mut cfg = Config::default();
    cfg.accrual_overrides
        .insert("HOLIS".to_string(), "deducts".to_string());
    let policy = AccrualPolicy::from_config(&cfg).unwrap();
    assert_eq!(policy.effect(DayType::Vacation), Accrual::Deducts);

    add(&pool, user, d(2024, 6, 10), DayType::Vacation, None);
    assert_eq!(compute_balance(&pool, &policy, user).unwrap(), -480);

    // And the defaults stay exempt.
    let default_policy = AccrualPolicy::default();
    assert_eq!(
        compute_balance(&pool, &default_policy, user).unwrap(),
        0
    );
}

#[test]
fn test_bad_policy_override_fails_fast() {
    let mut cfg = Config::default();
    cfg.accrual_overrides
        .insert("NOPE!".to_string(), "deducts".to_string());
    match AccrualPolicy::from_config(&cfg) {
        Err(AppError::UnknownDayType(code)) => assert_eq!(code, "NOPE!"),
        _ => panic!("expected UnknownDayType"),
    }

    let mut cfg = Config::default();
    cfg.accrual_overrides
        .insert("HOLIS".to_string(), "sometimes".to_string());
    assert!(matches!(
        AccrualPolicy::from_config(&cfg),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_unknown_user_fails() {
    let pool = mem_store();
    let policy = AccrualPolicy::default();
    assert!(matches!(
        compute_balance(&pool, &policy, 42),
        Err(AppError::UserNotFound(42))
    ));
}
