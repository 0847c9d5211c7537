use predicates::str::contains;

mod common;
use common::{setup_test_db, ttr};

/// Initialize a DB and create admin #1 plus employee #2 reporting to them.
fn init_with_admin_and_employee(db_path: &str) {
    ttr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ttr()
        .args(["--db", db_path, "user", "add", "Alice", "--type", "admin"])
        .assert()
        .success()
        .stdout(contains("Created user #1"));

    ttr()
        .args([
            "--db", db_path, "user", "add", "Eve", "--type", "employee", "--manager", "1",
        ])
        .assert()
        .success()
        .stdout(contains("Created user #2"));
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    ttr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // Idempotent: running init again must not fail.
    ttr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_add_entry_and_balance() {
    let db_path = setup_test_db("add_balance");
    init_with_admin_and_employee(&db_path);

    // A full sick day costs one shift (default 8h).
    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-05", "SICKD"])
        .assert()
        .success()
        .stdout(contains("SICKD"));

    ttr()
        .args(["--db", &db_path, "balance", "2"])
        .assert()
        .success()
        .stdout(contains("-08:00"))
        .stdout(contains("Tracked days: 1"));
}

#[test]
fn test_vacation_does_not_touch_balance() {
    let db_path = setup_test_db("vacation_balance");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-10", "HOLIS"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "balance", "2"])
        .assert()
        .success()
        .stdout(contains("+00:00"));
}

#[test]
fn test_add_rejects_unknown_day_type() {
    let db_path = setup_test_db("bad_code");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-05", "XXXXX"])
        .assert()
        .failure()
        .stderr(contains("Unknown day type"));
}

#[test]
fn test_calendar_renders_month() {
    let db_path = setup_test_db("calendar");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-05", "HOLIS"])
        .assert()
        .success();

    ttr()
        .args([
            "--db", &db_path, "calendar", "2", "--year", "2024", "--month", "6",
        ])
        .assert()
        .success()
        .stdout(contains("June 2024"))
        .stdout(contains("HOLIS"))
        .stdout(contains("WKDAY"));
}

#[test]
fn test_calendar_rejects_invalid_month() {
    let db_path = setup_test_db("calendar_month");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args([
            "--db", &db_path, "calendar", "2", "--year", "2024", "--month", "13",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_team_without_link_is_empty_not_an_error() {
    let db_path = setup_test_db("team_empty");
    init_with_admin_and_employee(&db_path);

    // Admin #1 has no authorization link yet: empty team, exit 0.
    ttr()
        .args(["--db", &db_path, "team", "1"])
        .assert()
        .success()
        .stdout(contains("No team assigned"));
}

#[test]
fn test_team_after_linking() {
    let db_path = setup_test_db("team_linked");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args(["--db", &db_path, "user", "link", "2", "1"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "team", "1"])
        .assert()
        .success()
        .stdout(contains("Eve"));
}

#[test]
fn test_holidays_json_report() {
    let db_path = setup_test_db("holidays_json");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args(["--db", &db_path, "user", "link", "2", "1"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-10", "HOLIS"])
        .assert()
        .success();

    ttr()
        .args([
            "--db", &db_path, "holidays", "1", "--year", "2024", "--month", "6", "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"HOLIS\""))
        .stdout(contains("2024-06-10"));
}

#[test]
fn test_del_removes_entry() {
    let db_path = setup_test_db("del_entry");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-05", "SICKD"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "del", "2", "2024-06-05", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    ttr()
        .args(["--db", &db_path, "balance", "2"])
        .assert()
        .success()
        .stdout(contains("+00:00"));
}

#[test]
fn test_daytypes_lists_vocabulary() {
    // No DB needed, the vocabulary is static.
    ttr()
        .args(["daytypes"])
        .assert()
        .success()
        .stdout(contains("WKDAY"))
        .stdout(contains("Sickness Absence"))
        .stdout(contains("DAYOD"));
}

#[test]
fn test_second_add_updates_in_place() {
    let db_path = setup_test_db("upsert");
    init_with_admin_and_employee(&db_path);

    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-05", "SICKD"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "add", "2", "2024-06-05", "HOLIS"])
        .assert()
        .success();

    // Replaced, not duplicated.
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM entries WHERE user_id = 2 AND date = '2024-06-05'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(count, 1);

    let code: String = conn
        .query_row(
            "SELECT day_type FROM entries WHERE user_id = 2 AND date = '2024-06-05'",
            [],
            |row| row.get(0),
        )
        .expect("day_type");
    assert_eq!(code, "HOLIS");
}

#[test]
fn test_employee_without_manager_is_rejected() {
    let db_path = setup_test_db("no_manager");

    ttr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "user", "add", "Bob", "--type", "employee"])
        .assert()
        .failure()
        .stderr(contains("--manager"));
}
