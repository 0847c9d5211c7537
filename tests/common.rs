#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

use timetracker::db::migrate::run_pending_migrations;
use timetracker::db::pool::DbPool;
use timetracker::db::queries;
use timetracker::models::UserType;

pub fn ttr() -> Command {
    cargo_bin_cmd!("timetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// In-memory store with the full schema, for library-level tests.
pub fn mem_store() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    run_pending_migrations(&pool.conn).expect("migrations");
    pool
}

/// Insert a user profile and return its id.
pub fn seed_user(
    pool: &DbPool,
    name: &str,
    user_type: UserType,
    shift_minutes: i64,
    manager_id: Option<i64>,
) -> i64 {
    queries::insert_user(pool, name, user_type, shift_minutes, manager_id).expect("insert user")
}
