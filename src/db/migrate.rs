use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `users` table. manager_id stays NULL only for top-level
/// admins; team leaders follow the same link as ordinary employees.
fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            user_type     TEXT NOT NULL DEFAULT 'EMPLOYEE'
                          CHECK(user_type IN ('EMPLOYEE','TEAML','ADMIN')),
            shift_minutes INTEGER NOT NULL DEFAULT 480,
            manager_id    INTEGER REFERENCES users(id)
        );
        "#,
    )?;
    Ok(())
}

/// Create the `entries` table. UNIQUE(user_id, date) is the invariant the
/// whole balance computation rests on: one record per user per day.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          INTEGER NOT NULL REFERENCES users(id),
            date             TEXT NOT NULL,
            day_type         TEXT NOT NULL
                             CHECK(day_type IN ('WKDAY','SATUR','WKHOM',
                                                'PUABS','SICKD','MEDIC','SPECI',
                                                'HOLIS','RETRN','TRAIN','DAYOD')),
            minutes_override INTEGER,
            created_at       TEXT NOT NULL DEFAULT '',
            UNIQUE(user_id, date)
        );
        CREATE INDEX IF NOT EXISTS idx_entries_user_date ON entries(user_id, date);
        "#,
    )?;
    Ok(())
}

/// Create the `auth_links` table. user_id is UNIQUE: an employee belongs
/// to at most one manager at a time.
fn create_auth_links_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS auth_links (
            admin_id INTEGER NOT NULL REFERENCES users(id),
            user_id  INTEGER NOT NULL UNIQUE REFERENCES users(id)
        );
        "#,
    )?;
    Ok(())
}

/// Bring the schema up to date. Every step is idempotent, so running this
/// on an already-initialized database is a no-op.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_users_table(conn)?;
    create_entries_table(conn)?;
    create_auth_links_table(conn)?;
    Ok(())
}

/// Quick integrity probe used by `db --check`.
pub fn check_schema(conn: &Connection) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for table in ["log", "users", "entries", "auth_links"] {
        if !table_exists(conn, table)? {
            missing.push(table.to_string());
        }
    }
    Ok(missing)
}
