//! Database migrations for habitflow.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;
use tracing::info;

use crate::error::HabitflowError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
pub fn get_version(conn: &Connection) -> Result<i32, HabitflowError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| HabitflowError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), HabitflowError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| HabitflowError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), HabitflowError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        info!(version, "applying schema migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), HabitflowError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(HabitflowError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `focus_sessions`: one row per focus session, `ended_at` NULL while open
/// - `habits`: tracked habits
/// - `habit_entries`: at most one completion record per habit per day
fn migrate_v1(conn: &Connection) -> Result<(), HabitflowError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS focus_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            started_at TEXT NOT NULL,
            ended_at TEXT,
            duration_minutes INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_focus_sessions_started
        ON focus_sessions(started_at);

        CREATE TABLE IF NOT EXISTS habits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            color TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS habit_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id INTEGER NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            UNIQUE (habit_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_habit_entries_date
        ON habit_entries(date);
        ",
    )
    .map_err(|e| HabitflowError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        conn.execute(
            "INSERT INTO focus_sessions (started_at, ended_at, duration_minutes)
             VALUES ('2024-01-01T10:00:00+00:00', '2024-01-01T10:25:00+00:00', 25)",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO habits (name, color, created_at, updated_at)
             VALUES ('Read', '#3b82f6', '2024-01-01T10:00:00+00:00', '2024-01-01T10:00:00+00:00')",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO habit_entries (habit_id, date, created_at)
             VALUES (1, '2024-01-01', '2024-01-01T10:00:00+00:00')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_one_entry_per_habit_per_day() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();

        conn.execute(
            "INSERT INTO habits (name, color, created_at, updated_at)
             VALUES ('Read', '#3b82f6', 'x', 'x')",
            [],
        )
        .unwrap();
        let insert = "INSERT INTO habit_entries (habit_id, date, created_at)
                      VALUES (1, '2024-01-01', 'x')";
        conn.execute(insert, []).unwrap();
        assert!(conn.execute(insert, []).is_err());
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
