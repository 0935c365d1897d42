//! Focus session storage.
//!
//! Persists focus sessions to the local database.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::metrics::{month_bounds, FocusMetrics};
use super::recorder::SessionRecorder;
use super::session::{Session, SessionId};
use crate::error::HabitflowError;
use crate::storage::columns::{parse_timestamp, timestamp};
use crate::storage::Database;

const SESSION_COLUMNS: &str = "id, started_at, ended_at, duration_minutes";

/// Storage for focus sessions.
pub struct FocusStorage {
    db: Database,
}

impl FocusStorage {
    /// Open focus storage on the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, HabitflowError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Get a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: SessionId) -> Result<Option<Session>, HabitflowError> {
        let conn = self.db.connection();
        let sql = format!("SELECT {SESSION_COLUMNS} FROM focus_sessions WHERE id = ?1");

        conn.query_row(&sql, [id], row_to_session)
            .optional()
            .map_err(|e| HabitflowError::Database(format!("Failed to query session: {e}")))
    }

    /// Get the most recent sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_recent(&self, limit: usize) -> Result<Vec<Session>, HabitflowError> {
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM focus_sessions ORDER BY started_at DESC, id DESC LIMIT ?1"
        );
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.query_sessions(&sql, params![limit])
    }

    /// Get sessions started in `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Session>, HabitflowError> {
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM focus_sessions
             WHERE started_at >= ?1 AND started_at < ?2
             ORDER BY started_at DESC"
        );
        self.query_sessions(&sql, params![timestamp(start), timestamp(end)])
    }

    fn query_sessions(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Session>, HabitflowError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| HabitflowError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_session)
            .map_err(|e| HabitflowError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row?);
        }
        Ok(sessions)
    }
}

impl SessionRecorder for FocusStorage {
    fn start_session(&self, started_at: DateTime<Utc>) -> Result<SessionId, HabitflowError> {
        let conn = self.db.connection();

        conn.execute(
            "INSERT INTO focus_sessions (started_at) VALUES (?1)",
            [timestamp(started_at)],
        )
        .map_err(|e| HabitflowError::Database(format!("Failed to insert session: {e}")))?;

        let id = conn.last_insert_rowid();
        info!(id, %started_at, "focus session started");
        Ok(id)
    }

    fn end_session(
        &self,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Result<Session, HabitflowError> {
        let conn = self.db.connection();
        let open_id: Option<SessionId> = conn
            .query_row(
                "SELECT id FROM focus_sessions
                 WHERE started_at = ?1 AND ended_at IS NULL
                 ORDER BY id DESC LIMIT 1",
                [timestamp(started_at)],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| HabitflowError::Database(format!("Failed to find session: {e}")))?;

        let mut session = Session::finished(open_id, started_at, ended_at);

        match open_id {
            Some(id) => {
                conn.execute(
                    "UPDATE focus_sessions SET ended_at = ?1, duration_minutes = ?2
                     WHERE id = ?3 AND ended_at IS NULL",
                    params![timestamp(ended_at), session.duration_minutes, id],
                )
                .map_err(|e| HabitflowError::Database(format!("Failed to update session: {e}")))?;
            }
            None => {
                debug!(%started_at, "no open session row, inserting a finished one");
                conn.execute(
                    "INSERT INTO focus_sessions (started_at, ended_at, duration_minutes)
                     VALUES (?1, ?2, ?3)",
                    params![
                        timestamp(started_at),
                        timestamp(ended_at),
                        session.duration_minutes
                    ],
                )
                .map_err(|e| HabitflowError::Database(format!("Failed to insert session: {e}")))?;
                session.id = Some(conn.last_insert_rowid());
            }
        }

        info!(id = ?session.id, minutes = ?session.duration_minutes, "focus session finished");
        Ok(session)
    }

    fn list_sessions(&self) -> Result<Vec<Session>, HabitflowError> {
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM focus_sessions ORDER BY started_at DESC, id DESC"
        );
        self.query_sessions(&sql, params![])
    }

    fn get_metrics(&self, reference_date: NaiveDate) -> Result<FocusMetrics, HabitflowError> {
        let (start, end) = month_bounds(reference_date)?;
        let sessions = self.get_range(start, end)?;
        Ok(FocusMetrics::from_sessions(&sessions, reference_date))
    }
}

fn row_to_session(row: &Row<'_>) -> Result<Session, rusqlite::Error> {
    let id: SessionId = row.get(0)?;
    let started_at: String = row.get(1)?;
    let ended_at: Option<String> = row.get(2)?;
    let duration_minutes: Option<i64> = row.get(3)?;

    Ok(Session {
        id: Some(id),
        started_at: parse_timestamp(1, &started_at)?,
        ended_at: ended_at.as_deref().map(|s| parse_timestamp(2, s)).transpose()?,
        duration_minutes,
    })
}
