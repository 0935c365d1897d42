//! The session recorder seam.
//!
//! The timer reports session boundaries to a recorder and never reads
//! storage itself. [`FocusStorage`](super::FocusStorage) is the SQLite
//! implementation; tests substitute mocks.

use chrono::{DateTime, NaiveDate, Utc};

use super::metrics::FocusMetrics;
use super::session::{Session, SessionId};
use crate::error::HabitflowError;

/// Persists focus sessions and answers history queries.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRecorder {
    /// Record that a session began at `started_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot store the record.
    fn start_session(&self, started_at: DateTime<Utc>) -> Result<SessionId, HabitflowError>;

    /// Finalize the session that began at `started_at`.
    ///
    /// Backends must accept an end for a start they never saw, so a failed
    /// `start_session` does not lose the whole session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot store the record.
    fn end_session(
        &self,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Result<Session, HabitflowError>;

    /// All sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list_sessions(&self) -> Result<Vec<Session>, HabitflowError>;

    /// Metrics for the month containing `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_metrics(&self, reference_date: NaiveDate) -> Result<FocusMetrics, HabitflowError>;
}
