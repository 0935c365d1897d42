//! Focus session records.
//!
//! A session spans from the moment the timer leaves idle until it returns
//! there, covering every focus and break phase in between.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the session recorder.
pub type SessionId = i64;

/// One focus session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Recorder ID (None if the start was never recorded)
    pub id: Option<SessionId>,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session ended (None while still open)
    pub ended_at: Option<DateTime<Utc>>,
    /// Whole minutes between start and end, present once finalized
    pub duration_minutes: Option<i64>,
}

impl Session {
    /// Create an open session.
    #[must_use]
    pub const fn open(id: Option<SessionId>, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            started_at,
            ended_at: None,
            duration_minutes: None,
        }
    }

    /// Create a finalized session from its two timestamps.
    #[must_use]
    pub fn finished(
        id: Option<SessionId>,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            started_at,
            ended_at: Some(ended_at),
            duration_minutes: Some(minutes_between(started_at, ended_at)),
        }
    }

    /// Whether the session has an end time.
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Get start time in local timezone.
    #[must_use]
    pub fn started_at_local(&self) -> DateTime<Local> {
        self.started_at.with_timezone(&Local)
    }

    /// Get end time in local timezone.
    #[must_use]
    pub fn ended_at_local(&self) -> Option<DateTime<Local>> {
        self.ended_at.map(|t| t.with_timezone(&Local))
    }
}

/// Whole minutes from `start` to `end`, truncated, never negative.
#[must_use]
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    end.signed_duration_since(start).num_minutes().max(0)
}
