//! Error types for habitflow.

use thiserror::Error;

/// All errors produced by habitflow.
#[derive(Debug, Error)]
pub enum HabitflowError {
    /// SQLite storage failure.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration could not be read, written, or resolved.
    #[error("config error: {0}")]
    Config(String),

    /// A requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// User-supplied input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialization or deserialization failed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Terminal setup or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Filesystem or terminal I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HabitflowError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<rusqlite::Error> for HabitflowError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
