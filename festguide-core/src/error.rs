//! Error types for festguide.

use thiserror::Error;

/// Errors that can occur in festguide operations.
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Event '{id}' has an unparsable start '{date} {start_time}'")]
    UnparsableInstant {
        id: String,
        date: String,
        start_time: String,
    },

    #[error("Could not persist liked events: {0}")]
    PersistenceWrite(String),

    #[error("Could not read liked events: {0}")]
    PersistenceRead(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for festguide operations.
pub type GuideResult<T> = Result<T, GuideError>;
