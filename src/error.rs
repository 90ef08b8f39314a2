//! Error types for the schedule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for failures at the boundaries of the engine: malformed input text,
//! configuration loading and persistence. Rule violations on otherwise
//! well-formed shifts are reported separately as
//! [`ValidationError`](crate::calculation::ValidationError)s.

use thiserror::Error;

/// The main error type for the schedule engine.
///
/// # Example
///
/// ```
/// use schedule_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '25:00': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Time text did not match `HH:MM` with hour 0-23 and minute 0-59.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime {
        /// The rejected text.
        value: String,
    },

    /// Date text did not match `YYYY-MM-DD`.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected text.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence collaborator failed to read or write.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// A stored record could not be turned back into shift data.
    #[error("Corrupt record '{id}': {message}")]
    CorruptRecord {
        /// The ID of the offending record.
        id: String,
        /// What was wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
