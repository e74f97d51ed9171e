//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while deriving, searching and
//! exporting attendance records.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::UnparseableTimestamp {
///     field: "clockIn".to_string(),
///     value: "yesterday".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unparseable timestamp in clockIn: 'yesterday'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A clock-in or clock-out value could not be parsed into an instant.
    #[error("Unparseable timestamp in {field}: '{value}'")]
    UnparseableTimestamp {
        /// The record field holding the value (`clockIn` or `clockOut`).
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// The document renderer failed to produce an artifact.
    #[error("Render error: {message}")]
    RenderError {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
