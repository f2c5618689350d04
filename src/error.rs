//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Amount text that is not a finite number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Menu choice or budget index that does not resolve to anything
    #[error("Invalid selection: '{0}'")]
    InvalidSelection(String),

    /// Terminal (chart view) errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl TrackerError {
    /// Check if this error came from bad user input at the prompt
    ///
    /// The shell recovers from these by returning to the menu; everything else
    /// is fatal.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidSelection(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
