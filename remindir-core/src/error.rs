//! Error types for remindir.

use thiserror::Error;

/// Errors that can occur in remindir operations.
#[derive(Error, Debug)]
pub enum RemindirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid reminder: {0}")]
    InvalidReminder(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for remindir operations.
pub type RemindirResult<T> = Result<T, RemindirError>;
