//! Error types shared across the workspace.

use thiserror::Error;

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, ArcadeError>;

/// Application-wide error type.
#[derive(Error, Debug)]
pub enum ArcadeError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or data.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the value.
        message: String,
        /// Name of the offending field, when known.
        field: Option<String>,
    },

    /// Persistence layer error.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the failed operation.
        message: String,
        /// Underlying driver error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArcadeError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error tied to a field.
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new storage error wrapping the driver error.
    pub fn storage(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error was caused by bad user input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
