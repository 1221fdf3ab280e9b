//! Storage error type.

use thiserror::Error;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQLite rejected a statement.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A blocking storage task panicked or was cancelled.
    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
