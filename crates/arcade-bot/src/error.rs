//! Application-wide error types using thiserror.

use arcade_common::ArcadeError;
use arcade_config::ConfigError;
use arcade_storage::StorageError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging or other process setup failed.
    #[error("Initialization error: {0}")]
    Init(#[from] ArcadeError),

    /// The database could not be opened or initialized.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
