//! Configuration schema definitions using serde.

use arcade_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Arcade Bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Whether to sync slash commands globally on startup.
    pub register_globally: bool,
}

/// SQLite storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the database file.
    pub path: PathBuf,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// How long a connection waits on a locked database, in milliseconds.
    pub busy_timeout_ms: u64,
}
