//! Default values for every configuration section.

use crate::schema::{Config, DiscordConfig, StorageConfig};
use arcade_common::LoggingConfig;
use std::path::PathBuf;

/// Database file used when no path is configured.
pub const DEFAULT_DB_PATH: &str = "bot.sqlite";

/// Default connection pool size.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Default SQLite busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            register_globally: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            pool_size: DEFAULT_POOL_SIZE,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
