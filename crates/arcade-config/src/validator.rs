//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use arcade_common::{ArcadeError, Result};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &Config) -> Result<()> {
        if config.discord.token.trim().is_empty() {
            return Err(ArcadeError::config(
                "DISCORD_TOKEN is missing. Set it as an environment variable or in the config file",
            ));
        }

        if config.storage.path.as_os_str().is_empty() {
            return Err(ArcadeError::config("Storage path cannot be empty"));
        }

        if config.storage.pool_size == 0 {
            return Err(ArcadeError::config("Storage pool size must be at least 1"));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}
