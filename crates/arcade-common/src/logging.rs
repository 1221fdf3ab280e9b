//! Structured logging infrastructure for Arcade Bot.

use crate::error::ArcadeError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "arcade_storage=trace").
    pub level: String,
    /// Whether to emit JSON lines instead of human-readable output.
    pub json_format: bool,
    /// Whether to include target module information.
    pub include_targets: bool,
    /// Optional file path for log output. Stdout when unset.
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            include_targets: true,
            file_path: None,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter. `RUST_LOG` wins over the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter, ArcadeError> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| ArcadeError::config(format!("invalid log level '{}': {e}", self.level)))
    }
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ArcadeError> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    let file = match &config.file_path {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    let result = match (config.json_format, file) {
        (true, Some(file)) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(file),
            )
            .try_init(),
        (true, None) => registry
            .with(fmt::layer().json().with_target(config.include_targets))
            .try_init(),
        (false, Some(file)) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(config.include_targets)
                    .with_writer(file),
            )
            .try_init(),
        (false, None) => registry
            .with(fmt::layer().with_target(config.include_targets))
            .try_init(),
    };

    result.map_err(|e| ArcadeError::config(format!("failed to install subscriber: {e}")))
}
