//! Configuration loading: YAML file, `.env` file and environment overrides.

use crate::schema::Config;
use arcade_common::ArcadeError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "ARCADE_CONFIG_PATH";

/// Config files probed in the working directory, in order.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configuration is incomplete or inconsistent.
    #[error(transparent)]
    Invalid(#[from] ArcadeError),
}

impl From<ConfigError> for ArcadeError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(inner) => inner,
            other => Self::config(other.to_string()),
        }
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the process configuration.
    ///
    /// A `.env` file is read first when present. The YAML file named by
    /// `ARCADE_CONFIG_PATH`, or `config.yaml`/`config.yml`, provides the base;
    /// defaults are used when none exists. Environment variables then override
    /// individual fields and the result is validated.
    pub fn load() -> Result<Config, ConfigError> {
        load_dotenv();

        let mut config = match Self::config_file() {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::read_file(&path)?
            }
            None => Config::default(),
        };

        Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a specific file, applying
    /// `.env` and environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        load_dotenv();

        info!("Loading configuration from {}", path.as_ref().display());
        let mut config = Self::read_file(path.as_ref())?;
        Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML file without overrides or validation.
    pub fn read_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses YAML configuration text. Missing sections take their defaults.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies overrides using `lookup` to resolve variable names.
    ///
    /// Recognised variables: `DISCORD_TOKEN`, `DB_PATH`, `DB_POOL_SIZE`,
    /// `LOG_LEVEL`, `LOG_JSON`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Some(path) = lookup("DB_PATH") {
            config.storage.path = PathBuf::from(path);
        }

        if let Some(size) = lookup("DB_POOL_SIZE") {
            config.storage.pool_size = parse_var("DB_POOL_SIZE", &size)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("LOG_JSON") {
            config.logging.json_format = parse_var("LOG_JSON", &json)?;
        }

        Ok(())
    }

    fn config_file() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }

        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => debug!("Ignoring unreadable .env file: {}", e),
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}
