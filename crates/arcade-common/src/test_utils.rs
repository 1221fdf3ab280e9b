//! Test utilities and shared test helpers for Arcade Bot.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Discord-related test fixtures.
pub mod discord_fixtures {
    use crate::{ChannelId, ServerId};

    /// Create a test server ID.
    pub fn test_server_id() -> ServerId {
        ServerId(123_456_789_012_345_678)
    }

    /// Create a second, unrelated test server ID.
    pub fn other_server_id() -> ServerId {
        ServerId(876_543_210_987_654_321)
    }

    /// Create a test channel ID.
    pub fn test_channel_id() -> ChannelId {
        ChannelId(111_111_111_111_111_111)
    }
}

/// Configuration-related test fixtures.
pub mod config_fixtures {
    /// A minimal valid configuration as YAML.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
discord:
  token: "test_token"
"#
    }

    /// A configuration with every section spelled out.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "  register_globally: false\n",
            "\n",
            "storage:\n",
            "  path: \"data/arcade.sqlite\"\n",
            "  pool_size: 4\n",
            "  busy_timeout_ms: 2500\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  json_format: true\n",
        )
    }
}

/// Property-based testing strategies.
pub mod property_testing {
    use crate::ServerId;
    use proptest::prelude::*;

    /// Strategy for generating Discord snowflake-like server IDs.
    pub fn server_id_strategy() -> impl Strategy<Value = ServerId> {
        (100_000_000_000_000_000u64..=u64::MAX).prop_map(ServerId)
    }

    /// Strategy for generating plausible game names.
    pub fn game_name_strategy() -> impl Strategy<Value = String> {
        r"[A-Za-z0-9][A-Za-z0-9 :'\-]{0,30}[A-Za-z0-9]".prop_map(|s| s.to_string())
    }
}
