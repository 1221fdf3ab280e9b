//! Integration tests for arcade-config crate.

use arcade_common::test_utils::{config_fixtures, create_temp_dir};
use arcade_config::{Config, ConfigLoader, DEFAULT_DB_PATH};
use std::path::PathBuf;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config should fail validation due to the empty token
    assert!(config.validate().is_err());

    config.discord.token = "test_token".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_storage_path() {
    let config = Config::default();
    assert_eq!(config.storage.path, PathBuf::from(DEFAULT_DB_PATH));
    assert_eq!(DEFAULT_DB_PATH, "bot.sqlite");
}

#[test]
fn test_minimal_yaml_fills_defaults() {
    let config = ConfigLoader::parse(config_fixtures::minimal_config_yaml()).unwrap();

    assert_eq!(config.discord.token, "test_token");
    assert!(config.discord.register_globally);
    assert_eq!(config.storage, Config::default().storage);
    assert!(config.validate().is_ok());
}

#[test]
fn test_full_yaml_from_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, config_fixtures::full_config_yaml()).unwrap();

    let config = ConfigLoader::read_file(&path).unwrap();

    assert_eq!(config.discord.token, "test_token_full");
    assert!(!config.discord.register_globally);
    assert_eq!(config.storage.path, PathBuf::from("data/arcade.sqlite"));
    assert_eq!(config.storage.pool_size, 4);
    assert_eq!(config.storage.busy_timeout_ms, 2500);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_malformed_yaml_is_rejected() {
    assert!(ConfigLoader::parse("discord: [not, a, map]").is_err());
}
