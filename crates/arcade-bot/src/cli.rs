//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (YAML).
    #[arg(short, long, env = "ARCADE_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Log level filter, overriding the configured one.
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Skip syncing slash commands with Discord on startup.
    #[arg(long)]
    pub no_register: bool,
}
