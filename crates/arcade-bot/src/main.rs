//! Main entry point for Arcade Bot.

use arcade_bot::{ArcadeBot, Args, BotResult};
use arcade_common::{init_logging, LoggingConfig};
use arcade_config::ConfigLoader;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            // Logging is configured from the file we failed to load.
            let _ = init_logging(&LoggingConfig::default());
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.no_register {
        config.discord.register_globally = false;
    }

    init_logging(&config.logging)?;
    info!(
        "Starting Arcade Bot (database: {})",
        config.storage.path.display()
    );

    let bot = ArcadeBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot failed: {}", e);
        return Err(e);
    }

    Ok(())
}
