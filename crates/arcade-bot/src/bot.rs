//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use arcade_commands::{create_framework, Data};
use arcade_config::Config;
use arcade_storage::{Store, StoreOptions};
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::{error, info, warn};

/// Main bot structure.
pub struct ArcadeBot {
    config: Config,
}

impl ArcadeBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Opens the database and makes sure both tables exist.
    pub fn open_store(&self) -> BotResult<Store> {
        let storage = &self.config.storage;
        let store = Store::open(
            &storage.path,
            StoreOptions {
                pool_size: storage.pool_size,
                busy_timeout: Duration::from_millis(storage.busy_timeout_ms),
                ..StoreOptions::default()
            },
        )?;
        Ok(store)
    }

    /// Starts the bot and runs until the gateway connection ends or the
    /// process receives Ctrl-C.
    pub async fn start(&self) -> BotResult<()> {
        let store = self.open_store()?;
        let register_globally = self.config.discord.register_globally;

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("Logged in as {}", ready.user.name);

                    if register_globally {
                        let commands = &framework.options().commands;
                        match poise::builtins::register_globally(ctx, commands).await {
                            Ok(()) => info!("Synced {} command(s)", commands.len()),
                            Err(e) => error!("Command sync failed: {}", e),
                        }
                    } else {
                        warn!("Command sync disabled; using previously registered commands");
                    }

                    Ok(Data { store })
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(
            &self.config.discord.token,
            serenity::GatewayIntents::non_privileged(),
        )
        .framework(framework)
        .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
            info!("Received shutdown signal, disconnecting");
            shard_manager.shutdown_all().await;
        });

        client.start().await?;
        info!("Bot stopped");
        Ok(())
    }
}
