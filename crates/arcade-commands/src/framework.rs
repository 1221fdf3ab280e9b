//! Poise framework setup and command registration logic.

use crate::reply::{Reply, COMMAND_FAILED};
use arcade_storage::Store;
use tracing::{error, info, warn};

/// Application data accessible in all commands.
#[derive(Debug)]
pub struct Data {
    /// Watchlist and channel routing storage.
    pub store: Store,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every slash command the bot registers.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::ping::ping(),
        crate::placeholders::free(),
        crate::placeholders::deals(),
        crate::placeholders::bundles(),
        crate::lookups::resources(),
        crate::lookups::gear(),
        crate::lookups::awards(),
        crate::drops::drops_watch(),
        crate::drops::drops_unwatch(),
        crate::drops::drops_watchlist(),
        crate::setchannel::setchannel(),
    ]
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        pre_command: |ctx| {
            Box::pin(async move {
                info!(
                    command = %ctx.command().qualified_name,
                    user = %ctx.author().id,
                    guild = ?ctx.guild_id().map(|g| g.get()),
                    "Received command"
                );
            })
        },
        post_command: |ctx| {
            Box::pin(async move {
                info!(command = %ctx.command().qualified_name, "Command completed");
            })
        },
        ..Default::default()
    })
}

/// Logs framework errors; failed commands get a private failure notice.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up bot data: {}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                command = %ctx.command().qualified_name,
                "Command failed: {}",
                error
            );
            if let Err(e) = ctx.send(Reply::private(COMMAND_FAILED).to_create_reply()).await {
                warn!("Failed to report command error: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling framework error: {}", e);
            }
        }
    }
}
