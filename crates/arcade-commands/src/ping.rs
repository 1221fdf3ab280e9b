//! Liveness check.

use crate::framework::{Context, Error};
use crate::reply::{send, Reply};

/// Reply to a ping. Works in direct messages too.
#[must_use]
pub fn ping_reply() -> Reply {
    Reply::text("Pong.")
}

/// Check if the bot is alive.
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    send(ctx, ping_reply()).await
}
