//! Topic channel routing (admin).

use crate::framework::{Context, Error};
use crate::reply::{require_server, send, server_of, Reply};
use arcade_common::{ChannelId, ServerId, Topic};
use arcade_storage::Store;
use poise::serenity_prelude as serenity;
use tracing::info;

/// Shown when the caller lacks the Manage Server permission.
pub const MISSING_PERMISSION: &str = "You need 'Manage Server' permission to use this.";

/// Reply for `/setchannel`.
///
/// Checks run in order: server context, topic, then the caller's privilege.
/// Nothing is stored unless all three pass.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn setchannel_reply(
    store: &Store,
    server: Option<ServerId>,
    can_manage_server: bool,
    topic: &str,
    channel: ChannelId,
) -> Result<Reply, Error> {
    let server = match require_server(server) {
        Ok(server) => server,
        Err(reply) => return Ok(reply),
    };

    let Ok(topic) = topic.parse::<Topic>() else {
        return Ok(Reply::private(format!(
            "Invalid topic. Choose one of: {}",
            Topic::choices()
        )));
    };

    if !can_manage_server {
        return Ok(Reply::private(MISSING_PERMISSION));
    }

    store
        .run(move |store| store.set_channel(server, topic, channel))
        .await?;
    info!(server = %server, %topic, channel = %channel, "Topic channel updated");

    Ok(Reply::text(format!(
        "Set **{topic}** channel to {}",
        channel.mention()
    )))
}

/// Whether the invoking member holds Manage Server (or Administrator).
async fn author_can_manage_server(ctx: Context<'_>) -> bool {
    ctx.author_member()
        .await
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator() || permissions.manage_guild())
}

/// Set a channel for a topic (admin).
#[poise::command(slash_command)]
pub async fn setchannel(
    ctx: Context<'_>,
    #[description = "free | deals | bundles | drops | awards | resources"] topic: String,
    #[description = "Target channel"]
    #[channel_types("Text")]
    channel: serenity::GuildChannel,
) -> Result<(), Error> {
    let can_manage = match server_of(ctx) {
        Some(_) => author_can_manage_server(ctx).await,
        None => false,
    };

    let reply = setchannel_reply(
        &ctx.data().store,
        server_of(ctx),
        can_manage,
        &topic,
        ChannelId(channel.id.get()),
    )
    .await?;
    send(ctx, reply).await
}
