//! Platform-neutral reply model.
//!
//! Command logic builds a [`Reply`]; only the thin poise wrappers turn it into
//! a Discord message. This keeps every response testable without a gateway.

use crate::catalog::Link;
use crate::framework::{Context, Error};
use arcade_common::{truncate_string, ServerId};
use poise::serenity_prelude as serenity;

/// Discord's limit on embed descriptions, in characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Discord's limit on message content, in characters.
pub const MESSAGE_CONTENT_LIMIT: usize = 2000;

/// Scoping error for commands that need a server.
pub const SERVER_ONLY: &str = "This command must be used in a server.";

/// Sent when a command fails for reasons the user cannot fix.
pub const COMMAND_FAILED: &str = "Something went wrong while running this command.";

/// A titled embed with full-width fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    /// Embed title.
    pub title: String,
    /// Embed body text.
    pub description: String,
    /// (name, value) fields, rendered one per row.
    pub fields: Vec<(String, String)>,
}

impl Embed {
    /// Creates an embed without fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: truncate_string(&description.into(), EMBED_DESCRIPTION_LIMIT),
            fields: Vec::new(),
        }
    }

    /// Adds one field per link, with the URL as the value.
    #[must_use]
    pub fn with_links(mut self, links: &[Link]) -> Self {
        self.fields.extend(
            links
                .iter()
                .map(|link| (link.name.to_string(), link.url.to_string())),
        );
        self
    }
}

/// Response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Plain message text.
    pub content: Option<String>,
    /// Rich embed.
    pub embed: Option<Embed>,
    /// Whether only the invoking user sees the reply.
    pub ephemeral: bool,
}

impl Reply {
    /// A public text reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(truncate_string(&content.into(), MESSAGE_CONTENT_LIMIT)),
            embed: None,
            ephemeral: false,
        }
    }

    /// A text reply visible only to the invoking user.
    pub fn private(content: impl Into<String>) -> Self {
        Self {
            ephemeral: true,
            ..Self::text(content)
        }
    }

    /// A public embed reply.
    #[must_use]
    pub const fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            ephemeral: false,
        }
    }

    /// Builds the poise reply.
    #[must_use]
    pub fn to_create_reply(&self) -> poise::CreateReply {
        let mut reply = poise::CreateReply::default().ephemeral(self.ephemeral);

        if let Some(content) = &self.content {
            reply = reply.content(content.clone());
        }

        if let Some(embed) = &self.embed {
            let mut builder = serenity::CreateEmbed::new()
                .title(embed.title.clone())
                .description(embed.description.clone());
            for (name, value) in &embed.fields {
                builder = builder.field(name.clone(), value.clone(), false);
            }
            reply = reply.embed(builder);
        }

        reply
    }
}

/// Resolves the server a command was invoked in, or the scoping error reply.
pub fn require_server(server: Option<ServerId>) -> Result<ServerId, Reply> {
    server.ok_or_else(|| Reply::private(SERVER_ONLY))
}

/// The invoking server, if any.
pub fn server_of(ctx: Context<'_>) -> Option<ServerId> {
    ctx.guild_id().map(|guild| ServerId(guild.get()))
}

/// Sends `reply` as the response to the current command.
pub async fn send(ctx: Context<'_>, reply: Reply) -> Result<(), Error> {
    ctx.send(reply.to_create_reply()).await?;
    Ok(())
}
