//! Static lookups: curated resources, gear stores and game awards.

use crate::catalog::{self, AWARDS, GEAR_STORES};
use crate::framework::{Context, Error};
use crate::reply::{require_server, send, server_of, Embed, Reply};
use arcade_common::{ResourceCategory, ServerId};

/// Shown when `/resources` gets an unknown category.
pub const INVALID_CATEGORY: &str = "Invalid category. Use: magazines | books | archives";

/// Reply for `/resources`.
pub fn resources_reply(server: Option<ServerId>, category: &str) -> Reply {
    if let Err(reply) = require_server(server) {
        return reply;
    }

    let Ok(category) = category.parse::<ResourceCategory>() else {
        return Reply::private(INVALID_CATEGORY);
    };

    Reply::embed(
        Embed::new(
            format!("Free-access resources: {category}"),
            "Curated links (reference-only).",
        )
        .with_links(catalog::resources(category)),
    )
}

/// Reply for `/gear`.
pub fn gear_reply(server: Option<ServerId>) -> Reply {
    if let Err(reply) = require_server(server) {
        return reply;
    }
    Reply::embed(
        Embed::new(
            "Official gear stores",
            "Official brand stores (reference-only).",
        )
        .with_links(GEAR_STORES),
    )
}

/// Reply for `/awards`.
pub fn awards_reply(server: Option<ServerId>) -> Reply {
    if let Err(reply) = require_server(server) {
        return reply;
    }
    Reply::embed(
        Embed::new(
            "Major game awards",
            "Starter list. We'll add current + historical lookups next.",
        )
        .with_links(AWARDS),
    )
}

/// Free-access gaming resources (magazines/books/archives).
#[poise::command(slash_command)]
pub async fn resources(
    ctx: Context<'_>,
    #[description = "magazines | books | archives"] category: String,
) -> Result<(), Error> {
    send(ctx, resources_reply(server_of(ctx), &category)).await
}

/// Official gear brand stores (reference-only).
#[poise::command(slash_command)]
pub async fn gear(ctx: Context<'_>) -> Result<(), Error> {
    send(ctx, gear_reply(server_of(ctx))).await
}

/// Major international game awards (starter list).
#[poise::command(slash_command)]
pub async fn awards(ctx: Context<'_>) -> Result<(), Error> {
    send(ctx, awards_reply(server_of(ctx))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER: Option<ServerId> = Some(ServerId(1));

    #[test]
    fn test_resources_normalizes_category() {
        let reply = resources_reply(SERVER, "  Magazines ");
        let embed = reply.embed.unwrap();
        assert_eq!(embed.title, "Free-access resources: magazines");
        assert_eq!(embed.fields.len(), 3);
    }

    #[test]
    fn test_resources_rejects_unknown_category() {
        let reply = resources_reply(SERVER, "podcasts");
        assert!(reply.ephemeral);
        assert!(reply.embed.is_none());
        assert_eq!(reply.content.as_deref(), Some(INVALID_CATEGORY));
    }

    #[test]
    fn test_gear_lists_stores() {
        let embed = gear_reply(SERVER).embed.unwrap();
        assert_eq!(embed.title, "Official gear stores");
        assert_eq!(embed.fields.len(), GEAR_STORES.len());
    }

    #[test]
    fn test_awards_lists_awards() {
        let embed = awards_reply(SERVER).embed.unwrap();
        assert_eq!(embed.fields[0].0, "The Game Awards");
        assert_eq!(embed.fields.len(), AWARDS.len());
    }

    #[test]
    fn test_lookups_need_a_server() {
        assert!(gear_reply(None).ephemeral);
        assert!(awards_reply(None).ephemeral);
        assert!(resources_reply(None, "books").ephemeral);
    }
}
