//! Commands whose data sources are not wired up yet.
//!
//! Each answers with a fixed notice that echoes the optional filter.

use crate::framework::{Context, Error};
use crate::reply::{require_server, send, server_of, Reply};
use arcade_common::{filter_suffix, ServerId};

/// Reply for `/free`.
pub fn free_reply(server: Option<ServerId>, store: Option<&str>) -> Reply {
    if let Err(reply) = require_server(server) {
        return reply;
    }
    Reply::text(format!(
        "Free games{}: Coming next. This command will fetch Epic/GOG etc.",
        filter_suffix("store", store)
    ))
}

/// Reply for `/deals`.
pub fn deals_reply(server: Option<ServerId>, store: Option<&str>) -> Reply {
    if let Err(reply) = require_server(server) {
        return reply;
    }
    Reply::text(format!(
        "Deals{}: Coming next. This will use deal aggregators (e.g., ITAD/CheapShark).",
        filter_suffix("store", store)
    ))
}

/// Reply for `/bundles`.
pub fn bundles_reply(server: Option<ServerId>, source: Option<&str>) -> Reply {
    if let Err(reply) = require_server(server) {
        return reply;
    }
    Reply::text(format!(
        "Bundles{}: Coming next. This will include Humble bundles, Fanatical etc.",
        filter_suffix("source", source)
    ))
}

/// Show currently free games (placeholder).
#[poise::command(slash_command)]
pub async fn free(
    ctx: Context<'_>,
    #[description = "Optional store filter (e.g., epic, gog)"] store: Option<String>,
) -> Result<(), Error> {
    send(ctx, free_reply(server_of(ctx), store.as_deref())).await
}

/// Show hot deals (placeholder).
#[poise::command(slash_command)]
pub async fn deals(
    ctx: Context<'_>,
    #[description = "Optional store filter (e.g., steam, gog, humble)"] store: Option<String>,
) -> Result<(), Error> {
    send(ctx, deals_reply(server_of(ctx), store.as_deref())).await
}

/// Show active bundles (placeholder).
#[poise::command(slash_command)]
pub async fn bundles(
    ctx: Context<'_>,
    #[description = "Optional source (e.g., humble, fanatical)"] source: Option<String>,
) -> Result<(), Error> {
    send(ctx, bundles_reply(server_of(ctx), source.as_deref())).await
}
