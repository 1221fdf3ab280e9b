//! Drops watchlist commands.

use crate::framework::{Context, Error};
use crate::reply::{require_server, send, server_of, Embed, Reply};
use arcade_common::{bullet_list, normalize_game_name, ServerId};
use arcade_storage::Store;

/// Longest game name the watchlist accepts, in characters.
pub const GAME_NAME_MAX_CHARS: usize = 100;

/// Normalizes `game`, or returns the rejection reply when it is too long.
fn game_name(game: &str) -> Result<String, Reply> {
    let name = normalize_game_name(game);
    if name.chars().count() > GAME_NAME_MAX_CHARS {
        return Err(Reply::private(format!(
            "Game name is too long (max {GAME_NAME_MAX_CHARS} characters)."
        )));
    }
    Ok(name.to_string())
}

/// Reply for `/drops_watch`.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn watch_reply(store: &Store, server: Option<ServerId>, game: &str) -> Result<Reply, Error> {
    let server = match require_server(server) {
        Ok(server) => server,
        Err(reply) => return Ok(reply),
    };

    let name = match game_name(game) {
        Ok(name) => name,
        Err(reply) => return Ok(reply),
    };
    let request = name.clone();
    let outcome = store.run(move |store| store.watch(server, &request)).await?;

    Ok(if outcome.is_added() {
        Reply::text(format!("Watching Drops for: **{name}**"))
    } else {
        Reply::private(format!("Already watching: **{name}**"))
    })
}

/// Reply for `/drops_unwatch`.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn unwatch_reply(
    store: &Store,
    server: Option<ServerId>,
    game: &str,
) -> Result<Reply, Error> {
    let server = match require_server(server) {
        Ok(server) => server,
        Err(reply) => return Ok(reply),
    };

    let name = match game_name(game) {
        Ok(name) => name,
        Err(reply) => return Ok(reply),
    };
    let request = name.clone();
    let removed = store.run(move |store| store.unwatch(server, &request)).await?;

    Ok(if removed {
        Reply::text(format!("Removed from watchlist: **{name}**"))
    } else {
        Reply::private(format!("Not found in watchlist: **{name}**"))
    })
}

/// Reply for `/drops_watchlist`.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn watchlist_reply(store: &Store, server: Option<ServerId>) -> Result<Reply, Error> {
    let server = match require_server(server) {
        Ok(server) => server,
        Err(reply) => return Ok(reply),
    };

    let games = store.run(move |store| store.list(server)).await?;
    if games.is_empty() {
        return Ok(Reply::text(
            "No watched games yet. Use /drops_watch game:<name>",
        ));
    }

    Ok(Reply::embed(Embed::new("Drops watchlist", bullet_list(&games))))
}

/// Watch a game for Twitch Drops announcements (game-name based).
#[poise::command(slash_command)]
pub async fn drops_watch(
    ctx: Context<'_>,
    #[description = "Game name, e.g., VALORANT"]
    #[max_length = 100]
    game: String,
) -> Result<(), Error> {
    let reply = watch_reply(&ctx.data().store, server_of(ctx), &game).await?;
    send(ctx, reply).await
}

/// Stop watching a game for Twitch Drops announcements.
#[poise::command(slash_command)]
pub async fn drops_unwatch(
    ctx: Context<'_>,
    #[description = "Game name"]
    #[max_length = 100]
    game: String,
) -> Result<(), Error> {
    let reply = unwatch_reply(&ctx.data().store, server_of(ctx), &game).await?;
    send(ctx, reply).await
}

/// List watched games for Twitch Drops.
#[poise::command(slash_command)]
pub async fn drops_watchlist(ctx: Context<'_>) -> Result<(), Error> {
    let reply = watchlist_reply(&ctx.data().store, server_of(ctx)).await?;
    send(ctx, reply).await
}
