//! Drops watchlist: which games a server wants drop announcements for.

use crate::error::StorageResult;
use crate::schema::{id_from_sql, id_to_sql};
use crate::store::Store;
use arcade_common::{normalize_game_name, ServerId};
use chrono::NaiveDateTime;
use rusqlite::params;
use tracing::debug;

/// Result of a watch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// A new entry was stored.
    Added,
    /// The server already watches this game; nothing changed.
    AlreadyWatching,
}

impl WatchOutcome {
    /// Whether the request created a new entry.
    #[must_use]
    pub const fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// One watched game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    /// Owning server.
    pub server_id: ServerId,
    /// Trimmed, case-preserving game name.
    pub game: String,
    /// When the entry was stored (UTC, as recorded by SQLite).
    pub created_at: NaiveDateTime,
}

impl Store {
    /// Adds `game` to the server's watchlist.
    ///
    /// The name is trimmed but not case-folded. A duplicate is detected by the
    /// primary key through `ON CONFLICT DO NOTHING`, so concurrent requests for
    /// the same pair yield exactly one [`WatchOutcome::Added`].
    ///
    /// # Errors
    ///
    /// Returns an error on any storage failure.
    pub fn watch(&self, server_id: ServerId, game: &str) -> StorageResult<WatchOutcome> {
        let game = normalize_game_name(game);
        let inserted = self.conn()?.execute(
            "INSERT INTO drops_watch (guild_id, game) VALUES (?1, ?2)
             ON CONFLICT (guild_id, game) DO NOTHING",
            params![id_to_sql(server_id.0), game],
        )?;

        debug!(server = %server_id, game, inserted, "watch");
        Ok(if inserted > 0 {
            WatchOutcome::Added
        } else {
            WatchOutcome::AlreadyWatching
        })
    }

    /// Removes `game` from the server's watchlist.
    ///
    /// Returns `true` iff an entry was actually deleted.
    ///
    /// # Errors
    ///
    /// Returns an error on any storage failure.
    pub fn unwatch(&self, server_id: ServerId, game: &str) -> StorageResult<bool> {
        let game = normalize_game_name(game);
        let removed = self.conn()?.execute(
            "DELETE FROM drops_watch WHERE guild_id = ?1 AND game = ?2",
            params![id_to_sql(server_id.0), game],
        )?;

        debug!(server = %server_id, game, removed, "unwatch");
        Ok(removed > 0)
    }

    /// Lists the server's watched game names in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error on any storage failure.
    pub fn list(&self, server_id: ServerId) -> StorageResult<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT game FROM drops_watch WHERE guild_id = ?1 ORDER BY game ASC")?;
        let games = stmt
            .query_map(params![id_to_sql(server_id.0)], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(games)
    }

    /// Lists the server's watch entries with their creation time, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error on any storage failure.
    pub fn entries(&self, server_id: ServerId) -> StorageResult<Vec<WatchEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT guild_id, game, created_at FROM drops_watch
             WHERE guild_id = ?1 ORDER BY game ASC",
        )?;
        let entries = stmt
            .query_map(params![id_to_sql(server_id.0)], |row| {
                Ok(WatchEntry {
                    server_id: ServerId(id_from_sql(row.get(0)?)),
                    game: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}
