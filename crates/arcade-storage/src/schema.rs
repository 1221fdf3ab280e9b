//! Schema definition and connection setup.

use rusqlite::Connection;
use std::time::Duration;

/// Watched games, one row per (server, game) pair.
const CREATE_DROPS_WATCH: &str = "
    CREATE TABLE IF NOT EXISTS drops_watch (
        guild_id INTEGER NOT NULL,
        game TEXT NOT NULL,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP,
        PRIMARY KEY (guild_id, game)
    );";

/// Destination channel per (server, topic).
const CREATE_CHANNELS: &str = "
    CREATE TABLE IF NOT EXISTS channels (
        guild_id INTEGER NOT NULL,
        topic TEXT NOT NULL,
        channel_id INTEGER NOT NULL,
        PRIMARY KEY (guild_id, topic)
    );";

/// Creates both tables when absent. Safe to run on every start.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_DROPS_WATCH)?;
    conn.execute_batch(CREATE_CHANNELS)?;
    Ok(())
}

/// Switches the database file to WAL so readers never block the writer.
///
/// The journal mode is persistent, so this only needs to run once per file.
/// In-memory databases report `memory` and are left as they are.
pub fn enable_wal(conn: &Connection) -> rusqlite::Result<String> {
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
}

/// Per-connection settings applied whenever the pool opens a connection.
pub fn apply_connection_pragmas(conn: &Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(())
}

/// Stores a Discord snowflake in an SQLite INTEGER column.
///
/// The bit pattern is kept, so ids above `i64::MAX` survive a round trip.
#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn id_to_sql(id: u64) -> i64 {
    id as i64
}

/// Inverse of [`id_to_sql`].
#[allow(clippy::cast_sign_loss)]
pub(crate) const fn id_from_sql(value: i64) -> u64 {
    value as u64
}
