//! Channel routing: which channel receives each topic's announcements.

use crate::error::StorageResult;
use crate::schema::{id_from_sql, id_to_sql};
use crate::store::Store;
use arcade_common::{ChannelId, ServerId, Topic};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

impl Store {
    /// Routes `topic` to `channel_id` for the server. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns an error on any storage failure.
    pub fn set_channel(
        &self,
        server_id: ServerId,
        topic: Topic,
        channel_id: ChannelId,
    ) -> StorageResult<()> {
        self.conn()?.execute(
            "INSERT INTO channels (guild_id, topic, channel_id) VALUES (?1, ?2, ?3)
             ON CONFLICT (guild_id, topic) DO UPDATE SET channel_id = excluded.channel_id",
            params![id_to_sql(server_id.0), topic.as_str(), id_to_sql(channel_id.0)],
        )?;

        debug!(server = %server_id, %topic, channel = %channel_id, "set_channel");
        Ok(())
    }

    /// Returns the channel routed for `topic`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error on any storage failure.
    pub fn get_channel(&self, server_id: ServerId, topic: Topic) -> StorageResult<Option<ChannelId>> {
        let channel = self
            .conn()?
            .query_row(
                "SELECT channel_id FROM channels WHERE guild_id = ?1 AND topic = ?2",
                params![id_to_sql(server_id.0), topic.as_str()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(channel.map(|raw| ChannelId(id_from_sql(raw))))
    }
}
