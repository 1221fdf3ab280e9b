//! Pooled SQLite handle shared by every command handler.

use crate::error::StorageResult;
use crate::schema::{apply_connection_pragmas, enable_wal, initialize_schema};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Default busy timeout applied to pooled connections.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Options for opening a [`Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
    /// How long to wait for a pooled connection before giving up.
    pub connection_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            pool_size: 8,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            connection_timeout: Duration::from_secs(30),
        }
    }
}

/// Watchlist and channel routing storage backed by one SQLite database.
///
/// Cloning is cheap and every clone shares the same pool.
#[derive(Clone)]
pub struct Store {
    pool: Pool<SqliteConnectionManager>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("Store")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

impl Store {
    /// Opens (creating if needed) the database file and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be built or the schema cannot be
    /// created.
    pub fn open<P: AsRef<Path>>(path: P, options: StoreOptions) -> StorageResult<Self> {
        info!("Opening database at {}", path.as_ref().display());

        let manager = SqliteConnectionManager::file(path.as_ref());
        let pool = Pool::builder()
            .max_size(options.pool_size)
            .connection_timeout(options.connection_timeout)
            .connection_customizer(Box::new(ConnectionCustomizer {
                busy_timeout: options.busy_timeout,
            }))
            .build(manager)?;

        let store = Self { pool };
        let conn = store.conn()?;
        let mode = enable_wal(&conn)?;
        drop(conn);
        debug!("Journal mode: {}", mode);
        store.initialize()?;
        Ok(store)
    }

    /// Opens a private in-memory database, mainly for tests.
    ///
    /// Each SQLite in-memory connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema cannot be created.
    pub fn in_memory() -> StorageResult<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_customizer(Box::new(ConnectionCustomizer {
                busy_timeout: DEFAULT_BUSY_TIMEOUT,
            }))
            .build(SqliteConnectionManager::memory())?;

        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Creates the tables when absent. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be checked out or the DDL fails.
    pub fn initialize(&self) -> StorageResult<()> {
        let conn = self.conn()?;
        initialize_schema(&conn)?;
        debug!("Schema initialized");
        Ok(())
    }

    /// Checks a connection out of the pool. It returns when the guard drops.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection becomes available.
    pub fn conn(&self) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    /// Runs a blocking store operation on tokio's blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns the operation's own error, or [`StorageError::Task`](crate::StorageError::Task) if the
    /// blocking task panicked.
    pub async fn run<F, T>(&self, op: F) -> StorageResult<T>
    where
        F: FnOnce(&Self) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || op(&store)).await?
    }
}

/// Applies per-connection pragmas when the pool opens a connection.
#[derive(Debug)]
struct ConnectionCustomizer {
    busy_timeout: Duration,
}

impl r2d2::CustomizeConnection<rusqlite::Connection, rusqlite::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
        apply_connection_pragmas(conn, self.busy_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file_and_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bot.sqlite");

        let store = Store::open(&path, StoreOptions::default()).unwrap();

        assert!(path.exists());
        let count: i64 = store
            .conn()
            .unwrap()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_open_uses_wal() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("wal.sqlite"), StoreOptions::default()).unwrap();

        let mode: String = store
            .conn()
            .unwrap()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_pool_respects_size() {
        let dir = TempDir::new().unwrap();
        let options = StoreOptions {
            pool_size: 2,
            ..StoreOptions::default()
        };
        let store = Store::open(dir.path().join("pool.sqlite"), options).unwrap();

        let _a = store.conn().unwrap();
        let _b = store.conn().unwrap();
        assert_eq!(store.pool.state().connections, 2);
    }

    #[test]
    fn test_open_with_single_connection_pool() {
        let dir = TempDir::new().unwrap();
        let options = StoreOptions {
            pool_size: 1,
            connection_timeout: Duration::from_millis(200),
            ..StoreOptions::default()
        };

        // The WAL connection must be back in the pool before the schema runs.
        let store = Store::open(dir.path().join("single.sqlite"), options).unwrap();
        store.initialize().unwrap();
        assert_eq!(store.pool.state().connections, 1);
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let options = StoreOptions {
            connection_timeout: Duration::from_millis(200),
            ..StoreOptions::default()
        };

        let err = Store::open(dir.path().join("missing").join("bot.sqlite"), options).unwrap_err();
        assert!(matches!(err, crate::StorageError::Pool(_)));
    }

    #[tokio::test]
    async fn test_run_executes_on_blocking_pool() {
        let store = Store::in_memory().unwrap();
        let tables: i64 = store
            .run(|store| {
                Ok(store.conn()?.query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                    [],
                    |row| row.get(0),
                )?)
            })
            .await
            .unwrap();
        assert_eq!(tables, 2);
    }
}
