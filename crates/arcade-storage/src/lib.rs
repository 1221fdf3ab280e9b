//! # Arcade Storage
//!
//! SQLite persistence for Arcade Bot.
//!
//! Two per-server stores share one database file: the drops watchlist and the
//! topic channel routing table. Every operation checks a connection out of an
//! r2d2 pool, runs a single statement and hands the connection back. Uniqueness
//! is enforced by the tables' primary keys, never by application locks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod channels;
pub mod error;
pub mod schema;
pub mod store;
pub mod watchlist;

pub use error::*;
pub use store::*;
pub use watchlist::{WatchEntry, WatchOutcome};
