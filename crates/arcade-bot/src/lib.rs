//! # Arcade Bot
//!
//! Discord bot for gaming communities: curated links, a drops watchlist and
//! per-topic channel routing.
//!
//! This is the main binary crate that orchestrates the application lifecycle
//! using the Poise framework for Discord interactions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod cli;
pub mod error;

pub use bot::*;
pub use cli::*;
pub use error::*;
