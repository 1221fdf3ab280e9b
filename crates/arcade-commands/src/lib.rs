//! # Arcade Commands
//!
//! Discord slash command implementations using Poise framework for Arcade Bot.
//!
//! Every command is split in two: a plain function that turns the parsed
//! request into a [`Reply`], and a thin poise wrapper that extracts the
//! request from the interaction and sends the reply back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod drops;
pub mod framework;
pub mod lookups;
pub mod ping;
pub mod placeholders;
pub mod reply;
pub mod setchannel;

pub use framework::*;
pub use reply::{Embed, Reply};
