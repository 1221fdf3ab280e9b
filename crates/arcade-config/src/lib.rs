//! # Arcade Config
//!
//! Type-safe configuration management for Arcade Bot.
//!
//! This crate provides the configuration schema, its defaults, loading from
//! YAML files and the environment, and validation of the final result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
