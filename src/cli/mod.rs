//! CLI module
//!
//! Command-line interface over [`OpenSeaClient`](crate::OpenSeaClient).
//!
//! # Commands
//!
//! - `collections` - List collections on a chain
//! - `events` - List events for a collection

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

#[cfg(test)]
mod tests;
