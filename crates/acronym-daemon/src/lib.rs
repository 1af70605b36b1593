//! Acronym daemon library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (start, lookup)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{lookup, run_lookup, start_daemon};
