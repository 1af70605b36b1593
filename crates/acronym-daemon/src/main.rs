//! Acronym Lookup Daemon
//!
//! Serves the `/acronym` Slack slash command.
//!
//! # Usage
//!
//! ```bash
//! acronym-daemon start [--host HOST] [--port PORT]
//! acronym-daemon lookup <QUERY> [--glossary FILE]
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/acronym-bot/config.toml)
//! 3. Environment variables (ACRONYM_*, plus NOTION_API_KEY and
//!    NOTION_ACRONYM_DATABASE_ID)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use acronym_daemon::{lookup, start_daemon, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start { host, port } => {
            start_daemon(
                cli.config.as_deref(),
                host.as_deref(),
                port,
                cli.log_level.as_deref(),
            )
            .await?;
        }
        Commands::Lookup { query, glossary } => {
            lookup(
                cli.config.as_deref(),
                &query,
                glossary.as_deref(),
                cli.log_level.as_deref(),
            )
            .await?;
        }
    }

    Ok(())
}
