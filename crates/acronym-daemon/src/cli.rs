//! CLI argument parsing for the acronym daemon.
//!
//! CLI flags override all other config sources.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Acronym Lookup Daemon
///
/// Answers Slack slash commands from a glossary kept in Notion.
#[derive(Parser, Debug)]
#[command(name = "acronym-daemon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/acronym-bot/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Daemon commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Start {
        /// Override listen host
        #[arg(long)]
        host: Option<String>,

        /// Override listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one lookup and print the reply text
    Lookup {
        /// Text as it would follow the slash command
        query: String,

        /// JSON file of {"acronym", "description"} objects to use instead of Notion
        #[arg(short, long)]
        glossary: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_start_defaults() {
        let cli = Cli::parse_from(["acronym-daemon", "start"]);
        match cli.command {
            Commands::Start { host, port } => {
                assert!(host.is_none());
                assert!(port.is_none());
            }
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_start_with_port() {
        let cli = Cli::parse_from(["acronym-daemon", "start", "-p", "8080", "--host", "127.0.0.1"]);
        match cli.command {
            Commands::Start { host, port } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["acronym-daemon", "--config", "/path/to/config.toml", "start"]);
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_cli_lookup() {
        let cli = Cli::parse_from(["acronym-daemon", "lookup", "PR", "--glossary", "terms.json"]);
        match cli.command {
            Commands::Lookup { query, glossary } => {
                assert_eq!(query, "PR");
                assert_eq!(glossary, Some(PathBuf::from("terms.json")));
            }
            _ => panic!("Expected Lookup command"),
        }
    }

    #[test]
    fn test_cli_global_log_level_after_subcommand() {
        let cli = Cli::parse_from(["acronym-daemon", "lookup", "CI", "-l", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_lookup_requires_query() {
        assert!(Cli::try_parse_from(["acronym-daemon", "lookup"]).is_err());
    }
}
