//! Command implementations for the acronym daemon.
//!
//! Handles:
//! - start: Load config, build the glossary source, serve HTTP
//! - lookup: Run the slash-command pipeline once from the terminal

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use acronym_service::{run_server_with_shutdown, SlashCommandHandler, SlashCommandRequest};
use acronym_source::{GlossarySource, NotionSource, NotionSourceConfig, StaticSource};
use acronym_types::{AcronymEntry, Settings};

/// Load configuration and apply the CLI log level override.
fn load_settings(config_path: Option<&str>, log_level_override: Option<&str>) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;
    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }
    Ok(settings)
}

/// Initialize logging. RUST_LOG wins over the configured level.
fn init_tracing(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn notion_source(settings: &Settings) -> Result<Arc<dyn GlossarySource>> {
    let config = NotionSourceConfig::from_settings(&settings.notion);
    let source = NotionSource::new(config).context("Failed to build Notion client")?;
    Ok(Arc::new(source))
}

/// Read a JSON array of entries for offline lookups.
fn load_glossary_file(path: &Path) -> Result<Vec<AcronymEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read glossary file {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid glossary file {:?}", path))
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Start the acronym daemon.
///
/// 1. Load configuration (defaults -> file -> env -> CLI)
/// 2. Build the Notion glossary source
/// 3. Serve HTTP until SIGINT/SIGTERM
pub async fn start_daemon(
    config_path: Option<&str>,
    host_override: Option<&str>,
    port_override: Option<u16>,
    log_level_override: Option<&str>,
) -> Result<()> {
    let mut settings = load_settings(config_path, log_level_override)?;
    if let Some(host) = host_override {
        settings.http_host = host.to_string();
    }
    if let Some(port) = port_override {
        settings.http_port = port;
    }

    init_tracing(&settings.log_level)?;

    info!("Acronym daemon starting...");
    info!("Configuration:");
    info!("  HTTP address: {}", settings.http_addr());
    info!("  Notion API: {}", settings.notion.base_url);
    info!(
        "  Notion database: {}",
        settings.notion.database_id.as_deref().unwrap_or("<unset>")
    );
    info!("  Log level: {}", settings.log_level);

    let source = notion_source(&settings)?;

    let addr: SocketAddr = settings
        .http_addr()
        .parse()
        .context("Invalid HTTP address")?;

    run_server_with_shutdown(addr, source, shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

/// Run the slash-command pipeline once and return the reply text.
///
/// Uses the glossary file when given, otherwise the configured Notion database.
pub async fn run_lookup(
    settings: &Settings,
    query: &str,
    glossary_path: Option<&Path>,
) -> Result<String> {
    let source: Arc<dyn GlossarySource> = match glossary_path {
        Some(path) => Arc::new(StaticSource::new(load_glossary_file(path)?)),
        None => notion_source(settings)?,
    };

    let handler = SlashCommandHandler::new(source);
    let response = handler
        .handle(&SlashCommandRequest::with_text(query))
        .await
        .context("Lookup failed")?;

    Ok(response.text)
}

/// `lookup` command: print the reply text to stdout.
pub async fn lookup(
    config_path: Option<&str>,
    query: &str,
    glossary_path: Option<&Path>,
    log_level_override: Option<&str>,
) -> Result<()> {
    let settings = load_settings(config_path, log_level_override)?;
    init_tracing(&settings.log_level)?;

    let text = run_lookup(&settings, query, glossary_path).await?;
    println!("{}", text);
    Ok(())
}
