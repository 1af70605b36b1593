//! Configuration loading for the acronym service.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/acronym-bot/config.toml.

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Legacy variable holding the Notion integration token.
pub const LEGACY_API_KEY_VAR: &str = "NOTION_API_KEY";

/// Legacy variable holding the glossary database id.
pub const LEGACY_DATABASE_ID_VAR: &str = "NOTION_ACRONYM_DATABASE_ID";

/// Notion document store settings.
///
/// Credentials are optional here: a missing key or database id surfaces
/// as a failed fetch on the first request, not as a startup error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionSettings {
    /// Integration token (loaded from env var, not stored in config file)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Id of the database holding the glossary
    #[serde(default)]
    pub database_id: Option<String>,

    /// API base URL (overridable for tests and proxies)
    #[serde(default = "default_notion_base_url")]
    pub base_url: String,

    /// Value sent in the `Notion-Version` header
    #[serde(default = "default_notion_api_version")]
    pub api_version: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_notion_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_notion_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_api_version() -> String {
    "2022-06-28".to_string()
}

fn default_notion_timeout_secs() -> u64 {
    10
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            database_id: None,
            base_url: default_notion_base_url(),
            api_version: default_notion_api_version(),
            timeout_secs: default_notion_timeout_secs(),
        }
    }
}

/// ACRONYM_* variables, e.g. ACRONYM_HTTP_PORT, ACRONYM_NOTION__DATABASE_ID
fn env_layer() -> Environment {
    Environment::with_prefix("ACRONYM")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP listen host
    #[serde(default = "default_http_host")]
    pub http_host: String,

    /// HTTP listen port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Glossary source configuration
    #[serde(default)]
    pub notion: NotionSettings,
}

fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_host: default_http_host(),
            http_port: default_http_port(),
            log_level: default_log_level(),
            notion: NotionSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/acronym-bot/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (ACRONYM_*, nested keys joined with `__`)
    /// 5. Legacy NOTION_* variables for credentials still unset
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_layered(cli_config_path, env_layer(), |name| std::env::var(name).ok())
    }

    fn load_layered<F>(
        cli_config_path: Option<&str>,
        env: Environment,
        legacy_lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_dir = ProjectDirs::from("", "", "acronym-bot")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("http_host", default_http_host())?
            .set_default("http_port", default_http_port() as i64)?
            .set_default("log_level", default_log_level())?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        let mut settings: Settings = builder.add_source(env).build()?.try_deserialize()?;
        settings.apply_legacy_env(legacy_lookup);
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notion.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "notion.timeout_secs must be > 0".to_string(),
            ));
        }
        if self.notion.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "notion.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Fill unset Notion credentials from the legacy variable names.
    pub fn apply_legacy_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.notion.api_key.is_none() {
            self.notion.api_key = lookup(LEGACY_API_KEY_VAR).filter(|v| !v.is_empty());
        }
        if self.notion.database_id.is_none() {
            self.notion.database_id = lookup(LEGACY_DATABASE_ID_VAR).filter(|v| !v.is_empty());
        }
    }

    /// Socket address string for the HTTP server
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
