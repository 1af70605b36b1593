//! Error types shared across the workspace.

use thiserror::Error;

/// Errors raised while assembling [`Settings`](crate::Settings).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layered config could not be built or deserialized
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
