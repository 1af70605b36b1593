//! # acronym-source
//!
//! Where the glossary comes from.
//!
//! The [`GlossarySource`] trait is the seam between the command handler and
//! the external document store. Every call returns the complete, freshly
//! fetched list of entries; nothing is cached between calls.
//!
//! ## Implementations
//! - [`NotionSource`]: queries a Notion database (single page)
//! - [`StaticSource`]: serves a fixed list, for tests and local lookups

mod fixed;
mod notion;

pub use fixed::StaticSource;
pub use notion::{NotionSource, NotionSourceConfig};

use async_trait::async_trait;
use thiserror::Error;

use acronym_types::AcronymEntry;

/// Error type for glossary fetches.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Upstream unreachable, erroring, timed out or not configured
    #[error("Glossary source unavailable: {0}")]
    Unavailable(String),

    /// A row did not have the expected property shape
    #[error("Row {page_id} is missing text in property '{property}'")]
    MissingField {
        page_id: String,
        property: &'static str,
    },

    /// The HTTP client could not be constructed
    #[error("Invalid source configuration: {0}")]
    Config(String),
}

/// Pluggable glossary source.
#[async_trait]
pub trait GlossarySource: Send + Sync {
    /// Fetch every acronym/description pair the source holds.
    async fn fetch_acronyms(&self) -> Result<Vec<AcronymEntry>, SourceError>;
}
