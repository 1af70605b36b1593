//! In-memory glossary source.

use async_trait::async_trait;

use acronym_types::AcronymEntry;

use super::{GlossarySource, SourceError};

/// Source that always returns the same entries.
///
/// Useful for testing without a document store, and for one-off lookups
/// against a local glossary file.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<AcronymEntry>,
}

impl StaticSource {
    pub fn new(entries: Vec<AcronymEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl GlossarySource for StaticSource {
    async fn fetch_acronyms(&self) -> Result<Vec<AcronymEntry>, SourceError> {
        Ok(self.entries.clone())
    }
}
