//! Slash-command pipeline: fetch, index, search, format.

use std::sync::Arc;

use tracing::debug;

use acronym_search::GlossaryIndex;
use acronym_source::GlossarySource;
use acronym_types::AcronymEntry;

use crate::error::ServiceError;
use crate::slack::{SlashCommandRequest, SlashCommandResponse};

/// Runs one slash command end to end.
///
/// Cloning is cheap; clones share the glossary source but never an index.
#[derive(Clone)]
pub struct SlashCommandHandler {
    source: Arc<dyn GlossarySource>,
}

impl SlashCommandHandler {
    pub fn new(source: Arc<dyn GlossarySource>) -> Self {
        Self { source }
    }

    /// Answer a slash command.
    ///
    /// The raw `text` is the query: no trimming, no validation.
    pub async fn handle(
        &self,
        request: &SlashCommandRequest,
    ) -> Result<SlashCommandResponse, ServiceError> {
        let query = request.text.as_str();
        let results = self.search_acronyms(query).await?;
        Ok(SlashCommandResponse::ephemeral(format_results(query, &results)))
    }

    /// Fetch the current glossary and search a fresh index built from it.
    pub async fn search_acronyms(&self, query: &str) -> Result<Vec<AcronymEntry>, ServiceError> {
        let entries = self.source.fetch_acronyms().await?;
        let index = GlossaryIndex::build(&entries)?;
        let results = index.search(query)?;

        debug!(
            query,
            glossary_size = entries.len(),
            results = results.len(),
            "Searched glossary"
        );
        Ok(results)
    }
}

/// One `"<acronym>: <description>"` line per hit, or the no-match notice.
pub fn format_results(query: &str, results: &[AcronymEntry]) -> String {
    if results.is_empty() {
        return format!("No matches found for {}", query);
    }

    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
