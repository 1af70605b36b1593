//! Per-request glossary index.
//!
//! Handles building the RAM index and handing out its reader.

use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy};
use tracing::debug;

use acronym_types::AcronymEntry;

use crate::document::entry_to_doc;
use crate::error::SearchError;
use crate::schema::{build_glossary_schema, GlossarySchema};

/// Memory budget for the single-threaded writer (Tantivy's per-thread minimum is 15MB)
const WRITER_MEMORY_MB: usize = 16;

/// In-memory index over one snapshot of the glossary.
///
/// Built fresh for each request and never shared between requests.
pub struct GlossaryIndex {
    index: Index,
    reader: IndexReader,
    schema: GlossarySchema,
}

impl GlossaryIndex {
    /// Index every entry, keyed by its position in `entries`.
    ///
    /// An empty slice yields an empty index that still answers queries.
    pub fn build(entries: &[AcronymEntry]) -> Result<Self, SearchError> {
        let schema = build_glossary_schema();
        let index = Index::create_in_ram(schema.schema().clone());

        let mut writer: IndexWriter =
            index.writer_with_num_threads(1, WRITER_MEMORY_MB * 1024 * 1024)?;
        for (position, entry) in entries.iter().enumerate() {
            writer.add_document(entry_to_doc(&schema, position as u64, entry))?;
        }
        writer.commit()?;

        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        debug!(count = entries.len(), "Built glossary index");

        Ok(Self {
            index,
            reader,
            schema,
        })
    }

    /// Get the glossary schema
    pub fn schema(&self) -> &GlossarySchema {
        &self.schema
    }

    /// Get the underlying Tantivy index
    pub fn index(&self) -> &Index {
        &self.index
    }

    pub(crate) fn reader(&self) -> &IndexReader {
        &self.reader
    }

    /// Get the number of indexed entries.
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }
}
