//! Search error types.

use thiserror::Error;

/// Errors that can occur while building or querying a glossary index.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Tantivy index error
    #[error("Tantivy error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),
}
