//! # acronym-search
//!
//! Fuzzy full-text search over the acronym glossary using Tantivy.
//!
//! An index is built from scratch in RAM for every request and dropped
//! with the response. Nothing is persisted.
//!
//! ## Features
//! - RAM-only Tantivy index over `acronym` and `description`
//! - Typo tolerance of one edit per query token
//! - Acronym matches weigh twice as much as description matches
//! - Stored fields, so hits need no secondary lookup

pub mod document;
pub mod error;
pub mod index;
pub mod schema;
pub mod searcher;

pub use document::{doc_to_entry, entry_to_doc};
pub use error::SearchError;
pub use index::GlossaryIndex;
pub use schema::{build_glossary_schema, GlossarySchema};
pub use searcher::{GlossaryHit, ACRONYM_BOOST, DESCRIPTION_BOOST, FUZZY_DISTANCE, FUZZY_WEIGHT};
