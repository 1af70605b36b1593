//! Mapping between glossary entries and Tantivy documents.

use tantivy::doc;
use tantivy::schema::Value;
use tantivy::TantivyDocument;

use acronym_types::AcronymEntry;

use crate::schema::GlossarySchema;

/// Convert an entry to a Tantivy document under the given synthetic id.
pub fn entry_to_doc(schema: &GlossarySchema, entry_id: u64, entry: &AcronymEntry) -> TantivyDocument {
    doc!(
        schema.entry_id => entry_id,
        schema.acronym => entry.acronym.clone(),
        schema.description => entry.description.clone()
    )
}

/// Read the synthetic id and the stored entry back out of a document.
///
/// Returns None when a stored field is absent.
pub fn doc_to_entry(schema: &GlossarySchema, doc: &TantivyDocument) -> Option<(u64, AcronymEntry)> {
    let entry_id = doc.get_first(schema.entry_id).and_then(|v| v.as_u64())?;
    let acronym = doc.get_first(schema.acronym).and_then(|v| v.as_str())?;
    let description = doc.get_first(schema.description).and_then(|v| v.as_str())?;

    Some((entry_id, AcronymEntry::new(acronym, description)))
}
