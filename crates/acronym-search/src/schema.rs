//! Tantivy schema for the glossary index.

use tantivy::schema::{Field, Schema, INDEXED, STORED, TEXT};

/// Schema field handles for efficient access
#[derive(Debug, Clone)]
pub struct GlossarySchema {
    schema: Schema,
    /// Synthetic sequential id, the entry's position in the fetched list (INDEXED | STORED)
    pub entry_id: Field,
    /// Acronym text (TEXT | STORED)
    pub acronym: Field,
    /// Expansion text (TEXT | STORED)
    pub description: Field,
}

impl GlossarySchema {
    /// Get the underlying Tantivy schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Build the glossary schema.
///
/// Both text fields use Tantivy's default analyzer: split on
/// non-alphanumerics, drop overlong tokens, lowercase.
pub fn build_glossary_schema() -> GlossarySchema {
    let mut schema_builder = Schema::builder();

    let entry_id = schema_builder.add_u64_field("entry_id", INDEXED | STORED);
    let acronym = schema_builder.add_text_field("acronym", TEXT | STORED);
    let description = schema_builder.add_text_field("description", TEXT | STORED);

    let schema = schema_builder.build();

    GlossarySchema {
        schema,
        entry_id,
        acronym,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_schema() {
        let schema = build_glossary_schema();
        assert!(schema.schema.get_field("entry_id").is_ok());
        assert!(schema.schema.get_field("acronym").is_ok());
        assert!(schema.schema.get_field("description").is_ok());
    }

    #[test]
    fn test_text_fields_are_stored() {
        let schema = build_glossary_schema();
        assert!(schema.schema.get_field_entry(schema.acronym).is_stored());
        assert!(schema.schema.get_field_entry(schema.description).is_stored());
    }

}
