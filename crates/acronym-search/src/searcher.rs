//! Fuzzy, field-weighted glossary search.
//!
//! Every query token is matched against both text fields, exactly or
//! within one edit. A token earns a fixed weight per field it matches,
//! the exact weight when it matches exactly and the fuzzy weight otherwise,
//! so the score reflects which fields matched and how closely, not term
//! statistics. With these weights any acronym match, exact or fuzzy,
//! outscores a description match of the same token.

use tantivy::collector::TopDocs;
use tantivy::query::{
    BooleanQuery, BoostQuery, ConstScoreQuery, DisjunctionMaxQuery, FuzzyTermQuery, Occur, Query,
    TermQuery,
};
use tantivy::schema::{Field, IndexRecordOption};
use tantivy::tokenizer::TokenStream;
use tantivy::{TantivyDocument, Term};
use tracing::{debug, info};

use acronym_types::AcronymEntry;

use crate::document::doc_to_entry;
use crate::error::SearchError;
use crate::index::GlossaryIndex;

/// Weight of a match in the acronym field
pub const ACRONYM_BOOST: f32 = 2.0;

/// Weight of a match in the description field
pub const DESCRIPTION_BOOST: f32 = 1.0;

/// Maximum Levenshtein distance between a query token and an indexed token
pub const FUZZY_DISTANCE: u8 = 1;

/// Fraction of the field weight earned by a fuzzy-only match.
///
/// Must stay above `DESCRIPTION_BOOST / ACRONYM_BOOST` so a one-edit acronym
/// match beats an exact description match.
pub const FUZZY_WEIGHT: f32 = 0.75;

/// A matching entry with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct GlossaryHit {
    pub entry: AcronymEntry,
    pub score: f32,
}

impl GlossaryIndex {
    /// Search the glossary, best match first.
    ///
    /// Returns only the stored pairs; the synthetic ids stay inside the index.
    pub fn search(&self, query: &str) -> Result<Vec<AcronymEntry>, SearchError> {
        Ok(self
            .search_with_scores(query)?
            .into_iter()
            .map(|hit| hit.entry)
            .collect())
    }

    /// Search and keep the scores.
    ///
    /// Ordered by descending score, then by position in the glossary.
    pub fn search_with_scores(&self, query: &str) -> Result<Vec<GlossaryHit>, SearchError> {
        let tokens = self.query_tokens(query)?;
        if tokens.is_empty() {
            debug!(query, "Query has no searchable tokens");
            return Ok(Vec::new());
        }

        let schema = self.schema();
        let fields = [
            (schema.acronym, ACRONYM_BOOST),
            (schema.description, DESCRIPTION_BOOST),
        ];

        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
        for token in &tokens {
            for (field, boost) in fields {
                clauses.push((Occur::Should, token_clause(field, token, boost)));
            }
        }
        let query_obj = BooleanQuery::new(clauses);

        let searcher = self.reader().searcher();
        // Every match is returned, so collect up to the whole index
        let limit = searcher.num_docs().max(1) as usize;
        let top_docs = searcher.search(&query_obj, &TopDocs::with_limit(limit))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            if let Some((entry_id, entry)) = doc_to_entry(schema, &doc) {
                hits.push((entry_id, GlossaryHit { entry, score }));
            }
        }

        hits.sort_by(|(a_id, a), (b_id, b)| b.score.total_cmp(&a.score).then(a_id.cmp(b_id)));

        info!(query, results = hits.len(), "Glossary search complete");

        Ok(hits.into_iter().map(|(_, hit)| hit).collect())
    }

    /// Tokenize the query with the analyzer used for the indexed fields.
    ///
    /// Repeated tokens are collapsed so they are not counted twice.
    fn query_tokens(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let mut analyzer = self.index().tokenizer_for_field(self.schema().acronym)?;
        let mut stream = analyzer.token_stream(query);

        let mut tokens: Vec<String> = Vec::new();
        while stream.advance() {
            let text = &stream.token().text;
            if !tokens.contains(text) {
                tokens.push(text.clone());
            }
        }
        Ok(tokens)
    }
}

/// Best of the exact and fuzzy match for one token in one field.
fn token_clause(field: Field, token: &str, boost: f32) -> Box<dyn Query> {
    let term = Term::from_field_text(field, token);

    let exact: Box<dyn Query> = Box::new(ConstScoreQuery::new(
        Box::new(TermQuery::new(term.clone(), IndexRecordOption::Basic)),
        boost,
    ));
    let fuzzy: Box<dyn Query> = Box::new(BoostQuery::new(
        Box::new(FuzzyTermQuery::new(term, FUZZY_DISTANCE, true)),
        boost * FUZZY_WEIGHT,
    ));

    Box::new(DisjunctionMaxQuery::new(vec![exact, fuzzy]))
}
