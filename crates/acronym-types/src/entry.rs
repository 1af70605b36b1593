//! Glossary entry type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single glossary row: an acronym and what it stands for.
///
/// Entries carry no identity beyond the pair itself. They are produced
/// fresh for every request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymEntry {
    pub acronym: String,
    pub description: String,
}

impl AcronymEntry {
    pub fn new(acronym: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            acronym: acronym.into(),
            description: description.into(),
        }
    }
}

/// Renders the entry the way it is shown in chat: `"<acronym>: <description>"`.
impl fmt::Display for AcronymEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.acronym, self.description)
    }
}
