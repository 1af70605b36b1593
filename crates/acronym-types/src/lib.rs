//! # acronym-types
//!
//! Shared domain types for the acronym lookup service.
//!
//! - Entries: acronym/description pairs fetched from the glossary
//! - Settings: layered configuration for the daemon and its collaborators
//!
//! ## Usage
//!
//! ```rust
//! use acronym_types::AcronymEntry;
//!
//! let entry = AcronymEntry::new("PR", "Pull Request");
//! assert_eq!(entry.to_string(), "PR: Pull Request");
//! ```

pub mod entry;
pub mod error;
pub mod settings;

pub use entry::AcronymEntry;
pub use error::ConfigError;
pub use settings::{NotionSettings, Settings};
