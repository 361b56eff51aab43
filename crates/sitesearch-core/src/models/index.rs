//! In-memory search index

use serde_json::Value;

use super::IndexEntry;
use crate::error::{Error, Result};

/// The full, ordered list of indexed pages. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    #[must_use]
    pub const fn new(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    /// Parse an index payload.
    ///
    /// The only structural requirement is that the document is a JSON array;
    /// individual elements are decoded leniently.
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        let Value::Array(items) = value else {
            return Err(Error::IndexLoad(format!(
                "expected a JSON array of entries, found {}",
                json_kind(&value)
            )));
        };

        Ok(Self::new(items.into_iter().map(IndexEntry::from_value).collect()))
    }

    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of sections across all entries.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.sections.len()).sum()
    }
}

impl From<Vec<IndexEntry>> for SearchIndex {
    fn from(entries: Vec<IndexEntry>) -> Self {
        Self::new(entries)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
