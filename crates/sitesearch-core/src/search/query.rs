//! Query normalization

/// Queries shorter than this (after trimming) are not searched.
pub const MIN_QUERY_CHARS: usize = 2;

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    normalized: String,
    terms: Vec<String>,
}

impl Query {
    /// Normalize raw input text.
    ///
    /// Returns `None` when the trimmed input is shorter than
    /// [`MIN_QUERY_CHARS`] characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return None;
        }

        let normalized = trimmed.to_lowercase();
        let terms = normalized.split_whitespace().map(ToOwned::to_owned).collect();
        Some(Self {
            text: trimmed.to_string(),
            normalized,
            terms,
        })
    }

    /// Trimmed input as the user typed it.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased, trimmed query text.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whitespace-separated terms, in input order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
