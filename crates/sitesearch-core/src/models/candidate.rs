//! Scored search hits

use serde::{Deserialize, Serialize};

use crate::util::strip_fragment;

/// Whether a hit points at a whole page or at one of its sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Page,
    Section,
}

/// A scored hit produced for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCandidate {
    pub kind: ResultKind,
    /// Title of the owning page
    pub title: String,
    /// Heading of the matched section (section hits only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_heading: Option<String>,
    /// Navigable URL, already resolved for the current page
    pub url: String,
    pub category: String,
    /// Page summary (page hits only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Always greater than zero
    pub score: u32,
    pub matched_keywords: Vec<String>,
}

impl ResultCandidate {
    /// Identity used to drop duplicate hits.
    ///
    /// Pages are keyed by their URL without fragment, sections by their full
    /// anchor URL.
    #[must_use]
    pub fn dedup_key(&self) -> &str {
        match self.kind {
            ResultKind::Page => strip_fragment(&self.url),
            ResultKind::Section => &self.url,
        }
    }

    /// URL of the page this hit belongs to, without fragment.
    #[must_use]
    pub fn base_url(&self) -> &str {
        strip_fragment(&self.url)
    }

    /// Title shown in the results list: `Page › Section` for section hits.
    #[must_use]
    pub fn display_title(&self) -> String {
        match &self.section_heading {
            Some(heading) => format!("{} › {heading}", self.title),
            None => self.title.clone(),
        }
    }
}
