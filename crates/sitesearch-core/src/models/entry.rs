//! Index entry model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use crate::util::strip_fragment;

/// One page of the site as described by the search index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Page title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// Site-relative page path
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    /// Category label (e.g. "HackSmarter Labs")
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: String,
    /// Short page summary
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    /// Difficulty label written for walkthrough pages. Displayed, never scored.
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<String>,
    /// Page-level keywords, in index order
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub keywords: Vec<String>,
    /// Anchored sections, in declaration order
    #[serde(default, deserialize_with = "lenient::sections")]
    pub sections: Vec<Section>,
}

impl IndexEntry {
    /// Decode one element of the index array.
    ///
    /// Elements that are not objects decode as an entry with every field empty.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// A named anchor within a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading text
    #[serde(default, deserialize_with = "lenient::string")]
    pub heading: String,
    /// Link to the section, usually `page.html#fragment`
    #[serde(default, deserialize_with = "lenient::string")]
    pub anchor: String,
    /// Section-level keywords
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub keywords: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Site-relative link target of this section.
    ///
    /// A fragment-only anchor (`#nmap-scan`) is attached to the owning page's
    /// URL; a missing anchor falls back to the page itself.
    #[must_use]
    pub fn target_url(&self, page_url: &str) -> String {
        let anchor = self.anchor.trim();
        if anchor.is_empty() {
            page_url.to_string()
        } else if anchor.starts_with('#') {
            format!("{}{anchor}", strip_fragment(page_url))
        } else {
            anchor.to_string()
        }
    }
}
