//! Search functionality for sitesearch
//!
//! Queries are normalized, every index entry is scored page-first then
//! section-by-section, and the pooled hits are ranked, deduplicated and capped.

mod query;
mod ranking;
mod scoring;

pub use query::{Query, MIN_QUERY_CHARS};
pub use ranking::{rank, MAX_RESULTS, MAX_SECTIONS_PER_PAGE};
pub use scoring::{score_entry, score_keywords, score_page, score_section, KeywordScore};

use crate::loader::PageLocation;
use crate::models::{ResultCandidate, SearchIndex};

/// Run a normalized query against an index.
pub fn search_index(
    index: &SearchIndex,
    query: &Query,
    location: &PageLocation,
) -> Vec<ResultCandidate> {
    let candidates = index
        .entries()
        .iter()
        .flat_map(|entry| score_entry(entry, query, location))
        .collect();
    rank(candidates)
}
