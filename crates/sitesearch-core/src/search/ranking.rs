//! Ranking, deduplication and result capping.

use std::collections::{HashMap, HashSet};

use crate::models::{ResultCandidate, ResultKind};

/// Maximum number of results returned for a query.
pub const MAX_RESULTS: usize = 10;

/// Maximum number of section hits kept for the same page.
pub const MAX_SECTIONS_PER_PAGE: usize = 3;

/// Order candidates by descending score and keep the best distinct ones.
///
/// The sort is stable, so equal scores keep discovery order. Deduplication and
/// the per-page section cap are applied greedily in ranked order.
pub fn rank(mut candidates: Vec<ResultCandidate>) -> Vec<ResultCandidate> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let mut seen_keys: HashSet<String> = HashSet::new();
    let mut sections_per_page: HashMap<String, usize> = HashMap::new();
    let mut results = Vec::with_capacity(MAX_RESULTS.min(candidates.len()));

    for candidate in candidates {
        if results.len() >= MAX_RESULTS {
            break;
        }

        if candidate.kind == ResultKind::Section {
            let count = sections_per_page
                .get(candidate.base_url())
                .copied()
                .unwrap_or_default();
            if count >= MAX_SECTIONS_PER_PAGE {
                continue;
            }
        }

        if !seen_keys.insert(candidate.dedup_key().to_string()) {
            continue;
        }

        if candidate.kind == ResultKind::Section {
            *sections_per_page
                .entry(candidate.base_url().to_string())
                .or_default() += 1;
        }

        results.push(candidate);
    }

    results
}
