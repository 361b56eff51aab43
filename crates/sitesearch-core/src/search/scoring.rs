//! Weighted field scoring.
//!
//! Every entry yields at most one page hit plus one hit per matching section.
//! Field comparisons are case-insensitive substring checks against the
//! normalized query and its individual terms.

use super::query::Query;
use crate::loader::PageLocation;
use crate::models::{IndexEntry, ResultCandidate, ResultKind, Section};

pub const TITLE_MATCH: u32 = 100;
pub const CATEGORY_MATCH: u32 = 50;
pub const DESCRIPTION_MATCH: u32 = 30;
pub const TITLE_TERM: u32 = 10;
pub const DESCRIPTION_TERM: u32 = 5;

pub const HEADING_MATCH: u32 = 90;
pub const HEADING_TERM: u32 = 15;

pub const KEYWORD_EXACT: u32 = 80;
pub const KEYWORD_CONTAINS: u32 = 60;
pub const KEYWORD_ALL_TERMS: u32 = 40;

/// Outcome of scoring one keyword list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordScore {
    pub score: u32,
    pub matched: Vec<String>,
}

/// Score a keyword list against a query.
///
/// Each keyword lands in at most one tier: exact match, then containment of
/// the whole query, then containment of every term.
pub fn score_keywords(keywords: &[String], query: &Query) -> KeywordScore {
    let mut result = KeywordScore::default();

    for keyword in keywords {
        let lowered = keyword.to_lowercase();
        let delta = if lowered == query.normalized() {
            KEYWORD_EXACT
        } else if lowered.contains(query.normalized()) {
            KEYWORD_CONTAINS
        } else if query.terms().iter().all(|term| lowered.contains(term.as_str())) {
            KEYWORD_ALL_TERMS
        } else {
            continue;
        };

        result.score += delta;
        result.matched.push(keyword.clone());
    }

    result
}

/// Score the page-level fields of an entry.
pub fn score_page(
    entry: &IndexEntry,
    query: &Query,
    location: &PageLocation,
) -> Option<ResultCandidate> {
    let title = entry.title.to_lowercase();
    let category = entry.category.to_lowercase();
    let description = entry.description.to_lowercase();
    let normalized = query.normalized();

    let mut score = 0;
    if title.contains(normalized) {
        score += TITLE_MATCH;
    }
    if category.contains(normalized) {
        score += CATEGORY_MATCH;
    }

    let keywords = score_keywords(&entry.keywords, query);
    score += keywords.score;

    if description.contains(normalized) {
        score += DESCRIPTION_MATCH;
    }
    score += TITLE_TERM * count_terms_in(&title, query);
    score += DESCRIPTION_TERM * count_terms_in(&description, query);

    (score > 0).then(|| ResultCandidate {
        kind: ResultKind::Page,
        title: entry.title.clone(),
        section_heading: None,
        url: location.resolve_link(&entry.url),
        category: entry.category.clone(),
        description: Some(entry.description.clone()).filter(|text| !text.is_empty()),
        difficulty: entry.difficulty.clone(),
        score,
        matched_keywords: keywords.matched,
    })
}

/// Score one section of an entry.
pub fn score_section(
    entry: &IndexEntry,
    section: &Section,
    query: &Query,
    location: &PageLocation,
) -> Option<ResultCandidate> {
    let heading = section.heading.to_lowercase();

    let mut score = 0;
    if heading.contains(query.normalized()) {
        score += HEADING_MATCH;
    }

    let keywords = score_keywords(&section.keywords, query);
    score += keywords.score;
    score += HEADING_TERM * count_terms_in(&heading, query);

    (score > 0).then(|| ResultCandidate {
        kind: ResultKind::Section,
        title: entry.title.clone(),
        section_heading: Some(section.heading.clone()),
        url: location.resolve_link(&section.target_url(&entry.url)),
        category: entry.category.clone(),
        description: None,
        difficulty: entry.difficulty.clone(),
        score,
        matched_keywords: keywords.matched,
    })
}

/// All hits for one entry in discovery order: the page first, then its
/// sections in declaration order.
pub fn score_entry(
    entry: &IndexEntry,
    query: &Query,
    location: &PageLocation,
) -> Vec<ResultCandidate> {
    let page = score_page(entry, query, location);
    let sections = entry
        .sections
        .iter()
        .filter_map(|section| score_section(entry, section, query, location));

    page.into_iter().chain(sections).collect()
}

#[allow(clippy::cast_possible_truncation)] // term counts are tiny
fn count_terms_in(field: &str, query: &Query) -> u32 {
    query
        .terms()
        .iter()
        .filter(|term| field.contains(term.as_str()))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn query(raw: &str) -> Query {
        Query::parse(raw).unwrap()
    }

    fn keywords(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn entry(title: &str) -> IndexEntry {
        IndexEntry {
            title: title.to_string(),
            url: "writeups/page.html".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn keyword_exact_match_scores_top_tier() {
        let result = score_keywords(&keywords(&["XSS"]), &query("xss"));
        assert_eq!(result.score, KEYWORD_EXACT);
        assert_eq!(result.matched, vec!["XSS"]);
    }

    #[test]
    fn keyword_without_query_substring_scores_nothing() {
        let result = score_keywords(&keywords(&["cross-site-scripting"]), &query("xss"));
        assert_eq!(result, KeywordScore::default());
    }

    #[test]
    fn keyword_tiers_do_not_double_count() {
        let q = query("sql injection");
        assert_eq!(score_keywords(&keywords(&["SQL Injection"]), &q).score, KEYWORD_EXACT);
        assert_eq!(
            score_keywords(&keywords(&["blind sql injection"]), &q).score,
            KEYWORD_CONTAINS
        );
        assert_eq!(
            score_keywords(&keywords(&["injection of sql"]), &q).score,
            KEYWORD_ALL_TERMS
        );
    }

    #[test]
    fn keyword_scores_sum_across_keywords() {
        let result = score_keywords(
            &keywords(&["nmap", "nmap scripting", "gobuster", "nmap"]),
            &query("nmap"),
        );
        assert_eq!(result.score, KEYWORD_EXACT + KEYWORD_CONTAINS + KEYWORD_EXACT);
        assert_eq!(result.matched, vec!["nmap", "nmap scripting", "nmap"]);
    }

    #[test]
    fn tiers_are_ordered_for_the_same_keyword() {
        assert!(KEYWORD_EXACT >= KEYWORD_CONTAINS);
        assert!(KEYWORD_CONTAINS >= KEYWORD_ALL_TERMS);
    }

    #[test]
    fn title_match_scores_at_least_one_hundred() {
        let candidate = score_page(
            &entry("Buffer Overflow 101"),
            &query("buffer overflow 101"),
            &PageLocation::root(),
        )
        .unwrap();

        assert_eq!(candidate.kind, ResultKind::Page);
        assert_eq!(candidate.score, TITLE_MATCH + 3 * TITLE_TERM);
        assert!(candidate.score >= 100);
    }

    #[test]
    fn page_bonuses_stack() {
        let page = IndexEntry {
            title: "Kerberos Attacks".to_string(),
            category: "Kerberos Labs".to_string(),
            description: "Abusing kerberos tickets".to_string(),
            keywords: keywords(&["kerberos"]),
            ..entry("")
        };

        let candidate = score_page(&page, &query("kerberos"), &PageLocation::root()).unwrap();
        assert_eq!(
            candidate.score,
            TITLE_MATCH
                + CATEGORY_MATCH
                + KEYWORD_EXACT
                + DESCRIPTION_MATCH
                + TITLE_TERM
                + DESCRIPTION_TERM
        );
        assert_eq!(candidate.description.as_deref(), Some("Abusing kerberos tickets"));
        assert_eq!(candidate.matched_keywords, vec!["kerberos"]);
    }

    #[test]
    fn per_term_bonus_applies_without_full_match() {
        let page = IndexEntry {
            description: "Privilege escalation on Linux".to_string(),
            ..entry("Linux Privesc")
        };

        let candidate = score_page(&page, &query("linux kernel"), &PageLocation::root()).unwrap();
        assert_eq!(candidate.score, TITLE_TERM + DESCRIPTION_TERM);
    }

    #[test]
    fn unmatched_page_emits_nothing() {
        assert_eq!(
            score_page(&entry("Buffer Overflow"), &query("kerberos"), &PageLocation::root()),
            None
        );
    }

    #[test]
    fn empty_fields_never_match() {
        assert_eq!(
            score_page(&IndexEntry::default(), &query("ab"), &PageLocation::root()),
            None
        );
    }

    #[test]
    fn section_score_and_url() {
        let page = IndexEntry {
            sections: vec![Section {
                heading: "Nmap Scan".to_string(),
                anchor: "#nmap-scan".to_string(),
                keywords: keywords(&["nmap"]),
            }],
            ..entry("404-Bank")
        };

        let hits = score_entry(&page, &query("nmap"), &PageLocation::root());
        assert_eq!(hits.len(), 1);

        let section = &hits[0];
        assert_eq!(section.kind, ResultKind::Section);
        assert_eq!(section.score, HEADING_MATCH + KEYWORD_EXACT + HEADING_TERM);
        assert_eq!(section.url, "writeups/page.html#nmap-scan");
        assert_eq!(section.section_heading.as_deref(), Some("Nmap Scan"));
        assert_eq!(section.description, None);
    }

    #[test]
    fn score_entry_orders_page_before_sections() {
        let page = IndexEntry {
            sections: vec![
                Section {
                    heading: "Enumeration tricks".to_string(),
                    anchor: "writeups/page.html#a".to_string(),
                    keywords: Vec::new(),
                },
                Section {
                    heading: "Unrelated".to_string(),
                    anchor: "writeups/page.html#b".to_string(),
                    keywords: Vec::new(),
                },
                Section {
                    heading: "More enumeration".to_string(),
                    anchor: "writeups/page.html#c".to_string(),
                    keywords: Vec::new(),
                },
            ],
            ..entry("Enumeration Guide")
        };

        let hits = score_entry(&page, &query("enumeration"), &PageLocation::root());
        let urls: Vec<&str> = hits.iter().map(|hit| hit.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["writeups/page.html", "writeups/page.html#a", "writeups/page.html#c"]
        );
    }

    #[test]
    fn urls_are_resolved_for_nested_pages() {
        let location = PageLocation::new("HackSmarter/404bank.html", &["HackSmarter".to_string()]);
        let candidate = score_page(&entry("Buffer Overflow"), &query("buffer"), &location).unwrap();
        assert_eq!(candidate.url, "../writeups/page.html");
    }
}
