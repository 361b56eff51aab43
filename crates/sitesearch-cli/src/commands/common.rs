use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use sitesearch_core::config::SiteConfig;
use sitesearch_core::loader::{IndexLoader, IndexSource, PageLocation};
use sitesearch_core::panel::{PanelState, ResultsPanel};
use sitesearch_core::{ResultCandidate, ResultKind, SearchEngine, SearchIndex};

use crate::error::CliError;
use crate::site_config::load_site_config;

/// Everything a command needs to reach the index for one page.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub config: SiteConfig,
    pub location: PageLocation,
    pub loader: IndexLoader,
}

impl SearchContext {
    pub fn new(config: SiteConfig, site: &str, page: &str) -> Result<Self, CliError> {
        let source = IndexSource::parse(site)?;
        let location = PageLocation::new(page, &config.nested_dirs);
        let loader = IndexLoader::from_config(source, &config);
        Ok(Self {
            config,
            location,
            loader,
        })
    }

    /// Engine with the index already loaded. A failed load leaves it empty.
    pub async fn loaded_engine(&self) -> SearchEngine {
        let engine = SearchEngine::new(self.location.clone());
        engine.load_index(&self.loader).await;
        engine
    }
}

pub fn resolve_context(
    site: Option<&str>,
    page: &str,
    config_path: Option<&Path>,
) -> Result<SearchContext, CliError> {
    let config = load_site_config(config_path)?;
    let site = site
        .map(ToOwned::to_owned)
        .or_else(|| config.site.clone())
        .unwrap_or_else(|| ".".to_string());
    SearchContext::new(config, &site, page)
}

pub fn format_result_lines(results: &[ResultCandidate]) -> Vec<String> {
    results
        .iter()
        .map(|result| {
            let kind = match result.kind {
                ResultKind::Page => "page",
                ResultKind::Section => "section",
            };
            let title = result.display_title();
            let mut line = format!(
                "{:>4}  {kind:<7}  {:<18}  {title}  {}",
                result.score, result.category, result.url
            );
            if !result.matched_keywords.is_empty() {
                line.push_str("  [");
                line.push_str(&result.matched_keywords.join(", "));
                line.push(']');
            }
            line
        })
        .collect()
}

pub fn format_panel_lines(panel: &ResultsPanel) -> Vec<String> {
    match panel.state() {
        PanelState::Hidden => vec!["(results hidden)".to_string()],
        PanelState::NoResults { query } => {
            vec![format!("No results found for \"{}\"", query.text())]
        }
        PanelState::Showing { rows, .. } => rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let marker = if panel.focus() == Some(index) { ">" } else { " " };
                format!("{marker} {index:>2}. {}  ({})", row.display_title(), row.url)
            })
            .collect(),
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    pub sections: usize,
    pub keywords: usize,
    pub categories: BTreeMap<String, usize>,
}

pub fn index_stats(index: &SearchIndex) -> IndexStats {
    let mut categories = BTreeMap::new();
    let mut keywords = 0;

    for entry in index.entries() {
        let category = if entry.category.trim().is_empty() {
            "(uncategorized)".to_string()
        } else {
            entry.category.clone()
        };
        *categories.entry(category).or_insert(0) += 1;
        keywords += entry.keywords.len();
        keywords += entry
            .sections
            .iter()
            .map(|section| section.keywords.len())
            .sum::<usize>();
    }

    IndexStats {
        entries: index.len(),
        sections: index.section_count(),
        keywords,
        categories,
    }
}

pub fn format_stats_lines(stats: &IndexStats) -> Vec<String> {
    let mut lines = vec![
        format!("entries:   {}", stats.entries),
        format!("sections:  {}", stats.sections),
        format!("keywords:  {}", stats.keywords),
        "categories:".to_string(),
    ];
    lines.extend(
        stats
            .categories
            .iter()
            .map(|(category, count)| format!("  {category:<24} {count}")),
    );
    lines
}
