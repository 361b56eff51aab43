//! Per-page search engine instance.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::task::JoinHandle;

use crate::loader::{IndexLoader, PageLocation};
use crate::models::{ResultCandidate, SearchIndex};
use crate::search::{search_index, Query};

/// Holds the loaded index for one page and answers queries against it.
///
/// The index starts empty and is replaced wholesale once a load succeeds.
/// Searches always read whichever index is current when they run.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    index: Arc<RwLock<Arc<SearchIndex>>>,
    location: PageLocation,
}

impl SearchEngine {
    /// Create an engine for the given page with an empty index.
    pub fn new(location: PageLocation) -> Self {
        Self::with_index(location, SearchIndex::default())
    }

    /// Create an engine with an already loaded index.
    pub fn with_index(location: PageLocation, index: SearchIndex) -> Self {
        Self {
            index: Arc::new(RwLock::new(Arc::new(index))),
            location,
        }
    }

    #[must_use]
    pub const fn location(&self) -> &PageLocation {
        &self.location
    }

    /// Snapshot of the current index.
    pub fn index(&self) -> Arc<SearchIndex> {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new index.
    pub fn replace_index(&self, index: SearchIndex) {
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(index);
    }

    /// Load the index for this page.
    ///
    /// Failures are logged and leave the current index untouched; returns
    /// whether a new index was installed.
    pub async fn load_index(&self, loader: &IndexLoader) -> bool {
        match loader.load(&self.location).await {
            Ok(index) => {
                tracing::info!(
                    "Loaded search index with {} entries and {} sections",
                    index.len(),
                    index.section_count()
                );
                self.replace_index(index);
                true
            }
            Err(error) => {
                tracing::error!(
                    "Failed to load search index from {}: {}",
                    loader.describe(&self.location),
                    error
                );
                false
            }
        }
    }

    /// Start loading the index in the background.
    ///
    /// Searches issued before the load completes run against the previous
    /// (initially empty) index.
    pub fn spawn_load_index(&self, loader: IndexLoader) -> JoinHandle<()> {
        let engine = self.clone();
        tokio::spawn(async move {
            engine.load_index(&loader).await;
        })
    }

    /// Run a raw query. Queries shorter than two characters yield nothing.
    pub fn search(&self, raw_query: &str) -> Vec<ResultCandidate> {
        let Some(query) = Query::parse(raw_query) else {
            return Vec::new();
        };
        self.search_query(&query)
    }

    /// Run an already normalized query.
    pub fn search_query(&self, query: &Query) -> Vec<ResultCandidate> {
        let index = self.index();
        let results = search_index(&index, query, &self.location);
        tracing::debug!(
            "Search for {:?} returned {} result(s)",
            query.normalized(),
            results.len()
        );
        results
    }
}
