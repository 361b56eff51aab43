//! Search index loading.
//!
//! The index is a static JSON document produced by the site tooling. It is
//! located relative to the current page and retrieved either over HTTP or from
//! a local copy of the site.

mod location;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

pub use location::PageLocation;

use crate::config::{SiteConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_INDEX_FILE};
use crate::models::SearchIndex;
use crate::util::{compact_text, is_http_url};
use crate::{Error, Result};

/// Where the site, and therefore its index, can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    /// Deployed site, e.g. `https://z3rotrace.live/`
    Http(Url),
    /// Local checkout of the site root
    Directory(PathBuf),
}

impl IndexSource {
    /// Interpret a site argument: `http(s)://` values are URLs, anything else
    /// is a directory.
    pub fn parse(site: &str) -> Result<Self> {
        let site = site.trim();
        if is_http_url(site) {
            let mut url = Url::parse(site)?;
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(Self::Http(url))
        } else {
            Ok(Self::Directory(PathBuf::from(site)))
        }
    }

    /// Human-readable location of a site-relative path within this source.
    pub fn describe(&self, relative_path: &str) -> String {
        match self {
            Self::Http(base) => base
                .join(relative_path)
                .map_or_else(|_| format!("{base}{relative_path}"), |url| url.to_string()),
            Self::Directory(root) => root.join(relative_path).display().to_string(),
        }
    }

    async fn read(&self, relative_path: &str, timeout: Duration) -> Result<String> {
        match self {
            Self::Http(base) => fetch_http(&base.join(relative_path)?, timeout).await,
            Self::Directory(root) => Ok(tokio::fs::read_to_string(root.join(relative_path)).await?),
        }
    }
}

/// Retrieves the index for a given page.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    source: IndexSource,
    index_file: String,
    timeout: Duration,
}

impl IndexLoader {
    pub fn new(source: IndexSource) -> Self {
        Self {
            source,
            index_file: DEFAULT_INDEX_FILE.to_string(),
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    pub fn from_config(source: IndexSource, config: &SiteConfig) -> Self {
        Self {
            source,
            index_file: config.index_file.clone(),
            timeout: config.fetch_timeout(),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &IndexSource {
        &self.source
    }

    /// Where the index for `location` will be read from.
    #[must_use]
    pub fn describe(&self, location: &PageLocation) -> String {
        self.source.describe(&location.index_path(&self.index_file))
    }

    /// Fetch and parse the index for `location`.
    pub async fn load(&self, location: &PageLocation) -> Result<SearchIndex> {
        let path = location.index_path(&self.index_file);
        tracing::debug!("Loading search index from {}", self.source.describe(&path));

        let payload = self.source.read(&path, self.timeout).await?;
        SearchIndex::from_json(&payload)
    }
}

async fn fetch_http(url: &Url, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await?;
        return Err(Error::IndexLoad(format!(
            "{url} returned HTTP {status}: {}",
            compact_text(&body)
        )));
    }

    Ok(response.text().await?)
}
