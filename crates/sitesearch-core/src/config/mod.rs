//! Site configuration for search clients.
//!
//! Provides a `SiteConfig` describing where the site lives, which
//! sub-directories hold nested pages, and the timing knobs of the search box.
//! Values come from an optional JSON file and are then overridden by
//! environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;
use crate::{Error, Result};

pub const ENV_SITE: &str = "SITESEARCH_SITE";
pub const ENV_NESTED_DIRS: &str = "SITESEARCH_NESTED_DIRS";
pub const ENV_INDEX_FILE: &str = "SITESEARCH_INDEX_FILE";
pub const ENV_DEBOUNCE_MS: &str = "SITESEARCH_DEBOUNCE_MS";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "SITESEARCH_FETCH_TIMEOUT_SECS";

pub const DEFAULT_INDEX_FILE: &str = "search-index.json";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 4;
const DEFAULT_NESTED_DIRS: [&str; 3] = ["HackSmarter", "writeups", "projects"];

/// Search configuration for one site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site root: a local directory or an `http(s)://` base URL
    #[serde(default)]
    pub site: Option<String>,
    /// Directories whose pages sit one level below the site root
    #[serde(default = "default_nested_dirs")]
    pub nested_dirs: Vec<String>,
    /// Index file name at the site root
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Quiet period before a typed query is searched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// HTTP timeout for fetching the index
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: None,
            nested_dirs: default_nested_dirs(),
            index_file: default_index_file(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl SiteConfig {
    /// Parse a config file payload.
    pub fn parse(payload: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(payload)?;
        config.normalize()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(site) = normalize_text_option(lookup(ENV_SITE)) {
            self.site = Some(site);
        }
        if let Some(dirs) = normalize_text_option(lookup(ENV_NESTED_DIRS)) {
            self.nested_dirs = dirs
                .split(',')
                .map(str::trim)
                .filter(|dir| !dir.is_empty())
                .map(ToOwned::to_owned)
                .collect();
        }
        if let Some(index_file) = lookup(ENV_INDEX_FILE) {
            self.index_file = index_file;
        }
        if let Some(value) = normalize_text_option(lookup(ENV_DEBOUNCE_MS)) {
            self.debounce_ms = parse_number(&value, ENV_DEBOUNCE_MS)?;
        }
        if let Some(value) = normalize_text_option(lookup(ENV_FETCH_TIMEOUT_SECS)) {
            self.fetch_timeout_secs = parse_number(&value, ENV_FETCH_TIMEOUT_SECS)?;
        }

        self.normalize()?;
        Ok(self)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    fn normalize(&mut self) -> Result<()> {
        self.site = normalize_text_option(self.site.take());
        self.nested_dirs = self
            .nested_dirs
            .iter()
            .map(|dir| dir.trim().trim_matches('/').to_string())
            .filter(|dir| !dir.is_empty())
            .collect();

        let index_file = self.index_file.trim().trim_start_matches('/');
        if index_file.is_empty() {
            return Err(Error::InvalidInput(
                "index_file must not be empty".to_string(),
            ));
        }
        self.index_file = index_file.to_string();

        if self.debounce_ms < DEFAULT_DEBOUNCE_MS {
            return Err(Error::InvalidInput(format!(
                "debounce_ms must be at least {DEFAULT_DEBOUNCE_MS}"
            )));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(Error::InvalidInput(
                "fetch_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_nested_dirs() -> Vec<String> {
    DEFAULT_NESTED_DIRS.iter().map(ToString::to_string).collect()
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

const fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

const fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn parse_number(value: &str, key: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|error| Error::InvalidInput(format!("{key} must be a whole number: {error}")))
}
