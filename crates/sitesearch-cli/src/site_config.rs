//! CLI config file discovery.

use std::path::{Path, PathBuf};

use sitesearch_core::config::SiteConfig;

use crate::error::CliError;

const CONFIG_FILE_NAME: &str = "config.json";

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sitesearch").join(CONFIG_FILE_NAME))
}

/// Load the site config, then apply environment overrides.
///
/// An explicit path must exist; the default path is optional.
pub fn load_site_config(explicit: Option<&Path>) -> Result<SiteConfig, CliError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.exists()),
    };

    let config = match path {
        Some(path) => load_from_path(&path)?,
        None => SiteConfig::default(),
    };

    Ok(config.with_env_overrides()?)
}

pub fn load_from_path(path: &Path) -> Result<SiteConfig, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|error| {
        CliError::Config(format!(
            "Failed to read config at {}: {}",
            path.display(),
            error
        ))
    })?;
    SiteConfig::parse(&raw).map_err(|error| {
        CliError::Config(format!(
            "Failed to parse config at {}: {}",
            path.display(),
            error
        ))
    })
}
