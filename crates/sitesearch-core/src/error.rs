//! Error types for sitesearch-core

use thiserror::Error;

/// Result type alias using sitesearch-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sitesearch-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Index payload could not be retrieved or was not an index
    #[error("Index load error: {0}")]
    IndexLoad(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
