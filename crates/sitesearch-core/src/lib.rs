//! sitesearch-core - Core library for sitesearch
//!
//! This crate contains the index model, index loading, query scoring and
//! ranking, and the results panel state used by every sitesearch front-end.

pub mod config;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod loader;
pub mod models;
pub mod panel;
pub mod render;
pub mod search;
pub mod session;
pub mod util;

pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use models::{IndexEntry, ResultCandidate, ResultKind, SearchIndex, Section};
pub use session::SearchSession;
