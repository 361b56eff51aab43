//! Data models for sitesearch

mod candidate;
mod entry;
mod index;
mod lenient;

pub use candidate::{ResultCandidate, ResultKind};
pub use entry::{IndexEntry, Section};
pub use index::SearchIndex;
