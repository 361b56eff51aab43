pub mod common;
pub mod completions;
pub mod interactive;
pub mod search;
pub mod stats;
