//! Data Transfer Objects

mod search_options;
mod search_report;

pub use search_options::{SearchOptions, DEFAULT_HASH_BUFFER_SIZE};
pub use search_report::SearchReport;
