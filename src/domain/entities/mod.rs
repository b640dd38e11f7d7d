//! Domain entities
//!
//! Core values flowing through a filesystem search: what to look for,
//! what was found about each entry, and how the run went.

mod criteria;
mod entry;
mod match_result;
mod run;

pub use criteria::{ExtensionMode, ScanCriteria};
pub use entry::{
    format_timestamp, to_utc_seconds, EntryMetadata, EntryType, MacTimes, TIMESTAMP_FORMAT,
};
pub use match_result::{MatchResult, MatchVerdict};
pub use run::{RunCounters, RunSummary};
