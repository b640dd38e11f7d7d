//! Run statistics

use serde::Serialize;

/// Per-run counters
///
/// Created fresh for each search and threaded through the walk; nothing
/// survives between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    pub files_processed: u64,
    pub files_matched: u64,
}

impl RunCounters {
    pub fn record_processed(&mut self) {
        self.files_processed += 1;
    }

    pub fn record_matched(&mut self) {
        self.files_matched += 1;
    }
}

/// Figures shown at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub elapsed_seconds: f64,
    pub files_processed: u64,
    pub files_matched: u64,
}
