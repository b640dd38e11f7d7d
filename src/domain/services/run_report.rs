//! Run report service

use crate::domain::entities::{RunCounters, RunSummary};
use std::time::Duration;

/// Builds the end-of-run figures. No I/O.
pub struct RunReport;

impl RunReport {
    pub fn summarize(counters: RunCounters, elapsed: Duration) -> RunSummary {
        RunSummary {
            elapsed_seconds: elapsed.as_secs_f64(),
            files_processed: counters.files_processed,
            files_matched: counters.files_matched,
        }
    }

    /// Whole-second `H:MM:SS` rendering of a run time
    pub fn format_run_time(elapsed: Duration) -> String {
        let secs = elapsed.as_secs();
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}
