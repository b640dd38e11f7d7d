//! Result aggregation service
//!
//! Owns the matched rows and the run counters for the duration of a walk.

use crate::domain::entities::{MatchResult, RunCounters};

/// Collects matches in discovery order
#[derive(Debug, Default)]
pub struct ResultAggregator {
    rows: Vec<MatchResult>,
    counters: RunCounters,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts an entry the walker visited, matched or not
    pub fn record_processed(&mut self) {
        self.counters.record_processed();
    }

    /// Stores a matched row
    pub fn add(&mut self, result: MatchResult) {
        self.counters.record_matched();
        self.rows.push(result);
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows sorted by size, largest first. Equal sizes keep discovery order.
    pub fn finalize(self) -> Vec<MatchResult> {
        let mut rows = self.rows;
        rows.sort_by(|a, b| b.size_bytes().cmp(&a.size_bytes()));
        rows
    }
}
