//! Search report DTO

use crate::core::{ScanError, SearchError, TraversalFatal};
use crate::domain::entities::{MatchResult, RunCounters, RunSummary, ScanCriteria};
use std::path::PathBuf;

/// Everything a finished (or aborted) run produced
#[derive(Debug)]
pub struct SearchReport {
    /// Absolute root the walk started from
    pub root: PathBuf,
    pub criteria: ScanCriteria,
    /// Matches, largest first
    pub matches: Vec<MatchResult>,
    /// Per-entry failures in the order they happened
    pub errors: Vec<ScanError>,
    pub counters: RunCounters,
    pub summary: RunSummary,
    /// Set when the traversal itself failed; results above are partial
    pub fatal: Option<TraversalFatal>,
}

impl SearchReport {
    /// Returns whether the walk reached its natural end
    pub fn is_complete(&self) -> bool {
        self.fatal.is_none()
    }

    /// Converts an aborted run into an error, leaving the report intact
    pub fn ensure_complete(&self) -> Result<(), SearchError> {
        match &self.fatal {
            Some(fatal) => Err(SearchError::Aborted(fatal.clone())),
            None => Ok(()),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
