//! Match result entity
//!
//! An entry paired with its three verdicts. Only entries with at least one
//! positive verdict ever become a `MatchResult`.

use super::entry::EntryMetadata;
use serde::Serialize;

/// Independent outcome of each criterion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MatchVerdict {
    pub hash_match: bool,
    pub ext_match: bool,
    pub path_match: bool,
}

impl MatchVerdict {
    pub fn new(hash_match: bool, ext_match: bool, path_match: bool) -> Self {
        Self {
            hash_match,
            ext_match,
            path_match,
        }
    }

    /// Retention rule: any single criterion is enough
    pub fn any(&self) -> bool {
        self.hash_match || self.ext_match || self.path_match
    }
}

/// A retained row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    metadata: EntryMetadata,
    #[serde(flatten)]
    verdict: MatchVerdict,
}

impl MatchResult {
    pub fn new(metadata: EntryMetadata, verdict: MatchVerdict) -> Self {
        Self { metadata, verdict }
    }

    pub fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    pub fn verdict(&self) -> MatchVerdict {
        self.verdict
    }

    pub fn size_bytes(&self) -> u64 {
        self.metadata.size_bytes()
    }
}
