//! Match evaluation service
//!
//! Compares one entry against the three criteria. Pure: no I/O, no state
//! beyond the case-folded targets.

use crate::domain::entities::{ExtensionMode, MatchVerdict, ScanCriteria};

/// Case-insensitive matcher built once per run
#[derive(Debug, Clone)]
pub struct MatchEvaluator {
    target_path: String,
    target_ext: String,
    target_hash: String,
    extension_mode: ExtensionMode,
}

impl MatchEvaluator {
    pub fn new(criteria: &ScanCriteria) -> Self {
        Self {
            target_path: criteria.target_path().to_lowercase(),
            target_ext: criteria.target_ext().to_lowercase(),
            target_hash: criteria.target_hash().to_lowercase(),
            extension_mode: criteria.extension_mode(),
        }
    }

    /// Computes the three independent verdicts.
    ///
    /// An empty path or extension target matches every path. An absent
    /// digest never matches the hash target.
    pub fn evaluate(&self, digest_hex: Option<&str>, absolute_path: &str) -> MatchVerdict {
        let path = absolute_path.to_lowercase();

        let hash_match = digest_hex.is_some_and(|d| d.to_lowercase() == self.target_hash);

        let ext_match = match self.extension_mode {
            ExtensionMode::Substring => path.contains(&self.target_ext),
            ExtensionMode::Suffix => path.ends_with(&self.target_ext),
        };

        let path_match = path.contains(&self.target_path);

        MatchVerdict::new(hash_match, ext_match, path_match)
    }
}

/// One-shot form of [`MatchEvaluator::evaluate`]
pub fn evaluate(criteria: &ScanCriteria, digest_hex: Option<&str>, absolute_path: &str) -> MatchVerdict {
    MatchEvaluator::new(criteria).evaluate(digest_hex, absolute_path)
}
