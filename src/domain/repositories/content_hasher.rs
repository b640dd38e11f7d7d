//! Content hasher trait

use crate::core::ScanError;
use std::path::Path;

/// Computes a whole-file digest
///
/// Callers only invoke this for regular files and treat every error as a
/// per-entry failure.
pub trait ContentHasher: Send + Sync {
    /// Returns the lowercase hex digest of the file's content
    fn hash(&self, path: &Path) -> Result<String, ScanError>;

    /// Name of the digest algorithm, for logs
    fn algorithm(&self) -> &'static str;
}
