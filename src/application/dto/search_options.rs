//! Search options DTO

use crate::domain::entities::{ExtensionMode, ScanCriteria};
use std::path::{Path, PathBuf};

/// Default read size for streaming digests
pub const DEFAULT_HASH_BUFFER_SIZE: usize = 64 * 1024;

/// Options for one filesystem search
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Directory the walk starts from (must already exist)
    pub root: PathBuf,
    /// What to look for
    pub criteria: ScanCriteria,
    /// Bytes read per chunk while hashing
    pub hash_buffer_size: usize,
    /// Whether the walk descends through symlinked directories
    pub follow_links: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            criteria: ScanCriteria::default(),
            hash_buffer_size: DEFAULT_HASH_BUFFER_SIZE,
            follow_links: false,
        }
    }
}

impl SearchOptions {
    /// Creates options for the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Sets the match criteria
    pub fn with_criteria(mut self, criteria: ScanCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Switches the extension policy on the current criteria
    pub fn with_extension_mode(mut self, mode: ExtensionMode) -> Self {
        self.criteria = self.criteria.with_extension_mode(mode);
        self
    }

    /// Sets the hashing chunk size (clamped to at least 1 byte)
    pub fn with_hash_buffer_size(mut self, size: usize) -> Self {
        self.hash_buffer_size = size.max(1);
        self
    }

    /// Follow symlinked directories during the walk
    pub fn following_links(mut self) -> Self {
        self.follow_links = true;
        self
    }
}
