//! Metadata extractor trait
//!
//! Defines how per-entry facts (type, size, MAC times) are read.

use crate::core::ScanError;
use crate::domain::entities::EntryMetadata;
use std::path::Path;

/// Reads stat-level facts for a single path
///
/// # Example
///
/// ```ignore
/// let extractor = StatMetadataExtractor::new();
/// let meta = extractor.extract(Path::new("/var/log/syslog"))?;
/// println!("{} bytes, modified {}", meta.size_bytes(), meta.modified_at());
/// ```
pub trait MetadataExtractor: Send + Sync {
    /// Returns the entry's metadata without a digest.
    ///
    /// Fails with [`ScanError::Metadata`] when the path vanished, is
    /// inaccessible, or is a dangling link.
    fn extract(&self, path: &Path) -> Result<EntryMetadata, ScanError>;
}
