//! stat-based metadata extractor
//!
//! Reads size, entry type and MAC times for a path using the standard
//! library's metadata calls.

use crate::core::ScanError;
use crate::domain::entities::{EntryMetadata, EntryType, MacTimes};
use crate::domain::repositories::MetadataExtractor;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Local filesystem metadata extractor
///
/// Follows symlinks when stat'ing, so a dangling link is reported as a
/// failure rather than as an entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatMetadataExtractor;

impl StatMetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Probes regular file, then directory, then symlink
    fn classify(path: &Path, metadata: &Metadata) -> EntryType {
        if metadata.is_file() {
            EntryType::File
        } else if metadata.is_dir() {
            EntryType::Directory
        } else if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
            EntryType::Link
        } else {
            EntryType::Unknown
        }
    }
}

impl MetadataExtractor for StatMetadataExtractor {
    fn extract(&self, path: &Path) -> Result<EntryMetadata, ScanError> {
        let metadata = fs::metadata(path).map_err(|e| ScanError::metadata(path, e))?;

        let modified = metadata.modified().map_err(|e| ScanError::metadata(path, e))?;
        let accessed = metadata.accessed().map_err(|e| ScanError::metadata(path, e))?;
        let created = created_time(&metadata).map_err(|e| ScanError::metadata(path, e))?;

        Ok(EntryMetadata::new(
            path.to_path_buf(),
            Self::classify(path, &metadata),
            metadata.len(),
            MacTimes::new(modified, accessed, created),
        ))
    }
}

/// Birth time where the platform records one, inode change time otherwise
fn created_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.created().or_else(|_| change_time(metadata))
}

#[cfg(unix)]
fn change_time(metadata: &Metadata) -> io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::{Duration, UNIX_EPOCH};

    let secs = metadata.ctime();
    let nanos = metadata.ctime_nsec().clamp(0, 999_999_999) as u32;
    if secs >= 0 {
        Ok(UNIX_EPOCH + Duration::new(secs as u64, nanos))
    } else {
        Ok(UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs()))
    }
}

#[cfg(not(unix))]
fn change_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.modified()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("evidence.txt");
        fs::write(&path, b"hello").unwrap();

        let meta = StatMetadataExtractor::new().extract(&path).unwrap();
        assert_eq!(meta.entry_type(), EntryType::File);
        assert_eq!(meta.size_bytes(), 5);
        assert_eq!(meta.file_name(), "evidence.txt");
        assert_eq!(meta.modified_at().len(), 19);
        assert!(meta.digest_hex().is_none());
    }

    #[test]
    fn test_extract_directory() {
        let dir = TempDir::new().unwrap();
        let meta = StatMetadataExtractor::new().extract(dir.path()).unwrap();
        assert_eq!(meta.entry_type(), EntryType::Directory);
    }

    #[test]
    fn test_extract_missing_path_fails_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone");

        let err = StatMetadataExtractor::new().extract(&path).unwrap_err();
        assert_eq!(err.path(), path.as_path());
        assert_eq!(err.stage(), "metadata");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_fails() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("missing"), &link).unwrap();

        assert!(StatMetadataExtractor::new().extract(&link).is_err());
    }
}
