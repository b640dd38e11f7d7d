//! Entry metadata entity
//!
//! Facts gathered about one filesystem node during the walk.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Rendering used for every timestamp in reports and logs
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kind of filesystem node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryType {
    File,
    Directory,
    Link,
    Unknown,
}

impl EntryType {
    pub fn name(&self) -> &'static str {
        match self {
            EntryType::File => "File",
            EntryType::Directory => "Directory",
            EntryType::Link => "Link",
            EntryType::Unknown => "Unknown",
        }
    }

    /// Only regular files are ever hashed
    pub fn is_hashable(&self) -> bool {
        matches!(self, EntryType::File)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Converts a filesystem time to UTC, truncated to whole seconds
pub fn to_utc_seconds(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time).trunc_subsecs(0)
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

fn serialize_timestamp<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(time))
}

/// Modified / accessed / created times, all UTC with second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacTimes {
    #[serde(serialize_with = "serialize_timestamp")]
    pub modified: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub accessed: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created: DateTime<Utc>,
}

impl MacTimes {
    pub fn new(modified: SystemTime, accessed: SystemTime, created: SystemTime) -> Self {
        Self {
            modified: to_utc_seconds(modified),
            accessed: to_utc_seconds(accessed),
            created: to_utc_seconds(created),
        }
    }
}

/// Per-entry facts
///
/// Built by the metadata extractor without a digest; the walker attaches
/// the digest (if any) with [`EntryMetadata::with_digest`] before the
/// entry is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryMetadata {
    #[serde(serialize_with = "crate::core::paths::serialize_lossy")]
    absolute_path: PathBuf,
    file_name: String,
    entry_type: EntryType,
    size_bytes: u64,
    times: MacTimes,
    digest_hex: Option<String>,
}

impl EntryMetadata {
    /// `absolute_path` always has a final component for walked entries
    /// (the root is never yielded); a bare root such as `/` names itself.
    pub fn new(absolute_path: PathBuf, entry_type: EntryType, size_bytes: u64, times: MacTimes) -> Self {
        let file_name = absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| absolute_path.to_string_lossy().into_owned());

        Self {
            absolute_path,
            file_name,
            entry_type,
            size_bytes,
            times,
            digest_hex: None,
        }
    }

    /// Attaches the content digest computed for this entry
    pub fn with_digest(mut self, digest_hex: Option<String>) -> Self {
        self.digest_hex = digest_hex;
        self
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn times(&self) -> &MacTimes {
        &self.times
    }

    pub fn modified_at(&self) -> String {
        format_timestamp(&self.times.modified)
    }

    pub fn accessed_at(&self) -> String {
        format_timestamp(&self.times.accessed)
    }

    pub fn created_at(&self) -> String {
        format_timestamp(&self.times.created)
    }

    pub fn digest_hex(&self) -> Option<&str> {
        self.digest_hex.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_timestamp_has_second_precision() {
        let time = UNIX_EPOCH + Duration::from_millis(1_650_000_000_987);
        let utc = to_utc_seconds(time);
        assert_eq!(format_timestamp(&utc), "2022-04-15 05:20:00");
        assert_eq!(utc.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_file_name_taken_from_last_component() {
        let t = UNIX_EPOCH;
        let meta = EntryMetadata::new(
            PathBuf::from("/evidence/case/a.txt"),
            EntryType::File,
            5,
            MacTimes::new(t, t, t),
        );
        assert_eq!(meta.file_name(), "a.txt");
        assert_eq!(meta.digest_hex(), None);
        assert_eq!(meta.created_at(), "1970-01-01 00:00:00");
    }

    #[cfg(unix)]
    #[test]
    fn test_bare_root_names_itself() {
        let t = UNIX_EPOCH;
        let meta = EntryMetadata::new(PathBuf::from("/"), EntryType::Directory, 0, MacTimes::new(t, t, t));
        assert_eq!(meta.file_name(), "/");
    }

    #[test]
    fn test_only_regular_files_are_hashable() {
        assert!(EntryType::File.is_hashable());
        assert!(!EntryType::Directory.is_hashable());
        assert!(!EntryType::Link.is_hashable());
        assert!(!EntryType::Unknown.is_hashable());
    }
}
