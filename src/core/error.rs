use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure confined to a single entry of the walk.
///
/// These never stop the traversal: the walker records them and moves on
/// to the next entry.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read metadata of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot hash {}: {source}", .path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot list {}: {message}", .path.display())]
    Traversal { path: PathBuf, message: String },
}

impl ScanError {
    pub fn metadata(path: &Path, source: io::Error) -> Self {
        Self::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn hash(path: &Path, source: io::Error) -> Self {
        Self::Hash {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the entry that failed
    pub fn path(&self) -> &Path {
        match self {
            Self::Metadata { path, .. } | Self::Hash { path, .. } | Self::Traversal { path, .. } => {
                path
            }
        }
    }

    /// Pipeline stage that produced the failure
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Metadata { .. } => "metadata",
            Self::Hash { .. } => "hash",
            Self::Traversal { .. } => "traversal",
        }
    }

    /// Underlying cause without the path prefix
    pub fn message(&self) -> String {
        match self {
            Self::Metadata { source, .. } | Self::Hash { source, .. } => source.to_string(),
            Self::Traversal { message, .. } => message.clone(),
        }
    }
}

/// The traversal primitive itself gave up; the run stops here.
///
/// `last_path` is the last entry the walker attempted before the fault,
/// captured at the time of failure. When nothing was attempted yet it holds
/// the path the traversal reported with the fault, if any.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Traversal aborted: {message}")]
pub struct TraversalFatal {
    #[serde(serialize_with = "crate::core::paths::serialize_lossy_opt")]
    pub last_path: Option<PathBuf>,
    pub message: String,
}

/// Run-level errors
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid root directory {}: {reason}", .path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    #[error(transparent)]
    Aborted(#[from] TraversalFatal),
}

/// Errors raised while installing the audit log sink
#[derive(Error, Debug)]
pub enum AuditLogError {
    #[error("Cannot open audit log {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot install log subscriber: {0}")]
    Subscriber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_carries_path_and_cause() {
        let err = ScanError::hash(
            Path::new("/tmp/secret.bin"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.path(), Path::new("/tmp/secret.bin"));
        assert_eq!(err.stage(), "hash");
        assert_eq!(err.message(), "denied");
        assert!(err.to_string().contains("/tmp/secret.bin"));
    }

    #[cfg(unix)]
    #[test]
    fn test_fatal_snapshot_serializes_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let fatal = TraversalFatal {
            last_path: Some(PathBuf::from(OsStr::from_bytes(b"/case/\xff.bin"))),
            message: "device removed".to_string(),
        };
        let json = serde_json::to_value(&fatal).unwrap();
        assert_eq!(json["last_path"], "/case/\u{FFFD}.bin");

        let empty = TraversalFatal {
            last_path: None,
            message: String::new(),
        };
        assert!(serde_json::to_value(&empty).unwrap()["last_path"].is_null());
    }

    #[test]
    fn test_fatal_converts_into_search_error() {
        let fatal = TraversalFatal {
            last_path: None,
            message: "root vanished".to_string(),
        };
        let err: SearchError = fatal.into();
        assert_eq!(err.to_string(), "Traversal aborted: root vanished");
    }
}
