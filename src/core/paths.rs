//! Path helpers shared by every layer

use serde::Serializer;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute and folds `.` and `..` away without touching the
/// filesystem. Symlinks are not resolved, so `link/..` collapses to the
/// directory holding `link`.
pub fn absolute_normalized(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            // `pop` is a no-op at the root, so `/..` stays `/`
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}

/// Serialises a path as text, replacing bytes that are not valid UTF-8
pub fn serialize_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

/// [`serialize_lossy`] for optional paths
pub fn serialize_lossy_opt<S: Serializer>(
    path: &Option<PathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match path {
        Some(path) => serialize_lossy(path, serializer),
        None => serializer.serialize_none(),
    }
}
