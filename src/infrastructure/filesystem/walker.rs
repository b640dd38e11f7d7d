//! walkdir-backed traversal
//!
//! Depth-first, pre-order enumeration in the order the OS returns
//! directory entries. No global sort is applied.

use crate::domain::repositories::{DirectoryTraversal, TraversalFault};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive directory enumeration over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkdirTraversal {
    follow_links: bool,
}

impl WalkdirTraversal {
    pub fn new(follow_links: bool) -> Self {
        Self { follow_links }
    }
}

impl DirectoryTraversal for WalkdirTraversal {
    fn entries<'a>(
        &'a self,
        root: &'a Path,
    ) -> Box<dyn Iterator<Item = Result<PathBuf, TraversalFault>> + 'a> {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_links)
            .into_iter()
            .map(|item| item.map(walkdir::DirEntry::into_path).map_err(fault_from));

        Box::new(walker)
    }
}

fn fault_from(err: walkdir::Error) -> TraversalFault {
    let message = match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    };

    TraversalFault {
        path: err.path().map(Path::to_path_buf),
        depth: err.depth(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_root_excluded_and_directories_before_children() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("inner.txt"), b"x").unwrap();

        let traversal = WalkdirTraversal::new(false);
        let paths: Vec<PathBuf> = traversal
            .entries(dir.path())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            paths,
            vec![dir.path().join("sub"), dir.path().join("sub").join("inner.txt")]
        );
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("vanished");

        let traversal = WalkdirTraversal::new(false);
        let first = traversal.entries(&root).next().unwrap();
        let fault = first.unwrap_err();

        assert!(fault.is_fatal());
        assert_eq!(fault.path.as_deref(), Some(root.as_path()));
    }
}
