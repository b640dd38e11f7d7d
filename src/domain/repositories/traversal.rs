//! Directory traversal trait
//!
//! Abstracts the recursive enumeration primitive so the walker can be
//! driven by anything that yields paths in depth-first pre-order.

use std::path::{Path, PathBuf};

/// An error reported by the traversal primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalFault {
    /// Path the primitive was working on, if it knows
    pub path: Option<PathBuf>,
    /// Depth relative to the root (0 = the root itself)
    pub depth: usize,
    pub message: String,
}

impl TraversalFault {
    /// A fault on the root means nothing further can be enumerated
    pub fn is_fatal(&self) -> bool {
        self.depth == 0
    }
}

/// Lazily enumerates every entry below a root directory
pub trait DirectoryTraversal: Send + Sync {
    /// Yields absolute entry paths, root excluded.
    ///
    /// Faults below the root are yielded in-line and enumeration continues
    /// afterwards; a fatal fault is the last item worth consuming.
    fn entries<'a>(
        &'a self,
        root: &'a Path,
    ) -> Box<dyn Iterator<Item = Result<PathBuf, TraversalFault>> + 'a>;
}
