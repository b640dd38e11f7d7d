//! Repository traits (interfaces)
//!
//! Contracts for the filesystem-facing collaborators of a search.
//! Infrastructure provides the concrete implementations.

mod content_hasher;
mod metadata_extractor;
mod traversal;

pub use content_hasher::ContentHasher;
pub use metadata_extractor::MetadataExtractor;
pub use traversal::{DirectoryTraversal, TraversalFault};
