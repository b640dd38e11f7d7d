//! Local filesystem adapters

mod metadata_extractor;
mod walker;

pub use metadata_extractor::StatMetadataExtractor;
pub use walker::WalkdirTraversal;
