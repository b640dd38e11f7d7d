//! Error types shared by every layer

mod error;
pub mod paths;

pub use error::{AuditLogError, ScanError, SearchError, TraversalFatal};
