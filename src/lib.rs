//! fsearch - forensic filesystem search
//!
//! Walks a directory tree and matches every entry against a SHA-256
//! digest, an extension and a path fragment, keeping an audit trail of
//! the run.

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{SearchOptions, SearchReport};
pub use application::{SearchEvent, SearchFilesystemUseCase, AUDIT_TARGET};
pub use crate::core::{ScanError, SearchError, TraversalFatal};
pub use domain::entities::{
    EntryMetadata, EntryType, ExtensionMode, MatchResult, MatchVerdict, RunCounters, RunSummary,
    ScanCriteria,
};
