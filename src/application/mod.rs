//! Application layer
//!
//! The search use case and the DTOs it consumes and produces.

pub mod dto;
mod search_filesystem;

pub use search_filesystem::{SearchCallback, SearchEvent, SearchFilesystemUseCase};

/// Tracing target of every audit-trail event
pub const AUDIT_TARGET: &str = "fsearch::audit";
