//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories plus the
//! process-level sinks (audit log, JSON report) and host probing.

pub mod filesystem;
pub mod hashing;
pub mod persistence;
pub mod system;
