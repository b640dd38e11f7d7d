//! Domain layer - Core search logic
//!
//! Entities, repository traits and the pure services that decide what a
//! match is. Nothing here performs I/O.

pub mod entities;
pub mod repositories;
pub mod services;
