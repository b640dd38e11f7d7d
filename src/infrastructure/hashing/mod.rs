//! Content digest adapters

mod sha256_hasher;

pub use sha256_hasher::Sha256Hasher;
