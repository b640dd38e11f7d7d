//! Streaming SHA-256 hasher

use crate::application::dto::DEFAULT_HASH_BUFFER_SIZE;
use crate::core::ScanError;
use crate::domain::repositories::ContentHasher;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// SHA-256 over fixed-size reads
///
/// Memory use is bounded by the buffer size regardless of file size. The
/// file handle is dropped before `hash` returns.
#[derive(Debug, Clone)]
pub struct Sha256Hasher {
    buffer_size: usize,
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256Hasher {
    pub fn new() -> Self {
        Self::with_buffer_size(DEFAULT_HASH_BUFFER_SIZE)
    }

    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Digests everything `reader` yields, as lowercase hex
    pub fn digest_reader<R: Read>(&self, mut reader: R) -> io::Result<String> {
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buffer[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(hex::encode(hasher.finalize()))
    }
}

impl ContentHasher for Sha256Hasher {
    fn hash(&self, path: &Path) -> Result<String, ScanError> {
        let file = File::open(path).map_err(|e| ScanError::hash(path, e))?;
        self.digest_reader(file).map_err(|e| ScanError::hash(path, e))
    }

    fn algorithm(&self) -> &'static str {
        "SHA-256"
    }
}
