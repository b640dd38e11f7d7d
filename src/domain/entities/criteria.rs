//! Search criteria entity
//!
//! The three user-supplied targets every entry is compared against.

use serde::Serialize;
use std::fmt;

/// How the extension criterion is compared with an entry path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMode {
    /// Target may appear anywhere in the absolute path
    #[default]
    Substring,
    /// Absolute path must end with the target
    Suffix,
}

impl ExtensionMode {
    pub fn name(&self) -> &'static str {
        match self {
            ExtensionMode::Substring => "substring",
            ExtensionMode::Suffix => "suffix",
        }
    }
}

impl fmt::Display for ExtensionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable bundle of match targets for one run
///
/// Values are kept exactly as the user typed them; case folding happens
/// in the matcher, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanCriteria {
    /// Substring looked for in the absolute path
    target_path: String,
    /// Substring (or suffix) looked for in the absolute path
    target_ext: String,
    /// Expected SHA-256 digest, hex encoded
    target_hash: String,
    extension_mode: ExtensionMode,
}

impl ScanCriteria {
    /// Creates criteria using the permissive substring extension policy
    pub fn new(
        target_path: impl Into<String>,
        target_ext: impl Into<String>,
        target_hash: impl Into<String>,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            target_ext: target_ext.into(),
            target_hash: target_hash.into(),
            extension_mode: ExtensionMode::Substring,
        }
    }

    /// Switches the extension comparison policy
    pub fn with_extension_mode(mut self, mode: ExtensionMode) -> Self {
        self.extension_mode = mode;
        self
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn target_ext(&self) -> &str {
        &self.target_ext
    }

    pub fn target_hash(&self) -> &str {
        &self.target_hash
    }

    pub fn extension_mode(&self) -> ExtensionMode {
        self.extension_mode
    }

    /// True when the hash target looks like a SHA-256 hex digest.
    ///
    /// Only used to warn the user; a malformed target simply never matches.
    pub fn has_well_formed_hash(&self) -> bool {
        self.target_hash.len() == 64 && self.target_hash.chars().all(|c| c.is_ascii_hexdigit())
    }
}
