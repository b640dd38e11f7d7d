//! CLI commands using clap

use crate::application::dto::{SearchOptions, DEFAULT_HASH_BUFFER_SIZE};
use crate::domain::entities::{ExtensionMode, ScanCriteria};
use crate::infrastructure::persistence::{LoggingConfig, DEFAULT_AUDIT_LOG};
use clap::Parser;
use std::path::PathBuf;

/// fsearch - Filesystem Searcher
///
/// Walks a directory tree and reports every entry whose content hash,
/// extension or path matches the given targets.
#[derive(Parser, Debug)]
#[command(name = "fsearch")]
#[command(version, about = "Search a directory tree by hash, extension and path", long_about = None)]
pub struct Cli {
    /// Directory to search. Without it every input is prompted for
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Path substring to match
    #[arg(short, long)]
    pub path: Option<String>,

    /// Extension to match (substring of the path unless --strict-ext)
    #[arg(short, long)]
    pub ext: Option<String>,

    /// SHA-256 digest to match, hex encoded
    #[arg(short = 'H', long)]
    pub hash: Option<String>,

    /// Only match paths that end with the extension
    #[arg(long)]
    pub strict_ext: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Bytes read per chunk while hashing
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_HASH_BUFFER_SIZE)]
    pub hash_buffer: usize,

    /// Audit log file
    #[arg(long, env = "FSEARCH_LOG_FILE", default_value = DEFAULT_AUDIT_LOG)]
    pub log_file: PathBuf,

    /// Do not write the audit log file
    #[arg(long)]
    pub no_audit_log: bool,

    /// Also write the full report as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Increase console verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress console diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

/// The four values a search needs from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInputs {
    pub root: PathBuf,
    pub target_path: String,
    pub target_ext: String,
    pub target_hash: String,
}

impl Cli {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            audit_file: (!self.no_audit_log).then(|| self.log_file.clone()),
            verbosity: self.verbose,
            quiet: self.quiet,
        }
    }

    /// Inputs taken from flags; missing criteria become empty strings
    pub fn inputs_from_args(&self) -> Option<SearchInputs> {
        let root = self.root.clone()?;
        Some(SearchInputs {
            root,
            target_path: self.path.clone().unwrap_or_default(),
            target_ext: self.ext.clone().unwrap_or_default(),
            target_hash: self.hash.clone().unwrap_or_default(),
        })
    }

    pub fn extension_mode(&self) -> ExtensionMode {
        if self.strict_ext {
            ExtensionMode::Suffix
        } else {
            ExtensionMode::Substring
        }
    }

    /// Builds the search options for the resolved inputs
    pub fn search_options(&self, inputs: &SearchInputs) -> SearchOptions {
        let criteria = ScanCriteria::new(
            inputs.target_path.clone(),
            inputs.target_ext.clone(),
            inputs.target_hash.clone(),
        );

        let options = SearchOptions::new(&inputs.root)
            .with_criteria(criteria)
            .with_extension_mode(self.extension_mode())
            .with_hash_buffer_size(self.hash_buffer);
        if self.follow_links {
            options.following_links()
        } else {
            options
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_become_inputs() {
        let cli = Cli::parse_from(["fsearch", "-r", "/evidence", "-e", ".txt", "--strict-ext"]);
        let inputs = cli.inputs_from_args().unwrap();

        assert_eq!(inputs.root, PathBuf::from("/evidence"));
        assert_eq!(inputs.target_ext, ".txt");
        assert_eq!(inputs.target_path, "");
        assert_eq!(inputs.target_hash, "");

        let options = cli.search_options(&inputs);
        assert_eq!(options.criteria.extension_mode(), ExtensionMode::Suffix);
        assert!(!options.follow_links);
    }

    #[test]
    fn test_hash_buffer_flag() {
        let cli = Cli::parse_from(["fsearch", "-r", "/evidence"]);
        let inputs = cli.inputs_from_args().unwrap();
        assert_eq!(cli.search_options(&inputs).hash_buffer_size, DEFAULT_HASH_BUFFER_SIZE);

        let cli = Cli::parse_from(["fsearch", "-r", "/evidence", "--hash-buffer", "4096"]);
        let inputs = cli.inputs_from_args().unwrap();
        assert_eq!(cli.search_options(&inputs).hash_buffer_size, 4096);

        let cli = Cli::parse_from(["fsearch", "-r", "/evidence", "--hash-buffer", "0"]);
        let inputs = cli.inputs_from_args().unwrap();
        assert_eq!(cli.search_options(&inputs).hash_buffer_size, 1);
    }

    #[test]
    fn test_no_root_means_interactive() {
        let cli = Cli::parse_from(["fsearch", "--ext", ".log"]);
        assert!(cli.inputs_from_args().is_none());
    }

    #[test]
    fn test_audit_log_can_be_disabled() {
        let cli = Cli::parse_from(["fsearch", "--no-audit-log", "-vv"]);
        let config = cli.logging_config();
        assert!(config.audit_file.is_none());
        assert_eq!(config.verbosity, 2);
    }
}
