//! Audit log sink
//!
//! Installs the global `tracing` subscriber: a console layer on stderr and
//! an append-only plain-text file layer that keeps the full audit trail.

use crate::core::AuditLogError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding console filter directives
pub const LOG_ENV_VAR: &str = "FSEARCH_LOG";

/// Default audit log file name
pub const DEFAULT_AUDIT_LOG: &str = "ScriptLog.txt";

/// How logging is wired for one process
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Audit log file; `None` disables the file sink
    pub audit_file: Option<PathBuf>,
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Silence the console layer entirely
    pub quiet: bool,
}

/// Console directives for a verbosity level.
///
/// Audit events stay out of the console below `-vv`; the CLI prints its
/// own human-readable version of them.
pub fn console_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,fsearch::audit=off",
        1 => "info,fsearch::audit=off",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Can only succeed once per process.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AuditLogError> {
    let console_filter = if config.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(console_directives(config.verbosity)))
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let file_layer = match &config.audit_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| AuditLogError::Open {
                    path: path.clone(),
                    source,
                })?;

            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AuditLogError::Subscriber(e.to_string()))
}
