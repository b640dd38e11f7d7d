//! Persistence adapters: the audit log sink and the JSON report file

mod audit_log;
mod json_report;

pub use audit_log::{
    console_directives, init_logging, LoggingConfig, DEFAULT_AUDIT_LOG, LOG_ENV_VAR,
};
pub use json_report::{render_json_report, write_json_report};
