//! JSON run report
//!
//! Serialises a finished search into a pretty-printed JSON document, in the
//! same spirit as a chain-of-custody sidecar.

use crate::application::dto::SearchReport;
use crate::core::paths::serialize_lossy;
use crate::core::TraversalFatal;
use crate::domain::entities::{MatchResult, RunSummary, ScanCriteria};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    #[serde(serialize_with = "serialize_lossy")]
    root: &'a Path,
    criteria: &'a ScanCriteria,
    summary: RunSummary,
    error_count: usize,
    matches: &'a [MatchResult],
    errors: Vec<JsonEntryError<'a>>,
    fatal: Option<&'a TraversalFatal>,
}

#[derive(Debug, Serialize)]
struct JsonEntryError<'a> {
    #[serde(serialize_with = "serialize_lossy")]
    path: &'a Path,
    stage: &'static str,
    message: String,
}

/// Renders the report as a JSON string
pub fn render_json_report(report: &SearchReport) -> serde_json::Result<String> {
    let document = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        root: &report.root,
        criteria: &report.criteria,
        summary: report.summary,
        error_count: report.errors.len(),
        matches: &report.matches,
        errors: report
            .errors
            .iter()
            .map(|e| JsonEntryError {
                path: e.path(),
                stage: e.stage(),
                message: e.message(),
            })
            .collect(),
        fatal: report.fatal.as_ref(),
    };

    serde_json::to_string_pretty(&document)
}

/// Writes the report to `path`, replacing any existing file
pub fn write_json_report(report: &SearchReport, path: &Path) -> anyhow::Result<()> {
    let json = render_json_report(report)?;
    fs::write(path, json)?;
    Ok(())
}
