//! Console output helpers

use super::commands::SearchInputs;
use crate::application::dto::SearchReport;
use crate::core::{ScanError, TraversalFatal};
use console::style;

pub fn print_banner() {
    println!();
    println!("{}", style("FILESYSTEM SEARCHER").cyan().bold());
    println!("{}", style("hash / extension / path matcher").dim());
    println!();
}

pub fn print_criteria(inputs: &SearchInputs) {
    println!();
    println!("Directory:  {}", inputs.root.display());
    println!("Path:       {}", inputs.target_path);
    println!("Extension:  {}", inputs.target_ext);
    println!("Hash:       {}", inputs.target_hash);
    println!();
}

pub fn print_entry_warning(err: &ScanError) {
    println!("{} {}", style("Warning:").yellow(), err);
}

pub fn print_fatal(fatal: &TraversalFatal) {
    println!();
    println!("{} {}", style("Scan aborted:").red().bold(), fatal.message);
    if let Some(path) = &fatal.last_path {
        println!("Last path:  {}", path.display());
    }
    println!();
}

pub fn print_summary(report: &SearchReport) {
    println!();
    println!("Search Time: {} seconds", report.summary.elapsed_seconds);
    println!("Files Processed: {}", report.summary.files_processed);
    println!("Files Matched: {}", style(report.summary.files_matched).green());
    if report.has_errors() {
        println!("Errors: {}", style(report.errors.len()).yellow());
    }
}
