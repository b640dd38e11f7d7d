use anyhow::{bail, Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use fsearch::application::{SearchFilesystemUseCase, AUDIT_TARGET};
use fsearch::domain::services::RunReport;
use fsearch::infrastructure::persistence::{init_logging, write_json_report};
use fsearch::infrastructure::system::SystemProfile;
use fsearch::presentation::cli::{
    output, prompt_search_inputs, table, Cli, ProgressReporter, SearchInputs,
};

const ABORTED_EXIT_CODE: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let run_start = Instant::now();

    init_logging(&cli.logging_config()).context("Failed to set up logging")?;

    tracing::info!(target: AUDIT_TARGET, pid = std::process::id(), "{}", "=".repeat(39));
    tracing::info!(target: AUDIT_TARGET, "Script Started: fsearch {}", env!("CARGO_PKG_VERSION"));
    log_system_profile(&SystemProfile::probe());

    if !cli.no_banner {
        output::print_banner();
    }

    let inputs = resolve_inputs(&cli)?;
    tracing::info!(
        target: AUDIT_TARGET,
        directory = %inputs.root.display(),
        path = %inputs.target_path,
        extension = %inputs.target_ext,
        hash = %inputs.target_hash,
        "User specified search criteria"
    );
    output::print_criteria(&inputs);

    let options = cli.search_options(&inputs);
    if !options.criteria.target_hash().is_empty() && !options.criteria.has_well_formed_hash() {
        println!("Note: hash target is not a 64-character hex digest and will never match\n");
    }

    let use_case = SearchFilesystemUseCase::local(&options);
    let progress = ProgressReporter::for_search();
    let report = use_case.execute(&options, Some(progress.search_callback()));
    progress.finish();
    let report = report?;

    if let Some(fatal) = &report.fatal {
        output::print_fatal(fatal);
    }

    println!("{}", table::render_matches(&report.matches));
    output::print_summary(&report);

    if let Some(json_path) = &cli.json {
        write_json_report(&report, json_path)
            .with_context(|| format!("Failed to write JSON report to {}", json_path.display()))?;
        println!("Report written to {}", json_path.display());
    }

    let ran_from = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    tracing::info!(
        target: AUDIT_TARGET,
        ran_from = %ran_from,
        run_time = %RunReport::format_run_time(run_start.elapsed()),
        search_seconds = report.summary.elapsed_seconds,
        files_processed = report.summary.files_processed,
        files_matched = report.summary.files_matched,
        errors = report.errors.len(),
        "Script Information"
    );

    match report.ensure_complete() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(target: AUDIT_TARGET, error = %e, "Run ended early");
            Ok(ExitCode::from(ABORTED_EXIT_CODE))
        }
    }
}

/// Flags when a root was given, interactive prompts otherwise
fn resolve_inputs(cli: &Cli) -> Result<SearchInputs> {
    let Some(inputs) = cli.inputs_from_args() else {
        return prompt_search_inputs();
    };

    if !inputs.root.is_dir() {
        tracing::warn!(
            target: AUDIT_TARGET,
            directory = %inputs.root.display(),
            "User specified invalid directory"
        );
        bail!("Not a directory: {}", inputs.root.display());
    }

    Ok(inputs)
}

fn log_system_profile(profile: &SystemProfile) {
    tracing::info!(target: AUDIT_TARGET, "********* System Information *********");
    for (key, value) in profile.entries() {
        tracing::info!(target: AUDIT_TARGET, "{key}: {value}");
    }
}
