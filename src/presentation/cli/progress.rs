//! Progress reporting for CLI

use super::output;
use crate::application::{SearchCallback, SearchEvent};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Spinner shown while the walk runs; the total is never known up front
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a spinner with the given message
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} entries {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar: Arc::new(bar) }
    }

    /// Creates a spinner for a filesystem search
    pub fn for_search() -> Self {
        Self::new("Searching...")
    }

    /// Callback that keeps the spinner current and prints entry warnings
    /// above it
    pub fn search_callback(&self) -> SearchCallback {
        let bar = Arc::clone(&self.bar);
        Box::new(move |event: &SearchEvent<'_>| match event {
            SearchEvent::Visited { path, processed } => {
                bar.set_position(*processed);
                bar.set_message(path.display().to_string());
            }
            SearchEvent::Matched(_) => {}
            SearchEvent::EntryFailed(err) => bar.suspend(|| output::print_entry_warning(err)),
        })
    }

    /// Removes the spinner before the report is printed
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
