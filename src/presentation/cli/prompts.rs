//! Interactive input collection

use super::commands::SearchInputs;
use crate::application::AUDIT_TARGET;
use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

/// Asks for the root directory until a valid one is given, then for the
/// three match targets. Empty targets are accepted.
pub fn prompt_search_inputs() -> Result<SearchInputs> {
    let theme = ColorfulTheme::default();

    let root = loop {
        let dir: String = Input::with_theme(&theme)
            .with_prompt("Enter a Directory")
            .interact_text()
            .context("Failed to read directory")?;

        let candidate = PathBuf::from(&dir);
        if candidate.is_dir() {
            break candidate;
        }

        tracing::warn!(target: AUDIT_TARGET, directory = %dir, "User specified invalid directory");
        println!();
        println!(
            "{}",
            style("Warning: INVALID DIRECTORY - Enter a Valid Directory to Begin Search").yellow()
        );
        println!();
    };

    let target_path = prompt_optional(&theme, "Enter a Filename to Match")?;
    let target_ext = prompt_optional(&theme, "Enter an Extension to Match")?;
    let target_hash = prompt_optional(&theme, "Enter a Hash to Match")?;

    Ok(SearchInputs {
        root,
        target_path,
        target_ext,
        target_hash,
    })
}

fn prompt_optional(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read '{prompt}'"))
}
