//! CLI module

mod commands;
pub mod output;
mod progress;
mod prompts;
pub mod table;

pub use commands::{Cli, SearchInputs};
pub use progress::ProgressReporter;
pub use prompts::prompt_search_inputs;
