//! Interactive prompts
//!
//! Input resolution talks to a [`Prompt`] so it can be driven by scripted
//! answers in tests. [`TerminalPrompt`] is the `dialoguer` backed one.

use dialoguer::{Input, Select};
use pdl_core::error::CliError;

pub trait Prompt {
    /// Single choice list. Returns the selected index.
    fn select(&self, message: &str, items: &[&str]) -> Result<usize, CliError>;

    /// Free text; an empty answer is allowed.
    fn input(&self, message: &str) -> Result<String, CliError>;
}

pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn select(&self, message: &str, items: &[&str]) -> Result<usize, CliError> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| CliError::Prompt(e.to_string()))
    }

    fn input(&self, message: &str) -> Result<String, CliError> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(|e| CliError::Prompt(e.to_string()))
    }
}
