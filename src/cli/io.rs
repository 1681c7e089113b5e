use std::fmt;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::output;
use crate::errors::CliError;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for free-form text input. Empty input is allowed; the
/// wizard decides whether a blank value is acceptable for the active step.
pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: Option<&str>,
) -> Result<String, CliError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(text) = initial {
        if !text.is_empty() {
            input = input.with_initial_text(text.to_string());
        }
    }
    input.interact_text().map_err(CliError::from)
}

/// Prompt the user to pick one of `items`; returns the selected index.
pub fn select_option(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[&str],
) -> Result<usize, CliError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CliError::from)
}
