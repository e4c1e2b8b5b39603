//! High-level prompt functions for common use cases.
//!
//! Each helper builds one of the prompt components with default settings
//! and runs it on the real terminal.

use super::components::{Choice, MultiSelect, SingleSelect, TextInput, ValidationResult};
use crate::error::PromptResult;

/// Asks for a line of text.
///
/// # Arguments
///
/// * `label` - The prompt label
/// * `validator` - Optional validation function, checked live and on Enter
///
/// # Example
///
/// ```ignore
/// let name = text_prompt(
///     "Enter your name: ",
///     Some(|s: &str| {
///         if s.is_empty() {
///             ValidationResult::Invalid("Name cannot be empty".into())
///         } else {
///             ValidationResult::Valid
///         }
///     }),
/// )?;
/// ```
pub fn text_prompt<V>(label: &str, validator: Option<V>) -> PromptResult<String>
where
    V: Fn(&str) -> ValidationResult,
{
    let prompt = TextInput::new().with_label(label);
    match validator {
        Some(v) => prompt.with_validator(v).prompt(),
        None => prompt.prompt(),
    }
}

/// Asks the user to pick one of `options`.
///
/// # Returns
///
/// - `Ok(index)` - Index of the selected option
/// - `Err(PromptError::Interrupted)` - User pressed Ctrl+C
///
/// # Example
///
/// ```ignore
/// let choice = select_prompt("Select an option", &["Option 1", "Option 2", "Option 3"])?;
/// ```
pub fn select_prompt(label: &str, options: &[&str]) -> PromptResult<usize> {
    let choices = options
        .iter()
        .enumerate()
        .map(|(idx, option)| Choice::new(idx, *option))
        .collect();

    // A required single select always confirms with a choice
    let picked = SingleSelect::new(choices).with_label(label).prompt()?;
    Ok(picked.map_or(0, |choice| choice.value))
}

/// Asks the user to toggle any number of `choices`.
///
/// Returns the selected values in the order they were selected. With
/// `optional`, confirming with nothing selected is allowed.
pub fn multiselect_prompt<T>(
    label: &str,
    choices: Vec<Choice<T>>,
    optional: bool,
) -> PromptResult<Vec<T>>
where
    T: Clone + PartialEq,
{
    let mut prompt = MultiSelect::new(choices).with_label(label);
    if optional {
        prompt = prompt.optional();
    }
    Ok(prompt
        .prompt()?
        .into_iter()
        .map(|choice| choice.value)
        .collect())
}

/// Asks a yes/no question.
pub fn confirm_prompt(label: &str, default_yes: bool) -> PromptResult<bool> {
    let picked = SingleSelect::new(vec![Choice::new(true, "Yes"), Choice::new(false, "No")])
        .with_label(label)
        .with_default_choice(if default_yes { 0 } else { 1 })
        .prompt()?;
    Ok(picked.is_some_and(|choice| choice.value))
}
