//! Multiple selection prompt.

use super::{SelectConfig, engine::Rule, run_session, select_builder_methods};
use crate::{
    error::PromptResult,
    tui::{
        components::Choice,
        keys::{CrosstermKeys, KeySource},
        surface::{Surface, TerminalSurface},
    },
};

const DEFAULT_PAGE_SIZE: usize = 7;

/// A searchable list from which several choices are toggled.
///
/// Unless the prompt is [`optional`](Self::optional), at least one choice
/// must be selected. Without a maximum, every choice may be selected.
#[derive(Debug, Clone)]
pub struct MultiSelect<T> {
    config: SelectConfig<T>,
    default_choices: Vec<usize>,
    optional: bool,
    min_selected: Option<usize>,
    max_selected: Option<usize>,
}

impl<T: Clone + PartialEq> MultiSelect<T> {
    /// Creates a new prompt over `choices`.
    #[must_use]
    pub fn new(choices: Vec<Choice<T>>) -> Self {
        Self {
            config: SelectConfig::new(choices, DEFAULT_PAGE_SIZE),
            default_choices: Vec::new(),
            optional: false,
            min_selected: None,
            max_selected: None,
        }
    }

    select_builder_methods!();

    /// Preselects the choices at `indices`, in order. Out-of-range, disabled
    /// and duplicate entries are skipped, as is anything past the maximum.
    #[must_use]
    pub fn with_default_choices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.default_choices = indices.into_iter().collect();
        self
    }

    /// Allows confirming with nothing selected when no minimum is set.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the minimum number of selections. Zero means one, unless the
    /// prompt is optional.
    #[must_use]
    pub fn with_min_selected_count(mut self, min: usize) -> Self {
        self.min_selected = Some(min);
        self
    }

    /// Sets the maximum number of selections. Zero means no limit.
    #[must_use]
    pub fn with_max_selected_count(mut self, max: usize) -> Self {
        self.max_selected = Some(max);
        self
    }

    fn rule(&self) -> Rule {
        // A required prompt always needs at least one selection
        let min = match self.min_selected.unwrap_or(0) {
            0 if !self.optional => 1,
            min => min,
        };
        let max = match self.max_selected {
            Some(max) if max > 0 => max,
            _ => self.config.choices.len(),
        };
        Rule::Multi { min, max }
    }

    /// Runs the prompt on the real terminal.
    ///
    /// Returns the confirmed choices in the order they were selected, or
    /// `Err(PromptError::Interrupted)` when the user pressed Ctrl+C.
    pub fn prompt(self) -> PromptResult<Vec<Choice<T>>> {
        self.prompt_with(&mut CrosstermKeys::new(), &mut TerminalSurface::new())
    }

    /// Runs the prompt with the given key source and surface.
    pub fn prompt_with<K, S>(self, keys: &mut K, surface: &mut S) -> PromptResult<Vec<Choice<T>>>
    where
        K: KeySource + ?Sized,
        S: Surface + ?Sized,
    {
        let rule = self.rule();
        let selection = run_session(&self.config, rule, &self.default_choices, keys, surface)?;

        // Move each selected choice out exactly once, keeping selection order
        let mut slots: Vec<Option<Choice<T>>> =
            self.config.choices.into_iter().map(Some).collect();
        Ok(selection
            .into_iter()
            .filter_map(|index| slots.get_mut(index).and_then(Option::take))
            .collect())
    }
}
