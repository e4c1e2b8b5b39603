//! Single selection prompt.

use super::{SelectConfig, engine::Rule, run_session, select_builder_methods};
use crate::{
    error::PromptResult,
    tui::{
        components::Choice,
        keys::{CrosstermKeys, KeySource},
        surface::{Surface, TerminalSurface},
    },
};

const DEFAULT_PAGE_SIZE: usize = 10;

/// A searchable list from which at most one choice is picked.
///
/// ```no_run
/// use termprompt::tui::{Choice, SingleSelect};
///
/// let picked = SingleSelect::new(vec![Choice::from("Apple"), Choice::from("Banana")])
///     .with_label("Favorite fruit")
///     .prompt()?;
/// # Ok::<(), termprompt::PromptError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SingleSelect<T> {
    config: SelectConfig<T>,
    default_choice: Option<usize>,
    optional: bool,
}

impl<T: Clone + PartialEq> SingleSelect<T> {
    /// Creates a new prompt over `choices`.
    #[must_use]
    pub fn new(choices: Vec<Choice<T>>) -> Self {
        Self {
            config: SelectConfig::new(choices, DEFAULT_PAGE_SIZE),
            default_choice: None,
            optional: false,
        }
    }

    select_builder_methods!();

    /// Preselects the choice at `index`. Ignored when out of range or disabled.
    #[must_use]
    pub fn with_default_choice(mut self, index: usize) -> Self {
        self.default_choice = Some(index);
        self
    }

    /// Allows confirming without a selection.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Runs the prompt on the real terminal.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(choice))` - a choice was confirmed
    /// - `Ok(None)` - confirmed with no selection (optional prompts only)
    /// - `Err(PromptError::Interrupted)` - the user pressed Ctrl+C
    pub fn prompt(self) -> PromptResult<Option<Choice<T>>> {
        self.prompt_with(&mut CrosstermKeys::new(), &mut TerminalSurface::new())
    }

    /// Runs the prompt with the given key source and surface.
    pub fn prompt_with<K, S>(self, keys: &mut K, surface: &mut S) -> PromptResult<Option<Choice<T>>>
    where
        K: KeySource + ?Sized,
        S: Surface + ?Sized,
    {
        let defaults: Vec<usize> = self.default_choice.into_iter().collect();
        let rule = Rule::Single {
            optional: self.optional,
        };
        let selection = run_session(&self.config, rule, &defaults, keys, surface)?;

        Ok(selection
            .first()
            .and_then(|&index| self.config.choices.get(index))
            .cloned())
    }
}
