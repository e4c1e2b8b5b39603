//! Searchable, paginated selection lists.
//!
//! [`SingleSelect`] and [`MultiSelect`] share one engine; they only differ in
//! the selection [`Rule`](engine::Rule) they hand to it and in how the final
//! selection is returned.

mod engine;
mod multi;
mod render;
mod single;


use log::debug;

pub use multi::MultiSelect;
pub use single::SingleSelect;

use self::{
    engine::{Rule, Session, Step},
    render::render_frame,
};
use crate::{
    error::{PromptError, PromptResult},
    tui::{
        components::Choice,
        keys::KeySource,
        surface::{Acquired, Surface, dimensions},
        theme::{Palette, Theme},
    },
};

/// Rows a selection prompt needs besides its page: description, prompt,
/// search, spacer, validation, two help rows and two rows of margin.
pub const CHROME_ROWS: u16 = 9;

/// Narrowest terminal a selection prompt runs in.
pub const MIN_COLUMNS: u16 = 20;

/// Configuration shared by both selection prompts.
#[derive(Debug, Clone)]
pub(crate) struct SelectConfig<T> {
    pub choices: Vec<Choice<T>>,
    pub prefix: String,
    pub label: String,
    pub description: String,
    pub page_size: usize,
    pub cursor_indicator: String,
    pub selection_marker: String,
    pub disabled_marker: String,
    pub theme: Option<Theme>,
}

impl<T> SelectConfig<T> {
    pub fn new(choices: Vec<Choice<T>>, page_size: usize) -> Self {
        Self {
            choices,
            prefix: "[?] ".to_string(),
            label: "Select an option".to_string(),
            description: String::new(),
            page_size,
            cursor_indicator: " >".to_string(),
            selection_marker: "+ ".to_string(),
            disabled_marker: "x ".to_string(),
            theme: None,
        }
    }

    /// Visible rows: the configured page size, capped by the choice count.
    fn effective_page_size(&self) -> usize {
        self.page_size.min(self.choices.len()).max(1)
    }
}

/// Builder methods common to both selection prompts.
macro_rules! select_builder_methods {
    () => {
        /// Sets the prefix printed before the label.
        #[must_use]
        pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
            self.config.prefix = prefix.into();
            self
        }

        /// Sets the prompt label.
        #[must_use]
        pub fn with_label(mut self, label: impl Into<String>) -> Self {
            self.config.label = label.into();
            self
        }

        /// Sets the description line shown above the prompt.
        #[must_use]
        pub fn with_description(mut self, description: impl Into<String>) -> Self {
            self.config.description = description.into();
            self
        }

        /// Sets how many choices are visible at once.
        #[must_use]
        pub fn with_page_size(mut self, page_size: usize) -> Self {
            self.config.page_size = page_size;
            self
        }

        /// Sets the marker shown in front of the current row.
        #[must_use]
        pub fn with_cursor_indicator(mut self, indicator: impl Into<String>) -> Self {
            self.config.cursor_indicator = indicator.into();
            self
        }

        /// Sets the marker shown in front of selected rows.
        #[must_use]
        pub fn with_selection_marker(mut self, marker: impl Into<String>) -> Self {
            self.config.selection_marker = marker.into();
            self
        }

        /// Sets the marker shown in front of disabled rows.
        #[must_use]
        pub fn with_disabled_marker(mut self, marker: impl Into<String>) -> Self {
            self.config.disabled_marker = marker.into();
            self
        }

        /// Sets a custom theme. Without one, the default palette is used,
        /// undecorated when color output is disabled.
        #[must_use]
        pub fn with_theme(mut self, theme: crate::tui::Theme) -> Self {
            self.config.theme = Some(theme);
            self
        }
    };
}

pub(crate) use select_builder_methods;

/// Runs a selection session to completion and returns the selected indices
/// into `config.choices`, in selection order.
fn run_session<T, K, S>(
    config: &SelectConfig<T>,
    rule: Rule,
    defaults: &[usize],
    keys: &mut K,
    surface: &mut S,
) -> PromptResult<Vec<usize>>
where
    T: PartialEq,
    K: KeySource + ?Sized,
    S: Surface + ?Sized,
{
    if config.choices.is_empty() {
        return Err(PromptError::NoChoices);
    }
    if let Rule::Multi { min, max } = rule
        && min > max
    {
        return Err(PromptError::InvalidSelectionCount { min, max });
    }

    let page_size = config.effective_page_size();
    let (columns, rows) = dimensions(&*surface);
    let required_rows = u16::try_from(page_size)
        .unwrap_or(u16::MAX)
        .saturating_add(CHROME_ROWS);
    if rows < required_rows || columns < MIN_COLUMNS {
        return Err(PromptError::TerminalTooSmall {
            columns,
            rows,
            required_columns: MIN_COLUMNS,
            required_rows,
        });
    }

    let theme = config
        .theme
        .clone()
        .unwrap_or_else(|| Theme::resolve(&Palette::DEFAULT));

    let mut session = Session::new(&config.choices, rule, page_size, defaults);
    let frame = render_frame(&session, config, &theme);
    let height = u16::try_from(frame.len()).unwrap_or(rows);

    debug!(
        "selection prompt started: {} choices, page size {page_size}, {rule}",
        config.choices.len()
    );

    let mut screen = Acquired::new(surface, height)?;
    screen.draw(&frame, None)?;

    loop {
        let key = keys.next_key()?;
        match session.dispatch(key) {
            Step::Continue => {
                debug_assert!(
                    session.filtered_len() == 0 || session.window().contains(session.cursor())
                );
                if let Some(message) = session.message() {
                    debug!("selection rejected: {message}");
                }
                screen.draw(&render_frame(&session, config, &theme), None)?;
            }
            Step::Confirm => {
                debug!("selection confirmed: {} selected", session.selected_count());
                return Ok(session.into_selection());
            }
            Step::Interrupt => {
                debug!("selection prompt interrupted");
                return Err(PromptError::Interrupted);
            }
        }
    }
}
