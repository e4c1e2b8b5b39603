//! Selection state machine shared by single and multi select.
//!
//! A [`Session`] owns everything that changes while a prompt runs: the
//! filtered view, cursor, visible window, search buffer, selection and the
//! validation message. [`Session::dispatch`] applies one key and reports
//! whether the loop should go on.

use derive_more::Display;

use crate::tui::{components::Choice, keys::Key};

pub(crate) const NO_CHOICES_AVAILABLE: &str = "No choices available";
pub(crate) const DISABLED_CHOICE: &str = "Cannot select a disabled choice";
pub(crate) const SELECTION_REQUIRED: &str = "No selection made (required)";

/// How many choices may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Rule {
    /// At most one selection. Confirming with none is allowed when `optional`.
    #[display("single (optional: {optional})")]
    Single { optional: bool },
    /// Between `min` and `max` selections.
    #[display("multi ({min}..={max})")]
    Multi { min: usize, max: usize },
}

impl Rule {
    fn capacity(self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Multi { max, .. } => max,
        }
    }
}

/// Visible slice `[start, end)` of the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Outcome of dispatching one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Confirm,
    Interrupt,
}

pub(crate) struct Session<'a, T> {
    choices: &'a [Choice<T>],
    rule: Rule,
    page_size: usize,
    /// Indices into `choices`, in original order.
    filtered: Vec<usize>,
    /// Index into `filtered`.
    cursor: usize,
    window: Window,
    searching: bool,
    query: String,
    /// Indices into `choices`, in selection order.
    selection: Vec<usize>,
    message: Option<String>,
}

impl<'a, T: PartialEq> Session<'a, T> {
    /// Starts a session. `defaults` are indices into `choices`; out-of-range,
    /// disabled and duplicate entries are skipped and the rule's capacity is
    /// respected.
    pub fn new(
        choices: &'a [Choice<T>],
        rule: Rule,
        page_size: usize,
        defaults: &[usize],
    ) -> Self {
        let page_size = page_size.max(1);
        let mut session = Self {
            choices,
            rule,
            page_size,
            filtered: (0..choices.len()).collect(),
            cursor: 0,
            window: Window {
                start: 0,
                end: page_size.min(choices.len()),
            },
            searching: false,
            query: String::new(),
            selection: Vec::new(),
            message: None,
        };

        for &index in defaults {
            if session.selection.len() >= rule.capacity() {
                break;
            }
            if let Some(choice) = choices.get(index)
                && !choice.disabled
                && !session.is_selected(choice)
            {
                session.selection.push(index);
            }
        }

        session
    }

    /// Applies one key event.
    pub fn dispatch(&mut self, key: Key) -> Step {
        match key {
            Key::Interrupt => return Step::Interrupt,
            Key::Up | Key::Left => self.move_previous(),
            Key::Down | Key::Right => self.move_next(),
            Key::Tab => self.searching = !self.searching,
            Key::Escape => self.searching = false,
            Key::Enter => return self.confirm(),
            Key::Space => self.toggle_current(),
            Key::Backspace => {
                if self.searching && self.query.pop().is_some() {
                    self.refilter();
                }
            }
            Key::Char(c) if self.searching => {
                self.query.push(c);
                self.refilter();
            }
            Key::Char('j' | 'l') => self.move_next(),
            Key::Char('k' | 'h') => self.move_previous(),
            Key::Char(_) => {}
        }
        Step::Continue
    }

    fn move_previous(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
        if self.cursor < self.window.start {
            self.window.start = self.cursor;
            self.window.end = self
                .window
                .start
                .saturating_add(self.page_size)
                .min(self.filtered.len());
        }
    }

    fn move_next(&mut self) {
        if self.cursor.saturating_add(1) >= self.filtered.len() {
            return;
        }
        self.cursor = self.cursor.saturating_add(1);
        if self.cursor >= self.window.end {
            self.window.end = self.cursor.saturating_add(1);
            self.window.start = self.window.end.saturating_sub(self.page_size);
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_choices(self.choices, &self.query);

        let len = self.filtered.len();
        if len == 0 {
            self.cursor = 0;
            self.window = Window::default();
            return;
        }

        self.cursor = self.cursor.min(len.saturating_sub(1));

        let mut start = self.window.start.min(self.cursor);
        if self.cursor >= start.saturating_add(self.page_size) {
            start = self
                .cursor
                .saturating_add(1)
                .saturating_sub(self.page_size);
        }
        // Pull the window back so a shrunken list still fills the page
        start = start.min(len.saturating_sub(self.page_size));

        self.window = Window {
            start,
            end: start.saturating_add(self.page_size).min(len),
        };
    }

    fn toggle_current(&mut self) {
        let choices = self.choices;
        let Some(index) = self.filtered.get(self.cursor).copied() else {
            self.message = Some(NO_CHOICES_AVAILABLE.to_string());
            return;
        };
        let Some(choice) = choices.get(index) else {
            return;
        };
        if choice.disabled {
            self.message = Some(DISABLED_CHOICE.to_string());
            return;
        }

        match self.rule {
            Rule::Single { .. } => {
                if self.is_selected(choice) {
                    self.selection.clear();
                } else {
                    self.selection = vec![index];
                }
                self.message = None;
            }
            Rule::Multi { min, max } => {
                if self.is_selected(choice) {
                    self.selection
                        .retain(|&i| choices.get(i).is_none_or(|c| c.value != choice.value));
                } else if self.selection.len() >= max {
                    self.message = Some(too_many_message(max));
                    return;
                } else {
                    self.selection.push(index);
                }

                self.message = (self.selection.len() < min).then(|| too_few_message(min));
            }
        }
    }

    fn confirm(&mut self) -> Step {
        match self.rule {
            Rule::Single { optional } => {
                if self.selection.is_empty() && !optional {
                    self.message = Some(SELECTION_REQUIRED.to_string());
                    return Step::Continue;
                }
            }
            Rule::Multi { min, .. } => {
                if self.selection.len() < min {
                    self.message = Some(too_few_message(min));
                    return Step::Continue;
                }
            }
        }
        Step::Confirm
    }

    /// Whether a choice with the same value is selected.
    pub fn is_selected(&self, choice: &Choice<T>) -> bool {
        self.selection
            .iter()
            .any(|&i| self.choices.get(i).is_some_and(|c| c.value == choice.value))
    }

    /// Filtered choices inside the window, with their filtered index.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &'a Choice<T>)> + '_ {
        let choices = self.choices;
        self.filtered
            .iter()
            .enumerate()
            .skip(self.window.start)
            .take(self.window.len())
            .filter_map(move |(pos, &index)| choices.get(index).map(|c| (pos, c)))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn searching(&self) -> bool {
        self.searching
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[cfg(test)]
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    #[cfg(test)]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Selected indices into the original choices, in selection order.
    pub fn into_selection(self) -> Vec<usize> {
        self.selection
    }
}

/// Indices of the choices whose label contains `query`, ignoring case.
/// An empty query matches everything.
pub(crate) fn filter_choices<T>(choices: &[Choice<T>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..choices.len()).collect();
    }
    let needle = query.to_lowercase();
    choices
        .iter()
        .enumerate()
        .filter(|(_, c)| c.label.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

fn noun(count: usize) -> &'static str {
    if count == 1 { "choice" } else { "choices" }
}

pub(crate) fn too_many_message(max: usize) -> String {
    format!("Cannot select more than {max} {}", noun(max))
}

pub(crate) fn too_few_message(min: usize) -> String {
    format!("At least {min} {} must be selected", noun(min))
}
