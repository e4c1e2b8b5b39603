//! Text input component with validation support.

use log::debug;
use ratatui::text::Line;
use tui_input::{Input, InputRequest};
use unicode_width::UnicodeWidthStr;

use super::{ValidationResult, select::MIN_COLUMNS};
use crate::{
    error::{PromptError, PromptResult},
    tui::{
        keys::{CrosstermKeys, Key, KeySource},
        surface::{Acquired, Surface, TerminalSurface, dimensions},
        theme::{Palette, Role, Theme},
    },
};

const HELP: &str = "Type to input . Enter to confirm";

/// Rows a text prompt needs.
pub const INPUT_ROWS: u16 = 8;

/// How typed characters are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Echo {
    Plain,
    Masked,
    Hidden,
}

/// A single-line text prompt with optional validation.
///
/// [`TextInput::secret`] builds the masked variant for passwords and tokens.
pub struct TextInput<V = fn(&str) -> ValidationResult>
where
    V: Fn(&str) -> ValidationResult,
{
    prefix: String,
    label: String,
    description: String,
    placeholder: String,
    default_value: String,
    echo: Echo,
    validator: Option<V>,
    theme: Option<Theme>,
}

impl TextInput {
    /// Creates a new text input prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::with_echo("Enter text input", Echo::Plain)
    }

    /// Creates a prompt that shows one `*` per typed character.
    #[must_use]
    pub fn secret() -> Self {
        Self::with_echo("Enter secure input", Echo::Masked)
    }

    fn with_echo(label: &str, echo: Echo) -> Self {
        Self {
            prefix: "[?] ".to_string(),
            label: label.to_string(),
            description: String::new(),
            placeholder: String::new(),
            default_value: String::new(),
            echo,
            validator: None,
            theme: None,
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TextInput<V>
where
    V: Fn(&str) -> ValidationResult,
{
    /// Sets the prefix printed before the label.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the prompt label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the description line shown above the prompt.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the hint shown while the input is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the value submitted when the input is left empty.
    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Hides typed characters entirely.
    #[must_use]
    pub fn no_echo(mut self) -> Self {
        self.echo = Echo::Hidden;
        self
    }

    /// Sets the validator function for the input.
    #[must_use]
    pub fn with_validator<NewV>(self, validator: NewV) -> TextInput<NewV>
    where
        NewV: Fn(&str) -> ValidationResult,
    {
        TextInput {
            prefix: self.prefix,
            label: self.label,
            description: self.description,
            placeholder: self.placeholder,
            default_value: self.default_value,
            echo: self.echo,
            validator: Some(validator),
            theme: self.theme,
        }
    }

    /// Sets a custom theme for the input.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Runs the prompt on the real terminal.
    ///
    /// # Returns
    ///
    /// - `Ok(text)` - the submitted text, or the default value if left empty
    /// - `Err(PromptError::Interrupted)` - the user pressed Ctrl+C
    pub fn prompt(self) -> PromptResult<String> {
        self.prompt_with(&mut CrosstermKeys::new(), &mut TerminalSurface::new())
    }

    /// Runs the prompt with the given key source and surface.
    pub fn prompt_with<K, S>(self, keys: &mut K, surface: &mut S) -> PromptResult<String>
    where
        K: KeySource + ?Sized,
        S: Surface + ?Sized,
    {
        let (columns, rows) = dimensions(&*surface);
        if rows < INPUT_ROWS || columns < MIN_COLUMNS {
            return Err(PromptError::TerminalTooSmall {
                columns,
                rows,
                required_columns: MIN_COLUMNS,
                required_rows: INPUT_ROWS,
            });
        }

        let theme = self
            .theme
            .clone()
            .unwrap_or_else(|| Theme::resolve(&Palette::DEFAULT));
        let mut input = Input::default();
        let mut feedback: Option<ValidationResult> = None;

        let (frame, cursor) = self.render(&input, feedback.as_ref(), &theme);
        let height = u16::try_from(frame.len()).unwrap_or(INPUT_ROWS);
        let mut screen = Acquired::new(surface, height)?;
        screen.draw(&frame, Some(cursor))?;

        loop {
            match keys.next_key()? {
                Key::Interrupt => {
                    debug!("text prompt interrupted");
                    return Err(PromptError::Interrupted);
                }
                Key::Enter => {
                    let value = self.submitted_value(input.value());
                    match self.validator.as_ref().map(|validate| validate(&value)) {
                        Some(result) if !result.is_valid() => {
                            debug!("text input rejected");
                            feedback = Some(result);
                        }
                        _ => return Ok(value),
                    }
                }
                key => {
                    if let Some(request) = edit_request(key) {
                        input.handle(request);
                    }
                    feedback = self
                        .validator
                        .as_ref()
                        .map(|validate| validate(input.value()));
                }
            }

            let (frame, cursor) = self.render(&input, feedback.as_ref(), &theme);
            screen.draw(&frame, Some(cursor))?;
        }
    }

    fn submitted_value(&self, typed: &str) -> String {
        let typed = typed.trim_end_matches(['\r', '\n']);
        if typed.is_empty() {
            self.default_value.clone()
        } else {
            typed.to_string()
        }
    }

    fn hint(&self) -> String {
        match (self.placeholder.is_empty(), self.default_value.is_empty()) {
            (false, false) => format!("{} (default: {})", self.placeholder, self.default_value),
            (false, true) => self.placeholder.clone(),
            (true, false) => format!("default: {}", self.default_value),
            (true, true) => String::new(),
        }
    }

    /// The frame and the cursor position inside it.
    fn render(
        &self,
        input: &Input,
        feedback: Option<&ValidationResult>,
        theme: &Theme,
    ) -> (Vec<Line<'static>>, (u16, u16)) {
        let mut lines = Vec::with_capacity(6);
        if !self.description.is_empty() {
            lines.push(Line::from(
                theme.decorate(Role::Description, self.description.clone()),
            ));
        }
        let prompt_row = lines.len();

        let mut prompt = vec![
            theme.decorate(Role::Prefix, self.prefix.clone()),
            theme.decorate(Role::Label, self.label.clone()),
        ];
        let typed = input.value();
        let cursor_offset = if typed.is_empty() {
            prompt.push(theme.decorate(Role::Placeholder, self.hint()));
            0
        } else {
            match self.echo {
                Echo::Plain => {
                    prompt.push(theme.decorate(Role::InputText, typed.to_string()));
                    input.visual_cursor()
                }
                Echo::Masked => {
                    let mask = "*".repeat(typed.chars().count());
                    prompt.push(theme.decorate(Role::InputText, mask));
                    input.cursor()
                }
                Echo::Hidden => 0,
            }
        };
        lines.push(Line::from(prompt));

        lines.push(Line::default());
        lines.push(match feedback {
            Some(ValidationResult::Invalid(msg)) => {
                Line::from(theme.decorate(Role::ValidationFail, msg.clone()))
            }
            Some(ValidationResult::ValidWithMessage(msg)) => {
                Line::from(theme.decorate(Role::ValidationPass, msg.clone()))
            }
            Some(ValidationResult::Valid) | None => Line::default(),
        });
        lines.push(Line::default());
        lines.push(Line::from(theme.decorate(Role::Help, HELP)));

        let column = self
            .prefix
            .width()
            .saturating_add(self.label.width())
            .saturating_add(cursor_offset);
        let cursor = (
            u16::try_from(column).unwrap_or(u16::MAX),
            u16::try_from(prompt_row).unwrap_or(0),
        );
        (lines, cursor)
    }
}

fn edit_request(key: Key) -> Option<InputRequest> {
    match key {
        Key::Char(c) => Some(InputRequest::InsertChar(c)),
        Key::Space => Some(InputRequest::InsertChar(' ')),
        Key::Left => Some(InputRequest::GoToPrevChar),
        Key::Right => Some(InputRequest::GoToNextChar),
        Key::Backspace => Some(InputRequest::DeletePrevChar),
        _ => None,
    }
}
