//! Reusable TUI components for user prompts and inline output.

mod banner;
mod choice;
mod progress;
pub(crate) mod select;
mod spinner;
mod status;
mod text_input;
mod ticker;

pub use banner::{Alignment, Banner};
pub use choice::Choice;
pub use progress::{Progress, ProgressHandle, ProgressPattern};
pub use select::{MultiSelect, SingleSelect};
pub use spinner::{Spinner, SpinnerHandle, SpinnerPattern};
pub use status::{Status, StatusLevel};
pub use text_input::TextInput;
pub use ticker::Ticker;

/// Result of input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Input is valid
    Valid,
    /// Input is valid, with feedback to show under the input
    ValidWithMessage(String),
    /// Input is invalid with an error message
    Invalid(String),
}

impl ValidationResult {
    /// Returns true if the validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// The feedback message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::ValidWithMessage(msg) | Self::Invalid(msg) => Some(msg),
        }
    }
}
