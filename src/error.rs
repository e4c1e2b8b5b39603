//! Error kinds surfaced by the prompts.

use std::io;

use thiserror::Error;

/// Errors returned by a prompt session.
///
/// Validation problems during a session (disabled choice, too many or too few
/// selections) are not errors. They are shown on the validation row and the
/// session keeps running.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt was configured with an empty choice list.
    #[error("no choices supplied for selection prompt")]
    NoChoices,

    /// Multi-select minimum is larger than the maximum.
    #[error("invalid selection count: min {min} > max {max}")]
    InvalidSelectionCount { min: usize, max: usize },

    /// The terminal cannot fit the prompt. Resize and retry.
    #[error(
        "terminal dimensions too small: {columns}x{rows}, need at least {required_columns}x{required_rows}"
    )]
    TerminalTooSmall {
        columns: u16,
        rows: u16,
        required_columns: u16,
        required_rows: u16,
    },

    /// The user cancelled the prompt (Ctrl+C).
    #[error("prompt interrupted")]
    Interrupted,

    /// Keyboard or terminal failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PromptError {
    /// Returns true if the user cancelled the prompt.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Result type for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_passes_through_unchanged() {
        let err = PromptError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "pipe closed");
        match err {
            PromptError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_interrupted_is_detected() {
        assert!(PromptError::Interrupted.is_interrupted());
        assert!(!PromptError::NoChoices.is_interrupted());
    }

    #[test]
    fn test_invalid_selection_count_message() {
        let err = PromptError::InvalidSelectionCount { min: 3, max: 2 };
        assert_eq!(err.to_string(), "invalid selection count: min 3 > max 2");
    }
}
