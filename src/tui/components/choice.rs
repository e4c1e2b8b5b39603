/// An item in a selection list.
///
/// Selection identity is the `value`: two choices with equal values count as
/// the same selection. Keeping values unique is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T = String> {
    /// The value returned when this item is selected
    pub value: T,
    /// The label displayed to the user
    pub label: String,
    /// Whether this item is shown but cannot be selected
    pub disabled: bool,
}

impl<T> Choice<T> {
    /// Creates a new selectable choice.
    #[must_use]
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Creates a new disabled choice.
    #[must_use]
    pub fn disabled(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: true,
        }
    }
}

impl From<&str> for Choice<String> {
    fn from(label: &str) -> Self {
        Self::new(label.to_string(), label)
    }
}
