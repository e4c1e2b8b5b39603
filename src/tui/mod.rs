//! Terminal prompts and inline output built on ratatui and crossterm.
//!
//! Interactive prompts:
//! - `SingleSelect` - pick one choice from a searchable, paginated list
//! - `MultiSelect` - toggle several choices, within count limits
//! - `TextInput` - single-line text, optionally masked
//!
//! Inline output: `Status`, `Banner`, `Spinner` and `Progress`.
//!
//! Prompts read keys from a [`KeySource`] and draw on a [`Surface`], so they
//! can be driven headlessly with [`KeyScript`] and [`MemorySurface`].

mod app;
pub mod components;
mod keys;
mod prompts;
mod surface;
mod text;
mod theme;

pub use app::TerminalApp;
pub use components::{
    Alignment, Banner, Choice, MultiSelect, Progress, ProgressHandle, ProgressPattern,
    SingleSelect, Spinner, SpinnerHandle, SpinnerPattern, Status, StatusLevel, TextInput, Ticker,
    ValidationResult,
};
pub use keys::{CrosstermKeys, Key, KeyScript, KeySource, map_key_event};
pub use prompts::{confirm_prompt, multiselect_prompt, select_prompt, text_prompt};
pub use surface::{MemorySurface, Surface, TerminalSurface, dimensions, line_text};
pub use text::{display_width, truncate};
pub use theme::{Palette, Role, Theme, color_enabled};
