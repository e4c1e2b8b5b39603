//! One-line status messages.

use std::io::{self, Write};

use derive_more::Display;

use crate::tui::theme::{Palette, Role, Theme};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum StatusLevel {
    #[default]
    #[display("debug")]
    Debug,
    #[display("success")]
    Success,
    #[display("info")]
    Info,
    #[display("warn")]
    Warn,
    #[display("error")]
    Error,
}

impl StatusLevel {
    fn glyph(self) -> &'static str {
        match self {
            Self::Debug => "[-] ",
            Self::Success => "[✓] ",
            Self::Info => "[i] ",
            Self::Warn => "[!] ",
            Self::Error => "[x] ",
        }
    }

    fn role(self) -> Role {
        match self {
            Self::Debug => Role::StatusDebug,
            Self::Success => Role::StatusSuccess,
            Self::Info => Role::StatusInfo,
            Self::Warn => Role::StatusWarn,
            Self::Error => Role::StatusError,
        }
    }
}

/// A status line such as `[✓] Saved`.
#[derive(Debug, Clone, Default)]
pub struct Status {
    level: StatusLevel,
    prefix: String,
    label: String,
    theme: Option<Theme>,
}

impl Status {
    #[must_use]
    pub fn new(level: StatusLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success).with_label(label)
    }

    #[must_use]
    pub fn info(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info).with_label(label)
    }

    #[must_use]
    pub fn warn(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warn).with_label(label)
    }

    #[must_use]
    pub fn error(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error).with_label(label)
    }

    /// Replaces the level glyph.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// The styled line without a trailing newline, or `None` when there is
    /// nothing to show.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        if self.prefix.is_empty() && self.label.is_empty() {
            return None;
        }
        let theme = self
            .theme
            .clone()
            .unwrap_or_else(|| Theme::resolve(&Palette::DEFAULT));
        let prefix = if self.prefix.is_empty() {
            self.level.glyph()
        } else {
            self.prefix.as_str()
        };
        Some(format!(
            "{}{}",
            theme.paint(self.level.role(), prefix),
            theme.paint(Role::StatusLabel, &self.label)
        ))
    }

    /// Writes the line to stdout.
    pub fn print(&self) -> io::Result<()> {
        let Some(line) = self.render() else {
            return Ok(());
        };
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_glyphs() {
        let cases = [
            (StatusLevel::Debug, "[-] done"),
            (StatusLevel::Success, "[✓] done"),
            (StatusLevel::Info, "[i] done"),
            (StatusLevel::Warn, "[!] done"),
            (StatusLevel::Error, "[x] done"),
        ];
        for (level, expected) in cases {
            let line = Status::new(level)
                .with_label("done")
                .with_theme(Theme::plain())
                .render();
            assert_eq!(line.as_deref(), Some(expected), "level {level}");
        }
    }

    #[test]
    fn test_custom_prefix_replaces_glyph() {
        let line = Status::warn("disk almost full")
            .with_prefix(">> ")
            .with_theme(Theme::plain())
            .render();
        assert_eq!(line.as_deref(), Some(">> disk almost full"));
    }

    #[test]
    fn test_empty_status_renders_nothing() {
        assert_eq!(Status::new(StatusLevel::Info).render(), None);
    }

    #[test]
    fn test_colored_status_wraps_text() {
        let line = Status::success("ok")
            .with_theme(Theme::from_palette(&Palette::DEFAULT))
            .render()
            .unwrap_or_default();
        assert!(line.contains("[✓] "));
        assert!(line.contains("\u{1b}["));
    }
}
