//! Full-width banner lines.

use std::io::{self, Write};

use derive_more::Display;

use crate::tui::{
    surface::FALLBACK_COLUMNS,
    text::{display_width, repeat_to_width, truncate},
    theme::{Palette, Role, Theme},
};

/// Where banner text sits within the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Alignment {
    #[default]
    #[display("left")]
    Left,
    #[display("center")]
    Center,
    #[display("right")]
    Right,
}

#[derive(Debug, Clone)]
struct BannerLine {
    text: String,
    offset: usize,
    pad: String,
}

impl Default for BannerLine {
    fn default() -> Self {
        Self {
            text: String::new(),
            offset: 0,
            pad: " ".to_string(),
        }
    }
}

/// A label and optional sub-label, each padded to the terminal width.
#[derive(Debug, Clone, Default)]
pub struct Banner {
    label: BannerLine,
    sub_label: BannerLine,
    alignment: Alignment,
    width: Option<usize>,
    theme: Option<Theme>,
}

impl Banner {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::default().with_label(label)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label.text = label.into();
        self
    }

    /// Pad cells kept between the label and the aligned edge.
    #[must_use]
    pub fn with_label_offset(mut self, offset: usize) -> Self {
        self.label.offset = offset;
        self
    }

    /// Sets the fill around the label. Falls back to a space when `pad` has
    /// no display width.
    #[must_use]
    pub fn with_label_pad(mut self, pad: impl Into<String>) -> Self {
        self.label.pad = pad_or_space(pad.into());
        self
    }

    #[must_use]
    pub fn with_sub_label(mut self, sub_label: impl Into<String>) -> Self {
        self.sub_label.text = sub_label.into();
        self
    }

    #[must_use]
    pub fn with_sub_label_offset(mut self, offset: usize) -> Self {
        self.sub_label.offset = offset;
        self
    }

    #[must_use]
    pub fn with_sub_label_pad(mut self, pad: impl Into<String>) -> Self {
        self.sub_label.pad = pad_or_space(pad.into());
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Fixes the banner width instead of following the terminal.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = (width > 0).then_some(width);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Styled banner lines for a line of `width` cells.
    #[must_use]
    pub fn render(&self, width: usize) -> Vec<String> {
        let theme = self
            .theme
            .clone()
            .unwrap_or_else(|| Theme::resolve(&Palette::DEFAULT));

        [
            (&self.label, Role::BannerLabel),
            (&self.sub_label, Role::BannerSubLabel),
        ]
        .into_iter()
        .filter(|(line, _)| !line.text.is_empty())
        .map(|(line, role)| {
            let (left, content, right) = layout(line, self.alignment, width);
            format!(
                "{}{}{}",
                theme.paint(Role::BannerPad, &left),
                theme.paint(role, &content),
                theme.paint(Role::BannerPad, &right)
            )
        })
        .collect()
    }

    /// Writes the banner to stdout, sized to the terminal.
    pub fn print(&self) -> io::Result<()> {
        let width = self.width.unwrap_or_else(terminal_width);
        let mut out = io::stdout().lock();
        for line in self.render(width) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

fn pad_or_space(pad: String) -> String {
    if display_width(&pad) == 0 {
        " ".to_string()
    } else {
        pad
    }
}

fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        _ => usize::from(FALLBACK_COLUMNS),
    }
}

/// Splits a line into left pad, spaced content and right pad.
fn layout(line: &BannerLine, alignment: Alignment, width: usize) -> (String, String, String) {
    let margins = line.offset.saturating_mul(2);
    let mut content = format!(" {} ", line.text);
    if display_width(&content).saturating_add(margins) > width {
        let available = width.saturating_sub(margins).saturating_sub(2);
        content = format!(" {} ", truncate(&line.text, available, "..."));
    }

    let space = width.saturating_sub(display_width(&content));
    let (left, right) = match alignment {
        Alignment::Left => {
            let left = line.offset.min(space);
            (left, space.saturating_sub(left))
        }
        Alignment::Center => {
            let left = space / 2;
            (left, space.saturating_sub(left))
        }
        Alignment::Right => {
            let right = line.offset.min(space);
            (space.saturating_sub(right), right)
        }
    };

    (
        repeat_to_width(&line.pad, left),
        content,
        repeat_to_width(&line.pad, right),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(banner: Banner) -> Banner {
        banner.with_theme(Theme::plain())
    }

    #[test]
    fn test_left_aligned_with_offset() {
        let lines = plain(Banner::new("Hi").with_label_pad("=").with_label_offset(2)).render(12);
        assert_eq!(lines, vec!["== Hi ======".to_string()]);
    }

    #[test]
    fn test_center_and_right_alignment() {
        let center = plain(
            Banner::new("Hi")
                .with_label_pad("-")
                .with_alignment(Alignment::Center),
        )
        .render(11);
        assert_eq!(center, vec!["--- Hi ----".to_string()]);

        let right = plain(
            Banner::new("Hi")
                .with_label_pad("-")
                .with_label_offset(1)
                .with_alignment(Alignment::Right),
        )
        .render(10);
        assert_eq!(right, vec!["----- Hi -".to_string()]);
    }

    #[test]
    fn test_sub_label_uses_its_own_pad() {
        let lines = plain(
            Banner::new("Title")
                .with_label_pad("#")
                .with_sub_label("sub")
                .with_sub_label_pad("."),
        )
        .render(10);
        assert_eq!(
            lines,
            vec![" Title ###".to_string(), " sub .....".to_string()]
        );
    }

    #[test]
    fn test_long_label_is_truncated() {
        let lines = plain(Banner::new("A very long banner label")).render(12);
        assert_eq!(lines, vec![" A very ... ".to_string()]);
    }

    #[test]
    fn test_empty_banner_renders_nothing() {
        assert!(plain(Banner::default()).render(80).is_empty());
    }

    #[test]
    fn test_zero_width_pad_falls_back_to_space() {
        let lines = plain(Banner::new("x").with_label_pad("")).render(5);
        assert_eq!(lines, vec![" x   ".to_string()]);
    }
}
