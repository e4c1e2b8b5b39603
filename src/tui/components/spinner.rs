//! Animated spinner for work of unknown length.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveToColumn, RestorePosition, SavePosition, Show},
    queue,
    terminal::{Clear, ClearType},
};
use derive_more::Display;
use log::debug;

use super::Ticker;
use crate::tui::theme::{Palette, Role, Theme};

const FRAME_INTERVAL: Duration = Duration::from_millis(200);

/// Built-in frame sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SpinnerPattern {
    #[default]
    #[display("default")]
    Default,
    #[display("dots")]
    Dots,
    #[display("dots-mini")]
    DotsMini,
    #[display("circles")]
    Circles,
    #[display("squares")]
    Squares,
    #[display("line")]
    Line,
    #[display("pipes")]
    Pipes,
    #[display("moons")]
    Moons,
}

impl SpinnerPattern {
    #[must_use]
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Default => &[
                "[⠋] ", "[⠙] ", "[⠹] ", "[⠸] ", "[⠼] ", "[⠴] ", "[⠦] ", "[⠧] ", "[⠇] ", "[⠏] ",
            ],
            Self::Dots => &["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "],
            Self::DotsMini => &["⠋ ", "⠙ ", "⠹ ", "⠸ ", "⠼ ", "⠴ ", "⠦ ", "⠧ ", "⠇ ", "⠏ "],
            Self::Circles => &["◐ ", "◓ ", "◑ ", "◒ "],
            Self::Squares => &["▖ ", "▌ ", "▘ ", "▀ ", "▝ ", "▐ ", "▗ ", "▄ "],
            Self::Line => &["- ", "\\ ", "| ", "/ "],
            Self::Pipes => &["╾ ", "│ ", "╸ ", "┤ ", "├ ", "└ ", "┴ ", "┬ ", "┐ ", "┘ "],
            Self::Moons => &["🌑 ", "🌒 ", "🌓 ", "🌔 ", "🌕 ", "🌖 ", "🌗 ", "🌘 "],
        }
    }
}

/// A spinner shown on the current line while work runs.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: Vec<String>,
    label: String,
    description: String,
    theme: Option<Theme>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new("Loading...")
    }
}

impl Spinner {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            frames: Vec::new(),
            label: label.into(),
            description: String::new(),
            theme: None,
        }
        .with_pattern(SpinnerPattern::Default)
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: SpinnerPattern) -> Self {
        self.frames = pattern.frames().iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_frames(mut self, frames: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets a line printed once above the spinner.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// The styled spinner line for the given tick.
    #[must_use]
    pub fn render(&self, theme: &Theme, tick: usize) -> String {
        let frame = self
            .frames
            .get(tick.checked_rem(self.frames.len()).unwrap_or(0))
            .map_or("", String::as_str);
        format!(
            "{}{}",
            theme.paint(Role::SpinnerFrame, frame),
            theme.paint(Role::SpinnerLabel, &self.label)
        )
    }

    /// Starts spinning on stdout.
    pub fn start(self) -> io::Result<SpinnerHandle> {
        self.start_on(io::stdout())
    }

    /// Starts spinning on `out`. A spinner with neither frames nor a label
    /// does nothing.
    pub fn start_on<W: Write + Send + 'static>(self, out: W) -> io::Result<SpinnerHandle> {
        if self.frames.is_empty() && self.label.is_empty() {
            return Ok(SpinnerHandle { ticker: None });
        }

        let theme = self
            .theme
            .clone()
            .unwrap_or_else(|| Theme::resolve(&Palette::DEFAULT));
        let out = Arc::new(Mutex::new(out));
        {
            let mut w = out.lock().unwrap_or_else(PoisonError::into_inner);
            queue!(w, SavePosition, Hide)?;
            if !self.description.is_empty() {
                write!(w, "{}\r\n", theme.paint(Role::Description, &self.description))?;
            }
            w.flush()?;
        }

        let tick_out = Arc::clone(&out);
        let ticker = Ticker::spawn(
            FRAME_INTERVAL,
            move |tick| {
                let line = self.render(&theme, tick);
                let mut w = tick_out.lock().unwrap_or_else(PoisonError::into_inner);
                let written = queue!(w, MoveToColumn(0), Clear(ClearType::UntilNewLine))
                    .and_then(|()| write!(w, "{line}"))
                    .and_then(|()| w.flush());
                if let Err(e) = written {
                    debug!("spinner frame not written: {e}");
                }
            },
            move || {
                let mut w = out.lock().unwrap_or_else(PoisonError::into_inner);
                let restored = queue!(w, RestorePosition, Clear(ClearType::FromCursorDown), Show)
                    .and_then(|()| w.flush());
                if let Err(e) = restored {
                    debug!("spinner cleanup failed: {e}");
                }
            },
        )?;

        Ok(SpinnerHandle {
            ticker: Some(ticker),
        })
    }
}

/// A running spinner. Stopping (or dropping) it clears the spinner lines.
pub struct SpinnerHandle {
    ticker: Option<Ticker>,
}

impl SpinnerHandle {
    /// Stops the animation and restores the cursor.
    pub fn stop(self) {
        if let Some(ticker) = self.ticker {
            ticker.stop();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_frames_cycle() {
        let spinner = Spinner::new("Working").with_pattern(SpinnerPattern::Line);
        let theme = Theme::plain();

        assert_eq!(spinner.render(&theme, 0), "- Working");
        assert_eq!(spinner.render(&theme, 1), "\\ Working");
        assert_eq!(spinner.render(&theme, 4), "- Working");
    }

    #[test]
    fn test_patterns_are_not_empty() {
        for pattern in [
            SpinnerPattern::Default,
            SpinnerPattern::Dots,
            SpinnerPattern::DotsMini,
            SpinnerPattern::Circles,
            SpinnerPattern::Squares,
            SpinnerPattern::Line,
            SpinnerPattern::Pipes,
            SpinnerPattern::Moons,
        ] {
            assert!(!pattern.frames().is_empty(), "{pattern}");
        }
    }

    #[test]
    fn test_empty_spinner_is_noop() {
        let buffer = SharedBuffer::default();
        let handle = Spinner::new("")
            .with_frames(Vec::<String>::new())
            .start_on(buffer.clone())
            .unwrap();

        assert!(!handle.is_running());
        handle.stop();
        assert!(buffer.text().is_empty());
    }

    #[test]
    fn test_spinner_writes_and_restores() {
        let buffer = SharedBuffer::default();
        let handle = Spinner::new("Fetching")
            .with_description("Contacting server")
            .with_theme(Theme::plain())
            .start_on(buffer.clone())
            .unwrap();
        handle.stop();

        let text = buffer.text();
        assert!(text.contains("Contacting server\r\n"));
        assert!(text.contains("[⠋] Fetching"));
        // Cursor shown again at the end
        assert!(text.ends_with("\u{1b}[?25h"));
    }
}
