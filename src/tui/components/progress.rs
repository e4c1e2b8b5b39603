//! Progress bar for work with a known number of steps.

use std::{
    io::{self, Write},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveToColumn, RestorePosition, SavePosition, Show},
    queue,
    terminal::{Clear, ClearType},
};
use log::debug;

use super::Ticker;
use crate::tui::{
    surface::FALLBACK_COLUMNS,
    text::display_width,
    theme::{Palette, Role, Theme},
};

const REDRAW_INTERVAL: Duration = Duration::from_millis(100);
const DEFAULT_WIDTH: usize = 40;
const FALLBACK_WIDTH: usize = 30;

/// Characters a progress bar is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPattern {
    pub done: &'static str,
    pub pending: &'static str,
    pub pad_left: &'static str,
    pub pad_right: &'static str,
}

impl ProgressPattern {
    pub const DEFAULT: Self = Self {
        done: "+",
        pending: "-",
        pad_left: " [",
        pad_right: "] ",
    };
    pub const HASHES: Self = Self {
        done: "#",
        pending: "=",
        pad_left: " [",
        pad_right: "] ",
    };
    pub const PIPES: Self = Self {
        done: "|",
        pending: " ",
        pad_left: " ",
        pad_right: " ",
    };
    pub const SOLID: Self = Self {
        done: "█",
        pending: "░",
        pad_left: " ",
        pad_right: " ",
    };
}

impl Default for ProgressPattern {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A progress display that redraws itself on the current line.
#[derive(Debug, Clone)]
pub struct Progress {
    prefix: String,
    label: String,
    description: String,
    steps: usize,
    width: usize,
    pattern: ProgressPattern,
    theme: Option<Theme>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new("Activity in progress")
    }
}

impl Progress {
    /// Creates a new progress display with the given label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            prefix: "[~] ".to_string(),
            label: label.into(),
            description: String::new(),
            steps: 0,
            width: DEFAULT_WIDTH,
            pattern: ProgressPattern::DEFAULT,
            theme: None,
        }
    }

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
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the widest the bar may grow. Zero picks a narrower default.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: ProgressPattern) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// The styled progress line after `current` steps, for a terminal of
    /// `columns` cells.
    #[must_use]
    pub fn render(&self, theme: &Theme, current: usize, columns: usize) -> String {
        let current = current.min(self.steps);
        let percent = current
            .saturating_mul(100)
            .checked_div(self.steps)
            .unwrap_or(0);
        let percent = format!("{percent:>3}% ");

        let fixed = [
            self.prefix.as_str(),
            self.label.as_str(),
            percent.as_str(),
            self.pattern.pad_left,
            self.pattern.pad_right,
        ]
        .iter()
        .map(|part| display_width(part))
        .sum::<usize>();
        let max_width = if self.width == 0 {
            FALLBACK_WIDTH
        } else {
            self.width
        };
        let bar_width = columns.saturating_sub(fixed).min(max_width);

        let filled = current
            .saturating_mul(bar_width)
            .checked_div(self.steps)
            .unwrap_or(0)
            .min(bar_width);
        let pending = bar_width.saturating_sub(filled);

        format!(
            "{}{}{}{}{}{}{}",
            theme.paint(Role::Prefix, &self.prefix),
            theme.paint(Role::Label, &self.label),
            theme.paint(Role::ProgressPad, self.pattern.pad_left),
            theme.paint(Role::ProgressDone, &self.pattern.done.repeat(filled)),
            theme.paint(Role::ProgressPending, &self.pattern.pending.repeat(pending)),
            theme.paint(Role::ProgressPad, self.pattern.pad_right),
            theme.paint(Role::ProgressStatus, &percent),
        )
    }

    /// Starts the progress display on stdout and returns a handle for
    /// sending updates.
    pub fn start(self) -> io::Result<ProgressHandle> {
        self.start_on(io::stdout())
    }

    /// Starts the progress display on `out`. Without steps or a label
    /// nothing is drawn and increments are ignored.
    pub fn start_on<W: Write + Send + 'static>(self, out: W) -> io::Result<ProgressHandle> {
        let current = Arc::new(AtomicUsize::new(0));
        let steps = self.steps;
        if steps == 0 || self.label.is_empty() {
            return Ok(ProgressHandle {
                current,
                steps: 0,
                ticker: None,
            });
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
        let tick_current = Arc::clone(&current);
        let ticker = Ticker::spawn(
            REDRAW_INTERVAL,
            move |_| {
                let line = self.render(&theme, tick_current.load(Ordering::SeqCst), columns());
                let mut w = tick_out.lock().unwrap_or_else(PoisonError::into_inner);
                let written = queue!(w, MoveToColumn(0), Clear(ClearType::UntilNewLine))
                    .and_then(|()| write!(w, "{line}"))
                    .and_then(|()| w.flush());
                if let Err(e) = written {
                    debug!("progress frame not written: {e}");
                }
            },
            move || {
                let mut w = out.lock().unwrap_or_else(PoisonError::into_inner);
                let restored = queue!(w, RestorePosition, Clear(ClearType::FromCursorDown), Show)
                    .and_then(|()| w.flush());
                if let Err(e) = restored {
                    debug!("progress cleanup failed: {e}");
                }
            },
        )?;

        Ok(ProgressHandle {
            current,
            steps,
            ticker: Some(ticker),
        })
    }
}

fn columns() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        _ => usize::from(FALLBACK_COLUMNS),
    }
}

/// Handle for sending progress updates
pub struct ProgressHandle {
    current: Arc<AtomicUsize>,
    steps: usize,
    ticker: Option<Ticker>,
}

impl ProgressHandle {
    /// Advances by one step, never past the last.
    pub fn increment(&self) {
        if self.steps == 0 {
            return;
        }
        let steps = self.steps;
        // Err only means the bar is already full
        let _ = self
            .current
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n < steps).then(|| n.saturating_add(1))
            });
    }

    /// Steps completed so far.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current.load(Ordering::SeqCst)
    }

    /// Stops redrawing and clears the progress lines.
    pub fn done(self) {
        if let Some(ticker) = self.ticker {
            ticker.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_line() {
        let progress = Progress::new("Copying").with_steps(4).with_width(8);
        let line = progress.render(&Theme::plain(), 1, 80);
        assert_eq!(line, "[~] Copying [++------]  25% ");
    }

    #[test]
    fn test_full_and_empty_bars() {
        let progress = Progress::new("Sync")
            .with_prefix("")
            .with_steps(3)
            .with_width(6)
            .with_pattern(ProgressPattern::HASHES);
        let theme = Theme::plain();

        assert_eq!(progress.render(&theme, 0, 80), "Sync [======]   0% ");
        assert_eq!(progress.render(&theme, 3, 80), "Sync [######] 100% ");
        // Past the end is clamped
        assert_eq!(progress.render(&theme, 9, 80), "Sync [######] 100% ");
    }

    #[test]
    fn test_bar_shrinks_to_terminal() {
        let progress = Progress::new("Load")
            .with_prefix("")
            .with_steps(2)
            .with_pattern(ProgressPattern::PIPES);
        // Label, percent and both pads take eleven of fifteen cells
        let line = progress.render(&Theme::plain(), 1, 15);
        assert_eq!(line, "Load ||    50% ");
    }

    #[test]
    fn test_zero_width_uses_fallback() {
        let progress = Progress::new("x")
            .with_prefix("")
            .with_steps(1)
            .with_width(0)
            .with_pattern(ProgressPattern::SOLID);
        let line = progress.render(&Theme::plain(), 1, 200);
        assert_eq!(line, format!("x {} 100% ", "█".repeat(30)));
    }

    #[test]
    fn test_increment_saturates() {
        let handle = Progress::new("Steps")
            .with_steps(2)
            .with_theme(Theme::plain())
            .start_on(io::sink())
            .unwrap();

        for _ in 0..5 {
            handle.increment();
        }
        assert_eq!(handle.current(), 2);
        handle.done();
    }

    #[test]
    fn test_no_steps_is_noop() {
        let handle = Progress::new("Nothing").start_on(io::sink()).unwrap();
        handle.increment();
        assert_eq!(handle.current(), 0);
        handle.done();

        let handle = Progress::new("").with_steps(3).start_on(io::sink()).unwrap();
        handle.increment();
        assert_eq!(handle.current(), 0);
        handle.done();
    }
}
