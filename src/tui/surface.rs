//! Where prompt frames are drawn.
//!
//! A [`Surface`] is acquired once before a session's first frame and released
//! exactly once when the session ends, whichever way it ends.

use std::io;

use log::debug;
use ratatui::{text::Line, widgets::Paragraph};

use super::app::TerminalApp;

/// Columns assumed when the terminal size is unknown.
pub const FALLBACK_COLUMNS: u16 = 80;
/// Rows assumed when the terminal size is unknown.
pub const FALLBACK_ROWS: u16 = 24;

/// A drawing target for prompt frames.
pub trait Surface {
    /// Current `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Prepares the surface for frames of `height` rows (hide cursor, reserve space).
    fn acquire(&mut self, height: u16) -> io::Result<()>;

    /// Replaces the visible frame. `cursor` is a `(column, row)` inside the
    /// frame where the text cursor should be shown; `None` hides it.
    fn draw(&mut self, lines: &[Line<'static>], cursor: Option<(u16, u16)>) -> io::Result<()>;

    /// Restores the terminal. Must not fail.
    fn release(&mut self);
}

/// Returns the surface size, falling back to 80x24 when unknown.
pub fn dimensions<S: Surface + ?Sized>(surface: &S) -> (u16, u16) {
    match surface.size() {
        Ok((columns, rows)) => (
            if columns == 0 { FALLBACK_COLUMNS } else { columns },
            if rows == 0 { FALLBACK_ROWS } else { rows },
        ),
        Err(e) => {
            debug!("terminal size unavailable, using fallback: {e}");
            (FALLBACK_COLUMNS, FALLBACK_ROWS)
        }
    }
}

/// Drop guard that pairs [`Surface::acquire`] with [`Surface::release`].
pub(crate) struct Acquired<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Acquired<'a, S> {
    pub(crate) fn new(surface: &'a mut S, height: u16) -> io::Result<Self> {
        surface.acquire(height)?;
        Ok(Self { surface })
    }

    pub(crate) fn draw(
        &mut self,
        lines: &[Line<'static>],
        cursor: Option<(u16, u16)>,
    ) -> io::Result<()> {
        self.surface.draw(lines, cursor)
    }
}

impl<S: Surface + ?Sized> Drop for Acquired<'_, S> {
    fn drop(&mut self) {
        self.surface.release();
    }
}

/// The real terminal, drawn through an inline ratatui viewport.
#[derive(Default)]
pub struct TerminalSurface {
    app: Option<TerminalApp>,
}

impl TerminalSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn acquire(&mut self, height: u16) -> io::Result<()> {
        self.app = Some(TerminalApp::inline(height)?);
        Ok(())
    }

    fn draw(&mut self, lines: &[Line<'static>], cursor: Option<(u16, u16)>) -> io::Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| io::Error::other("terminal surface used before acquire"))?;

        app.terminal().draw(|frame| {
            let area = frame.area();
            frame.render_widget(Paragraph::new(lines.to_vec()), area);
            if let Some((x, y)) = cursor {
                frame.set_cursor_position((
                    area.x.saturating_add(x),
                    area.y.saturating_add(y),
                ));
            }
        })?;
        Ok(())
    }

    fn release(&mut self) {
        // Dropping the app restores the terminal
        self.app = None;
    }
}

/// A headless surface that records every frame.
///
/// Useful for driving prompts from tests or scripts without a TTY.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    columns: u16,
    rows: u16,
    frames: Vec<Vec<Line<'static>>>,
    cursor: Option<(u16, u16)>,
    height: Option<u16>,
    acquired: usize,
    released: usize,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(FALLBACK_COLUMNS, FALLBACK_ROWS)
    }
}

impl MemorySurface {
    #[must_use]
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            frames: Vec::new(),
            cursor: None,
            height: None,
            acquired: 0,
            released: 0,
        }
    }

    /// All frames drawn so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Vec<Line<'static>>] {
        &self.frames
    }

    /// The most recent frame as plain text, one string per row.
    #[must_use]
    pub fn last_frame_text(&self) -> Vec<String> {
        self.frames
            .last()
            .map(|frame| frame.iter().map(line_text).collect())
            .unwrap_or_default()
    }

    /// Cursor position of the most recent frame.
    #[must_use]
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Height requested by the last acquire.
    #[must_use]
    pub fn height(&self) -> Option<u16> {
        self.height
    }

    /// How many times the surface was acquired.
    #[must_use]
    pub fn acquired(&self) -> usize {
        self.acquired
    }

    /// How many times the surface was released.
    #[must_use]
    pub fn released(&self) -> usize {
        self.released
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.columns, self.rows))
    }

    fn acquire(&mut self, height: u16) -> io::Result<()> {
        self.acquired = self.acquired.saturating_add(1);
        self.height = Some(height);
        Ok(())
    }

    fn draw(&mut self, lines: &[Line<'static>], cursor: Option<(u16, u16)>) -> io::Result<()> {
        self.frames.push(lines.to_vec());
        self.cursor = cursor;
        Ok(())
    }

    fn release(&mut self) {
        self.released = self.released.saturating_add(1);
    }
}

/// Concatenates the text of a line's spans, dropping styles.
#[must_use]
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use ratatui::text::Span;

    use super::*;

    struct BrokenSize;

    impl Surface for BrokenSize {
        fn size(&self) -> io::Result<(u16, u16)> {
            Err(io::Error::other("no tty"))
        }
        fn acquire(&mut self, _height: u16) -> io::Result<()> {
            Ok(())
        }
        fn draw(&mut self, _lines: &[Line<'static>], _cursor: Option<(u16, u16)>) -> io::Result<()> {
            Ok(())
        }
        fn release(&mut self) {}
    }

    #[test]
    fn test_dimensions_fall_back_on_error() {
        assert_eq!(dimensions(&BrokenSize), (FALLBACK_COLUMNS, FALLBACK_ROWS));
    }

    #[test]
    fn test_dimensions_fall_back_on_zero() {
        let surface = MemorySurface::new(0, 40);
        assert_eq!(dimensions(&surface), (FALLBACK_COLUMNS, 40));
    }

    #[test]
    fn test_guard_releases_once_on_drop() {
        let mut surface = MemorySurface::default();
        {
            let mut guard = Acquired::new(&mut surface, 5).unwrap();
            guard.draw(&[Line::from("hello")], None).unwrap();
        }
        assert_eq!(surface.acquired(), 1);
        assert_eq!(surface.released(), 1);
        assert_eq!(surface.height(), Some(5));
        assert_eq!(surface.last_frame_text(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_line_text_joins_spans() {
        let line = Line::from(vec![Span::raw("a"), Span::raw("b"), Span::raw("c")]);
        assert_eq!(line_text(&line), "abc");
    }
}
