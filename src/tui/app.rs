//! Terminal application wrapper with RAII setup/teardown.

use std::io::{self, Stdout};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};

/// Type alias for the terminal with crossterm backend.
pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// RAII wrapper for terminal setup and teardown.
///
/// Enables raw mode and reserves an inline viewport below the cursor on
/// creation. On drop the viewport is cleared, the cursor shown again and raw
/// mode disabled (even on panic). Prompts stay inline with the shell output
/// instead of switching to the alternate screen.
pub struct TerminalApp {
    terminal: TuiTerminal,
}

impl TerminalApp {
    /// Creates a new terminal application with an inline viewport of `height` rows.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn inline(height: u16) -> io::Result<Self> {
        enable_raw_mode()?;
        let backend = CrosstermBackend::new(io::stdout());
        let options = TerminalOptions {
            viewport: Viewport::Inline(height),
        };
        match Terminal::with_options(backend, options) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    /// Returns a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalApp {
    fn drop(&mut self) {
        // Attempt to restore terminal state, ignoring errors during cleanup
        let _ = self.terminal.clear();
        let _ = self.terminal.show_cursor();
        let _ = disable_raw_mode();
    }
}
