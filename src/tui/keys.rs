//! Keyboard input for prompt sessions.

use std::{collections::VecDeque, io};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PromptResult;

/// A discrete key event as seen by the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Escape,
    Enter,
    Space,
    Backspace,
    /// A printable character.
    Char(char),
    /// Ctrl+C.
    Interrupt,
}

/// A blocking source of key events.
pub trait KeySource {
    /// Blocks until the next key event arrives.
    fn next_key(&mut self) -> PromptResult<Key>;
}

/// Reads keys from the terminal through crossterm.
///
/// The terminal must be in raw mode, which
/// [`TerminalSurface`](crate::tui::TerminalSurface) takes care of.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> PromptResult<Key> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(mapped) = map_key_event(key)
            {
                return Ok(mapped);
            }
        }
    }
}

/// Maps a crossterm key event to a prompt key, dropping keys prompts ignore.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    let mapped = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            return None;
        }
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        _ => return None,
    };
    Some(mapped)
}

/// Replays a fixed sequence of keys.
///
/// Returns an `UnexpectedEof` I/O error once the script runs out, so a
/// session that never terminates fails instead of blocking.
#[derive(Debug, Clone, Default)]
pub struct KeyScript {
    keys: VecDeque<Key>,
}

impl KeyScript {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Appends `Char` keys for every character of `text` (spaces become `Space`).
    #[must_use]
    pub fn typing(mut self, text: &str) -> Self {
        self.keys.extend(
            text.chars()
                .map(|c| if c == ' ' { Key::Space } else { Key::Char(c) }),
        );
        self
    }

    /// Appends a single key.
    #[must_use]
    pub fn then(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    /// Number of keys not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for KeyScript {
    fn next_key(&mut self) -> PromptResult<Key> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted").into()
        })
    }
}
