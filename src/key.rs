// src/key.rs - Logical key events consumed by the editor core

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Esc,
}

impl Key {
    /// Decode a terminal key event. Key releases, control chords and keys
    /// with no editor meaning yield `None`.
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let key = match event.code {
            KeyCode::Char(_) if event.modifiers.contains(KeyModifiers::CONTROL) => return None,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            _ => return None,
        };
        Some(key)
    }

    /// Printable ASCII character carried by this key, if any.
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Char(c) if (' '..='~').contains(&c) => Some(c),
            _ => None,
        }
    }
}
