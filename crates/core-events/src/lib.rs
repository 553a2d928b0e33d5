//! Core event types for Kiln.
//!
//! Terminal protocol decoding lives in `core-input`; everything above it sees
//! only the values defined here. A key is either a literal byte (control
//! bytes included, e.g. Ctrl-S arrives as `Char(0x13)`) or one of a small set
//! of named keys.

use std::fmt;

/// Byte produced by holding Ctrl with `b` (`ctrl_key(b's') == 0x13`).
pub const fn ctrl_key(b: u8) -> u8 {
    b & 0x1f
}

pub const ENTER: u8 = b'\r';
pub const TAB: u8 = b'\t';
/// Ctrl-H, treated like Backspace.
pub const CTRL_H: u8 = ctrl_key(b'h');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A literal byte, printable or control.
    Char(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Escape,
}

impl KeyEvent {
    /// `Char(c)` for bytes 32..=126.
    pub fn printable(self) -> Option<u8> {
        match self {
            KeyEvent::Char(c) if (32..=126).contains(&c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KeyEvent::Char(c) if (32..=126).contains(&c) => write!(f, "{}", c as char),
            KeyEvent::Char(c) if c < 32 => write!(f, "^{}", (c + b'@') as char),
            KeyEvent::Char(c) => write!(f, "\\x{c:02x}"),
            other => write!(f, "<{other:?}>"),
        }
    }
}

/// Top-level event consumed by the input loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize { cols: u16, rows: u16 },
}

impl From<KeyEvent> for Event {
    fn from(key: KeyEvent) -> Self {
        Event::Key(key)
    }
}
