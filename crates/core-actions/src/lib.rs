//! Key translation and action dispatch for Kiln.
//!
//! Flow per key: [`translate_key`] turns a [`KeyEvent`] into an [`Action`]
//! given the current session state (normal editing, an open prompt, or a
//! pending quit confirmation), then [`dispatch`] applies it to the
//! [`core_model::EditorModel`] and reports whether a redraw or exit is due.
//! File IO used by the dispatcher lives in [`io_ops`].

pub mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use io_ops::{LoadError, SaveError, open_file, write_file};
pub use key_translator::translate_key;

use core_events::KeyEvent;

/// Cursor movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

/// Text mutations at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    InsertNewline,
    /// Delete the byte before the cursor.
    Backspace,
    /// Move right, then delete before the cursor.
    DeleteForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    Find,
    Quit,
    /// A key typed while the unsaved-changes warning is showing.
    QuitResponse(KeyEvent),
    /// A key typed while a prompt is open.
    PromptKey(KeyEvent),
}
