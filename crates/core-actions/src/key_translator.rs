//! Stateless key -> Action translation.
//!
//! Session state picks the table: an open prompt swallows every key, a
//! pending quit warning takes the next key as its answer, otherwise the
//! normal editing bindings apply. Any other byte, control bytes included, is
//! inserted; only Escape and Ctrl-L translate to `None`.

use crate::{Action, EditKind, MotionKind};
use core_events::{CTRL_H, ENTER, KeyEvent, TAB, ctrl_key};
use core_state::EditorState;

pub fn translate_key(state: &EditorState, key: KeyEvent) -> Option<Action> {
    if state.prompt.is_some() {
        return Some(Action::PromptKey(key));
    }
    if state.quit_pending {
        return Some(Action::QuitResponse(key));
    }
    normal_map(key)
}

fn normal_map(key: KeyEvent) -> Option<Action> {
    let action = match key {
        KeyEvent::ArrowUp => Action::Motion(MotionKind::Up),
        KeyEvent::ArrowDown => Action::Motion(MotionKind::Down),
        KeyEvent::ArrowLeft => Action::Motion(MotionKind::Left),
        KeyEvent::ArrowRight => Action::Motion(MotionKind::Right),
        KeyEvent::Home => Action::Motion(MotionKind::LineStart),
        KeyEvent::End => Action::Motion(MotionKind::LineEnd),
        KeyEvent::PageUp => Action::Motion(MotionKind::PageUp),
        KeyEvent::PageDown => Action::Motion(MotionKind::PageDown),
        KeyEvent::Backspace => Action::Edit(EditKind::Backspace),
        KeyEvent::Delete => Action::Edit(EditKind::DeleteForward),
        KeyEvent::Escape => return None,
        KeyEvent::Char(ENTER) => Action::Edit(EditKind::InsertNewline),
        KeyEvent::Char(CTRL_H) => Action::Edit(EditKind::Backspace),
        KeyEvent::Char(c) if c == ctrl_key(b'q') => Action::Quit,
        KeyEvent::Char(c) if c == ctrl_key(b's') => Action::Save,
        KeyEvent::Char(c) if c == ctrl_key(b'f') => Action::Find,
        KeyEvent::Char(c) if c == ctrl_key(b'l') => return None,
        KeyEvent::Char(c) => Action::Edit(EditKind::InsertByte(c)),
    };
    Some(action)
}
