use core_events::{KeyEvent, ctrl_key};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Map a crossterm key event into zero or more editor keys.
///
/// Releases and unsupported keys map to nothing. Ctrl plus an ASCII letter (or
/// one of `@[\]^_`) becomes the matching control byte; a non-ASCII character
/// becomes one `Char` per UTF-8 byte.
pub(crate) fn map_key_event(event: &CKeyEvent) -> Vec<KeyEvent> {
    if matches!(event.kind, CKeyEventKind::Release) {
        return Vec::new();
    }
    let single = match event.code {
        CKeyCode::Char(c) => return map_char(c, event.modifiers),
        CKeyCode::Enter => KeyEvent::Char(core_events::ENTER),
        CKeyCode::Tab => KeyEvent::Char(core_events::TAB),
        CKeyCode::Esc => KeyEvent::Escape,
        CKeyCode::Backspace => KeyEvent::Backspace,
        CKeyCode::Delete => KeyEvent::Delete,
        CKeyCode::Up => KeyEvent::ArrowUp,
        CKeyCode::Down => KeyEvent::ArrowDown,
        CKeyCode::Left => KeyEvent::ArrowLeft,
        CKeyCode::Right => KeyEvent::ArrowRight,
        CKeyCode::Home => KeyEvent::Home,
        CKeyCode::End => KeyEvent::End,
        CKeyCode::PageUp => KeyEvent::PageUp,
        CKeyCode::PageDown => KeyEvent::PageDown,
        _ => return Vec::new(),
    };
    vec![single]
}

fn map_char(c: char, mods: CKeyModifiers) -> Vec<KeyEvent> {
    if mods.contains(CKeyModifiers::CONTROL) && c.is_ascii() {
        let upper = c.to_ascii_uppercase() as u8;
        if (b'@'..=b'_').contains(&upper) {
            return vec![KeyEvent::Char(ctrl_key(upper))];
        }
    }
    let mut buf = [0u8; 4];
    c.encode_utf8(&mut buf)
        .bytes()
        .map(KeyEvent::Char)
        .collect()
}
