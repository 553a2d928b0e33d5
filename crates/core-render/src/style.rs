//! Highlight class to terminal colour mapping.

use core_text::Highlight;
use crossterm::style::Color;

/// Foreground colour for a class; `None` means the terminal default.
pub fn color_for(class: Highlight) -> Option<Color> {
    match class {
        Highlight::Normal => None,
        Highlight::Comment | Highlight::MlComment => Some(Color::DarkCyan),
        Highlight::Keyword1 => Some(Color::DarkYellow),
        Highlight::Keyword2 => Some(Color::DarkGreen),
        Highlight::String => Some(Color::DarkMagenta),
        Highlight::Number => Some(Color::DarkRed),
        Highlight::Match => Some(Color::DarkBlue),
    }
}

/// Visible placeholder for a control byte: `@`..`Z` for 0..=26, `?` otherwise.
pub fn control_placeholder(b: u8) -> u8 {
    if b <= 26 { b'@' + b } else { b'?' }
}

pub fn is_control(b: u8) -> bool {
    b < 32 || b == 127
}
