//! Terminal command buffer for one frame.
//!
//! The engine records primitive operations (move, clear, bytes, style) in
//! order; `flush_to` encodes them with crossterm into a single byte vector and
//! hands it to the sink in one `write_all`, so the terminal never sees a
//! half-drawn frame.
//!
//! Invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * Adjacent byte runs are merged into one `Bytes` command.
//! * Positions are absolute, (0,0) origin; the caller ensures bounds.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    /// Clear from the cursor to the end of the line.
    ClearLine,
    Bytes(Vec<u8>),
    Foreground(Color),
    Reverse,
    /// Reset all attributes and colours.
    ResetAttributes,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }

    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }

    pub fn foreground(&mut self, color: Color) {
        self.cmds.push(Command::Foreground(color));
    }

    pub fn reverse(&mut self) {
        self.cmds.push(Command::Reverse);
    }

    pub fn reset_attributes(&mut self) {
        self.cmds.push(Command::ResetAttributes);
    }

    pub fn print_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        if let Some(Command::Bytes(last)) = self.cmds.last_mut() {
            last.extend_from_slice(bytes);
            return;
        }
        self.cmds.push(Command::Bytes(bytes.to_vec()));
    }

    pub fn print_byte(&mut self, b: u8) {
        self.print_bytes(&[b]);
    }

    /// Encode every command into one buffer.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut frame: Vec<u8> = Vec::new();
        for c in &self.cmds {
            match c {
                Command::HideCursor => queue!(frame, Hide)?,
                Command::ShowCursor => queue!(frame, Show)?,
                Command::MoveTo(x, y) => queue!(frame, MoveTo(*x, *y))?,
                Command::ClearLine => queue!(frame, Clear(ClearType::UntilNewLine))?,
                Command::Bytes(b) => frame.extend_from_slice(b),
                Command::Foreground(color) => queue!(frame, SetForegroundColor(*color))?,
                Command::Reverse => queue!(frame, SetAttribute(Attribute::Reverse))?,
                Command::ResetAttributes => queue!(frame, SetAttribute(Attribute::Reset))?,
            }
        }
        Ok(frame)
    }

    /// Write the encoded frame to `out` in one call and flush. Returns the
    /// number of bytes written.
    pub fn flush_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let frame = self.encode()?;
        out.write_all(&frame)?;
        out.flush()?;
        Ok(frame.len())
    }
}
