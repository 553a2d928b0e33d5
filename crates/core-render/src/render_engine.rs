//! Full-frame composition.
//!
//! Every frame repaints the text rows, status bar and message bar, then places
//! the cursor. Text rows are sliced from each row's `render`/`highlight` by
//! `coloff` and the screen width. A colour change is emitted only where the
//! highlight class changes, and the colour is reset at the end of each row.
//! Control bytes are drawn as a reverse-video placeholder; the active colour
//! is re-emitted after it.

use crate::status::status_bar;
use crate::style::{color_for, control_placeholder, is_control};
use crate::writer::Writer;
use anyhow::Result;
use core_model::View;
use core_state::EditorState;
use core_text::Row;
use crossterm::style::Color;
use std::io::Write;
use tracing::trace;

/// Produces frames from editor state and writes them to a sink.
pub struct RenderEngine {
    welcome: String,
    frames: u64,
    last_frame_bytes: usize,
}

impl RenderEngine {
    /// `version` appears in the welcome line of an empty document.
    pub fn new(version: &str) -> Self {
        Self {
            welcome: format!("Kiln editor -- version {version}"),
            frames: 0,
            last_frame_bytes: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame_bytes(&self) -> usize {
        self.last_frame_bytes
    }

    /// Compose and write one frame. `view` must already be scrolled.
    pub fn render<W: Write>(
        &mut self,
        state: &EditorState,
        view: &View,
        out: &mut W,
    ) -> Result<()> {
        let writer = self.compose(state, view);
        let n = writer.flush_to(out)?;
        self.frames += 1;
        self.last_frame_bytes = n;
        trace!(
            target: "render",
            frame = self.frames,
            bytes = n,
            rowoff = view.rowoff,
            coloff = view.coloff,
            "frame_rendered"
        );
        Ok(())
    }

    /// Record the frame's commands without writing them.
    pub fn compose(&self, state: &EditorState, view: &View) -> Writer {
        let mut w = Writer::new();
        w.hide_cursor();
        self.draw_rows(&mut w, state, view);
        draw_status_bar(&mut w, state, view);
        draw_message_bar(&mut w, state, view);
        let (col, row) = view.cursor_screen_pos();
        w.move_to(to_u16(col), to_u16(row));
        w.show_cursor();
        w
    }

    fn draw_rows(&self, w: &mut Writer, state: &EditorState, view: &View) {
        let doc = &state.document;
        for y in 0..view.screen_rows {
            w.move_to(0, to_u16(y));
            match doc.row(y + view.rowoff) {
                Some(row) => draw_text_row(w, row, view.coloff, view.screen_cols),
                None if doc.is_empty() && y == view.screen_rows / 3 => {
                    self.draw_welcome(w, view.screen_cols)
                }
                None => w.print_byte(b'~'),
            }
            w.clear_line();
        }
    }

    fn draw_welcome(&self, w: &mut Writer, cols: usize) {
        let text = &self.welcome.as_bytes()[..self.welcome.len().min(cols)];
        let mut padding = (cols - text.len()) / 2;
        if padding > 0 {
            w.print_byte(b'~');
            padding -= 1;
        }
        w.print_bytes(&vec![b' '; padding]);
        w.print_bytes(text);
    }
}

fn draw_text_row(w: &mut Writer, row: &Row, coloff: usize, cols: usize) {
    let render = row.render();
    let hl = row.highlight();
    let start = coloff.min(render.len());
    let end = (coloff + cols).min(render.len());
    let mut current: Option<Color> = None;
    for (&b, &class) in render[start..end].iter().zip(&hl[start..end]) {
        if is_control(b) {
            w.reverse();
            w.print_byte(control_placeholder(b));
            w.reset_attributes();
            if let Some(color) = current {
                w.foreground(color);
            }
            continue;
        }
        let color = color_for(class);
        if color != current {
            w.foreground(color.unwrap_or(Color::Reset));
            current = color;
        }
        w.print_byte(b);
    }
    if current.is_some() {
        w.foreground(Color::Reset);
    }
}

fn draw_status_bar(w: &mut Writer, state: &EditorState, view: &View) {
    w.move_to(0, to_u16(view.screen_rows));
    w.reverse();
    w.print_bytes(&status_bar(state, view));
    w.reset_attributes();
}

fn draw_message_bar(w: &mut Writer, state: &EditorState, view: &View) {
    w.move_to(0, to_u16(view.screen_rows + 1));
    w.clear_line();
    if let Some(msg) = state.message_line() {
        let bytes = msg.as_bytes();
        w.print_bytes(&bytes[..bytes.len().min(view.screen_cols)]);
    }
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
