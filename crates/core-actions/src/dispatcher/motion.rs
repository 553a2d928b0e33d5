//! Motion sub-dispatch (cursor movement).
//!
//! Rules:
//! * Left at column 0 wraps to the end of the previous row.
//! * Right at the end of a row wraps to column 0 of the next row, only while
//!   a next row exists.
//! * Up/Down move one row; Down stops at the last row.
//! * After every move the column is clamped to the row length (0 on the
//!   virtual line past the last row).
//! * PageUp/PageDown repeat Up/Down `screen_rows - 1` times.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;
use core_text::{Document, Position};

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let doc = &state.document;
    match kind {
        MotionKind::PageUp => {
            for _ in 1..view.screen_rows {
                step(doc, &mut view.cursor, MotionKind::Up);
            }
        }
        MotionKind::PageDown => {
            for _ in 1..view.screen_rows {
                step(doc, &mut view.cursor, MotionKind::Down);
            }
        }
        other => step(doc, &mut view.cursor, other),
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = "motion",
        kind = ?kind,
        line = before.line,
        byte = before.byte,
        to_line = view.cursor.line,
        to_byte = view.cursor.byte,
        "motion"
    );
    DispatchResult::dirty()
}

/// Apply one elementary move to `cursor`.
pub(crate) fn step(doc: &Document, cursor: &mut Position, kind: MotionKind) {
    let rows = doc.len();
    match kind {
        MotionKind::Left => {
            if cursor.byte > 0 {
                cursor.byte -= 1;
            } else if cursor.line > 0 {
                cursor.line -= 1;
                cursor.byte = doc.line_len(cursor.line);
            }
        }
        MotionKind::Right => {
            if cursor.line < rows {
                if cursor.byte < doc.line_len(cursor.line) {
                    cursor.byte += 1;
                } else if cursor.line + 1 < rows {
                    cursor.line += 1;
                    cursor.byte = 0;
                }
            }
        }
        MotionKind::Up => cursor.line = cursor.line.saturating_sub(1),
        MotionKind::Down => {
            if cursor.line + 1 < rows {
                cursor.line += 1;
            }
        }
        MotionKind::LineStart => cursor.byte = 0,
        MotionKind::LineEnd => {
            if cursor.line < rows {
                cursor.byte = doc.line_len(cursor.line);
            }
        }
        MotionKind::PageUp | MotionKind::PageDown => {}
    }
    cursor.clamp_to(rows, |line| doc.line_len(line));
}
