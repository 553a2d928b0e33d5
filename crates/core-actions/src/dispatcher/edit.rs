//! Text edit action handling (insert/newline/backspace/delete).
//!
//! All mutation goes through `Document`, which re-derives render and
//! highlight before returning; this layer only moves the cursor.

use super::DispatchResult;
use super::motion;
use crate::{EditKind, MotionKind};
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let doc = &mut state.document;
    let op = match kind {
        EditKind::InsertByte(c) => {
            doc.insert_char(&mut view.cursor, c);
            "insert_byte"
        }
        EditKind::InsertNewline => {
            doc.insert_newline(&mut view.cursor);
            "insert_newline"
        }
        EditKind::Backspace => {
            doc.delete_char_before(&mut view.cursor);
            "backspace"
        }
        EditKind::DeleteForward => {
            motion::step(doc, &mut view.cursor, MotionKind::Right);
            doc.delete_char_before(&mut view.cursor);
            "delete_forward"
        }
    };
    tracing::trace!(
        target: "actions.dispatch",
        op,
        line = before.line,
        byte = before.byte,
        to_line = view.cursor.line,
        to_byte = view.cursor.byte,
        rows = doc.len(),
        "edit"
    );
    DispatchResult::dirty()
}
