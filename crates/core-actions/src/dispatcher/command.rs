//! Save, find and quit handling.

use super::DispatchResult;
use crate::io_ops;
use core_events::{ENTER, KeyEvent};
use core_model::View;
use core_state::{EditorState, PromptKind, PromptState, QUIT_WARNING};

pub(crate) fn handle_save(state: &mut EditorState, view: &mut View) -> DispatchResult {
    if state.file_name.is_none() {
        state.prompt = Some(PromptState::new(PromptKind::SaveAs, view.snapshot()));
        return DispatchResult::dirty();
    }
    save_now(state)
}

/// Write the document to the current file name and report the outcome in the
/// status message. A failed write leaves the document dirty.
pub(super) fn save_now(state: &mut EditorState) -> DispatchResult {
    let Some(path) = state.file_name.clone() else {
        state.set_ephemeral("Save aborted");
        return DispatchResult::dirty();
    };
    let bytes = state.document.to_bytes();
    match io_ops::write_file(&path, &bytes) {
        Ok(n) => {
            state.document.mark_clean();
            state.set_ephemeral(format!("{n} bytes written to disk"));
        }
        Err(e) => {
            state.set_ephemeral(format!("Can't save! I/O error: {e}"));
        }
    }
    DispatchResult::dirty()
}

pub(crate) fn handle_find(state: &mut EditorState, view: &mut View) -> DispatchResult {
    state.search.reset(&mut state.document);
    state.prompt = Some(PromptState::new(PromptKind::Search, view.snapshot()));
    DispatchResult::dirty()
}

pub(crate) fn handle_quit(state: &mut EditorState) -> DispatchResult {
    if state.quit_confirm && state.is_dirty() {
        state.quit_pending = true;
        state.set_ephemeral(QUIT_WARNING);
        tracing::debug!(
            target: "actions.dispatch",
            dirty = state.document.dirty_count(),
            "quit_confirm_requested"
        );
        return DispatchResult::dirty();
    }
    DispatchResult::quit()
}

pub(crate) fn handle_quit_response(key: KeyEvent, state: &mut EditorState) -> DispatchResult {
    match key {
        KeyEvent::Char(b'y' | b'Y') => DispatchResult::quit(),
        KeyEvent::Char(b'n' | b'N' | ENTER) => {
            state.quit_pending = false;
            state.clear_ephemeral();
            DispatchResult::dirty()
        }
        _ => {
            state.set_ephemeral(QUIT_WARNING);
            DispatchResult::dirty()
        }
    }
}
