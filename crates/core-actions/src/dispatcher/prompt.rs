//! Keys typed into the message-bar prompt.
//!
//! Editing: Backspace, Delete and Ctrl-H drop the last byte; bytes 32..=126
//! append. Escape cancels. Enter confirms only when the input is non-empty;
//! an empty Enter is passed on to the incremental handler like any other key.
//!
//! Search runs incrementally after every key that does not close the prompt.
//! Cancelling a search restores the cursor and scroll offsets captured when
//! the prompt opened; confirming leaves the cursor on the match.

use super::{DispatchResult, command};
use core_events::{CTRL_H, ENTER, KeyEvent};
use core_model::View;
use core_state::{EditorState, PromptKind, SearchNav};
use core_text::Position;
use std::path::PathBuf;

pub(crate) fn handle_prompt_key(
    key: KeyEvent,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let Some(prompt) = state.prompt.as_mut() else {
        return DispatchResult::clean();
    };
    let kind = prompt.kind;
    match key {
        KeyEvent::Backspace | KeyEvent::Delete | KeyEvent::Char(CTRL_H) => {
            prompt.pop();
        }
        KeyEvent::Escape => {
            let saved_view = prompt.saved_view;
            state.prompt = None;
            state.clear_ephemeral();
            tracing::debug!(target: "actions.prompt", kind = ?kind, "prompt_cancel");
            match kind {
                PromptKind::Search => {
                    state.search.reset(&mut state.document);
                    view.restore(saved_view);
                }
                PromptKind::SaveAs => state.set_ephemeral("Save aborted"),
            }
            return DispatchResult::dirty();
        }
        KeyEvent::Char(ENTER) if !prompt.is_empty() => {
            let input = prompt.input().to_vec();
            state.prompt = None;
            state.clear_ephemeral();
            tracing::debug!(
                target: "actions.prompt",
                kind = ?kind,
                len = input.len(),
                "prompt_confirm"
            );
            return match kind {
                PromptKind::Search => {
                    state.search.reset(&mut state.document);
                    DispatchResult::dirty()
                }
                PromptKind::SaveAs => {
                    let path = PathBuf::from(String::from_utf8_lossy(&input).into_owned());
                    state.set_file_name(path);
                    command::save_now(state)
                }
            };
        }
        _ => {
            if let Some(c) = key.printable() {
                prompt.push(c);
            }
        }
    }
    if kind == PromptKind::Search {
        search_step(key, state, view);
    }
    DispatchResult::dirty()
}

fn search_step(key: KeyEvent, state: &mut EditorState, view: &mut View) {
    let nav = match key {
        KeyEvent::Char(ENTER) | KeyEvent::Escape => {
            state.search.reset(&mut state.document);
            return;
        }
        KeyEvent::ArrowRight | KeyEvent::ArrowDown => SearchNav::Next,
        KeyEvent::ArrowLeft | KeyEvent::ArrowUp => SearchNav::Prev,
        _ => SearchNav::Edit,
    };
    let query = match &state.prompt {
        Some(p) => p.input().to_vec(),
        None => return,
    };
    if let Some(hit) = state.search.step(&mut state.document, &query, nav) {
        view.cursor = Position::new(hit.line, hit.cx);
        view.scroll_cursor_to_top(&state.document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::command::handle_find;
    use core_state::PromptState;
    use core_text::{Document, Highlight};
    use pretty_assertions::assert_eq;

    fn setup(text: &str) -> (EditorState, View) {
        (
            EditorState::new(Document::from_bytes(text.as_bytes(), 8, None)),
            View::new(80, 24),
        )
    }

    fn type_keys(keys: &[KeyEvent], st: &mut EditorState, v: &mut View) {
        for k in keys {
            handle_prompt_key(*k, st, v);
        }
    }

    #[test]
    fn incremental_search_moves_cursor_and_overlays_match() {
        let (mut st, mut v) = setup("one\ntwo\nthree");
        handle_find(&mut st, &mut v);
        type_keys(&[KeyEvent::Char(b't'), KeyEvent::Char(b'h')], &mut st, &mut v);
        assert_eq!(v.cursor, Position::new(2, 0));
        assert_eq!(v.rowoff, 3);
        let hl = st.document.rows()[2].highlight();
        assert_eq!(&hl[..2], &[Highlight::Match, Highlight::Match]);
        assert_eq!(hl[2], Highlight::Normal);
        assert_eq!(st.message_line().as_deref(), Some("Search: th (Use ESC/Arrows/Enter)"));
    }

    #[test]
    fn escape_restores_view_and_highlight() {
        let (mut st, mut v) = setup("alpha\nbeta\ngamma");
        v.cursor = Position::new(0, 3);
        handle_find(&mut st, &mut v);
        type_keys(&[KeyEvent::Char(b'g')], &mut st, &mut v);
        assert_eq!(v.cursor.line, 2);
        handle_prompt_key(KeyEvent::Escape, &mut st, &mut v);
        assert!(st.prompt.is_none());
        assert_eq!(v.cursor, Position::new(0, 3));
        assert_eq!(v.rowoff, 0);
        assert!(st.document.rows()[2].highlight().iter().all(|h| *h == Highlight::Normal));
        assert_eq!(st.message_line(), None);
    }

    #[test]
    fn enter_keeps_cursor_on_match() {
        let (mut st, mut v) = setup("alpha\nbeta");
        handle_find(&mut st, &mut v);
        type_keys(
            &[KeyEvent::Char(b'e'), KeyEvent::Char(b't'), KeyEvent::Char(ENTER)],
            &mut st,
            &mut v,
        );
        assert!(st.prompt.is_none());
        assert_eq!(v.cursor, Position::new(1, 1));
        assert!(!st.search.has_overlay());
    }

    #[test]
    fn arrows_cycle_between_matches() {
        let (mut st, mut v) = setup("apple\nbanana\napple");
        handle_find(&mut st, &mut v);
        type_keys(&[KeyEvent::Char(b'a'), KeyEvent::Char(b'p')], &mut st, &mut v);
        assert_eq!(v.cursor.line, 0);
        type_keys(&[KeyEvent::ArrowDown], &mut st, &mut v);
        assert_eq!(v.cursor.line, 2);
        type_keys(&[KeyEvent::ArrowDown], &mut st, &mut v);
        assert_eq!(v.cursor.line, 0);
        type_keys(&[KeyEvent::ArrowUp], &mut st, &mut v);
        assert_eq!(v.cursor.line, 2);
    }

    #[test]
    fn empty_enter_keeps_prompt_open() {
        let (mut st, mut v) = setup("abc");
        handle_find(&mut st, &mut v);
        handle_prompt_key(KeyEvent::Char(ENTER), &mut st, &mut v);
        assert!(st.prompt.is_some());
    }

    #[test]
    fn backspace_edits_prompt_input() {
        let mut st = setup("").0;
        let mut v = View::new(80, 24);
        st.prompt = Some(PromptState::new(PromptKind::SaveAs, v.snapshot()));
        type_keys(
            &[
                KeyEvent::Char(b'a'),
                KeyEvent::Char(b'b'),
                KeyEvent::Backspace,
                KeyEvent::Char(0x01),
            ],
            &mut st,
            &mut v,
        );
        assert_eq!(st.prompt.as_ref().unwrap().input(), b"a");
    }

    #[test]
    fn save_as_cancel_reports_abort() {
        let (mut st, mut v) = setup("x");
        st.prompt = Some(PromptState::new(PromptKind::SaveAs, v.snapshot()));
        handle_prompt_key(KeyEvent::Escape, &mut st, &mut v);
        assert!(st.prompt.is_none());
        assert_eq!(st.message_line().as_deref(), Some("Save aborted"));
    }

    #[test]
    fn save_as_confirm_names_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.c");
        let (mut st, mut v) = setup("int x;");
        st.document.insert_row(1, Vec::new());
        st.prompt = Some(PromptState::new(PromptKind::SaveAs, v.snapshot()));
        for b in path.to_string_lossy().bytes() {
            handle_prompt_key(KeyEvent::Char(b), &mut st, &mut v);
        }
        handle_prompt_key(KeyEvent::Char(ENTER), &mut st, &mut v);
        assert!(st.prompt.is_none());
        assert_eq!(st.file_name(), Some(path.as_path()));
        assert_eq!(st.document.filetype(), Some("c"));
        assert!(!st.is_dirty());
        assert_eq!(std::fs::read(&path).unwrap(), b"int x;\n\n");
    }
}
