#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, dispatch, translate_key};
use core_events::{KeyEvent, ctrl_key};
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_text::{Document, select_syntax};

pub fn model_from(text: &str) -> EditorModel {
    model_named(text, None)
}

pub fn model_named(text: &str, name: Option<&str>) -> EditorModel {
    let syntax = name.and_then(select_syntax);
    let doc = Document::from_bytes(text.as_bytes(), 8, syntax);
    let mut state = EditorState::new(doc);
    if let Some(name) = name {
        state = state.with_file_name(name);
    }
    EditorModel::new(state, View::new(80, 24))
}

/// Translate and dispatch each key, scrolling after every one like the
/// runtime loop does. Returns the last dispatch result.
pub fn press(model: &mut EditorModel, keys: &[KeyEvent]) -> DispatchResult {
    let mut last = DispatchResult::clean();
    for key in keys {
        if let Some(action) = translate_key(model.state(), *key) {
            last = dispatch(action, model);
        }
        model.scroll();
    }
    last
}

pub fn type_text(model: &mut EditorModel, text: &str) -> DispatchResult {
    let keys: Vec<KeyEvent> = text.bytes().map(KeyEvent::Char).collect();
    press(model, &keys)
}

pub fn ctrl(c: u8) -> KeyEvent {
    KeyEvent::Char(ctrl_key(c))
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .document
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r.raw()).into_owned())
        .collect()
}
