//! Dispatcher applying `Action` to the editor model.
//!
//! Sub-modules:
//! * `motion`  - cursor movement
//! * `edit`    - text mutation (insert/newline/backspace/delete)
//! * `command` - save, find, quit and the quit confirmation
//! * `prompt`  - keys typed into the message-bar prompt (save-as, search)
//!
//! Every handler receives disjoint borrows of `EditorState` and `View` from
//! `EditorModel::split_state_and_view`. Scrolling is not done here; the
//! runtime calls `View::scroll` once per frame after dispatch.

use crate::Action;
use core_model::EditorModel;

mod command;
mod edit;
mod motion;
mod prompt;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing whether
/// a render is needed (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Save => command::handle_save(state, view),
        Action::Find => command::handle_find(state, view),
        Action::Quit => command::handle_quit(state),
        Action::QuitResponse(key) => command::handle_quit_response(key, state),
        Action::PromptKey(key) => prompt::handle_prompt_key(key, state, view),
    }
}
