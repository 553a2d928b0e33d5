//! Editor session state: the open document, its file name, the status
//! message, the active prompt and search state.
//!
//! View concerns (cursor, scroll offsets, screen size) live in `core-model`;
//! this crate stays document-centric. Nothing here touches the terminal.
//!
//! Status messages carry their own expiry instant. While a prompt is active
//! the message bar shows the prompt line instead and nothing expires.

pub mod search;

pub use search::{Direction, SearchHit, SearchNav, SearchState};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use core_text::{Document, Position};

pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);
pub const HELP_MESSAGE: &str = "Help: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";
pub const QUIT_WARNING: &str =
    "WARNING!!! File has unsaved changes. Are you sure you want to quit? (y/N)";

/// Ephemeral status message container.
#[derive(Debug, Clone)]
pub struct EphemeralMessage {
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Search,
}

impl PromptKind {
    fn render(self, input: &str) -> String {
        match self {
            PromptKind::SaveAs => format!("Save as: {input}"),
            PromptKind::Search => format!("Search: {input} (Use ESC/Arrows/Enter)"),
        }
    }
}

/// Cursor and scroll offsets captured when a prompt opens, restored on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSnapshot {
    pub cursor: Position,
    pub rowoff: usize,
    pub coloff: usize,
}

/// Single-line input shown in the message bar.
#[derive(Debug, Clone)]
pub struct PromptState {
    pub kind: PromptKind,
    input: Vec<u8>,
    pub saved_view: ViewSnapshot,
}

impl PromptState {
    pub fn new(kind: PromptKind, saved_view: ViewSnapshot) -> Self {
        Self {
            kind,
            input: Vec::new(),
            saved_view,
        }
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn push(&mut self, b: u8) {
        self.input.push(b);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.input.pop()
    }

    /// The message-bar line for this prompt.
    pub fn line(&self) -> String {
        self.kind.render(&String::from_utf8_lossy(&self.input))
    }
}

/// Top-level editor state container (one document per session).
#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub file_name: Option<PathBuf>,
    pub ephemeral_status: Option<EphemeralMessage>,
    pub message_timeout: Duration,
    pub prompt: Option<PromptState>,
    pub search: SearchState,
    /// The unsaved-changes warning is showing and awaits y/N.
    pub quit_pending: bool,
    pub quit_confirm: bool,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            file_name: None,
            ephemeral_status: None,
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
            prompt: None,
            search: SearchState::new(),
            quit_pending: false,
            quit_confirm: true,
        }
    }

    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// File name for the status bar.
    pub fn display_name(&self) -> String {
        self.file_name
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Set the file name and reselect the highlighting rule for it.
    pub fn set_file_name(&mut self, path: PathBuf) {
        let syntax = core_text::select_syntax(&path.to_string_lossy());
        self.file_name = Some(path);
        self.document.set_syntax(syntax);
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    /// Set a status message visible for the configured timeout.
    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S) {
        let ttl = self.message_timeout;
        self.set_ephemeral_for(msg, ttl);
    }

    pub fn set_ephemeral_for<S: Into<String>>(&mut self, msg: S, ttl: Duration) {
        self.ephemeral_status = Some(EphemeralMessage {
            text: msg.into(),
            expires_at: Instant::now() + ttl,
        });
    }

    pub fn clear_ephemeral(&mut self) {
        self.ephemeral_status = None;
    }

    /// Tick ephemeral status; returns true if message expired and was cleared.
    pub fn tick_ephemeral(&mut self) -> bool {
        if self.prompt.is_none()
            && let Some(m) = &self.ephemeral_status
            && Instant::now() >= m.expires_at
        {
            self.ephemeral_status = None;
            return true;
        }
        false
    }

    /// Text for the message bar: the prompt line while prompting, otherwise
    /// the unexpired status message.
    pub fn message_line(&self) -> Option<String> {
        if let Some(prompt) = &self.prompt {
            return Some(prompt.line());
        }
        self.ephemeral_status
            .as_ref()
            .filter(|m| Instant::now() < m.expires_at)
            .map(|m| m.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str) -> EditorState {
        EditorState::new(Document::from_bytes(text.as_bytes(), 8, None))
    }

    #[test]
    fn ephemeral_lifecycle() {
        let mut st = state("Hello");
        st.set_ephemeral_for("Message", Duration::from_millis(50));
        assert!(st.ephemeral_status.is_some());
        // Should not expire immediately
        assert!(!st.tick_ephemeral());
        assert_eq!(st.message_line().as_deref(), Some("Message"));
        // Fast-forward by manually adjusting expires_at (avoid sleeping in test)
        if let Some(m) = &mut st.ephemeral_status {
            m.expires_at = Instant::now() - Duration::from_millis(1);
        }
        assert_eq!(st.message_line(), None);
        assert!(st.tick_ephemeral(), "expected expiration");
        assert!(st.ephemeral_status.is_none());
    }

    #[test]
    fn prompt_line_replaces_status_message() {
        let mut st = state("");
        st.set_ephemeral(HELP_MESSAGE);
        let mut prompt = PromptState::new(PromptKind::Search, ViewSnapshot::default());
        prompt.push(b'f');
        prompt.push(b'n');
        st.prompt = Some(prompt);
        assert_eq!(
            st.message_line().as_deref(),
            Some("Search: fn (Use ESC/Arrows/Enter)")
        );
        st.prompt = None;
        assert_eq!(st.message_line().as_deref(), Some(HELP_MESSAGE));
    }

    #[test]
    fn prompt_suspends_expiry() {
        let mut st = state("");
        st.set_ephemeral_for("x", Duration::ZERO);
        st.prompt = Some(PromptState::new(PromptKind::SaveAs, ViewSnapshot::default()));
        assert!(!st.tick_ephemeral());
        assert_eq!(st.prompt.as_ref().map(PromptState::line).as_deref(), Some("Save as: "));
    }

    #[test]
    fn display_name_defaults() {
        let st = state("");
        assert_eq!(st.display_name(), "[No Name]");
        let st = st.with_file_name("notes.txt");
        assert_eq!(st.display_name(), "notes.txt");
    }

    #[test]
    fn set_file_name_reselects_syntax() {
        let mut st = state("int x;");
        assert_eq!(st.document.filetype(), None);
        st.set_file_name(PathBuf::from("main.c"));
        assert_eq!(st.document.filetype(), Some("c"));
        assert_eq!(
            st.document.rows()[0].highlight()[0],
            core_text::Highlight::Keyword2
        );
    }

    #[test]
    fn prompt_pop_and_empty() {
        let mut p = PromptState::new(PromptKind::SaveAs, ViewSnapshot::default());
        assert!(p.is_empty());
        p.push(b'a');
        assert_eq!(p.pop(), Some(b'a'));
        assert_eq!(p.pop(), None);
    }
}
