//! Editor model: session state plus the single view onto it.
//!
//! A [`View`] owns presentation state: the cursor (raw column + row), the
//! derived render column `rx`, the scroll origin and the text area size.
//! `EditorState` stays document-centric and never learns about scrolling.
//!
//! Invariants (after [`View::scroll`]):
//! * `rx == cx_to_rx(cursor)` on a real row, 0 on the virtual last line.
//! * `rowoff <= cursor.line < rowoff + screen_rows`.
//! * `coloff <= rx < coloff + screen_cols`.
//!
//! Between calls the cursor may sit anywhere the edit left it; `scroll` only
//! moves the window, never the cursor.

use core_state::{EditorState, ViewSnapshot};
use core_text::{Document, Position};

/// Rows reserved below the text area (status bar + message bar).
pub const RESERVED_ROWS: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub cursor: Position,
    /// Render column of the cursor; derived by [`View::scroll`].
    pub rx: usize,
    pub rowoff: usize,
    pub coloff: usize,
    /// Text rows (terminal rows minus [`RESERVED_ROWS`]).
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl View {
    /// View for a terminal of `cols` x `rows` cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut v = Self {
            cursor: Position::origin(),
            rx: 0,
            rowoff: 0,
            coloff: 0,
            screen_rows: 0,
            screen_cols: 0,
        };
        v.resize(cols, rows);
        v
    }

    /// Adopt a new terminal size. Offsets re-clamp on the next `scroll`.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.screen_cols = usize::from(cols);
        self.screen_rows = usize::from(rows.saturating_sub(RESERVED_ROWS));
    }

    /// Recompute `rx` and clamp the scroll origin so the cursor is visible.
    /// Idempotent for an unchanged cursor and size.
    pub fn scroll(&mut self, doc: &Document) {
        self.rx = doc
            .row(self.cursor.line)
            .map_or(0, |row| row.cx_to_rx(self.cursor.byte, doc.tab_stop()));
        self.rowoff = clamp_offset(self.rowoff, self.cursor.line, self.screen_rows);
        self.coloff = clamp_offset(self.coloff, self.rx, self.screen_cols);
    }

    /// Force the cursor row to the top of the window on the next `scroll`.
    pub fn scroll_cursor_to_top(&mut self, doc: &Document) {
        self.rowoff = doc.len();
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            cursor: self.cursor,
            rowoff: self.rowoff,
            coloff: self.coloff,
        }
    }

    pub fn restore(&mut self, snap: ViewSnapshot) {
        self.cursor = snap.cursor;
        self.rowoff = snap.rowoff;
        self.coloff = snap.coloff;
    }

    /// Screen position of the cursor as (column, row).
    pub fn cursor_screen_pos(&self) -> (usize, usize) {
        (
            self.rx.saturating_sub(self.coloff),
            self.cursor.line.saturating_sub(self.rowoff),
        )
    }
}

/// Smallest move of `offset` that puts `pos` inside `[offset, offset + extent)`.
/// A zero extent is treated as one so the window never passes the cursor.
pub fn clamp_offset(offset: usize, pos: usize, extent: usize) -> usize {
    let extent = extent.max(1);
    if pos < offset {
        pos
    } else if pos >= offset + extent {
        pos + 1 - extent
    } else {
        offset
    }
}

#[derive(Debug)]
pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, view: View) -> Self {
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of the state and the view.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Run [`View::scroll`] against the current document.
    pub fn scroll(&mut self) {
        let (state, view) = self.split_state_and_view();
        view.scroll(&state.document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_bytes(text.as_bytes(), 8, None)
    }

    fn ten_lines() -> Document {
        doc("0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n")
    }

    #[test]
    fn resize_reserves_two_rows() {
        let v = View::new(80, 24);
        assert_eq!(v.screen_rows, 22);
        assert_eq!(v.screen_cols, 80);
        assert_eq!(View::new(10, 1).screen_rows, 0);
    }

    #[test]
    fn scroll_down_and_up() {
        let d = ten_lines();
        let mut v = View::new(20, 7); // 5 text rows
        v.scroll(&d);
        assert_eq!(v.rowoff, 0);
        v.cursor.line = 4;
        v.scroll(&d);
        assert_eq!(v.rowoff, 0);
        v.cursor.line = 5;
        v.scroll(&d);
        assert_eq!(v.rowoff, 1);
        v.cursor.line = 9;
        v.scroll(&d);
        assert_eq!(v.rowoff, 5);
        v.cursor.line = 3;
        v.scroll(&d);
        assert_eq!(v.rowoff, 3);
    }

    #[test]
    fn scroll_is_idempotent() {
        let d = doc("\tabc\tdef");
        let mut v = View::new(6, 10);
        v.cursor = Position::new(0, 5);
        v.scroll(&d);
        let once = v.clone();
        v.scroll(&d);
        assert_eq!(v, once);
    }

    #[test]
    fn rx_follows_tabs_and_drives_coloff() {
        let d = doc("\t\tx");
        let mut v = View::new(10, 10);
        v.cursor = Position::new(0, 2);
        v.scroll(&d);
        assert_eq!(v.rx, 16);
        assert_eq!(v.coloff, 7);
        assert_eq!(v.cursor_screen_pos(), (9, 0));
        v.cursor.byte = 0;
        v.scroll(&d);
        assert_eq!(v.coloff, 0);
    }

    #[test]
    fn virtual_last_line_has_zero_rx() {
        let d = doc("abc");
        let mut v = View::new(10, 10);
        v.cursor = Position::new(1, 0);
        v.scroll(&d);
        assert_eq!(v.rx, 0);
    }

    #[test]
    fn scroll_cursor_to_top_lands_match_on_first_row() {
        let d = ten_lines();
        let mut v = View::new(20, 7);
        v.cursor.line = 6;
        v.scroll_cursor_to_top(&d);
        v.scroll(&d);
        assert_eq!(v.rowoff, 6);
    }

    #[test]
    fn snapshot_round_trip() {
        let mut v = View::new(20, 7);
        v.cursor = Position::new(3, 1);
        v.rowoff = 2;
        let snap = v.snapshot();
        v.cursor = Position::origin();
        v.rowoff = 0;
        v.restore(snap);
        assert_eq!(v.cursor, Position::new(3, 1));
        assert_eq!(v.rowoff, 2);
    }

    #[test]
    fn clamp_offset_zero_extent() {
        assert_eq!(clamp_offset(0, 4, 0), 4);
        assert_eq!(clamp_offset(9, 4, 3), 4);
        assert_eq!(clamp_offset(0, 4, 3), 2);
    }

    #[test]
    fn model_split_borrow() {
        let st = EditorState::new(ten_lines());
        let mut model = EditorModel::new(st, View::new(20, 7));
        {
            let (state, view) = model.split_state_and_view();
            view.cursor.line = state.document.len() - 1;
        }
        model.scroll();
        assert_eq!(model.view().rowoff, 5);
    }
}
