//! Ordered rows plus the edit operations that keep them consistent.
//!
//! Every mutating method re-derives the touched row and then walks forward
//! with a worklist: as long as a row's `open_comment_out` differs from the next
//! row's recorded `open_comment_in`, the next row is re-highlighted too. Each
//! row is visited at most once per edit, so an edit that opens a block comment
//! near the top of a large file costs one pass over the rows it affects and no
//! stack depth.
//!
//! Cursor-affecting edits take the cursor as `&mut Position` and leave it
//! where the edit says it goes.

use tracing::trace;

use crate::highlight::Highlight;
use crate::row::Row;
use crate::syntax::SyntaxRule;
use crate::{DEFAULT_TAB_STOP, Position};

#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    syntax: Option<&'static SyntaxRule>,
    tab_stop: usize,
    /// Edits since load or last save.
    dirty: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            syntax: None,
            tab_stop: tab_stop.max(1),
            dirty: 0,
        }
    }

    /// Split file contents into rows.
    ///
    /// Each line loses its `\n` and at most one `\r` before it. A final line
    /// without a terminator is kept; a trailing `\n` does not produce an extra
    /// empty row. The result is clean.
    pub fn from_bytes(bytes: &[u8], tab_stop: usize, syntax: Option<&'static SyntaxRule>) -> Self {
        let mut doc = Self::new(tab_stop);
        doc.syntax = syntax;
        if !bytes.is_empty() {
            let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
            for line in body.split(|b| *b == b'\n') {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                doc.rows.push(Row::new(line.to_vec(), doc.tab_stop));
            }
        }
        doc.rehighlight_all();
        doc
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, line: usize) -> Option<&Row> {
        self.rows.get(line)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn syntax(&self) -> Option<&'static SyntaxRule> {
        self.syntax
    }

    /// Filetype name of the active rule, if any.
    pub fn filetype(&self) -> Option<&'static str> {
        self.syntax.map(|rule| rule.filetype)
    }

    /// Switch highlighting rules and reclassify every row.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxRule>) {
        self.syntax = syntax;
        self.rehighlight_all();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn dirty_count(&self) -> u64 {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Raw length of `line`, 0 past the last row.
    pub fn line_len(&self, line: usize) -> usize {
        self.rows.get(line).map_or(0, Row::len)
    }

    /// Insert a row before `at` (clamped to the row count).
    pub fn insert_row(&mut self, at: usize, raw: Vec<u8>) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(raw, self.tab_stop));
        self.refresh_from(at);
        self.dirty += 1;
    }

    /// Remove row `at`; out-of-range indices are ignored.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.propagate_from(at);
        self.dirty += 1;
    }

    /// Insert `c` at the cursor and advance it one byte. On the virtual line
    /// after the last row a new row is appended first.
    pub fn insert_char(&mut self, cursor: &mut Position, c: u8) {
        if cursor.line >= self.rows.len() {
            cursor.line = self.rows.len();
            self.insert_row(cursor.line, Vec::new());
        }
        let line = cursor.line;
        cursor.byte = cursor.byte.min(self.rows[line].len());
        self.rows[line].insert_byte(cursor.byte, c);
        self.refresh_from(line);
        self.dirty += 1;
        cursor.byte += 1;
    }

    /// Split the row at the cursor; the cursor moves to the start of the new
    /// row.
    pub fn insert_newline(&mut self, cursor: &mut Position) {
        let line = cursor.line.min(self.rows.len());
        let byte = cursor.byte.min(self.line_len(line));
        if byte == 0 {
            self.insert_row(line, Vec::new());
        } else {
            let tail = self.rows[line].split_off(byte);
            self.refresh_from(line);
            self.insert_row(line + 1, tail);
        }
        cursor.line = line + 1;
        cursor.byte = 0;
    }

    /// Delete the byte before the cursor. At the start of a row the row is
    /// joined onto the previous one and the cursor lands at the join point.
    /// No effect at the origin or past the last row.
    pub fn delete_char_before(&mut self, cursor: &mut Position) {
        if cursor.line >= self.rows.len() {
            return;
        }
        if cursor.line == 0 && cursor.byte == 0 {
            return;
        }
        let line = cursor.line;
        if cursor.byte == 0 {
            let joined_at = self.rows[line - 1].len();
            let moved = self.rows.remove(line);
            self.rows[line - 1].append(moved.raw());
            self.refresh_from(line - 1);
            self.dirty += 1;
            cursor.line = line - 1;
            cursor.byte = joined_at;
        } else {
            let byte = cursor.byte.min(self.rows[line].len());
            if self.rows[line].remove_byte(byte - 1).is_some() {
                self.refresh_from(line);
                self.dirty += 1;
            }
            cursor.byte = byte - 1;
        }
    }

    /// Every row's raw bytes, each followed by `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }

    /// Paint a search match over render columns `start..start + len` of `line`
    /// and hand back the highlight it replaced.
    pub fn overlay_match(
        &mut self,
        line: usize,
        start: usize,
        len: usize,
    ) -> Option<Vec<Highlight>> {
        let row = self.rows.get_mut(line)?;
        Some(row.overlay(start, len, Highlight::Match))
    }

    /// Undo [`Document::overlay_match`]. Returns false if the row is gone or
    /// its length no longer matches.
    pub fn restore_highlight(&mut self, line: usize, saved: Vec<Highlight>) -> bool {
        self.rows
            .get_mut(line)
            .is_some_and(|row| row.restore(saved))
    }

    fn open_comment_before(&self, line: usize) -> bool {
        line > 0 && self.rows[line - 1].open_comment_out()
    }

    /// Re-derive render and highlight of `line`, then propagate.
    fn refresh_from(&mut self, line: usize) {
        let open_in = self.open_comment_before(line);
        self.rows[line].refresh(self.tab_stop, self.syntax, open_in);
        self.propagate_from(line + 1);
    }

    /// Re-highlight rows from `start` while their incoming comment state is
    /// stale.
    fn propagate_from(&mut self, start: usize) {
        let mut pending = Vec::with_capacity(1);
        if start < self.rows.len()
            && self.rows[start].open_comment_in() != self.open_comment_before(start)
        {
            pending.push(start);
        }
        let mut visited = 0usize;
        while let Some(line) = pending.pop() {
            let open_in = self.open_comment_before(line);
            self.rows[line].rehighlight(self.syntax, open_in);
            visited += 1;
            let next = line + 1;
            if next < self.rows.len()
                && self.rows[next].open_comment_in() != self.rows[line].open_comment_out()
            {
                pending.push(next);
            }
        }
        if visited > 0 {
            trace!(target: "highlight", start, rows = visited, "highlight_cascade");
        }
    }

    fn rehighlight_all(&mut self) {
        let mut open = false;
        for row in &mut self.rows {
            open = row.rehighlight(self.syntax, open);
        }
    }
}
