//! Line-oriented document model with tab-expanded render text and syntax classes.
//!
//! Every line of a file is a [`Row`] holding three co-indexed views of the same
//! content:
//! * `raw` - the bytes as they will be saved.
//! * `render` - `raw` with every tab expanded to the next tab stop.
//! * `highlight` - one [`Highlight`] class per `render` byte.
//!
//! `render` and `highlight` are only ever regenerated together from `raw`
//! (see [`Row`]), and a [`Document`] re-derives both before any mutating call
//! returns. Multi-line comment state flows from row to row through the
//! `open_comment_in` / `open_comment_out` pair; the document re-highlights
//! following rows with an explicit worklist until that state stops changing.
//!
//! Text is byte oriented: there is no grapheme or width handling, one byte is
//! one visual column except for tabs.

pub mod document;
pub mod highlight;
pub mod row;
pub mod syntax;

pub use document::Document;
pub use highlight::{Highlight, is_separator};
pub use row::Row;
pub use syntax::{Keyword, KeywordKind, SyntaxFlags, SyntaxRule, select_syntax};

/// Tab stop used when no configuration overrides it.
pub const DEFAULT_TAB_STOP: usize = 8;

/// A position inside a document expressed as (row index, raw byte column).
///
/// `line` may equal the row count (the virtual line after the last row, where
/// typing creates a new row); `byte` is a raw column, not a visual one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }

    pub fn origin() -> Self {
        Self { line: 0, byte: 0 }
    }

    /// Clamp into the document: `line` to at most `line_count` and `byte` to the
    /// length reported for that line (0 on the virtual last line).
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if self.line > line_count {
            self.line = line_count;
        }
        let max_len = if self.line < line_count {
            line_len_fn(self.line)
        } else {
            0
        };
        if self.byte > max_len {
            self.byte = max_len;
        }
    }
}
