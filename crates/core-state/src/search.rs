//! Incremental search over render text.
//!
//! One [`SearchState`] lives for one search prompt. Each call to
//! [`SearchState::step`] first restores the highlight of the previously
//! matched row, then scans rows circularly from `last_match + direction` for
//! the query as a byte substring of `render`. Rows with empty render text are
//! skipped, so an empty query lands on the first non-empty row. A hit is
//! painted with the match class and the replaced highlight is kept until the
//! next step or [`SearchState::reset`].

use core_text::{Document, Highlight};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// What triggered a search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNav {
    /// The query changed; search again from the top.
    Edit,
    /// Arrow Right/Down.
    Next,
    /// Arrow Left/Up.
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub line: usize,
    /// Render column of the match start.
    pub render_col: usize,
    /// Raw column of the match start.
    pub cx: usize,
}

#[derive(Debug, Default)]
pub struct SearchState {
    last_match: Option<usize>,
    direction: Direction,
    saved: Option<(usize, Vec<Highlight>)>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_overlay(&self) -> bool {
        self.saved.is_some()
    }

    /// Put back the highlight replaced by the last match, if any.
    pub fn restore_overlay(&mut self, doc: &mut Document) {
        if let Some((line, saved)) = self.saved.take() {
            doc.restore_highlight(line, saved);
        }
    }

    /// Restore the overlay and forget the last match.
    pub fn reset(&mut self, doc: &mut Document) {
        self.restore_overlay(doc);
        self.last_match = None;
        self.direction = Direction::Forward;
    }

    pub fn step(&mut self, doc: &mut Document, query: &[u8], nav: SearchNav) -> Option<SearchHit> {
        self.restore_overlay(doc);
        match nav {
            SearchNav::Next => self.direction = Direction::Forward,
            SearchNav::Prev => self.direction = Direction::Backward,
            SearchNav::Edit => {
                self.last_match = None;
                self.direction = Direction::Forward;
            }
        }
        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }
        if doc.is_empty() {
            return None;
        }

        let n = doc.len();
        let mut current = self.last_match;
        for _ in 0..n {
            let line = match (current, self.direction) {
                (None, Direction::Forward) => 0,
                (None, Direction::Backward) => n - 1,
                (Some(l), Direction::Forward) => (l + 1) % n,
                (Some(l), Direction::Backward) => l.checked_sub(1).unwrap_or(n - 1),
            };
            current = Some(line);
            let Some(row) = doc.row(line) else { break };
            if row.render_len() == 0 {
                continue;
            }
            let Some(render_col) = row.find(query) else {
                continue;
            };
            let cx = row.rx_to_cx(render_col, doc.tab_stop());
            self.last_match = Some(line);
            if let Some(saved) = doc.overlay_match(line, render_col, query.len()) {
                self.saved = Some((line, saved));
            }
            debug!(target: "search", line, render_col, query_len = query.len(), "search_hit");
            return Some(SearchHit {
                line,
                render_col,
                cx,
            });
        }
        debug!(target: "search", query_len = query.len(), "search_miss");
        None
    }
}
