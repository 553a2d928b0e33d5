//! A single document line and its derived views.

use crate::highlight::{Highlight, highlight_line};
use crate::syntax::SyntaxRule;

/// One line of text without its terminator.
///
/// `render` and `highlight` are derived from `raw` and always have the same
/// length. Mutation is crate-private: callers go through [`crate::Document`],
/// which refreshes the derived views and the comment state of following rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
    highlight: Vec<Highlight>,
    open_comment_in: bool,
    open_comment_out: bool,
}

impl Row {
    /// Build a row with render text but no classification yet (all normal).
    pub(crate) fn new(raw: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            raw,
            ..Self::default()
        };
        row.update_render(tab_stop);
        row.highlight.resize(row.render.len(), Highlight::Normal);
        row
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// Raw length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Whether a block comment was open when this row started.
    pub fn open_comment_in(&self) -> bool {
        self.open_comment_in
    }

    /// Whether a block comment is still open when this row ends.
    pub fn open_comment_out(&self) -> bool {
        self.open_comment_out
    }

    /// Map a raw column to a render column. Columns past the end map as if the
    /// row continued with plain bytes.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut rx = 0;
        for &b in self.raw.iter().take(cx) {
            if b == b'\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
        }
        rx + cx.saturating_sub(self.raw.len())
    }

    /// Map a render column back to the raw column whose expansion covers it;
    /// render columns past the end give the raw length.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur_rx = 0;
        for (cx, &b) in self.raw.iter().enumerate() {
            if b == b'\t' {
                cur_rx += (tab_stop - 1) - (cur_rx % tab_stop);
            }
            cur_rx += 1;
            if cur_rx > rx {
                return cx;
            }
        }
        self.raw.len()
    }

    /// First occurrence of `query` in the render text.
    /// First render column where `query` occurs. An empty query matches at 0.
    pub fn find(&self, query: &[u8]) -> Option<usize> {
        if query.is_empty() {
            return Some(0);
        }
        if query.len() > self.render.len() {
            return None;
        }
        self.render
            .windows(query.len())
            .position(|window| window == query)
    }

    pub(crate) fn insert_byte(&mut self, at: usize, c: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, c);
    }

    pub(crate) fn remove_byte(&mut self, at: usize) -> Option<u8> {
        (at < self.raw.len()).then(|| self.raw.remove(at))
    }

    pub(crate) fn append(&mut self, bytes: &[u8]) {
        self.raw.extend_from_slice(bytes);
    }

    pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        self.raw.split_off(at)
    }

    /// Regenerate `render` and `highlight` from `raw`. Returns the new
    /// `open_comment_out`.
    pub(crate) fn refresh(
        &mut self,
        tab_stop: usize,
        syntax: Option<&SyntaxRule>,
        open_comment_in: bool,
    ) -> bool {
        self.update_render(tab_stop);
        self.rehighlight(syntax, open_comment_in)
    }

    /// Reclassify `render` under a (possibly new) incoming comment state.
    pub(crate) fn rehighlight(
        &mut self,
        syntax: Option<&SyntaxRule>,
        open_comment_in: bool,
    ) -> bool {
        self.open_comment_in = open_comment_in;
        self.open_comment_out =
            highlight_line(&self.render, syntax, open_comment_in, &mut self.highlight);
        self.open_comment_out
    }

    /// Paint `len` render columns from `start` with `class`, returning the
    /// highlight as it was before.
    pub(crate) fn overlay(&mut self, start: usize, len: usize, class: Highlight) -> Vec<Highlight> {
        let saved = self.highlight.clone();
        let start = start.min(self.highlight.len());
        let end = start.saturating_add(len).min(self.highlight.len());
        self.highlight[start..end].fill(class);
        saved
    }

    /// Put back a highlight saved by [`Row::overlay`]. Ignored when the row
    /// has changed length since.
    pub(crate) fn restore(&mut self, saved: Vec<Highlight>) -> bool {
        if saved.len() != self.render.len() {
            return false;
        }
        self.highlight = saved;
        true
    }

    fn update_render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        self.render.clear();
        for &b in &self.raw {
            if b == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(text: &str) -> Row {
        Row::new(text.as_bytes().to_vec(), 8)
    }

    #[test]
    fn tabs_expand_to_next_stop() {
        let r = row("\tx\ty");
        assert_eq!(r.render(), b"        x       y");
        assert_eq!(r.highlight().len(), r.render_len());
    }

    #[test]
    fn tab_advances_to_following_multiple_of_stop() {
        // From visual column 5 to 8, then from 8 to 16.
        let r = row("abcde\t\tz");
        assert_eq!(r.render(), b"abcde           z");
        assert_eq!(r.cx_to_rx(6, 8), 8);
        assert_eq!(r.cx_to_rx(7, 8), 16);
    }

    #[test]
    fn refresh_twice_gives_identical_views() {
        let syntax = crate::select_syntax("main.c");
        let mut r = row("\tint x = 42; /* open\t\"s\" */ // tail");
        let out = r.refresh(8, syntax, false);
        let render = r.render().to_vec();
        let highlight = r.highlight().to_vec();
        assert_eq!(r.refresh(8, syntax, false), out);
        assert_eq!(r.render(), render.as_slice());
        assert_eq!(r.highlight(), highlight.as_slice());
        assert!(highlight.contains(&Highlight::Keyword2));
        assert!(highlight.contains(&Highlight::Number));
        assert!(highlight.contains(&Highlight::MlComment));
    }

    proptest::proptest! {
        #[test]
        fn refresh_is_idempotent(text in "[a-z0-9\t \"/*]{0,40}", open_in in proptest::bool::ANY) {
            let syntax = crate::select_syntax("p.c");
            let mut r = Row::new(text.into_bytes(), 8);
            let first_out = r.refresh(8, syntax, open_in);
            let first = r.clone();
            proptest::prop_assert_eq!(r.refresh(8, syntax, open_in), first_out);
            proptest::prop_assert_eq!(r, first);
        }
    }

    #[test]
    fn tab_stop_is_configurable() {
        let r = Row::new(b"a\tb".to_vec(), 4);
        assert_eq!(r.render(), b"a   b");
    }

    #[test]
    fn cx_to_rx_counts_tab_expansion() {
        let r = row("\tab");
        assert_eq!(r.cx_to_rx(0, 8), 0);
        assert_eq!(r.cx_to_rx(1, 8), 8);
        assert_eq!(r.cx_to_rx(3, 8), 10);
    }

    #[test]
    fn rx_to_cx_inside_a_tab_maps_to_the_tab() {
        let r = row("a\tb");
        for rx in 1..8 {
            assert_eq!(r.rx_to_cx(rx, 8), 1, "rx {rx}");
        }
        assert_eq!(r.rx_to_cx(8, 8), 2);
        assert_eq!(r.rx_to_cx(100, 8), 3);
    }

    #[test]
    fn find_searches_render_text() {
        let r = row("\tneedle");
        assert_eq!(r.find(b"needle"), Some(8));
        assert_eq!(r.find(b"hay"), None);
        assert_eq!(r.find(b""), Some(0));
    }

    #[test]
    fn overlay_and_restore() {
        let mut r = row("hello");
        let saved = r.overlay(1, 3, Highlight::Match);
        assert_eq!(
            r.highlight(),
            &[
                Highlight::Normal,
                Highlight::Match,
                Highlight::Match,
                Highlight::Match,
                Highlight::Normal
            ]
        );
        assert!(r.restore(saved));
        assert!(r.highlight().iter().all(|h| *h == Highlight::Normal));
    }

    #[test]
    fn restore_rejects_stale_length() {
        let mut r = row("abc");
        let saved = r.overlay(0, 1, Highlight::Match);
        r.append(b"d");
        r.refresh(8, None, false);
        assert!(!r.restore(saved));
        assert_eq!(r.highlight().len(), 4);
    }
}
