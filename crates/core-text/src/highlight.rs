//! Per-row syntax classification.
//!
//! [`highlight_line`] scans one row's `render` bytes left to right and assigns
//! a [`Highlight`] to every byte. Per position the first matching rule wins:
//!
//! 1. inside a block comment: the end token closes it, anything else is comment;
//! 2. outside a string: a block comment start token opens a comment;
//! 3. outside a string: the single-line token turns the rest of the row into comment;
//! 4. strings (quote opens, matching unescaped quote closes, `\` escapes one byte);
//! 5. numbers (a digit after a separator or a number, a `.` after a number);
//! 6. after a separator: the longest keyword followed by a separator;
//! 7. everything else is normal.
//!
//! The scanner carries the class of the previous byte, whether that byte was a
//! separator, string and escape state, and whether a block comment is open. A
//! block comment closing mid-row counts as a separator, so an identifier right
//! after `*/` may still match a keyword.

use crate::syntax::{KeywordKind, SyntaxFlags, SyntaxRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    MlComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Search match overlay; never produced by the scanner.
    Match,
}

/// Separator bytes: ASCII whitespace, NUL and `,.()+-/*=~%<>[];`.
pub fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | 0)
        || b",.()+-/*=~%<>[];".contains(&c)
}

/// Longest keyword that prefixes `rest` and is followed by a separator (or the
/// end of the row).
fn match_keyword<'k>(keywords: &'k [crate::Keyword], rest: &[u8]) -> Option<&'k crate::Keyword> {
    keywords
        .iter()
        .filter(|kw| {
            let text = kw.text.as_bytes();
            !text.is_empty()
                && rest.starts_with(text)
                && rest.get(text.len()).is_none_or(|&next| is_separator(next))
        })
        .max_by_key(|kw| kw.text.len())
}

/// Classify `render` into `out` (resized to `render.len()`).
///
/// `open_comment_in` is whether a block comment was open at the start of the
/// row. Returns whether a block comment is still open at the end of the row.
pub fn highlight_line(
    render: &[u8],
    syntax: Option<&SyntaxRule>,
    open_comment_in: bool,
    out: &mut Vec<Highlight>,
) -> bool {
    out.clear();
    out.resize(render.len(), Highlight::Normal);
    let Some(rule) = syntax else {
        return false;
    };

    let (mlcs, mlce) = rule
        .multi_line_comment
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()))
        .unwrap_or((b"", b""));
    let block_comments = !mlcs.is_empty() && !mlce.is_empty();
    let slc = rule.single_line_comment.map(str::as_bytes).unwrap_or(b"");
    let strings = rule.flags.contains(SyntaxFlags::HIGHLIGHT_STRINGS);
    let numbers = rule.flags.contains(SyntaxFlags::HIGHLIGHT_NUMBERS);

    let mut prev_hl = Highlight::Normal;
    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = open_comment_in && block_comments;
    let mut escape = false;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let rest = &render[i..];

        if block_comments && in_string.is_none() {
            if in_comment {
                if rest.starts_with(mlce) {
                    out[i..i + mlce.len()].fill(Highlight::MlComment);
                    i += mlce.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    out[i] = Highlight::MlComment;
                    prev_sep = false;
                    i += 1;
                }
                prev_hl = Highlight::MlComment;
                continue;
            } else if rest.starts_with(mlcs) {
                out[i..i + mlcs.len()].fill(Highlight::MlComment);
                i += mlcs.len();
                prev_hl = Highlight::MlComment;
                in_comment = true;
                prev_sep = true;
                continue;
            }
        }

        if !slc.is_empty() && in_string.is_none() && rest.starts_with(slc) {
            out[i..].fill(Highlight::Comment);
            break;
        }

        if strings && (in_string.is_some() || c == b'"' || c == b'\'') {
            out[i] = Highlight::String;
            prev_hl = Highlight::String;
            match in_string {
                None => {
                    in_string = Some(c);
                    prev_sep = true;
                }
                Some(quote) if c == quote => {
                    if escape {
                        escape = false;
                    } else {
                        in_string = None;
                        prev_sep = true;
                    }
                }
                Some(_) => {
                    escape = !escape && c == b'\\';
                    prev_sep = false;
                }
            }
            i += 1;
            continue;
        }

        if numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            out[i] = Highlight::Number;
            prev_hl = Highlight::Number;
            prev_sep = false;
            i += 1;
            continue;
        }

        if prev_sep && let Some(kw) = match_keyword(rule.keywords, rest) {
            let class = match kw.kind {
                KeywordKind::Primary => Highlight::Keyword1,
                KeywordKind::Secondary => Highlight::Keyword2,
            };
            let end = i + kw.text.len();
            out[i..end].fill(class);
            // Continue from the keyword's last byte so the separator
            // bookkeeping below sees it.
            i = end - 1;
        }
        prev_hl = out[i];
        prev_sep = is_separator(render[i]);
        i += 1;
    }

    in_comment
}
