//! Status bar composition.
//!
//! Format: `<name> - <N> lines[ (modified)]` on the left (name capped at 20
//! bytes, `[No Name]` when unset) and `<filetype|no ft> | <line>/<N>` right
//! aligned. The right part is drawn only when it fits after the left part.
//!
//! `compose_status` produces the two halves from a `StatusContext`;
//! `format_status` lays them out for a given width.

use core_model::View;
use core_state::EditorState;

pub const MAX_NAME_BYTES: usize = 20;

/// What the status bar needs, detached from the editor types.
pub struct StatusContext<'a> {
    pub name: &'a [u8],
    pub lines: usize,
    pub dirty: bool,
    pub filetype: Option<&'a str>,
    /// 0-based cursor row.
    pub cursor_line: usize,
}

pub fn compose_status(ctx: &StatusContext<'_>) -> (Vec<u8>, Vec<u8>) {
    let name = &ctx.name[..ctx.name.len().min(MAX_NAME_BYTES)];
    let mut left = name.to_vec();
    left.extend_from_slice(format!(" - {} lines", ctx.lines).as_bytes());
    if ctx.dirty {
        left.extend_from_slice(b" (modified)");
    }
    let right = format!(
        "{} | {}/{}",
        ctx.filetype.unwrap_or("no ft"),
        ctx.cursor_line + 1,
        ctx.lines
    )
    .into_bytes();
    (left, right)
}

/// Exactly `width` bytes: left part, padding, right part if it fits.
pub fn format_status(ctx: &StatusContext<'_>, width: usize) -> Vec<u8> {
    let (left, right) = compose_status(ctx);
    let mut out: Vec<u8> = left.into_iter().take(width).collect();
    while out.len() < width {
        if width - out.len() == right.len() {
            out.extend_from_slice(&right);
            break;
        }
        out.push(b' ');
    }
    out
}

/// Status bar bytes for the current session.
pub fn status_bar(state: &EditorState, view: &View) -> Vec<u8> {
    let name = state.display_name();
    let ctx = StatusContext {
        name: name.as_bytes(),
        lines: state.document.len(),
        dirty: state.is_dirty(),
        filetype: state.document.filetype(),
        cursor_line: view.cursor.line,
    };
    format_status(&ctx, view.screen_cols)
}
