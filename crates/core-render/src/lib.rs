//! Frame rendering for Kiln.
//!
//! Components:
//! - `render_engine`: composes the text rows, status bar, message bar and
//!   cursor placement for one frame and writes it to a sink.
//! - `status`: builds the status bar bytes (file name, row count, dirty flag,
//!   filetype, cursor row).
//! - `style`: highlight class to colour mapping and control-byte placeholders.
//! - `writer`: ordered terminal command buffer encoded with crossterm and
//!   written in a single call.
//!
//! The engine is stateless with respect to previous frames: each call repaints
//! everything visible. Callers run `View::scroll` before rendering.

pub mod render_engine;
pub mod status;
pub mod style;
pub mod writer;

pub use render_engine::RenderEngine;
pub use status::{StatusContext, compose_status, format_status};
pub use writer::{Command, Writer};
