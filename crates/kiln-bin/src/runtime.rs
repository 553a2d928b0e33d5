//! Synchronous editor loop.
//!
//! One event is read, translated, dispatched and rendered before the next is
//! read. A poll timeout with no input only re-renders when the status
//! message expired.

use anyhow::Result;
use core_actions::{dispatch, translate_key};
use core_events::{Event, KeyEvent};
use core_input::KeySource;
use core_model::EditorModel;
use core_render::RenderEngine;
use std::fmt;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, trace};

pub enum LoopControl {
    Continue { redraw: bool },
    Break { reason: ShutdownReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Quit,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Quit => "quit",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct EditorRuntime<K, W> {
    model: EditorModel,
    keys: K,
    out: W,
    engine: RenderEngine,
    poll_timeout: Duration,
    events: u64,
}

impl<K: KeySource, W: Write> EditorRuntime<K, W> {
    pub fn new(model: EditorModel, keys: K, out: W, poll_timeout: Duration) -> Self {
        Self {
            model,
            keys,
            out,
            engine: RenderEngine::new(env!("CARGO_PKG_VERSION")),
            poll_timeout,
            events: 0,
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn frames(&self) -> u64 {
        self.engine.frames()
    }

    pub fn run(&mut self) -> Result<ShutdownReason> {
        let loop_span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter = loop_span.enter();

        self.render()?;
        loop {
            let control = match self.keys.read_event(self.poll_timeout)? {
                None => self.handle_tick(),
                Some(Event::Resize { cols, rows }) => self.handle_resize(cols, rows),
                Some(Event::Key(key)) => self.handle_key(key),
            };
            match control {
                LoopControl::Break { reason } => {
                    info!(
                        target: "runtime",
                        reason = reason.as_str(),
                        events = self.events,
                        frames = self.engine.frames(),
                        "shutdown"
                    );
                    return Ok(reason);
                }
                LoopControl::Continue { redraw: true } => self.render()?,
                LoopControl::Continue { redraw: false } => {}
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> LoopControl {
        self.events += 1;
        let Some(action) = translate_key(self.model.state(), key) else {
            trace!(target: "runtime", %key, "key_unbound");
            return LoopControl::Continue { redraw: false };
        };
        let result = dispatch(action, &mut self.model);
        if result.quit {
            return LoopControl::Break {
                reason: ShutdownReason::Quit,
            };
        }
        LoopControl::Continue {
            redraw: result.dirty,
        }
    }

    fn handle_resize(&mut self, cols: u16, rows: u16) -> LoopControl {
        self.events += 1;
        debug!(target: "runtime", cols, rows, "resize");
        self.model.view_mut().resize(cols, rows);
        LoopControl::Continue { redraw: true }
    }

    fn handle_tick(&mut self) -> LoopControl {
        let expired = self.model.state_mut().tick_ephemeral();
        LoopControl::Continue { redraw: expired }
    }

    fn render(&mut self) -> Result<()> {
        self.model.scroll();
        self.engine
            .render(self.model.state(), self.model.view(), &mut self.out)
    }
}
