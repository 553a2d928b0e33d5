//! Key sources feeding the input loop.
//!
//! [`KeySource::read_event`] blocks for at most the given timeout and returns
//! `Ok(None)` when nothing arrived, which lets the loop expire status messages
//! without input. Escape-sequence decoding is left to crossterm; this crate
//! only narrows its events down to [`core_events::Event`].

mod key_map;

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Result, anyhow};
use core_events::{Event, KeyEvent};
use crossterm::event::{self as cevent, Event as CEvent, KeyEvent as CKeyEvent};
use tracing::trace;

pub trait KeySource {
    /// Next event, or `None` if `timeout` elapsed first.
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Reads the real terminal through crossterm. Raw mode is the caller's job.
#[derive(Debug, Default)]
pub struct CrosstermKeySource {
    pending: VecDeque<KeyEvent>,
}

impl CrosstermKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    fn translate(&mut self, key: &CKeyEvent) -> Option<Event> {
        self.pending.extend(key_map::map_key_event(key));
        self.pending.pop_front().map(Event::from)
    }
}

impl KeySource for CrosstermKeySource {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if let Some(key) = self.pending.pop_front() {
            return Ok(Some(key.into()));
        }
        if !cevent::poll(timeout)? {
            return Ok(None);
        }
        let event = match cevent::read()? {
            CEvent::Key(key) => self.translate(&key),
            CEvent::Resize(cols, rows) => {
                trace!(target: "input.event", cols, rows, "resize");
                Some(Event::Resize { cols, rows })
            }
            _ => None,
        };
        Ok(event)
    }
}

/// Replays a fixed script; used by tests and headless runs.
///
/// `None` entries stand for a poll timeout. Reading past the end is an error
/// so a script that never quits cannot hang the loop.
#[derive(Debug, Default)]
pub struct ScriptedKeySource {
    script: VecDeque<Option<Event>>,
}

impl ScriptedKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        Self {
            script: keys.into_iter().map(|k| Some(Event::from(k))).collect(),
        }
    }

    /// Script typing `text` byte by byte.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.script
            .extend(text.bytes().map(|b| Some(Event::from(KeyEvent::Char(b)))));
        self
    }

    pub fn push_key(&mut self, key: KeyEvent) -> &mut Self {
        self.script.push_back(Some(key.into()));
        self
    }

    pub fn push_event(&mut self, event: Event) -> &mut Self {
        self.script.push_back(Some(event));
        self
    }

    pub fn push_timeout(&mut self) -> &mut Self {
        self.script.push_back(None);
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for ScriptedKeySource {
    fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        self.script
            .pop_front()
            .ok_or_else(|| anyhow!("scripted key source exhausted"))
    }
}
