//! Configuration loading and parsing.
//!
//! Parses `kiln.toml` (or an override path supplied by the binary). Every key
//! is optional and unknown keys are ignored:
//!
//! ```toml
//! [editor]
//! tab_stop = 8          # clamped to 1..=16
//! quit_confirm = true   # ask before quitting with unsaved changes
//!
//! [status]
//! message_timeout_secs = 5
//!
//! [input]
//! poll_timeout_ms = 100
//! ```
//!
//! A missing file yields defaults silently; a file that fails to parse yields
//! defaults with a warning. The raw parsed tab stop is retained next to the
//! clamped one so the clamp is observable.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "kiln.toml";
pub const MIN_TAB_STOP: usize = 1;
pub const MAX_TAB_STOP: usize = 16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_stop")]
    pub tab_stop: usize,
    #[serde(default = "EditorConfig::default_quit_confirm")]
    pub quit_confirm: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            quit_confirm: Self::default_quit_confirm(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_stop() -> usize {
        8
    }
    const fn default_quit_confirm() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl StatusConfig {
    const fn default_message_timeout_secs() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: Self::default_poll_timeout_ms(),
        }
    }
}

impl InputConfig {
    const fn default_poll_timeout_ms() -> u64 {
        100
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file: ConfigFile,          // parsed (or default) data
    pub effective_tab_stop: usize, // clamped to MIN_TAB_STOP..=MAX_TAB_STOP
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

/// Config path: `./kiln.toml` when present, else the platform config dir
/// (`<config_dir>/kiln/kiln.toml`).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("kiln").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config::from_file(file))
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_error");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn from_file(file: ConfigFile) -> Self {
        let mut cfg = Self {
            file,
            effective_tab_stop: 0,
        };
        cfg.clamp_tab_stop();
        cfg
    }

    /// Clamp the configured tab stop into range, logging when it changes.
    /// Returns the effective value.
    pub fn clamp_tab_stop(&mut self) -> usize {
        let raw = self.file.editor.tab_stop;
        let clamped = raw.clamp(MIN_TAB_STOP, MAX_TAB_STOP);
        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                min = MIN_TAB_STOP,
                max = MAX_TAB_STOP,
                "tab_stop_clamped"
            );
        }
        self.effective_tab_stop = clamped;
        clamped
    }

    pub fn tab_stop(&self) -> usize {
        self.effective_tab_stop
    }

    pub fn quit_confirm(&self) -> bool {
        self.file.editor.quit_confirm
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.file.status.message_timeout_secs)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.file.input.poll_timeout_ms)
    }
}
