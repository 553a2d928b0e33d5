//! Kiln entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::open_file;
use core_config::Config;
use core_input::CrosstermKeySource;
use core_model::{EditorModel, View};
use core_state::{EditorState, HELP_MESSAGE};
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::Document;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod runtime;

use runtime::EditorRuntime;

const LOG_FILE_NAME: &str = "kiln.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "kiln", version, about = "Kiln text editor")]
struct Args {
    /// File to open at startup. Without one the editor starts on an empty, unnamed document.
    pub path: Option<PathBuf>,
    /// Configuration file (overrides discovery of `kiln.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Directory for `kiln.log` (defaults to the system temp dir).
    #[arg(long = "log-dir")]
    pub log_dir: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self, log_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(log_dir)?;
        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Build the session from config and the optional startup file. An
/// unreadable file is an error.
fn load_editor_state(path: Option<&Path>, config: &Config) -> Result<EditorState> {
    let mut state = match path {
        Some(path) => EditorState::new(open_file(path, config.tab_stop())?).with_file_name(path),
        None => EditorState::new(Document::new(config.tab_stop())),
    };
    state.quit_confirm = config.quit_confirm();
    state.message_timeout = config.message_timeout();
    state.set_ephemeral(HELP_MESSAGE);
    Ok(state)
}

fn run_editor(state: EditorState, config: &Config) -> Result<runtime::ShutdownReason> {
    let mut backend = CrosstermBackend::new();
    backend.set_title("kiln")?;
    let mut guard = backend.enter_guard()?;
    let (cols, rows) = guard.backend().window_size()?;
    info!(target: "runtime", cols, rows, "terminal_ready");

    let model = EditorModel::new(state, View::new(cols, rows));
    let mut rt = EditorRuntime::new(
        model,
        CrosstermKeySource::new(),
        stdout(),
        config.poll_timeout(),
    );
    let reason = rt.run();
    guard.release()?;
    reason
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_dir = args.log_dir.clone().unwrap_or_else(std::env::temp_dir);

    let mut startup = AppStartup::new();
    startup.configure_logging(&log_dir)?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "startup");

    let config = core_config::load_from(args.config.clone())?;
    let state = load_editor_state(args.path.as_deref(), &config)?;
    info!(
        target: "runtime",
        rows = state.document.len(),
        named = state.file_name().is_some(),
        tab_stop = config.tab_stop(),
        "bootstrap_complete"
    );

    let reason = run_editor(state, &config)?;
    info!(target: "runtime", %reason, "exit");
    drop(startup);
    Ok(())
}
