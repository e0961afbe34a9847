// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Track Picker TUI.
//!
//! A terminal-based browser that lists the audio files below the current
//! directory and plays the one you pick.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns the [`TrackBrowser`] state machine, processes
//!   events one at a time and renders the UI.
//! * An **Input Thread** translates terminal events into [`AppEvent`]s.
//! * The **Audio Worker** drives MPV; each playback request is handed to it
//!   from a short-lived detached thread and never awaited.
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the event loop fails. The library is
//! scanned before the terminal is touched, so an empty library exits with a
//! plain error message.

mod browser;
mod config;
mod events;
mod model;
mod player;
mod render;
mod scan;
mod theme;
mod viewport;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::{File, OpenOptions},
    io::{self},
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};
use tracing::{info, warn};

use crate::{
    browser::TrackBrowser,
    config::AppConfig,
    events::{AppEvent, process_events},
    player::{AudioPlayer, Playback},
    render::Chrome,
    theme::Theme,
};

const LOG_FILE_NAME: &str = "trackpick.log";

/// Application state.
struct App {
    pub browser: TrackBrowser,
    pub chrome: Chrome,

    pub player: Arc<dyn Playback>,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig, browser: TrackBrowser, player: Arc<dyn Playback>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            browser,
            chrome: Chrome {
                title: config.title.clone(),
                help: config.help.clone(),
            },
            player,
            event_tx,
            event_rx,
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, scans the working directory, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config);
    if let Some(e) = config_error {
        warn!("Using default configuration: {:#}", e);
    }

    let root = env::current_dir().context("Failed to read working directory")?;
    let catalog = scan::scan(&root, &config.extensions)?;
    info!(root = %root.display(), tracks = catalog.len(), "Library scanned");

    let browser = TrackBrowser::new(catalog, Theme::default());
    let player: Arc<dyn Playback> = Arc::new(AudioPlayer::new());
    let mut app = App::new(&config, browser, player);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("Exiting");
    res.context("Application error occurred")
}

/// Sends all log output to a file, the terminal belongs to the UI.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Logging never stops
/// the application: if no log file can be opened it runs without one.
fn init_logging(config: &AppConfig) {
    let default_path = env::temp_dir().join(LOG_FILE_NAME);

    let target = match open_log_file(config.log_file.as_deref(), &default_path) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            return;
        }
    };

    if let Some(e) = &target.rejected {
        eprintln!("Logging to {} instead: {:#}", target.path.display(), e);
    }

    let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(target.file))
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    info!(log = %target.path.display(), "trackpick starting");
    if let Some(e) = target.rejected {
        warn!("Configured log file unusable: {:#}", e);
    }
}

struct LogTarget {
    path: PathBuf,
    file: File,

    /// Why the configured log file was passed over, if it was.
    rejected: Option<anyhow::Error>,
}

/// Opens the configured log file, or `default_path` when none is configured
/// or the configured one cannot be opened.
///
/// # Errors
///
/// Returns an error if the file at `default_path` cannot be opened either.
fn open_log_file(configured: Option<&Path>, default_path: &Path) -> Result<LogTarget> {
    let mut rejected = None;

    if let Some(path) = configured {
        match append_to(path) {
            Ok(file) => {
                return Ok(LogTarget {
                    path: path.to_path_buf(),
                    file,
                    rejected,
                });
            }
            Err(e) => rejected = Some(e),
        }
    }

    let file = append_to(default_path)?;
    Ok(LogTarget {
        path: default_path.to_path_buf(),
        file,
        rejected,
    })
}

fn append_to(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Prepares the terminal for the TUI application.
///
/// This function enables raw mode to capture all keyboard input and switches
/// the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The terminal does not report its initial size, so a resize event carrying
/// the current size is queued first to bring the browser out of its
/// uninitialized state.
///
/// # Errors
///
/// Returns an error if the terminal size cannot be read or drawing fails.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.event_tx.send(AppEvent::Resize(size.width, size.height))?;

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if let Some(app_event) = AppEvent::from_terminal(event) {
                        if tx_input.send(app_event).is_err() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to read terminal input: {}", e);
                    tx_input.send(AppEvent::InputClosed).ok();
                    break;
                }
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
