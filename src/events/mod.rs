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

//! Application event handling.
//!
//! Terminal input arrives here as [`AppEvent`]s over a channel. Each event is
//! translated into a [`BrowserAction`], applied to the browser, and the
//! resulting [`Outcome`] decides whether to redraw, start playback or stop.
//!
//! Events are processed strictly one at a time, in arrival order, on the main
//! thread. Playback requests are the only work that runs alongside.

mod key_handlers;

use std::{io::Stdout, sync::Arc};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error};

use crate::{
    App,
    browser::{BrowserAction, Outcome},
    events::key_handlers::map_key_event,
    player::spawn_playback,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),

    /// The terminal input stream failed, nothing more will arrive.
    InputClosed,
}

impl AppEvent {
    /// Converts a raw terminal event, dropping the kinds the browser has no
    /// use for.
    pub(crate) fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(Self::Key(key)),
            Event::Resize(width, height) => Some(Self::Resize(width, height)),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Redraw,
    Exit,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match handle_event(app, event) {
            Flow::Exit => break,
            Flow::Redraw => {
                terminal.draw(|f| draw(f, &app.browser, &app.chrome))?;
            }
            Flow::Continue => {}
        }
    }
    Ok(())
}

/// Applies one event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Flow {
    let action = match event {
        AppEvent::Key(key) => map_key_event(key),
        AppEvent::Resize(width, height) => Some(BrowserAction::Resize(width, height)),
        AppEvent::InputClosed => {
            error!("Terminal input closed");
            Some(BrowserAction::Quit)
        }
    };

    let Some(action) = action else {
        return Flow::Continue;
    };

    debug!(?action, cursor = app.browser.cursor(), "Browser action");

    match app.browser.update(action) {
        Outcome::Unchanged => Flow::Continue,
        Outcome::Redraw => Flow::Redraw,
        Outcome::Play(track) => {
            spawn_playback(Arc::clone(&app.player), track);
            Flow::Continue
        }
        Outcome::Exit => Flow::Exit,
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::mpsc, time::Duration};

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        browser::TrackBrowser,
        model::{Catalog, Track},
        player::tests::RecordingPlayback,
        render::Chrome,
        theme::Theme,
    };

    fn app(played_tx: mpsc::Sender<PathBuf>) -> App {
        let tracks = ["a.mp3", "b.mp3", "c.mp3"].into_iter().map(Track::new).collect();
        let (event_tx, event_rx) = mpsc::channel();

        App {
            browser: TrackBrowser::new(Catalog::new(tracks).unwrap(), Theme::default()),
            chrome: Chrome {
                title: "Pick".to_string(),
                help: "q".to_string(),
            },
            player: Arc::new(RecordingPlayback {
                played_tx,
                fail: false,
            }),
            event_tx,
            event_rx,
        }
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn drives_browser_from_events() {
        let (played_tx, played_rx) = mpsc::channel();
        let mut app = app(played_tx);

        assert_eq!(handle_event(&mut app, key(KeyCode::Down)), Flow::Continue);
        assert_eq!(handle_event(&mut app, AppEvent::Resize(80, 24)), Flow::Redraw);
        assert_eq!(handle_event(&mut app, key(KeyCode::Down)), Flow::Redraw);
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('x'))), Flow::Continue);
        assert_eq!(handle_event(&mut app, key(KeyCode::Enter)), Flow::Continue);

        let played = played_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(played, PathBuf::from("b.mp3"));

        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), Flow::Exit);
        assert!(app.browser.is_terminated());
    }

    #[test]
    fn closed_input_quits() {
        let (played_tx, _played_rx) = mpsc::channel();
        let mut app = app(played_tx);

        assert_eq!(handle_event(&mut app, AppEvent::InputClosed), Flow::Exit);
    }

    #[test]
    fn queued_events_after_quit_are_ignored() {
        let (played_tx, played_rx) = mpsc::channel();
        let mut app = app(played_tx);

        app.event_tx.send(AppEvent::Resize(80, 24)).unwrap();
        app.event_tx.send(key(KeyCode::Char('q'))).unwrap();
        app.event_tx.send(key(KeyCode::Down)).unwrap();
        app.event_tx.send(key(KeyCode::Enter)).unwrap();

        let mut flows = Vec::new();
        while let Ok(event) = app.event_rx.try_recv() {
            flows.push(handle_event(&mut app, event));
        }

        assert_eq!(flows, vec![Flow::Redraw, Flow::Exit, Flow::Continue, Flow::Continue]);
        assert_eq!(app.browser.cursor(), 0);
        assert!(played_rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn ignores_unused_terminal_events() {
        assert!(AppEvent::from_terminal(Event::FocusGained).is_none());
        assert!(matches!(
            AppEvent::from_terminal(Event::Resize(10, 20)),
            Some(AppEvent::Resize(10, 20))
        ));
    }
}
