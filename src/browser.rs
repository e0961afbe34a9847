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

//! Track browser state management.
//!
//! This module provides the state machine behind the track list: it owns the
//! cursor and the scrolling viewport, and reacts to [`BrowserAction`]s. It
//! never touches the terminal or the audio engine directly, instead each
//! update returns an [`Outcome`] telling the caller what to do next.
//!
//! The browser moves through three phases:
//!
//! * **Uninitialized** until the first resize, since the viewport cannot be
//!   sized without knowing the terminal dimensions.
//! * **Ready** for normal interactive use.
//! * **Terminated** once quit is requested, after which every action is
//!   ignored.

use tracing::debug;

use crate::{
    model::{Catalog, Track},
    render::{
        frame::{FOOTER_HEIGHT, HEADER_HEIGHT},
        list::render_track_list,
    },
    theme::Theme,
    viewport::Viewport,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BrowserAction {
    Resize(u16, u16),
    Up,
    Down,
    First,
    Last,
    PageUp,
    PageDown,
    Activate,
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    /// Nothing visible changed.
    Unchanged,
    Redraw,
    /// Start playing the track, without waiting for the result.
    Play(Track),
    Exit,
}

#[derive(Debug)]
enum Phase {
    Uninitialized,
    Ready(Viewport),
    Terminated,
}

#[derive(Debug)]
pub(crate) struct TrackBrowser {
    catalog: Catalog,
    theme: Theme,
    cursor: usize,
    phase: Phase,
}

impl TrackBrowser {
    pub(crate) fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            theme,
            cursor: 0,
            phase: Phase::Uninitialized,
        }
    }

    pub(crate) fn theme(&self) -> &Theme {
        &self.theme
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn selection(&self) -> &Track {
        &self.catalog.tracks()[self.cursor]
    }

    /// The viewport, once the terminal size is known.
    pub(crate) fn viewport(&self) -> Option<&Viewport> {
        match &self.phase {
            Phase::Ready(viewport) => Some(viewport),
            _ => None,
        }
    }

    pub(crate) fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated)
    }

    /// Applies a single action and reports what the caller must do next.
    pub(crate) fn update(&mut self, action: BrowserAction) -> Outcome {
        if self.is_terminated() {
            return Outcome::Unchanged;
        }

        match action {
            BrowserAction::Quit => {
                debug!("Browser terminated");
                self.phase = Phase::Terminated;
                Outcome::Exit
            }
            BrowserAction::Resize(width, height) => {
                self.resize(width, height);
                Outcome::Redraw
            }
            _ if self.viewport().is_none() => Outcome::Unchanged,
            BrowserAction::Activate => Outcome::Play(self.selection().clone()),
            BrowserAction::Up => self.move_cursor(self.cursor.saturating_sub(1)),
            BrowserAction::Down => self.move_cursor(self.cursor + 1),
            BrowserAction::First => self.move_cursor(0),
            BrowserAction::Last => self.move_cursor(self.catalog.last_index()),
            BrowserAction::PageUp => self.move_cursor(self.cursor.saturating_sub(self.page_size())),
            BrowserAction::PageDown => self.move_cursor(self.cursor + self.page_size()),
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        let content_height = height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);

        if let Phase::Ready(viewport) = &mut self.phase {
            viewport.resize(width, content_height);
            viewport.scroll_into_view(self.cursor);
            return;
        }

        let mut viewport = Viewport::new(width, content_height);
        viewport.set_y_position(HEADER_HEIGHT);
        viewport.set_content(render_track_list(&self.catalog, self.cursor, &self.theme));
        debug!(width, height = content_height, tracks = viewport.content_len(), "Browser ready");
        self.phase = Phase::Ready(viewport);
    }

    fn move_cursor(&mut self, target: usize) -> Outcome {
        let target = target.min(self.catalog.last_index());
        if target == self.cursor {
            return Outcome::Unchanged;
        }
        self.cursor = target;

        if let Phase::Ready(viewport) = &mut self.phase {
            viewport.set_content(render_track_list(&self.catalog, self.cursor, &self.theme));
            viewport.scroll_into_view(self.cursor);
            debug!(cursor = self.cursor, offset = viewport.y_offset(), "Cursor moved");
        }

        Outcome::Redraw
    }

    fn page_size(&self) -> usize {
        self.viewport()
            .map_or(1, |viewport| viewport.height() as usize)
            .max(1)
    }
}
