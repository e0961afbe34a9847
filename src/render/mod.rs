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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`TrackBrowser`] state into
//! visual widgets using the `ratatui` framework.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. The screen is split into three zones:
//!
//! * **Header**: the title and a horizontal rule.
//! * **Content**: the visible part of the track list viewport.
//! * **Footer**: a horizontal rule and the key help.
//!
//! Until the terminal size is known only a placeholder is shown.

pub(crate) mod frame;
pub(crate) mod list;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Text},
    widgets::Paragraph,
};

use crate::{
    browser::TrackBrowser,
    render::frame::{FOOTER_HEIGHT, footer_line, header_line},
};

const PLACEHOLDER: &str = "  Initializing...";

/// Fixed text shown around the track list.
#[derive(Debug, Clone)]
pub(crate) struct Chrome {
    pub(crate) title: String,
    pub(crate) help: String,
}

/// Composes the full screen as text, header first and footer last.
pub(crate) fn screen_text(browser: &TrackBrowser, chrome: &Chrome) -> Text<'static> {
    let Some(viewport) = browser.viewport() else {
        return Text::from(vec![Line::default(), Line::from(PLACEHOLDER)]);
    };

    let theme = browser.theme();
    let mut lines = Vec::with_capacity(viewport.height() as usize + 2);
    lines.push(header_line(&chrome.title, viewport.width(), theme));
    lines.extend(viewport.visible_lines().iter().cloned());
    lines.push(footer_line(&chrome.help, viewport.width(), theme));

    Text::from(lines)
}

/// Renders the user interface to the terminal frame.
pub(crate) fn draw(f: &mut Frame, browser: &TrackBrowser, chrome: &Chrome) {
    let area = f.area();

    let Some(viewport) = browser.viewport() else {
        f.render_widget(Paragraph::new(screen_text(browser, chrome)), area);
        return;
    };

    let theme = browser.theme();

    // Header, list, footer; the list starts at the viewport's recorded row
    let zones = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(viewport.y_position()),
            Constraint::Length(viewport.height()),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(header_line(&chrome.title, area.width, theme)),
        zones[0],
    );
    f.render_widget(
        Paragraph::new(viewport.visible_lines().to_vec()),
        zones[1],
    );
    f.render_widget(
        Paragraph::new(footer_line(&chrome.help, area.width, theme)),
        zones[2],
    );
}
