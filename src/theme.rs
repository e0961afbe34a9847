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

//! Visual styling for the TUI.
//!
//! This module defines the application's colour palette and border glyphs.
//! A [`Theme`] is built once at startup and handed to the renderers by
//! reference, it is never modified afterwards.

use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) title_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) track_fg: Color,
    pub(crate) selected_fg: Color,
    pub(crate) selected_bg: Color,

    pub(crate) rule: &'static str,
    pub(crate) title_edge: &'static str,
    pub(crate) help_edge: &'static str,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            title_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),

            track_fg: Color::Rgb(255, 255, 255),
            selected_fg: Color::Rgb(255, 255, 255),
            selected_bg: Color::Rgb(190, 60, 60),

            rule: "─",
            title_edge: "├",
            help_edge: "┤",
        }
    }

    pub(crate) fn track_style(&self) -> Style {
        Style::default().fg(self.track_fg).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn selected_track_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn title_style(&self) -> Style {
        Style::default().fg(self.title_colour).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn border_style(&self) -> Style {
        Style::default().fg(self.border_colour)
    }
}
