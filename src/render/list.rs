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

//! Render the track list.
//!
//! Turns the catalog into one styled line per track, highlighting the track
//! under the cursor.

use ratatui::text::Line;

use crate::{model::Catalog, theme::Theme};

/// Renders every track in catalog order, one line each.
///
/// The line at `cursor` uses the theme's selected style, all others the
/// normal track style.
pub(crate) fn render_track_list(catalog: &Catalog, cursor: usize, theme: &Theme) -> Vec<Line<'static>> {
    catalog
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let style = if i == cursor {
                theme.selected_track_style()
            } else {
                theme.track_style()
            };
            Line::styled(format!(" {} ", track.label()), style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::new(names.iter().map(|n| Track::new(*n)).collect()).unwrap()
    }

    #[test]
    fn one_line_per_track_with_single_selection() {
        let theme = Theme::default();
        let catalog = catalog(&["x/a.mp3", "x/b.mp3", "x/y/c.mp3", "d.mp3"]);

        for cursor in 0..catalog.len() {
            let lines = render_track_list(&catalog, cursor, &theme);
            assert_eq!(lines.len(), 4);

            let selected: Vec<usize> = lines
                .iter()
                .enumerate()
                .filter(|(_, line)| line.style == theme.selected_track_style())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(selected, vec![cursor]);
        }
    }

    #[test]
    fn lines_show_padded_labels() {
        let theme = Theme::default();
        let lines = render_track_list(&catalog(&["/music/One.mp3", "Two.mp3"]), 1, &theme);

        assert_eq!(lines[0].to_string(), " One ");
        assert_eq!(lines[1].to_string(), " Two ");
        assert_eq!(lines[0].style, theme.track_style());
    }
}
