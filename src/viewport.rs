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

//! Scrollable window over rendered content.
//!
//! A [`Viewport`] holds more lines than fit on screen and exposes only the
//! slice starting at its vertical offset. Every request is clamped to a valid
//! state, nothing here can fail.

use ratatui::text::Line;

#[derive(Debug, Default)]
pub(crate) struct Viewport {
    width: u16,
    height: u16,

    /// Screen row the first visible line is drawn on.
    y_position: u16,

    y_offset: usize,
    lines: Vec<Line<'static>>,
}

impl Viewport {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub(crate) fn width(&self) -> u16 {
        self.width
    }

    pub(crate) fn height(&self) -> u16 {
        self.height
    }

    pub(crate) fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub(crate) fn y_position(&self) -> u16 {
        self.y_position
    }

    pub(crate) fn set_y_position(&mut self, y: u16) {
        self.y_position = y;
    }

    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scroll_to(self.y_offset);
    }

    /// Replaces the content, keeping the current scroll position where it is
    /// still valid.
    pub(crate) fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.scroll_to(self.y_offset);
    }

    pub(crate) fn content_len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn visible_lines(&self) -> &[Line<'static>] {
        let start = self.y_offset.min(self.lines.len());
        let end = start
            .saturating_add(self.height as usize)
            .min(self.lines.len());
        &self.lines[start..end]
    }

    pub(crate) fn scroll_to(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_y_offset());
    }

    /// Scrolls the minimum distance needed for line `index` to be visible.
    ///
    /// Above the window the line becomes the first visible line, below it the
    /// last.
    pub(crate) fn scroll_into_view(&mut self, index: usize) {
        if index < self.y_offset {
            self.scroll_to(index);
        } else if index >= self.y_offset + self.height as usize {
            self.scroll_to((index + 1).saturating_sub(self.height as usize));
        }
    }

    fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Line<'static>> {
        (0..count).map(|i| Line::from(i.to_string())).collect()
    }

    fn visible(viewport: &Viewport) -> Vec<String> {
        viewport.visible_lines().iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn shows_slice_from_offset() {
        let mut viewport = Viewport::new(10, 3);
        viewport.set_content(numbered(10));
        viewport.scroll_to(4);

        assert_eq!(visible(&viewport), vec!["4", "5", "6"]);
    }

    #[test]
    fn taller_than_content_shows_everything() {
        let mut viewport = Viewport::new(10, 20);
        viewport.set_content(numbered(3));

        assert_eq!(visible(&viewport), vec!["0", "1", "2"]);
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn scroll_is_clamped_to_last_page() {
        let mut viewport = Viewport::new(10, 4);
        viewport.set_content(numbered(10));
        viewport.scroll_to(100);

        assert_eq!(viewport.y_offset(), 6);
        assert_eq!(visible(&viewport), vec!["6", "7", "8", "9"]);
    }

    #[test]
    fn growing_reclamps_offset() {
        let mut viewport = Viewport::new(10, 4);
        viewport.set_content(numbered(10));
        viewport.scroll_to(6);
        viewport.resize(20, 8);

        assert_eq!(viewport.width(), 20);
        assert_eq!(viewport.height(), 8);
        assert_eq!(viewport.y_offset(), 2);
    }

    #[test]
    fn set_content_keeps_offset() {
        let mut viewport = Viewport::new(10, 4);
        viewport.set_content(numbered(10));
        viewport.scroll_to(3);
        viewport.set_content(numbered(10));

        assert_eq!(viewport.y_offset(), 3);
    }

    #[test]
    fn zero_height_shows_nothing() {
        let mut viewport = Viewport::new(10, 0);
        viewport.set_content(numbered(5));
        viewport.scroll_into_view(2);

        assert!(viewport.visible_lines().is_empty());
        assert!(viewport.y_offset() <= viewport.content_len());
    }

    #[test]
    fn scroll_into_view_aligns_to_nearest_edge() {
        let mut viewport = Viewport::new(10, 3);
        viewport.set_content(numbered(10));

        viewport.scroll_into_view(5);
        assert_eq!(viewport.y_offset(), 3);
        assert_eq!(visible(&viewport).last().unwrap(), "5");

        viewport.scroll_into_view(4);
        assert_eq!(viewport.y_offset(), 3);

        viewport.scroll_into_view(1);
        assert_eq!(visible(&viewport).first().unwrap(), "1");
    }
}
