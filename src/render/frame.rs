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

//! Render the header and footer bars.
//!
//! The header holds the title followed by a horizontal rule, the footer a
//! rule followed by the key help. Both are exactly one line high and the rule
//! fills whatever width the text leaves over.

use ratatui::text::{Line, Span};

use crate::theme::Theme;

pub(crate) const HEADER_HEIGHT: u16 = 1;
pub(crate) const FOOTER_HEIGHT: u16 = 1;

pub(crate) fn header_line(title: &str, width: u16, theme: &Theme) -> Line<'static> {
    let title = Span::styled(format!(" {} ", title), theme.title_style());
    let edge = Span::styled(theme.title_edge, theme.border_style());
    let used = title.width() + edge.width();

    Line::from(vec![title, edge, rule(width, used, theme)])
}

pub(crate) fn footer_line(help: &str, width: u16, theme: &Theme) -> Line<'static> {
    let edge = Span::styled(theme.help_edge, theme.border_style());
    let help = Span::styled(format!(" {} ", help), theme.border_style());
    let used = edge.width() + help.width();

    Line::from(vec![rule(width, used, theme), edge, help])
}

fn rule(width: u16, used: usize, theme: &Theme) -> Span<'static> {
    let len = (width as usize).saturating_sub(used);
    Span::styled(theme.rule.repeat(len), theme.border_style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_rule_fills_remaining_width() {
        let line = header_line("Pick", 20, &Theme::default());

        assert_eq!(line.width(), 20);
        assert_eq!(line.to_string(), " Pick ├─────────────");
    }

    #[test]
    fn footer_rule_precedes_help() {
        let line = footer_line("q quits", 16, &Theme::default());

        assert_eq!(line.width(), 16);
        assert_eq!(line.to_string(), "──────┤ q quits ");
    }

    #[test]
    fn narrow_terminal_drops_rule() {
        let line = header_line("A long title", 4, &Theme::default());

        assert_eq!(line.to_string(), " A long title ├");
    }
}
