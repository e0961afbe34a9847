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

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::browser::BrowserAction;

/// Maps keyboard input to browser actions.
///
/// Only key presses are considered. Keys without a binding map to `None` and
/// are ignored by the caller.
pub(super) fn map_key_event(key: KeyEvent) -> Option<BrowserAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match (key.code, key.modifiers) {
        // Raw mode delivers the interrupt as a plain key press
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => BrowserAction::Quit,
        (KeyCode::Char('q'), _) => BrowserAction::Quit,

        (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => BrowserAction::PageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => BrowserAction::PageUp,

        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => BrowserAction::Up,
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => BrowserAction::Down,
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => BrowserAction::First,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => BrowserAction::Last,

        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => BrowserAction::Activate,

        _ => return None,
    };

    Some(action)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn maps_bound_keys() {
        let cases = [
            (press(KeyCode::Char('q')), BrowserAction::Quit),
            (ctrl('c'), BrowserAction::Quit),
            (press(KeyCode::Up), BrowserAction::Up),
            (press(KeyCode::Char('k')), BrowserAction::Up),
            (press(KeyCode::Down), BrowserAction::Down),
            (press(KeyCode::Char('j')), BrowserAction::Down),
            (press(KeyCode::Enter), BrowserAction::Activate),
            (press(KeyCode::Char(' ')), BrowserAction::Activate),
            (press(KeyCode::Char('g')), BrowserAction::First),
            (KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), BrowserAction::Last),
            (ctrl('f'), BrowserAction::PageDown),
            (press(KeyCode::PageUp), BrowserAction::PageUp),
        ];

        for (key, action) in cases {
            assert_eq!(map_key_event(key), Some(action), "{:?}", key);
        }
    }

    #[test]
    fn ignores_unbound_keys() {
        assert_eq!(map_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(press(KeyCode::Tab)), None);
        assert_eq!(map_key_event(ctrl('x')), None);
    }

    #[test]
    fn ignores_key_release() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(map_key_event(release), None);
    }
}
