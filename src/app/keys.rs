// promptline — A multi-line terminal chat input with history recall
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Return,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    Esc,
    Other,
}

/// Terminal-independent key press as seen by the input controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    /// Alt/Option or Meta.
    pub meta: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false, meta: false, shift: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { ctrl: true, ..Self::plain(key) }
    }

    pub fn meta(key: Key) -> Self {
        Self { meta: true, ..Self::plain(key) }
    }

    pub fn shift(key: Key) -> Self {
        Self { shift: true, ..Self::plain(key) }
    }

    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.shift
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(event: KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Return,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Esc,
            _ => Key::Other,
        };
        let mods = event.modifiers;
        Self {
            key,
            ctrl: mods.contains(KeyModifiers::CONTROL),
            meta: mods.intersects(KeyModifiers::ALT | KeyModifiers::META),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_char_maps_through() {
        let input = KeyInput::from(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(input, KeyInput::plain(Key::Char('a')));
        assert!(!input.has_modifier());
    }

    #[test]
    fn alt_and_meta_both_count_as_meta() {
        let alt = KeyInput::from(KeyEvent::new(KeyCode::Left, KeyModifiers::ALT));
        let meta = KeyInput::from(KeyEvent::new(KeyCode::Left, KeyModifiers::META));
        assert_eq!(alt, KeyInput::meta(Key::Left));
        assert_eq!(meta, KeyInput::meta(Key::Left));
    }

    #[test]
    fn ctrl_shift_enter() {
        let input = KeyInput::from(KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(input.key, Key::Return);
        assert!(input.ctrl && input.shift && !input.meta);
    }

    #[test]
    fn unmapped_keys_become_other() {
        let input = KeyInput::from(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(input.key, Key::Other);
    }
}
