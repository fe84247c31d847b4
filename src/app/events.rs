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

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, InputOutcome, KeyInput};

/// Route one terminal event into the app. Returns whether a redraw is needed.
pub fn handle_terminal_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            let outcome = app.input.handle_paste(&text);
            apply_outcome(app, outcome)
        }
        Event::Resize(..) => true,
        _ => false,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return true;
        }
        KeyCode::Char('d') if ctrl && app.input.buffer().is_empty() => {
            app.should_quit = true;
            return true;
        }
        KeyCode::Char('v') if ctrl => {
            let Some(text) = app.clipboard.get_text() else {
                return false;
            };
            let outcome = app.input.handle_paste(&text);
            return apply_outcome(app, outcome);
        }
        _ => {}
    }
    let outcome = app.input.handle_key(KeyInput::from(key));
    apply_outcome(app, outcome)
}

fn apply_outcome(app: &mut App, outcome: InputOutcome) -> bool {
    match outcome {
        InputOutcome::Ignored => false,
        InputOutcome::Changed => true,
        InputOutcome::Submitted(text) => {
            tracing::info!(lines = text.lines().count(), "message submitted");
            app.transcript.push(text);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ClipboardSource;
    use pretty_assertions::assert_eq;

    struct FixedClipboard(&'static str);

    impl ClipboardSource for FixedClipboard {
        fn get_text(&mut self) -> Option<String> {
            Some(self.0.to_owned())
        }
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
        handle_terminal_event(app, Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn typing_and_enter_appends_to_transcript() {
        let mut app = App::test_default();
        for c in "hi".chars() {
            assert!(press(&mut app, KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert!(press(&mut app, KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.transcript, vec!["hi".to_owned()]);
        assert!(app.input.buffer().is_empty());
    }

    #[test]
    fn release_events_are_dropped() {
        let mut app = App::test_default();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!handle_terminal_event(&mut app, Event::Key(key)));
        assert!(app.input.buffer().is_empty());
    }

    #[test]
    fn bracketed_paste_goes_through_normalizer() {
        let mut app = App::test_default();
        assert!(handle_terminal_event(&mut app, Event::Paste("a\r\nb".to_owned())));
        assert_eq!(app.input.text(), "a\nb");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::test_default();
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_d_quits_only_when_empty() {
        let mut app = App::test_default();
        press(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Home, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(!app.should_quit);
        assert!(app.input.buffer().is_empty());
        press(&mut app, KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_v_pastes_clipboard() {
        let mut app = App { clipboard: Box::new(FixedClipboard("one\ntwo")), ..App::test_default() };
        assert!(press(&mut app, KeyCode::Char('v'), KeyModifiers::CONTROL));
        assert_eq!(app.input.buffer().lines(), ["one", "two"]);
    }

    #[test]
    fn ctrl_v_with_empty_clipboard_is_noop() {
        let mut app = App::test_default();
        assert!(!press(&mut app, KeyCode::Char('v'), KeyModifiers::CONTROL));
    }

    #[test]
    fn resize_requests_redraw() {
        let mut app = App::test_default();
        assert!(handle_terminal_event(&mut app, Event::Resize(80, 24)));
    }
}
