// =====
// TESTS: 13
// =====
//
// End-to-end editing scenarios through the public controller API.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use promptline::app::{
    EditCommand, InputController, InputOutcome, Key, KeyInput, Motion, handle_terminal_event,
};
use promptline::config::{InputConfig, Mode, SingleLineBreak};

use crate::helpers::{multi_line, press, single_line, test_app, type_str};

#[test]
fn type_hello_move_left_twice_insert_x() {
    let mut input = single_line();
    type_str(&mut input, "hello");
    press(&mut input, Key::Left);
    press(&mut input, Key::Left);
    type_str(&mut input, "X");
    assert_eq!(input.text(), "helXlo");
    assert_eq!(input.buffer().cursor(), (0, 4));
}

#[test]
fn single_line_paste_with_break_promotes() {
    let mut input = single_line();
    type_str(&mut input, "abc");
    assert_eq!(input.buffer().cursor(), (0, 3));
    input.handle_paste("x\ny");
    assert_eq!(input.mode(), Mode::MultiLine);
    assert_eq!(input.buffer().lines(), ["abcx", "y"]);
    assert_eq!(input.buffer().cursor(), (1, 1));
}

#[test]
fn backspace_at_row_start_merges_lines() {
    let mut input = multi_line();
    input.handle_paste("ab\ncd");
    input.apply(EditCommand::Move(Motion::Home));
    assert_eq!(input.buffer().cursor(), (1, 0));
    press(&mut input, Key::Backspace);
    assert_eq!(input.buffer().lines(), ["abcd"]);
    assert_eq!(input.buffer().cursor(), (0, 2));
}

#[test]
fn newline_then_backspace_is_identity() {
    let mut input = multi_line();
    type_str(&mut input, "split me");
    press(&mut input, Key::Left);
    press(&mut input, Key::Left);
    let before = (input.text(), input.buffer().cursor());
    press(&mut input, Key::Return);
    assert_eq!(input.buffer().line_count(), 2);
    press(&mut input, Key::Backspace);
    assert_eq!((input.text(), input.buffer().cursor()), before);
}

#[test]
fn insert_then_backspace_round_trip() {
    let mut input = single_line();
    type_str(&mut input, "keep");
    press(&mut input, Key::Left);
    let before = (input.text(), input.buffer().cursor());
    let s = "a b\u{1F600}c";
    type_str(&mut input, s);
    for _ in 0..s.chars().count() {
        press(&mut input, Key::Backspace);
    }
    assert_eq!((input.text(), input.buffer().cursor()), before);
}

#[test]
fn word_left_then_right_is_asymmetric() {
    let mut input = single_line();
    type_str(&mut input, "abc def");
    press(&mut input, Key::Left);
    press(&mut input, Key::Left); // col 5, inside "def"
    input.handle_key(KeyInput::ctrl(Key::Left));
    assert_eq!(input.buffer().cursor(), (0, 4));
    input.handle_key(KeyInput::ctrl(Key::Right));
    assert_eq!(input.buffer().cursor(), (0, 7));
}

#[test]
fn wrap_of_130_chars_at_width_50() {
    let mut input = multi_line();
    input.resize(50, 10);
    input.handle_paste(&"w".repeat(130));
    let lens: Vec<usize> =
        input.visual_state().lines.iter().map(|l| l.text.chars().count()).collect();
    assert_eq!(lens, vec![50, 50, 30]);
    assert_eq!(input.visual_state().cursor, (2, 30));
}

#[test]
fn multi_line_scroll_keeps_cursor_visible_while_moving_up() {
    let mut input = multi_line();
    input.resize(40, 3);
    input.handle_paste("1\n2\n3\n4\n5\n6\n7");
    assert_eq!(input.visual_state().scroll_top, 4);
    for _ in 0..6 {
        press(&mut input, Key::Up);
    }
    assert_eq!(input.buffer().cursor().0, 0);
    assert_eq!(input.visual_state().scroll_top, 0);
}

#[test]
fn pasted_escape_sequences_are_sanitized() {
    let mut input = single_line();
    input.handle_paste("\x1b[1mbold\x1b[0m\r\n");
    assert_eq!(input.buffer().lines(), ["[1mbold[0m", ""]);
}

#[test]
fn clear_all_then_submit_is_ignored() {
    let mut input = single_line();
    type_str(&mut input, "draft");
    input.handle_key(KeyInput::ctrl(Key::Char('u')));
    assert_eq!(press(&mut input, Key::Return), InputOutcome::Ignored);
    assert!(input.history().is_empty());
}

#[test]
fn app_transcript_collects_submissions() {
    let mut app = test_app();
    for c in "ping".chars() {
        handle_terminal_event(&mut app, Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }
    handle_terminal_event(&mut app, Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    handle_terminal_event(&mut app, Event::Paste("multi\nline".to_owned()));
    handle_terminal_event(&mut app, Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)));
    assert_eq!(app.transcript, vec!["ping".to_owned(), "multi\nline".to_owned()]);
}

#[test]
fn status_summary_tracks_edits() {
    let mut input = single_line();
    type_str(&mut input, "abc");
    let status = input.status_summary();
    assert_eq!((status.mode, status.char_count, status.line_count), (Mode::SingleLine, 3, 1));
}

#[test]
fn reject_policy_holds_for_typed_line_break_chars() {
    let mut input = InputController::new(InputConfig {
        single_line_break: SingleLineBreak::Reject,
        ..InputConfig::default()
    });
    type_str(&mut input, "one\ntwo");
    assert_eq!(input.mode(), Mode::SingleLine);
    assert_eq!(input.buffer().lines(), ["onetwo"]);
    // pasted breaks still promote
    input.handle_paste("\nthree");
    assert_eq!(input.mode(), Mode::MultiLine);
    assert_eq!(input.buffer().lines(), ["onetwo", "three"]);
}
