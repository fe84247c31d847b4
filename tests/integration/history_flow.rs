// =====
// TESTS: 6
// =====
//
// History recall through the controller, including the draft and eviction.

use pretty_assertions::assert_eq;
use promptline::app::{InputController, InputOutcome, Key, KeyInput};
use promptline::config::InputConfig;

use crate::helpers::{multi_line, press, single_line, submit, type_str};

#[test]
fn submit_a_b_then_recall() {
    let mut input = single_line();
    assert_eq!(submit(&mut input, "a"), InputOutcome::Submitted("a".to_owned()));
    assert_eq!(submit(&mut input, "b"), InputOutcome::Submitted("b".to_owned()));
    type_str(&mut input, "pending");

    press(&mut input, Key::Up);
    press(&mut input, Key::Up);
    assert_eq!(input.text(), "a");
    press(&mut input, Key::Down);
    assert_eq!(input.text(), "b");
    press(&mut input, Key::Down);
    assert_eq!(input.text(), "pending");
    assert!(!input.history().is_browsing());
}

#[test]
fn recall_with_empty_draft_returns_to_empty() {
    let mut input = single_line();
    submit(&mut input, "only");
    press(&mut input, Key::Up);
    assert_eq!(input.text(), "only");
    press(&mut input, Key::Down);
    assert!(input.buffer().is_empty());
}

#[test]
fn history_is_bounded() {
    let mut input = InputController::new(InputConfig {
        history_capacity: 2,
        ..InputConfig::default()
    });
    for text in ["one", "two", "three"] {
        submit(&mut input, text);
    }
    assert_eq!(input.history().entries().collect::<Vec<_>>(), vec!["two", "three"]);
    press(&mut input, Key::Up);
    press(&mut input, Key::Up);
    press(&mut input, Key::Up);
    assert_eq!(input.text(), "two");
}

#[test]
fn edited_recall_is_submitted_as_new_entry() {
    let mut input = single_line();
    submit(&mut input, "ls");
    press(&mut input, Key::Up);
    type_str(&mut input, " -la");
    assert_eq!(press(&mut input, Key::Return), InputOutcome::Submitted("ls -la".to_owned()));
    assert_eq!(input.history().entries().collect::<Vec<_>>(), vec!["ls", "ls -la"]);
}

#[test]
fn multi_line_up_reaches_history_only_from_first_row() {
    let mut input = multi_line();
    input.handle_paste("earlier");
    input.handle_key(KeyInput::meta(Key::Return));
    input.handle_paste("row0\nrow1");
    press(&mut input, Key::Up);
    assert_eq!(input.text(), "row0\nrow1");
    assert_eq!(input.buffer().cursor().0, 0);
    press(&mut input, Key::Up);
    assert_eq!(input.text(), "earlier");
    press(&mut input, Key::Down);
    assert_eq!(input.text(), "row0\nrow1");
}

#[test]
fn whitespace_submission_never_reaches_history() {
    let mut input = single_line();
    assert_eq!(submit(&mut input, " \t "), InputOutcome::Ignored);
    press(&mut input, Key::Up);
    assert_eq!(input.text(), " \t ");
    assert!(input.history().is_empty());
}
