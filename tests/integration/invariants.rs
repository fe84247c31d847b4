// =====
// TESTS: 1
// =====
//
// Property tests: the cursor stays inside the document after any sequence of
// key presses and pastes, in either mode.

use promptline::app::{InputController, Key, KeyInput};
use promptline::config::{InputConfig, Mode};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Key(KeyInput),
    Paste(String),
    Resize(u16, u16),
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        prop::char::range('a', 'e').prop_map(Key::Char),
        Just(Key::Char(' ')),
        Just(Key::Return),
        Just(Key::Backspace),
        Just(Key::Delete),
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Home),
        Just(Key::End),
        Just(Key::Tab),
        Just(Key::Char('k')),
        Just(Key::Char('w')),
        Just(Key::Char('u')),
        Just(Key::Char('t')),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (key_strategy(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(key, ctrl, meta, shift)| Op::Key(KeyInput { key, ctrl, meta, shift })
        ),
        1 => r"[a-c \n\r\t\x1b]{0,12}".prop_map(Op::Paste),
        1 => (0u16..20, 0u16..6).prop_map(|(w, h)| Op::Resize(w, h)),
    ]
}

fn assert_invariants(input: &InputController) {
    let buffer = input.buffer();
    let (row, col) = buffer.cursor();
    assert!(buffer.line_count() >= 1);
    assert!(row < buffer.line_count());
    assert!(col <= buffer.lines()[row].chars().count());
    if input.mode() == Mode::SingleLine {
        assert_eq!(buffer.line_count(), 1);
    }

    let visual = input.visual_state();
    assert!(visual.cursor.0 < visual.lines.len());
    assert!(visual.scroll_top <= visual.cursor.0);
    assert!(visual.cursor.0 < visual.scroll_top + visual.viewport_height);
}

proptest! {
    #[test]
    fn cursor_and_viewport_invariants_hold(
        multi in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let initial_mode = if multi { Mode::MultiLine } else { Mode::SingleLine };
        let mut input = InputController::new(InputConfig {
            initial_mode,
            history_capacity: 3,
            promote_threshold: 30,
            ..InputConfig::default()
        });
        for op in ops {
            match op {
                Op::Key(key) => {
                    input.handle_key(key);
                }
                Op::Paste(text) => {
                    input.handle_paste(&text);
                }
                Op::Resize(w, h) => input.resize(w, h),
            }
            assert_invariants(&input);
        }
        prop_assert!(input.history().len() <= 3);
    }
}
