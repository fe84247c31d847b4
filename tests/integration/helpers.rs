use promptline::app::{App, InputController, InputOutcome, Key, KeyInput};
use promptline::config::{InputConfig, Mode};

/// Build a minimal `App` for integration testing.
/// No terminal, no clipboard -- just state.
pub fn test_app() -> App {
    App::test_default()
}

pub fn single_line() -> InputController {
    InputController::default()
}

pub fn multi_line() -> InputController {
    InputController::new(InputConfig { initial_mode: Mode::MultiLine, ..InputConfig::default() })
}

/// Type every char of `text` as an individual key press.
pub fn type_str(input: &mut InputController, text: &str) {
    for c in text.chars() {
        input.handle_key(KeyInput::plain(Key::Char(c)));
    }
}

pub fn press(input: &mut InputController, key: Key) -> InputOutcome {
    input.handle_key(KeyInput::plain(key))
}

/// Type `text` and submit it with plain return (single-line mode).
pub fn submit(input: &mut InputController, text: &str) -> InputOutcome {
    type_str(input, text);
    press(input, Key::Return)
}
