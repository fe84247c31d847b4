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

use super::buffer::LineBuffer;
use super::history::HistoryNavigator;
use super::keys::{Key, KeyInput};
use super::paste;
use super::visual::{VisualProjector, VisualState};
use crate::config::{InputConfig, Mode, SingleLineBreak, SubmitModifier};

/// Wrap width used until the renderer reports its real width.
const FALLBACK_WRAP_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
    Home,
    End,
}

/// What a single key press means for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    DeleteWordForward,
    Move(Motion),
    KillToEnd,
    ClearAll,
    ToggleMode,
    RecallPrevious,
    RecallNext,
    Submit,
}

impl EditCommand {
    /// Commands that change the document. These end history browsing first so
    /// the recalled entry is edited as a copy.
    fn edits(self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertNewline
                | Self::DeleteBackward
                | Self::DeleteForward
                | Self::DeleteWordBackward
                | Self::DeleteWordForward
                | Self::KillToEnd
                | Self::ClearAll
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing observable changed.
    Ignored,
    /// Document, cursor, mode or history position changed; re-render.
    Changed,
    /// The trimmed document was submitted and the input cleared.
    Submitted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSummary {
    pub mode: Mode,
    pub char_count: usize,
    pub line_count: usize,
    /// `(1-based position, total)` while browsing history.
    pub history_position: Option<(usize, usize)>,
}

/// Per-keystroke dispatcher owning the whole input session.
#[derive(Debug)]
pub struct InputController {
    config: InputConfig,
    mode: Mode,
    buffer: LineBuffer,
    history: HistoryNavigator,
    projector: VisualProjector,
    wrap_width: usize,
    viewport_height: usize,
    visual: VisualState,
}

impl InputController {
    pub fn new(config: InputConfig) -> Self {
        let wrap_width = config.wrap_width.map_or(FALLBACK_WRAP_WIDTH, usize::from);
        let viewport_height = usize::from(config.viewport_height).max(1);
        let mut controller = Self {
            mode: config.initial_mode,
            history: HistoryNavigator::new(config.history_capacity),
            buffer: LineBuffer::new(),
            projector: VisualProjector::new(),
            visual: VisualState::default(),
            wrap_width,
            viewport_height,
            config,
        };
        controller.refresh();
        controller
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryNavigator {
        &self.history
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn visual_state(&self) -> &VisualState {
        &self.visual
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    pub fn status_summary(&self) -> StatusSummary {
        StatusSummary {
            mode: self.mode,
            char_count: self.buffer.char_count(),
            line_count: self.buffer.line_count(),
            history_position: self.history.position(),
        }
    }

    /// Adopt the render area's size. A configured wrap width wins over
    /// `width`; the viewport never exceeds the configured height.
    pub fn resize(&mut self, width: u16, max_height: u16) {
        self.wrap_width = self.config.wrap_width.unwrap_or(width).max(1).into();
        self.viewport_height =
            usize::from(self.config.viewport_height.min(max_height)).max(1);
        self.refresh();
    }

    /// Map a key press to a command. `None` means the key is not ours.
    pub fn classify(&self, input: KeyInput) -> Option<EditCommand> {
        let word = input.ctrl || input.meta;
        let command = match input.key {
            Key::Char(c) if input.ctrl => match c.to_ascii_lowercase() {
                'a' => EditCommand::Move(Motion::Home),
                'e' => EditCommand::Move(Motion::End),
                'b' => EditCommand::Move(Motion::Left),
                'f' => EditCommand::Move(Motion::Right),
                'h' => EditCommand::DeleteBackward,
                'd' => EditCommand::DeleteForward,
                'w' => EditCommand::DeleteWordBackward,
                'k' => EditCommand::KillToEnd,
                'u' => EditCommand::ClearAll,
                'p' => EditCommand::RecallPrevious,
                'n' => EditCommand::RecallNext,
                't' => EditCommand::ToggleMode,
                // Many terminals report ctrl+return as ctrl+j.
                'j' => self.return_command(KeyInput::ctrl(Key::Return)),
                _ => return None,
            },
            Key::Char(c) if input.meta => match c.to_ascii_lowercase() {
                'b' => EditCommand::Move(Motion::WordLeft),
                'f' => EditCommand::Move(Motion::WordRight),
                'd' => EditCommand::DeleteWordForward,
                _ => return None,
            },
            // A typed line break obeys the same policy as return.
            Key::Char('\n' | '\r') => EditCommand::InsertNewline,
            Key::Char(c) if paste::is_insertable(c) => EditCommand::InsertChar(c),
            Key::Char(_) | Key::Esc | Key::Other => return None,
            Key::Tab if word => return None,
            Key::Tab => EditCommand::InsertChar('\t'),
            Key::Return => self.return_command(input),
            Key::Backspace if word => EditCommand::DeleteWordBackward,
            Key::Backspace => EditCommand::DeleteBackward,
            Key::Delete if word => EditCommand::DeleteWordForward,
            Key::Delete => EditCommand::DeleteForward,
            Key::Left if word => EditCommand::Move(Motion::WordLeft),
            Key::Left => EditCommand::Move(Motion::Left),
            Key::Right if word => EditCommand::Move(Motion::WordRight),
            Key::Right => EditCommand::Move(Motion::Right),
            Key::Up => self.vertical_command(Motion::Up),
            Key::Down => self.vertical_command(Motion::Down),
            Key::Home => EditCommand::Move(Motion::Home),
            Key::End => EditCommand::Move(Motion::End),
        };
        Some(command)
    }

    // Plain return submits in single-line mode and breaks the line in
    // multi-line mode. The submit modifier swaps the two.
    fn return_command(&self, input: KeyInput) -> EditCommand {
        let modified = match self.config.submit_modifier {
            SubmitModifier::Ctrl => input.ctrl,
            SubmitModifier::Alt => input.meta,
            SubmitModifier::Shift => input.shift,
            SubmitModifier::Any => input.has_modifier(),
        };
        match (self.mode, modified) {
            (Mode::SingleLine, false) | (Mode::MultiLine, true) => EditCommand::Submit,
            (Mode::SingleLine, true) | (Mode::MultiLine, false) => EditCommand::InsertNewline,
        }
    }

    // Up/down move between lines in multi-line mode and only reach history
    // from the first/last row.
    fn vertical_command(&self, motion: Motion) -> EditCommand {
        let at_edge = match motion {
            Motion::Up => self.buffer.is_on_first_row(),
            _ => self.buffer.is_on_last_row(),
        };
        match (self.mode, at_edge, motion) {
            (Mode::MultiLine, false, _) => EditCommand::Move(motion),
            (_, _, Motion::Up) => EditCommand::RecallPrevious,
            _ => EditCommand::RecallNext,
        }
    }

    pub fn handle_key(&mut self, input: KeyInput) -> InputOutcome {
        match self.classify(input) {
            Some(command) => self.apply(command),
            None => InputOutcome::Ignored,
        }
    }

    /// Insert externally supplied text after sanitizing it.
    pub fn handle_paste(&mut self, raw: &str) -> InputOutcome {
        let text = paste::normalize_paste(raw);
        if text.is_empty() {
            return InputOutcome::Ignored;
        }
        self.history.exit_browsing();
        if self.mode == Mode::SingleLine
            && paste::forces_multiline(&text, self.config.large_paste_threshold)
        {
            self.promote("paste");
        }
        self.buffer.insert(&text);
        self.enforce_promotion();
        self.refresh();
        InputOutcome::Changed
    }

    pub fn apply(&mut self, command: EditCommand) -> InputOutcome {
        let version = self.buffer.version();
        let mode = self.mode;
        let position = self.history.position();

        if command.edits() && self.history.is_browsing() {
            self.history.exit_browsing();
        }

        // Single-line mode always holds exactly one line, so boundary
        // deletes and motions below are no-ops there without extra checks.
        match command {
            EditCommand::InsertChar('\n') | EditCommand::InsertNewline => self.line_break(),
            EditCommand::InsertChar(c) => {
                self.buffer.insert_char(c);
                self.enforce_promotion();
            }
            EditCommand::DeleteBackward => self.buffer.delete_backward(),
            EditCommand::DeleteForward => self.buffer.delete_forward(),
            EditCommand::DeleteWordBackward => self.buffer.delete_word_backward(),
            EditCommand::DeleteWordForward => self.buffer.delete_word_forward(),
            EditCommand::Move(motion) => self.move_cursor(motion),
            EditCommand::KillToEnd => self.buffer.kill_to_line_end(),
            EditCommand::ClearAll => self.buffer.clear(),
            EditCommand::ToggleMode => self.toggle_mode(),
            EditCommand::RecallPrevious => {
                self.history.recall_previous(&mut self.buffer);
                self.enforce_promotion();
            }
            EditCommand::RecallNext => {
                self.history.recall_next(&mut self.buffer);
                self.enforce_promotion();
            }
            EditCommand::Submit => {
                if let Some(text) = self.submit() {
                    self.refresh();
                    return InputOutcome::Submitted(text);
                }
            }
        }
        self.refresh();

        if self.buffer.version() != version
            || self.mode != mode
            || self.history.position() != position
        {
            InputOutcome::Changed
        } else {
            InputOutcome::Ignored
        }
    }

    fn move_cursor(&mut self, motion: Motion) {
        match motion {
            Motion::Left => self.buffer.move_left(),
            Motion::Right => self.buffer.move_right(),
            Motion::Up => self.buffer.move_up(),
            Motion::Down => self.buffer.move_down(),
            Motion::WordLeft => self.buffer.move_word_left(),
            Motion::WordRight => self.buffer.move_word_right(),
            Motion::Home => self.buffer.move_home(),
            Motion::End => self.buffer.move_end(),
        }
    }

    fn line_break(&mut self) {
        if self.mode == Mode::SingleLine {
            match self.config.single_line_break {
                SingleLineBreak::Reject => return,
                SingleLineBreak::Promote => self.promote("line break"),
            }
        }
        self.buffer.newline();
    }

    fn toggle_mode(&mut self) {
        match self.mode {
            Mode::SingleLine => self.promote("toggle"),
            Mode::MultiLine if self.buffer.line_count() == 1 => {
                self.mode = Mode::SingleLine;
                tracing::debug!("input mode: multi-line -> single-line");
            }
            Mode::MultiLine => {
                tracing::debug!("input mode: staying multi-line, document has several lines");
            }
        }
    }

    fn promote(&mut self, reason: &str) {
        if self.mode == Mode::SingleLine {
            self.mode = Mode::MultiLine;
            tracing::debug!(reason, "input mode: single-line -> multi-line");
        }
    }

    /// Promote when single-line content has outgrown single-line mode.
    fn enforce_promotion(&mut self) {
        if self.mode != Mode::SingleLine {
            return;
        }
        if self.buffer.line_count() > 1 {
            self.promote("multi-line content");
        } else if self.buffer.char_count() > self.config.promote_threshold {
            self.promote("length");
        }
    }

    fn submit(&mut self) -> Option<String> {
        if self.buffer.is_blank() {
            tracing::debug!("submit ignored: input is blank");
            return None;
        }
        let text = self.buffer.text().trim().to_owned();
        self.history.push(&text);
        self.buffer.clear();
        tracing::debug!(chars = text.chars().count(), "submitted input");
        Some(text)
    }

    fn refresh(&mut self) {
        self.visual = self.projector.project(&self.buffer, self.wrap_width, self.viewport_height);
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
