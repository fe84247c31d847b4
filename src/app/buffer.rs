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

use super::word;

/// Editable multi-line document plus cursor.
///
/// Columns count `char`s, never bytes. There is always at least one line and
/// the cursor always satisfies `row < lines.len()` and
/// `col <= lines[row].chars().count()`. Operations that cannot apply are
/// no-ops; nothing here panics on cursor arithmetic.
///
/// The buffer knows nothing about single-line vs multi-line mode. The
/// controller decides which operations are allowed.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    /// Monotonically increasing version counter. Bumped on every content or cursor change
    /// so that downstream caches (e.g. the rendered input) can detect staleness cheaply.
    version: u64,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self { lines: vec![String::new()], cursor_row: 0, cursor_col: 0, version: 0 }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(row, col)` of the cursor.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Chars in [`text`](Self::text), line breaks included.
    pub fn char_count(&self) -> usize {
        let breaks = self.lines.len() - 1;
        self.lines.iter().map(|l| l.chars().count()).sum::<usize>() + breaks
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn current_line_len(&self) -> usize {
        self.line_len(self.cursor_row)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// True when the document holds nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.version += 1;
    }

    /// Replace the document with the given text, placing the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(String::from).collect();
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.current_line_len();
        self.version += 1;
    }

    /// Place the cursor, clamping both coordinates into the document.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.lines.len() - 1);
        self.cursor_col = col.min(self.current_line_len());
        self.version += 1;
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.newline();
            return;
        }
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.insert(byte_idx, c);
        self.cursor_col += 1;
        self.version += 1;
    }

    /// Splice `text` in at the cursor.
    ///
    /// Text after the cursor on the original line ends up after the last
    /// inserted segment, and the cursor sits between the two.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let row = self.cursor_row;
        let line = &mut self.lines[row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);

        let Some((first, rest)) = text.split_once('\n') else {
            line.insert_str(byte_idx, text);
            self.cursor_col += text.chars().count();
            self.version += 1;
            return;
        };

        let tail = line.split_off(byte_idx);
        line.push_str(first);
        let added: Vec<String> = rest.split('\n').map(String::from).collect();
        let last_row = row + added.len();
        self.lines.splice(row + 1..row + 1, added);

        let last = &mut self.lines[last_row];
        self.cursor_col = last.chars().count();
        last.push_str(&tail);
        self.cursor_row = last_row;
        self.version += 1;
    }

    pub fn newline(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        let rest = line.split_off(byte_idx);
        self.cursor_row += 1;
        self.lines.insert(self.cursor_row, rest);
        self.cursor_col = 0;
        self.version += 1;
    }

    pub fn delete_backward(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            self.cursor_col -= 1;
            let byte_idx = char_to_byte_index(line, self.cursor_col);
            line.remove(byte_idx);
            self.version += 1;
        } else if self.cursor_row > 0 {
            let removed = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_len();
            self.lines[self.cursor_row].push_str(&removed);
            self.version += 1;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor_col < self.current_line_len() {
            let line = &mut self.lines[self.cursor_row];
            let byte_idx = char_to_byte_index(line, self.cursor_col);
            line.remove(byte_idx);
            self.version += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
            self.version += 1;
        }
    }

    /// Delete back to the previous word boundary. Stops at column 0.
    pub fn delete_word_backward(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let start = word::previous_word_boundary(line, self.cursor_col);
        if start == self.cursor_col {
            return;
        }
        let from = char_to_byte_index(line, start);
        let to = char_to_byte_index(line, self.cursor_col);
        line.replace_range(from..to, "");
        self.cursor_col = start;
        self.version += 1;
    }

    /// Delete forward to the next word boundary. Stops at end of line.
    pub fn delete_word_forward(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let end = word::next_word_boundary(line, self.cursor_col);
        if end == self.cursor_col {
            return;
        }
        let from = char_to_byte_index(line, self.cursor_col);
        let to = char_to_byte_index(line, end);
        line.replace_range(from..to, "");
        self.version += 1;
    }

    /// Drop everything right of the cursor on the current line.
    pub fn kill_to_line_end(&mut self) {
        if self.cursor_col >= self.current_line_len() {
            return;
        }
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.truncate(byte_idx);
        self.version += 1;
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            self.version += 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_len();
            self.version += 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.current_line_len() {
            self.cursor_col += 1;
            self.version += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
            self.version += 1;
        }
    }

    // Vertical moves clamp the current column; there is no remembered
    // preferred column across a short line.
    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.current_line_len());
            self.version += 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.current_line_len());
            self.version += 1;
        }
    }

    pub fn move_word_left(&mut self) {
        let target = word::previous_word_boundary(&self.lines[self.cursor_row], self.cursor_col);
        if target != self.cursor_col {
            self.cursor_col = target;
            self.version += 1;
        }
    }

    pub fn move_word_right(&mut self) {
        let target = word::next_word_boundary(&self.lines[self.cursor_row], self.cursor_col);
        if target != self.cursor_col {
            self.cursor_col = target;
            self.version += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_col = 0;
        self.version += 1;
    }

    pub fn move_end(&mut self) {
        self.cursor_col = self.current_line_len();
        self.version += 1;
    }

    pub fn is_on_first_row(&self) -> bool {
        self.cursor_row == 0
    }

    pub fn is_on_last_row(&self) -> bool {
        self.cursor_row + 1 == self.lines.len()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a character index to a byte index within a string.
pub(crate) fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
