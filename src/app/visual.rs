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

use super::buffer::{LineBuffer, char_to_byte_index};

/// One wrapped row of the input as it appears on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualLine {
    pub text: String,
    /// Logical row this chunk was cut from.
    pub row: usize,
    /// Char offset of the chunk's first char within its logical row.
    pub offset: usize,
}

impl VisualLine {
    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualState {
    pub lines: Vec<VisualLine>,
    /// `(visual_row, visual_col)` of the cursor, with `visual_row` indexing `lines`.
    pub cursor: (usize, usize),
    /// First visual row inside the viewport.
    pub scroll_top: usize,
    pub viewport_height: usize,
}

impl VisualState {
    /// The slice of `lines` that fits in the viewport.
    pub fn visible_lines(&self) -> &[VisualLine] {
        let start = self.scroll_top.min(self.lines.len());
        let end = (start + self.viewport_height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Cursor position relative to the top of the viewport.
    pub fn cursor_in_viewport(&self) -> (usize, usize) {
        (self.cursor.0.saturating_sub(self.scroll_top), self.cursor.1)
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            lines: vec![VisualLine { text: String::new(), row: 0, offset: 0 }],
            cursor: (0, 0),
            scroll_top: 0,
            viewport_height: 1,
        }
    }
}

/// Projects a [`LineBuffer`] onto a fixed-width, fixed-height viewport.
///
/// Wrapping is a hard cut every `wrap_width` chars, with no attempt to break
/// on spaces. The only state carried between calls is the scroll offset, so
/// the viewport moves only as far as needed to keep the cursor visible.
#[derive(Debug, Default)]
pub struct VisualProjector {
    scroll_top: usize,
}

impl VisualProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the full visual state. Zero width or height is treated as 1.
    pub fn project(
        &mut self,
        buffer: &LineBuffer,
        wrap_width: usize,
        viewport_height: usize,
    ) -> VisualState {
        let width = wrap_width.max(1);
        let height = viewport_height.max(1);
        let lines = wrap_lines(buffer.lines(), width);
        let cursor = locate_cursor(&lines, buffer.cursor());

        let mut top = self.scroll_top;
        if cursor.0 < top {
            top = cursor.0;
        } else if cursor.0 >= top + height {
            top = cursor.0 + 1 - height;
        }
        self.scroll_top = top;

        VisualState { lines, cursor, scroll_top: top, viewport_height: height }
    }
}

/// Hard-wrap every logical line into chunks of at most `width` chars.
pub fn wrap_lines(lines: &[String], width: usize) -> Vec<VisualLine> {
    let width = width.max(1);
    let mut out = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len <= width {
            out.push(VisualLine { text: line.clone(), row, offset: 0 });
            continue;
        }
        let mut offset = 0;
        while offset < len {
            let end = (offset + width).min(len);
            let from = char_to_byte_index(line, offset);
            let to = char_to_byte_index(line, end);
            out.push(VisualLine { text: line[from..to].to_owned(), row, offset });
            offset = end;
        }
    }
    out
}

/// Map a logical `(row, col)` onto the wrapped lines. A column at the very end
/// of a logical row belongs to that row's last chunk.
fn locate_cursor(lines: &[VisualLine], (row, col): (usize, usize)) -> (usize, usize) {
    let mut last_of_row = None;
    for (visual_row, line) in lines.iter().enumerate() {
        if line.row != row {
            if last_of_row.is_some() {
                break;
            }
            continue;
        }
        if col >= line.offset && col < line.offset + line.char_len() {
            return (visual_row, col - line.offset);
        }
        last_of_row = Some((visual_row, col.saturating_sub(line.offset)));
    }
    last_of_row.unwrap_or((0, 0))
}
