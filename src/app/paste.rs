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

/// Whether `c` may enter the buffer. Allow-list: every non-control char plus
/// tab and newline. Anything else (escape, bell, NUL, C1 controls) is dropped.
pub fn is_insertable(c: char) -> bool {
    !c.is_control() || c == '\t' || c == '\n'
}

/// Sanitize bulk text before it reaches the buffer.
///
/// `\r\n` and lone `\r` become `\n`, then every char rejected by
/// [`is_insertable`] is removed.
pub fn normalize_paste(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else if is_insertable(c) {
            out.push(c);
        }
    }
    out
}

/// A paste forces multi-line mode when it spans lines or is longer than
/// `large_paste_threshold` chars.
pub fn forces_multiline(text: &str, large_paste_threshold: usize) -> bool {
    text.contains('\n') || text.chars().count() > large_paste_threshold
}
