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

//! Word boundaries within a single line.
//!
//! A plain space is the only separator. Tabs and punctuation count as word
//! characters. Both scanners stop at the line edges and never look at
//! neighbouring lines.
//!
//! The two directions are not inverses: `previous_word_boundary` lands on the
//! *start* of a word, `next_word_boundary` on its *end*. Going left then right
//! from the middle of a word therefore ends at the word's end, not where it
//! started.

const SEPARATOR: char = ' ';

/// Column of the start of the word left of `col`.
///
/// Skips the run of spaces directly left of `col`, then the run of non-space
/// characters before it. `col` is clamped to the line length first.
pub fn previous_word_boundary(line: &str, col: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut idx = col.min(chars.len());
    while idx > 0 && chars[idx - 1] == SEPARATOR {
        idx -= 1;
    }
    while idx > 0 && chars[idx - 1] != SEPARATOR {
        idx -= 1;
    }
    idx
}

/// Column of the end of the word right of `col`.
///
/// Skips the run of spaces directly right of `col`, then the run of non-space
/// characters after it. Never exceeds the line length.
pub fn next_word_boundary(line: &str, col: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut idx = col.min(len);
    while idx < len && chars[idx] == SEPARATOR {
        idx += 1;
    }
    while idx < len && chars[idx] != SEPARATOR {
        idx += 1;
    }
    idx
}
