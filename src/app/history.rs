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

use std::collections::VecDeque;

use super::buffer::LineBuffer;

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded list of submitted messages with up/down recall.
///
/// While browsing, `index` points at the entry currently loaded into the
/// buffer and `draft` holds whatever the user had typed before the first
/// recall. Outside of browsing both are `None`.
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: VecDeque<String>,
    capacity: usize,
    index: Option<usize>,
    draft: Option<String>,
}

impl HistoryNavigator {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::new(), capacity, index: None, draft: None }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_browsing(&self) -> bool {
        self.index.is_some()
    }

    /// `(1-based position, total)` of the recalled entry while browsing.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.index.map(|i| (i + 1, self.entries.len()))
    }

    /// Step back to an older entry. Returns whether the buffer was replaced.
    pub fn recall_previous(&mut self, buffer: &mut LineBuffer) -> bool {
        let next_index = match self.index {
            None if self.entries.is_empty() => return false,
            None => {
                self.draft = Some(buffer.text());
                self.entries.len() - 1
            }
            Some(0) => return false,
            Some(i) => i - 1,
        };
        self.load(next_index, buffer);
        true
    }

    /// Step forward to a newer entry, or back to the draft past the newest.
    /// Returns whether the buffer was replaced.
    pub fn recall_next(&mut self, buffer: &mut LineBuffer) -> bool {
        let Some(i) = self.index else {
            return false;
        };
        if i + 1 < self.entries.len() {
            self.load(i + 1, buffer);
        } else {
            self.index = None;
            let draft = self.draft.take().unwrap_or_default();
            buffer.set_text(&draft);
        }
        true
    }

    fn load(&mut self, index: usize, buffer: &mut LineBuffer) {
        if let Some(entry) = self.entries.get(index) {
            buffer.set_text(entry);
            self.index = Some(index);
        }
    }

    /// Leave browsing without touching the buffer. The recalled text stays in
    /// the buffer as an editable copy; the saved draft is dropped.
    pub fn exit_browsing(&mut self) {
        if self.index.take().is_some() {
            tracing::debug!("history: left browsing for editing");
        }
        self.draft = None;
    }

    /// Record a submission. Whitespace-only text is ignored. Returns whether
    /// an entry was appended.
    pub fn push(&mut self, text: &str) -> bool {
        self.index = None;
        self.draft = None;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries.push_back(trimmed.to_owned());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            tracing::debug!(capacity = self.capacity, "history: evicted oldest entry");
        }
        true
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
