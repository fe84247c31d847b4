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

pub mod buffer;
pub mod controller;
mod events;
pub mod history;
pub mod keys;
pub mod paste;
pub mod visual;
pub mod word;

pub use buffer::LineBuffer;
pub use controller::{EditCommand, InputController, InputOutcome, Motion, StatusSummary};
pub use events::handle_terminal_event;
pub use history::HistoryNavigator;
pub use keys::{Key, KeyInput};
pub use visual::{VisualLine, VisualProjector, VisualState};

use crate::config::InputConfig;

/// Source of clipboard text for ctrl+v.
pub trait ClipboardSource {
    fn get_text(&mut self) -> Option<String>;
}

/// System clipboard through `arboard`. Failures are logged and treated as empty.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSource for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(err) => {
                    tracing::warn!("clipboard unavailable: {err}");
                    return None;
                }
            }
        }
        let clipboard = self.inner.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!("clipboard read failed: {err}");
                None
            }
        }
    }
}

pub struct App {
    pub input: InputController,
    /// Messages submitted so far, oldest first.
    pub transcript: Vec<String>,
    pub should_quit: bool,
    pub clipboard: Box<dyn ClipboardSource>,
}

impl App {
    pub fn new(config: InputConfig) -> Self {
        Self {
            input: InputController::new(config),
            transcript: Vec::new(),
            should_quit: false,
            clipboard: Box::new(SystemClipboard::default()),
        }
    }

    /// App with default config and an empty clipboard, for tests.
    pub fn test_default() -> Self {
        Self { clipboard: Box::new(NoClipboard), ..Self::new(InputConfig::default()) }
    }
}

struct NoClipboard;

impl ClipboardSource for NoClipboard {
    fn get_text(&mut self) -> Option<String> {
        None
    }
}
