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

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::history::DEFAULT_HISTORY_CAPACITY;

const CONFIG_ENV: &str = "PROMPTLINE_CONFIG";
const CONFIG_DIR_NAME: &str = "promptline";
const CONFIG_FILE: &str = "config.json";

/// Maximum input area height (lines) to prevent the input from consuming the entire screen.
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 12;
pub const DEFAULT_LARGE_PASTE_THRESHOLD: usize = 800;
pub const DEFAULT_PROMOTE_THRESHOLD: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    SingleLine,
    MultiLine,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::SingleLine => "single",
            Self::MultiLine => "multi",
        }
    }
}

/// What a line break typed in single-line mode does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleLineBreak {
    /// Ignore the key.
    Reject,
    /// Switch to multi-line mode and insert the break.
    #[default]
    Promote,
}

/// Modifier that flips Return between "submit" and "line break".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitModifier {
    Ctrl,
    Alt,
    Shift,
    /// Any of ctrl, alt or shift.
    #[default]
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub initial_mode: Mode,
    pub single_line_break: SingleLineBreak,
    pub submit_modifier: SubmitModifier,
    /// Fixed wrap width in columns. `None` follows the render area.
    pub wrap_width: Option<u16>,
    pub viewport_height: u16,
    pub history_capacity: usize,
    /// Pastes longer than this (in chars) switch to multi-line mode.
    pub large_paste_threshold: usize,
    /// Single-line content longer than this (in chars) switches to multi-line mode.
    pub promote_threshold: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial_mode: Mode::SingleLine,
            single_line_break: SingleLineBreak::Promote,
            submit_modifier: SubmitModifier::Any,
            wrap_width: None,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            large_paste_threshold: DEFAULT_LARGE_PASTE_THRESHOLD,
            promote_threshold: DEFAULT_PROMOTE_THRESHOLD,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl InputConfig {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
        let config = serde_json::from_str::<Self>(&content)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// `$PROMPTLINE_CONFIG`, else `<config dir>/promptline/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
}
