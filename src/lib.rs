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

pub mod app;
pub mod config;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

use config::{ConfigError, InputConfig, Mode};

#[derive(Parser, Debug)]
#[command(name = "promptline", version, about = "A multi-line terminal chat input")]
pub struct Cli {
    /// Config file (JSON). Defaults to $PROMPTLINE_CONFIG or the user config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start in multi-line mode.
    #[arg(long)]
    pub multiline: bool,

    /// Number of submissions kept for recall.
    #[arg(long)]
    pub history_capacity: Option<usize>,

    /// Fixed wrap width in columns instead of the terminal width.
    #[arg(long)]
    pub wrap_width: Option<u16>,

    /// Maximum height of the input area in rows.
    #[arg(long)]
    pub height: Option<u16>,

    /// Write logs to this file. Filter with RUST_LOG.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print every submitted message as a JSON line on exit.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn input_config(&self) -> Result<InputConfig, ConfigError> {
        let mut config = InputConfig::load(self.config.as_deref())?;
        if self.multiline {
            config.initial_mode = Mode::MultiLine;
        }
        if let Some(capacity) = self.history_capacity {
            config.history_capacity = capacity;
        }
        if let Some(width) = self.wrap_width {
            config.wrap_width = Some(width);
        }
        if let Some(height) = self.height {
            config.viewport_height = height;
        }
        Ok(config)
    }
}
