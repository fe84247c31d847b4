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

use anyhow::Context as _;
use anyhow::Context as _;
use clap::Parser;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, EventStream};
use futures::StreamExt;
use promptline::Cli;
use promptline::app::{App, handle_terminal_event};
use ratatui::DefaultTerminal;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Submission<'a> {
    text: &'a str,
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    // stdout belongs to the terminal UI, so logs only go to an explicit file.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    terminal.draw(|frame| promptline::ui::render(frame, app))?;

    while !app.should_quit {
        let Some(event) = events.next().await else {
            break;
        };
        let event = event.context("failed to read terminal event")?;
        if handle_terminal_event(app, event) {
            terminal.draw(|frame| promptline::ui::render(frame, app))?;
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;
    let config = cli.input_config()?;
    tracing::info!(?config, "starting promptline");

    let mut app = App::new(config);
    let mut terminal = ratatui::init();
    let result = match crossterm::execute!(std::io::stdout(), EnableBracketedPaste) {
        Ok(()) => run(&mut terminal, &mut app).await,
        Err(err) => Err(err).context("failed to enable bracketed paste"),
    };
    if let Err(err) = crossterm::execute!(std::io::stdout(), DisableBracketedPaste) {
        tracing::warn!("failed to disable bracketed paste: {err}");
    }
    ratatui::restore();
    result?;

    tracing::info!(messages = app.transcript.len(), "exiting");
    if cli.json {
        for text in &app.transcript {
            println!("{}", serde_json::to_string(&Submission { text })?);
        }
    }
    Ok(())
}
