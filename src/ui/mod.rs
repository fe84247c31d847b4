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

pub mod footer;
pub mod input;
pub mod theme;
pub mod transcript;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Rows reserved for the separator and footer around the input.
const CHROME_ROWS: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let max_input = area.height.saturating_sub(CHROME_ROWS + 1).max(1);
    let input_height = input::visual_line_count(app, area.width, max_input);

    let [transcript_area, separator_area, input_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(input_height),
        Constraint::Length(1),
    ])
    .areas(area);

    transcript::render(frame, transcript_area, app);
    let separator = theme::SEPARATOR_CHAR.repeat(usize::from(separator_area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(separator, Style::default().fg(theme::DIM)))),
        separator_area,
    );
    input::render(frame, input_area, app);
    footer::render(frame, footer_area, app);
}
