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

use crate::app::App;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal padding to match header/footer inset.
const INPUT_PAD: u16 = 2;

/// Prompt column width: "❯ " = 2 columns (icon + space)
const PROMPT_WIDTH: u16 = 2;

/// Width left for text once padding and the prompt column are taken.
fn content_width(area_width: u16) -> u16 {
    area_width.saturating_sub(INPUT_PAD * 2).saturating_sub(PROMPT_WIDTH)
}

/// Display width of the widest char in the input, at least 1.
fn widest_glyph(app: &App) -> u16 {
    let widest = app
        .input
        .buffer()
        .lines()
        .iter()
        .flat_map(|line| line.chars())
        .filter_map(UnicodeWidthChar::width)
        .max()
        .unwrap_or(1);
    u16::try_from(widest).unwrap_or(u16::MAX).max(1)
}

/// Tell the controller how wide and tall the input may be, then return the
/// number of rows the input area needs.
/// Used by the layout to allocate the correct input area height.
///
/// The projector wraps by char count, so the column budget is divided by the
/// widest glyph to keep every wrapped chunk inside the area.
pub fn visual_line_count(app: &mut App, area_width: u16, max_height: u16) -> u16 {
    let wrap_width = content_width(area_width) / widest_glyph(app);
    app.input.resize(wrap_width, max_height);
    let visual = app.input.visual_state();
    let rows = visual.lines.len().min(visual.viewport_height);
    u16::try_from(rows).unwrap_or(u16::MAX).max(1)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x.saturating_add(INPUT_PAD),
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };

    // Split into prompt icon column (fixed) and input column (remaining)
    let [prompt_area, input_area] =
        Layout::horizontal([Constraint::Length(PROMPT_WIDTH), Constraint::Min(1)])
            .areas(padded);

    let visual = app.input.visual_state();

    // Once scrolled, the prompt icon is replaced by a marker showing there is
    // more above.
    let icon = if visual.scroll_top > 0 { theme::SCROLLED_CHAR } else { theme::PROMPT_CHAR };
    let prompt = Line::from(Span::styled(format!("{icon} "), Style::default().fg(theme::RUST_ORANGE)));
    frame.render_widget(Paragraph::new(prompt), prompt_area);

    if app.input.buffer().is_empty() {
        let placeholder = Line::from(Span::styled(
            "Type a message...",
            Style::default().fg(theme::DIM),
        ));
        frame.render_widget(Paragraph::new(placeholder), input_area);

        // Cursor at start of input area
        frame.set_cursor_position((input_area.x, input_area.y));
        return;
    }

    // Lines are already wrapped by the projector; rendering them without
    // ratatui's own wrapping keeps the cursor math exact.
    let lines: Vec<Line> = visual
        .visible_lines()
        .iter()
        .map(|vl| Line::from(Span::raw(vl.text.clone())))
        .collect();
    frame.render_widget(Paragraph::new(lines), input_area);

    let (row, col) = visual.cursor_in_viewport();
    let prefix_width = visual.lines.get(visual.cursor.0).map_or(0, |line| {
        line.text.chars().take(col).collect::<String>().width()
    });
    let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(prefix_width)) else {
        return;
    };
    let cursor_x = input_area.x.saturating_add(col);
    let cursor_y = input_area.y.saturating_add(row);
    // A cursor sitting just past a full-width chunk is drawn on the last column.
    let cursor_x = cursor_x.min(input_area.right().saturating_sub(1));
    if cursor_y < input_area.bottom() {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
