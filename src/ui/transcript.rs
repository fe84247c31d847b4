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
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Build the lines for every submitted message, oldest first.
fn transcript_lines(messages: &[String]) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for message in messages {
        lines.push(Line::from(Span::styled(
            "You",
            Style::default().fg(theme::ROLE_USER).add_modifier(Modifier::BOLD),
        )));
        for text in message.split('\n') {
            lines.push(Line::from(Span::styled(text, Style::default().bg(theme::USER_MSG_BG))));
        }
        lines.push(Line::default());
    }
    lines
}

/// Render the transcript pinned to its newest message.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let paragraph = Paragraph::new(transcript_lines(&app.transcript)).wrap(Wrap { trim: false });
    let total = paragraph.line_count(area.width);
    let overflow = total.saturating_sub(usize::from(area.height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(paragraph.scroll((scroll, 0)), area);
}
