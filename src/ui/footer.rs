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

use crate::app::{App, StatusSummary};
use crate::config::{Mode, SingleLineBreak, SubmitModifier};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme;

const FOOTER_PAD: u16 = 2;
const FOOTER_COLUMN_GAP: u16 = 1;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    // saturating_add prevents u16 overflow when area.x is near u16::MAX.
    let padded = Rect {
        x: area.x.saturating_add(FOOTER_PAD),
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let status = app.input.status_summary();
    let config = app.input.config();
    let color = mode_color(status.mode);
    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(color)),
        Span::styled(status.mode.label(), Style::default().fg(color)),
        Span::styled("]", Style::default().fg(color)),
        Span::raw("  "),
        Span::styled(
            key_hints(status.mode, config.submit_modifier, config.single_line_break),
            Style::default().fg(theme::DIM),
        ),
    ]);

    let (right_text, right_color) = status_text(&status);
    let right_width = u16::try_from(UnicodeWidthStr::width(right_text.as_str())).unwrap_or(u16::MAX);
    let (left_area, right_area) = split_footer_columns(padded, right_width);
    frame.render_widget(Paragraph::new(line), left_area);
    render_footer_right_info(frame, right_area, &right_text, right_color);
}

fn modifier_label(modifier: SubmitModifier) -> &'static str {
    match modifier {
        SubmitModifier::Ctrl => "Ctrl",
        SubmitModifier::Shift => "Shift",
        SubmitModifier::Alt | SubmitModifier::Any => "Alt",
    }
}

/// Which Return chord sends and which breaks the line in the current mode.
fn key_hints(mode: Mode, modifier: SubmitModifier, single_line_break: SingleLineBreak) -> String {
    let m = modifier_label(modifier);
    match (mode, single_line_break) {
        (Mode::SingleLine, SingleLineBreak::Reject) => "Enter send".to_owned(),
        (Mode::SingleLine, SingleLineBreak::Promote) => format!("Enter send \u{b7} {m}+Enter newline"),
        (Mode::MultiLine, _) => format!("{m}+Enter send \u{b7} Enter newline"),
    }
}

/// Right-hand status: counts, plus the recalled entry while browsing history.
fn status_text(status: &StatusSummary) -> (String, Color) {
    let lines = if status.line_count == 1 { "line" } else { "lines" };
    let counts = format!("{} chars \u{b7} {} {lines}", status.char_count, status.line_count);
    match status.history_position {
        Some((pos, total)) => (format!("history {pos}/{total} \u{b7} {counts}"), theme::HISTORY),
        None => (counts, theme::DIM),
    }
}

/// Two-column split: left (mode/hints) | right (status text).
///
/// The status is short, so `Length` gives it its exact footprint and `Fill(1)`
/// hands everything else to the left.
fn split_footer_columns(area: Rect, right_text_width: u16) -> (Rect, Rect) {
    if area.width == 0 {
        return (area, Rect { width: 0, ..area });
    }

    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(right_text_width)])
            .spacing(FOOTER_COLUMN_GAP)
            .areas(area);
    (left, right)
}

fn fit_footer_right_text(text: &str, max_width: usize) -> Option<String> {
    if max_width == 0 || text.trim().is_empty() {
        return None;
    }

    if UnicodeWidthStr::width(text) <= max_width {
        return Some(text.to_owned());
    }

    if max_width <= 3 {
        return Some(".".repeat(max_width));
    }

    let mut fitted = String::new();
    let mut width: usize = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width.saturating_add(ch_width).saturating_add(3) > max_width {
            break;
        }
        fitted.push(ch);
        width = width.saturating_add(ch_width);
    }

    if fitted.is_empty() {
        return Some("...".to_owned());
    }
    fitted.push_str("...");
    Some(fitted)
}

fn render_footer_right_info(frame: &mut Frame, area: Rect, right_text: &str, right_color: Color) {
    if area.width == 0 {
        return;
    }
    let Some(fitted) = fit_footer_right_text(right_text, usize::from(area.width)) else {
        return;
    };

    let line = Line::from(Span::styled(fitted, Style::default().fg(right_color)));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::SingleLine => theme::MODE_SINGLE,
        Mode::MultiLine => theme::MODE_MULTI,
    }
}
