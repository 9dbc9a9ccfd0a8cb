// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render a text prompt.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{components::Prompt, theme::Theme};

impl Prompt {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .horizontal_margin(1)
            .split(area);

        f.render_widget(
            Paragraph::new(self.label.as_str()).style(Style::default().fg(theme.accent_colour)),
            rows[0],
        );

        f.render_widget(
            Paragraph::new(self.input.value()).style(
                Style::default()
                    .fg(theme.book_title_fg)
                    .bg(theme.highlight_colour),
            ),
            rows[1],
        );

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.error_colour)),
                rows[2],
            );
        }

        let cursor_x = rows[1].x + self.input.visual_cursor() as u16;
        f.set_cursor_position((cursor_x, rows[1].y));
    }
}
