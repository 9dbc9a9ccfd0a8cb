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

//! UI rendering logic for the file picker.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::{FilePicker, PickerEntry},
    theme::Theme,
};

impl FilePicker {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(format!("{}  [{}]", self.dir.display(), self.mask.describe()))
            .style(Style::default().fg(theme.accent_colour))
            .block(header_block);

        f.render_widget(header, chunks[0]);

        let items = self.entries.iter().map(|entry| {
            let colour = match entry {
                PickerEntry::File(_) => theme.book_title_fg,
                PickerEntry::Parent(_) | PickerEntry::Dir(_) => theme.accent_colour,
            };
            ListItem::new(Line::from(entry.label()).style(Style::default().fg(colour)))
        });

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.highlight_colour))
            .highlight_symbol("▌ ");

        f.render_stateful_widget(list, chunks[1], &mut self.state);
    }
}
