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

//! UI rendering logic for the book list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::{components::BookList, theme::Theme};

const PLACEHOLDER: &str = "Empty — add books by menu";

impl BookList {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.books.is_empty() {
            let placeholder = Line::from(PLACEHOLDER).style(Style::default().fg(theme.placeholder_fg));
            f.render_widget(placeholder, area);
            return;
        }

        let items = self.books.iter().map(|book| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    book.title.as_str(),
                    Style::default().fg(theme.book_title_fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(book.path.as_str(), Style::default().fg(theme.book_path_fg))),
            ])
        });

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.highlight_colour))
            .highlight_symbol("▌ ");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}
