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

//! Render the options menu popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding},
};

use crate::{actions::commands::AppAction, render::icons::ICON_SELECTED, theme::Theme, ui::MenuItem};

pub(crate) fn draw_menu(f: &mut Frame, area: Rect, theme: &Theme, menu: &[MenuItem<AppAction>], state: &mut ListState) {
    let width = menu
        .iter()
        .map(|item| item.label.chars().count() as u16)
        .max()
        .unwrap_or(0)
        + 8;
    let height = menu.len() as u16 + 2;

    let popup = centered(area, width, height);

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    let items = menu
        .iter()
        .map(|item| ListItem::new(item.label.as_str()).style(Style::default().fg(theme.book_title_fg)));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
        .highlight_symbol(ICON_SELECTED);

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, state);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
