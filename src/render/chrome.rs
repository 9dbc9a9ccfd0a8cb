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

//! Render the title bar and footer.
//!
//! The title bar shows the bound title (or the lock caption) and the tabs of
//! the active screen. The footer shows the keys for the menu and the exit
//! action, but only when something is bound to them.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::{
    actions::commands::AppAction,
    render::icons::{ICON_BUSY, ICON_MENU},
    theme::Theme,
    ui::Bindings,
};

pub(crate) fn draw_title(f: &mut Frame, area: Rect, theme: &Theme, bindings: &Bindings<AppAction>, locked: bool) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let tabs_width: u16 = bindings
        .tabs
        .iter()
        .map(|label| label.chars().count() as u16 + 3)
        .sum();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(tabs_width)])
        .split(inner_area);

    let mut title = vec![];
    if locked {
        title.push(Span::raw(format!("{ICON_BUSY} ")));
    }
    title.push(Span::styled(
        bindings.title.as_str(),
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    if !bindings.tabs.is_empty() {
        let tabs = Tabs::new(bindings.tabs.iter().map(String::as_str))
            .select(bindings.active_tab)
            .style(Style::default().fg(theme.book_path_fg))
            .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[1]);
    }
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, theme: &Theme, bindings: &Bindings<AppAction>) {
    let key = Style::default().fg(theme.accent_colour);
    let text = Style::default().fg(theme.book_path_fg);

    let mut hints = vec![];
    if !bindings.menu.is_empty() {
        hints.push(Span::styled(format!("{ICON_MENU} F2"), key));
        hints.push(Span::styled(" menu  ", text));
    }
    if bindings.exit_action.is_some() {
        hints.push(Span::styled("Esc", key));
        hints.push(Span::styled(" back  ", text));
    }
    if bindings.tabs.len() > 1 {
        hints.push(Span::styled("Tab", key));
        hints.push(Span::styled(" switch", text));
    }

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(Paragraph::new(Line::from(hints)), container[0]);
}
