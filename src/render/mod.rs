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

//! User interface rendering logic.
//!
//! This module handles the translation of the navigation stack's
//! [`Bindings`](crate::ui::Bindings) and the active screen body into widgets
//! using the `ratatui` framework.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called by the
//! event pump before every wait for input, and by long operations once the
//! UI is locked so the busy caption shows.

mod chrome;
mod icons;
mod menu;
mod reader;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    theme::Theme,
    ui::ScreenMode,
    views::{Nav, View},
};

const HELP: [(&str, &str); 12] = [
    ("F2, m", "Open the menu"),
    ("Esc, q", "Back / exit"),
    ("Tab", "Next tab"),
    ("j, k, ↓, ↑", "Move the selection"),
    ("Enter", "Open / choose"),
    ("", ""),
    ("Reader", ""),
    ("Space, Enter", "Start / pause"),
    ("h, ←", "Previous word (paused)"),
    ("l, →", "Next word (paused)"),
    ("k, ↑", "Faster (paused)"),
    ("j, ↓", "Slower (paused)"),
];

/// Renders the user interface to the terminal frame.
///
/// In [`ScreenMode::Normal`] the body sits between a title bar (title and
/// tabs) and a footer of key hints. In [`ScreenMode::Full`] the body gets
/// the whole frame. An open menu popup is drawn last, over everything.
pub(crate) fn draw(f: &mut Frame, app: &mut App, nav: &mut Nav) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    match nav.screen_mode() {
        ScreenMode::Full => draw_body(f, area, app, nav),
        ScreenMode::Normal => {
            let outer = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(area);

            chrome::draw_title(f, outer[0], &app.theme, nav.bindings(), nav.is_locked());
            draw_body(f, outer[1], app, nav);
            chrome::draw_footer(f, outer[2], &app.theme, nav.bindings());
        }
    }

    if let Some(state) = app.menu.as_mut() {
        menu::draw_menu(f, area, &app.theme, &nav.bindings().menu, state);
    }
}

fn draw_body(f: &mut Frame, area: Rect, app: &mut App, nav: &mut Nav) {
    match nav.active_body_mut() {
        Some(View::Books) => app.books.draw(f, area, &app.theme),
        Some(View::Help) => draw_help(f, area, &app.theme),
        Some(View::Reader(view)) => {
            view.engine.fit(area.width, area.height);
            reader::blit(f.buffer_mut(), area, view.engine.surface());
        }
        Some(View::Picker(picker)) => picker.draw(f, area, &app.theme),
        Some(View::Prompt(prompt)) => prompt.draw(f, area, &app.theme),
        Some(View::Notice(message)) => draw_notice(f, area, &app.theme, message),
        None => {}
    }
}

fn draw_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:<14}"), Style::default().fg(theme.accent_colour)),
                Span::styled(*what, Style::default().fg(theme.book_title_fg)),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    f.render_widget(help, area);
}

fn draw_notice(f: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::uniform(1));

    let notice = Paragraph::new(message)
        .style(Style::default().fg(theme.book_title_fg))
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(notice, area);
}
