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

//! Keyboard routing.
//!
//! Keys go, in order, to: nothing while the UI is locked, the open menu
//! popup, a text prompt (which owns every key), the global keys, and finally
//! the active body.
//!
//! | Key            | Action                               |
//! |----------------|--------------------------------------|
//! | `F2`, `m`      | Open the menu of the active screen   |
//! | `Esc`, `q`     | Fire the exit action                 |
//! | `Tab`, `BackTab` | Switch tabs                        |

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::widgets::ListState;

use crate::{
    App,
    actions::commands::{AppAction, Redraw, handle_action},
    components::{BookListAction, PickerAction, PromptAction},
    reader::ReaderKey,
    views::{Nav, View},
};

/// Maps a key press to the bound action.
///
/// # Errors
///
/// Returns an error if the resulting action violates a navigation
/// precondition.
pub(crate) fn process_key_event(
    app: &mut App,
    nav: &mut Nav,
    key: KeyEvent,
    now: Instant,
    redraw: &mut Redraw,
) -> Result<()> {
    if key.kind == KeyEventKind::Release || nav.is_locked() {
        return Ok(());
    }

    if app.menu.is_some() {
        return process_menu_key_event(app, nav, key, now, redraw);
    }

    let event = Event::Key(key);

    if let Some(View::Prompt(prompt)) = nav.active_body_mut() {
        let action = match prompt.process_event(&event) {
            Some(PromptAction::Submit) => Some(AppAction::Submit),
            Some(PromptAction::Cancel) => nav.bindings().exit_action,
            None => None,
        };
        if let Some(action) = action {
            handle_action(app, nav, action, now, redraw)?;
        }
        return Ok(());
    }

    match key.code {
        KeyCode::F(2) | KeyCode::Char('m') => {
            if !nav.bindings().menu.is_empty() {
                app.menu = Some(ListState::default().with_selected(Some(0)));
            }
            return Ok(());
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            if let Some(action) = nav.bindings().exit_action {
                handle_action(app, nav, action, now, redraw)?;
            }
            return Ok(());
        }
        KeyCode::Tab => {
            nav.cycle_tab(true);
            return Ok(());
        }
        KeyCode::BackTab => {
            nav.cycle_tab(false);
            return Ok(());
        }
        _ => {}
    }

    let action = match nav.active_body_mut() {
        Some(View::Books) => app
            .books
            .process_event(&event)
            .map(|BookListAction::Open| AppAction::OpenBook),
        Some(View::Picker(picker)) => picker
            .process_event(&event)
            .map(|PickerAction::Choose(_)| AppAction::Submit),
        Some(View::Reader(reader)) => ReaderKey::from_key_code(key.code)
            .and_then(|reader_key| reader.engine.command_for(reader_key))
            .map(AppAction::Reader),
        Some(View::Notice(_)) if key.code == KeyCode::Enter => Some(AppAction::Submit),
        _ => None,
    };

    if let Some(action) = action {
        handle_action(app, nav, action, now, redraw)?;
    }

    Ok(())
}

fn process_menu_key_event(
    app: &mut App,
    nav: &mut Nav,
    key: KeyEvent,
    now: Instant,
    redraw: &mut Redraw,
) -> Result<()> {
    let len = nav.bindings().menu.len();
    let Some(state) = app.menu.as_mut() else {
        return Ok(());
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down if len > 0 => {
            let i = state.selected().map_or(0, |i| (i + 1) % len);
            state.select(Some(i));
        }
        KeyCode::Char('k') | KeyCode::Up if len > 0 => {
            let i = state.selected().map_or(0, |i| (i + len - 1) % len);
            state.select(Some(i));
        }
        KeyCode::Esc | KeyCode::F(2) | KeyCode::Char('m') | KeyCode::Char('q') => {
            app.menu = None;
        }
        KeyCode::Enter => {
            let action = state
                .selected()
                .and_then(|i| nav.bindings().menu.get(i))
                .map(|item| item.action);
            app.menu = None;
            if let Some(action) = action {
                handle_action(app, nav, action, now, redraw)?;
            }
        }
        _ => {}
    }

    Ok(())
}
