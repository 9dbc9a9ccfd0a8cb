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

//! The event pump.
//!
//! Everything runs on the UI thread. [`EventPump::pump`] draws the screen,
//! waits for a terminal event for no longer than the reader's next word
//! deadline, routes it, advances the reader and handles queued results. The
//! navigation stack calls it in a loop until exit is requested.

mod key_handlers;

pub(crate) use key_handlers::process_key_event;

use std::{
    io::Stdout,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::{
        commands::AppAction,
        events::{process_events, tick},
    },
    render::draw,
    ui::Dispatcher,
    views::{Nav, View},
};

/// Longest wait for input, effectively the minimum frame rate.
const IDLE_TICK: Duration = Duration::from_millis(250);

pub(crate) struct EventPump<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<Stdout>>,
    app: &'a mut App,
}

impl<'a> EventPump<'a> {
    pub(crate) fn new(terminal: &'a mut Terminal<CrosstermBackend<Stdout>>, app: &'a mut App) -> Self {
        Self { terminal, app }
    }
}

impl Dispatcher<View, AppAction> for EventPump<'_> {
    fn pump(&mut self, nav: &mut Nav) -> Result<()> {
        let terminal = &mut *self.terminal;
        let app = &mut *self.app;

        terminal.draw(|f| draw(f, app, nav))?;

        if event::poll(poll_timeout(nav, Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                let mut redraw = |app: &mut App, nav: &mut Nav| -> Result<()> {
                    terminal.draw(|f| draw(f, app, nav))?;
                    Ok(())
                };
                process_key_event(app, nav, key, Instant::now(), &mut redraw)?;
            }
        }

        tick(nav, Instant::now());
        process_events(app, nav)
    }
}

/// How long to wait for input before the reader needs the next word.
pub(crate) fn poll_timeout(nav: &Nav, now: Instant) -> Duration {
    match nav.active_body() {
        Some(View::Reader(reader)) => reader
            .engine
            .remaining(now)
            .map_or(IDLE_TICK, |remaining| remaining.min(IDLE_TICK)),
        _ => IDLE_TICK,
    }
}
