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

//! Queued application events.
//!
//! Dialog callbacks cannot reach the navigation stack while it is closing
//! them, so they send an [`AppEvent`] instead. [`process_events`] drains the
//! queue once the dispatcher is done with the current input, by which time the
//! dialog is gone and the screen beneath it is active again.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;

use crate::{
    App,
    actions::commands::{reload_books, show_notice},
    reader::Wpm,
    views::{Nav, View},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppEvent {
    /// Books were added, renamed or their position changed.
    LibraryChanged,

    Notice(String),
    Error(String),

    /// Apply a new rate to the open reader.
    SetRate(Wpm),
}

/// Queues `event` for [`process_events`], returning `false` if the receiving
/// end is gone.
pub(crate) fn post(events: &Sender<AppEvent>, event: AppEvent) -> bool {
    match events.send(event) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(event = ?e.0, "event queue closed, event dropped");
            false
        }
    }
}

/// Handles every queued event.
pub(crate) fn process_events(app: &mut App, nav: &mut Nav) -> Result<()> {
    while let Ok(event) = app.event_rx.try_recv() {
        tracing::debug!(?event, "processing event");

        match event {
            AppEvent::LibraryChanged => reload_books(app, nav),

            AppEvent::Notice(message) => show_notice(nav, "Notice", message),
            AppEvent::Error(message) => {
                tracing::error!(%message, "operation failed");
                show_notice(nav, "Error", message);
            }

            AppEvent::SetRate(wpm) => {
                if let Some(View::Reader(reader)) = nav.active_body_mut() {
                    reader.engine.set_rate(wpm);
                }
            }
        }
    }

    Ok(())
}

/// Advances the open reader if its word deadline has passed.
pub(crate) fn tick(nav: &mut Nav, now: Instant) {
    if let Some(View::Reader(reader)) = nav.active_body_mut() {
        reader.engine.on_tick(now);
    }
}
