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

//! Rapid serial visual presentation.
//!
//! * [`engine`]: the paused/playing state machine that paces a book.
//! * [`focus`]: focus letter selection and placement.
//! * [`pacing`]: reading rate and per-word delays.
//! * [`timer`]: the cancellable wait between words.
//! * [`keys`]: key bindings the engine swaps as it changes state.

pub(crate) mod engine;
pub(crate) mod focus;
pub(crate) mod keys;
pub(crate) mod pacing;
pub(crate) mod timer;

pub(crate) use engine::{PlaybackEngine, ReaderStyle};
pub(crate) use keys::{ReaderCommand, ReaderKey};
pub(crate) use pacing::Wpm;
