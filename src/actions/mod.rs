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

//! Application logic and action dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how menu selections and dialog results are
//! translated into changes to the library and the navigation stack.
//!
//! # Organization
//!
//! * [`commands`]: The actions bound to menus and exit keys.
//! * [`events`]: Results queued by dialog callbacks, handled after the dialog
//!   has closed.

pub(crate) mod commands;
pub(crate) mod events;

#[cfg(test)]
mod tests;
