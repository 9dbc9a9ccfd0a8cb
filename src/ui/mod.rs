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

//! Screen stacking framework.
//!
//! The application shows one [`Screen`] at a time. The application screen is
//! installed once, and dialogs ([`ModalScreen`]s) are pushed over it and
//! report back through a result callback when they close. See
//! [`NavigationStack`] for the lock and exit semantics.

mod error;
mod navigation;
mod screen;

pub(crate) use navigation::{Bindings, Dispatcher, NavigationStack, ScreenMode};
pub(crate) use screen::{MenuItem, ModalScreen, Screen, Tab};
