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

//! Navigation precondition failures.
//!
//! Every variant is a programming error rather than something a user can
//! recover from, callers are expected to propagate them and stop.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum NavigationError {
    /// A navigation stack already exists on this UI thread.
    #[error("only one navigation stack may run per application")]
    AlreadyRunning,

    /// `push_root` was called a second time.
    #[error("an application screen is already installed")]
    RootAlreadyInstalled,

    /// A pop or modal close reached the application screen.
    #[error("the application screen cannot be popped")]
    CannotPopRoot,

    /// A modal operation was attempted with no modal on top.
    #[error("the active screen is not a modal screen")]
    NotModal,

    /// The stack has nothing to show.
    #[error("no screen is active")]
    NoActiveScreen,
}
