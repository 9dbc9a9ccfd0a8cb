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

//! Reusable UI components.
//!
//! Each component keeps its own state, maps terminal events to a small
//! action type in `event.rs`, and draws itself in `render.rs`.

mod book_list;
mod file_picker;
mod prompt;

pub(crate) use book_list::{BookList, BookListAction};
pub(crate) use file_picker::{FilePicker, PickerAction, PickerEntry};
pub(crate) use prompt::{Prompt, PromptAction};
