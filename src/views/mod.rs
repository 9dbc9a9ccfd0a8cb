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

//! Screen bodies.
//!
//! Every screen on the navigation stack carries one [`View`] as its body. The
//! library list itself lives on the [`App`](crate::App) so it can be refreshed
//! from anywhere, the `Books` body only marks where it is shown.

use crate::{
    actions::commands::AppAction,
    canvas::Canvas,
    components::{FilePicker, Prompt},
    reader::PlaybackEngine,
    ui::{MenuItem, NavigationStack, Screen, Tab},
};

pub(crate) type Nav = NavigationStack<View, AppAction>;

/// An open book.
pub(crate) struct ReaderView {
    pub(crate) path: String,
    pub(crate) title: String,
    pub(crate) engine: PlaybackEngine<Canvas>,
}

pub(crate) enum View {
    Books,
    Help,
    Reader(Box<ReaderView>),
    Picker(FilePicker),
    Prompt(Prompt),
    Notice(String),
}

/// The application screen: the library and key help as tabs.
///
/// Returns `None` only if the tab list were empty.
pub(crate) fn library_screen() -> Option<Screen<View, AppAction>> {
    Screen::tabbed(
        "Glance",
        vec![
            Tab::new(
                "Library",
                View::Books,
                vec![
                    MenuItem::new("Open book", AppAction::OpenBook),
                    MenuItem::new("Import book", AppAction::ImportBook),
                    MenuItem::new("Rename book", AppAction::RenameBook),
                    MenuItem::new("Remove book", AppAction::RemoveBook),
                    MenuItem::new("Scan folders", AppAction::ScanLibrary),
                ],
            ),
            Tab::new("Keys", View::Help, vec![]),
        ],
        vec![MenuItem::new("Exit", AppAction::Exit)],
        AppAction::Exit,
    )
}
