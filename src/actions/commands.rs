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

//! Application actions.
//!
//! Every menu item and exit key is bound to an [`AppAction`]. This module
//! carries out those actions against the navigation stack and the library:
//! opening, importing, renaming, removing and scanning books, driving the
//! reader, and closing dialogs.
//!
//! Dialog result callbacks run inside the navigation stack and cannot touch
//! it, so they report back by queueing an [`AppEvent`] that is handled once
//! the dialog has closed.

use std::{path::Path, rc::Rc, time::Instant};

use anyhow::Result;

use crate::{
    App,
    actions::events::{AppEvent, post},
    canvas::Canvas,
    components::{FilePicker, PickerAction, Prompt},
    db::Library,
    model::BookEntry,
    reader::{PlaybackEngine, ReaderCommand, Wpm},
    ui::{MenuItem, ModalScreen, Screen, ScreenMode},
    views::{Nav, ReaderView, View},
    words,
};

/// Draws a frame while a long operation holds the UI lock.
pub(crate) type Redraw<'a> = dyn FnMut(&mut App, &mut Nav) -> Result<()> + 'a;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppAction {
    OpenBook,
    ImportBook,
    RenameBook,
    RemoveBook,
    ScanLibrary,
    Exit,

    Reader(ReaderCommand),

    /// Accept the active dialog.
    Submit,
    /// Dismiss the active dialog.
    Cancel,
}

/// Carries out a single action.
///
/// # Errors
///
/// Library and file errors are reported to the user as notices. Only
/// navigation precondition violations are returned.
pub(crate) fn handle_action(
    app: &mut App,
    nav: &mut Nav,
    action: AppAction,
    now: Instant,
    redraw: &mut Redraw,
) -> Result<()> {
    tracing::debug!(?action, "handling action");

    match action {
        AppAction::OpenBook => open_book(app, nav, redraw)?,
        AppAction::ImportBook => import_book(app, nav),
        AppAction::RenameBook => rename_book(app, nav),
        AppAction::RemoveBook => remove_book(app, nav),
        AppAction::ScanLibrary => scan_library(app, nav, redraw)?,
        AppAction::Exit => {
            nav.request_exit();
        }

        AppAction::Reader(command) => handle_reader_command(app, nav, command, now)?,

        AppAction::Submit => submit(app, nav, redraw)?,
        AppAction::Cancel => {
            if nav.top_is_modal() {
                nav.close_modal(true)?;
            }
        }
    }

    Ok(())
}

fn submit(app: &mut App, nav: &mut Nav, redraw: &mut Redraw) -> Result<()> {
    match nav.active_body_mut() {
        Some(View::Books) => open_book(app, nav, redraw)?,
        Some(View::Picker(picker)) => {
            if let Some(PickerAction::Choose(_)) = picker.activate() {
                nav.close_modal(false)?;
            }
        }
        Some(View::Prompt(_)) | Some(View::Notice(_)) => {
            nav.close_modal(false)?;
        }
        Some(View::Reader(_)) | Some(View::Help) | None => {}
    }

    Ok(())
}

/// Refreshes the book list from the library.
pub(crate) fn reload_books(app: &mut App, nav: &mut Nav) {
    match app.library.list() {
        Ok(books) => app.books.set_books(books),
        Err(e) => show_error(nav, &e),
    }
}

/// Shows a dismissible message over the active screen.
pub(crate) fn show_notice(nav: &mut Nav, title: &str, message: impl Into<String>) {
    let screen = Screen::new(
        title,
        View::Notice(message.into()),
        vec![MenuItem::new("OK", AppAction::Submit)],
        AppAction::Submit,
    );
    nav.push_modal(ModalScreen::new(screen));
}

pub(crate) fn show_error(nav: &mut Nav, error: &dyn std::fmt::Display) {
    tracing::error!(%error, "operation failed");
    show_notice(nav, "Error", error.to_string());
}

fn open_book(app: &mut App, nav: &mut Nav, redraw: &mut Redraw) -> Result<()> {
    let Some(book) = app.books.selected().cloned() else {
        return Ok(());
    };

    let loaded = {
        let mut nav = nav.locked(&format!("Opening {}…", book.title));
        redraw(app, &mut *nav)?;
        load_book(&app.library, &book)
    };

    match loaded {
        Ok((words, position)) => open_reader(app, nav, book, words, position),
        Err(e) => show_error(nav, &e),
    }

    Ok(())
}

fn load_book(library: &Library, book: &BookEntry) -> Result<(Vec<String>, usize)> {
    let position = library.position(&book.path)?;
    let words = words::extract_words(Path::new(&book.path))?;

    Ok((words, position))
}

fn open_reader(app: &mut App, nav: &mut Nav, book: BookEntry, words: Vec<String>, position: usize) {
    tracing::info!(title = %book.title, words = words.len(), position, "opening reader");

    let saved_mode = nav.set_screen_mode(ScreenMode::Full);
    let engine = PlaybackEngine::new(
        words,
        position,
        app.config.wpm(),
        Canvas::default(),
        app.theme.reader_style(),
        saved_mode,
    );

    let screen = Screen::new(
        book.title.clone(),
        View::Reader(Box::new(ReaderView {
            path: book.path,
            title: book.title,
            engine,
        })),
        vec![
            MenuItem::new("Start", AppAction::Reader(ReaderCommand::Start)),
            MenuItem::new("Pause", AppAction::Reader(ReaderCommand::Pause)),
            MenuItem::new("Set speed…", AppAction::Reader(ReaderCommand::SetSpeed)),
            MenuItem::new("Close book", AppAction::Reader(ReaderCommand::Close)),
        ],
        AppAction::Reader(ReaderCommand::Close),
    );

    let library = Rc::clone(&app.library);
    let events = app.event_tx.clone();

    nav.push_modal(ModalScreen::with_callback(screen, move |modal| {
        if let View::Reader(reader) = modal.body() {
            let index = reader.engine.index();
            match library.update(&reader.path, &reader.title, index) {
                Ok(()) => tracing::info!(title = %reader.title, index, "reading position saved"),
                Err(e) => {
                    post(&events, AppEvent::Error(e.to_string()));
                }
            }
        }
        post(&events, AppEvent::LibraryChanged);
        true
    }));
}

fn handle_reader_command(app: &mut App, nav: &mut Nav, command: ReaderCommand, now: Instant) -> Result<()> {
    let Some(View::Reader(reader)) = nav.active_body_mut() else {
        return Ok(());
    };
    let engine = &mut reader.engine;

    match command {
        ReaderCommand::Start => {
            engine.start(now);
        }
        ReaderCommand::Pause => engine.request_pause(),
        ReaderCommand::Rewind => {
            engine.rewind();
        }
        ReaderCommand::Advance => {
            engine.advance();
        }
        ReaderCommand::Faster => {
            engine.increase_rate();
        }
        ReaderCommand::Slower => {
            engine.decrease_rate();
        }
        ReaderCommand::SetSpeed => {
            if !engine.is_playing() {
                let current = engine.wpm();
                ask_for_speed(app, nav, current);
            }
        }
        ReaderCommand::Close => {
            let mode = engine.close();
            nav.set_screen_mode(mode);
            nav.close_modal(true)?;
        }
    }

    Ok(())
}

fn ask_for_speed(app: &App, nav: &mut Nav, current: Wpm) {
    let label = format!(
        "Words per minute ({}-{}, in steps of {})",
        Wpm::MIN,
        Wpm::MAX,
        Wpm::STEP
    );
    let screen = prompt_screen("Set speed", Prompt::new(label, current.get().to_string()));
    let events = app.event_tx.clone();

    nav.push_modal(ModalScreen::with_callback(screen, move |modal| {
        if modal.cancelled() {
            return true;
        }
        let View::Prompt(prompt) = modal.body_mut() else {
            return true;
        };

        match prompt.value().trim().parse::<Wpm>() {
            Ok(wpm) => {
                post(&events, AppEvent::SetRate(wpm));
                true
            }
            Err(e) => {
                prompt.set_error(e.to_string());
                false
            }
        }
    }));
}

fn prompt_screen(title: &str, prompt: Prompt) -> Screen<View, AppAction> {
    Screen::new(
        title,
        View::Prompt(prompt),
        vec![
            MenuItem::new("OK", AppAction::Submit),
            MenuItem::new("Cancel", AppAction::Cancel),
        ],
        AppAction::Cancel,
    )
}

fn import_book(app: &mut App, nav: &mut Nav) {
    let picker = FilePicker::new(app.config.start_dir(), app.config.mask());
    let screen = Screen::new(
        "Import book",
        View::Picker(picker),
        vec![
            MenuItem::new("Select", AppAction::Submit),
            MenuItem::new("Cancel", AppAction::Cancel),
        ],
        AppAction::Cancel,
    );

    let library = Rc::clone(&app.library);
    let events = app.event_tx.clone();

    nav.push_modal(ModalScreen::with_callback(screen, move |modal| {
        if modal.cancelled() {
            return true;
        }
        let View::Picker(picker) = modal.body() else {
            return true;
        };
        let Some(path) = picker.selected_file() else {
            return false;
        };

        let book = BookEntry::from_path(path);
        let event = match library.add(&book.path, &book.title, 0) {
            Ok(true) => AppEvent::LibraryChanged,
            Ok(false) => AppEvent::Notice("That book already exists!".into()),
            Err(e) => AppEvent::Error(e.to_string()),
        };
        post(&events, event);
        true
    }));
}

fn rename_book(app: &mut App, nav: &mut Nav) {
    let Some(book) = app.books.selected().cloned() else {
        return;
    };

    let screen = prompt_screen("Rename book", Prompt::new("Title", book.title));
    let library = Rc::clone(&app.library);
    let events = app.event_tx.clone();
    let path = book.path;

    nav.push_modal(ModalScreen::with_callback(screen, move |modal| {
        if modal.cancelled() {
            return true;
        }
        let View::Prompt(prompt) = modal.body_mut() else {
            return true;
        };

        let title = prompt.value().trim().to_string();
        if title.is_empty() {
            prompt.set_error("The title can't be empty");
            return false;
        }

        let event = match library
            .position(&path)
            .and_then(|position| library.update(&path, &title, position))
        {
            Ok(()) => AppEvent::LibraryChanged,
            Err(e) => AppEvent::Error(e.to_string()),
        };
        post(&events, event);
        true
    }));
}

fn remove_book(app: &mut App, nav: &mut Nav) {
    let Some(book) = app.books.selected().cloned() else {
        return;
    };

    match app.library.remove(&book.path) {
        Ok(()) => reload_books(app, nav),
        Err(e) => show_error(nav, &e),
    }
}

fn scan_library(app: &mut App, nav: &mut Nav, redraw: &mut Redraw) -> Result<()> {
    let scanned = {
        let mut nav = nav.locked("Scanning…");
        redraw(app, &mut *nav)?;
        app.library.scan(&app.config.book_dirs, &app.config.mask())
    };

    match scanned {
        Ok(added) => {
            reload_books(app, nav);
            show_notice(nav, "Scan folders", format!("Added {added} books"));
        }
        Err(e) => show_error(nav, &e),
    }

    Ok(())
}
