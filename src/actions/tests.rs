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

//! Library and reader flows driven through actions and keys.

use std::{
    fs,
    path::Path,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    App,
    actions::{
        commands::{AppAction, handle_action},
        events::{process_events, tick},
    },
    config::AppConfig,
    db::Library,
    events::{poll_timeout, process_key_event},
    reader::{ReaderCommand, Wpm, engine::PlaybackState},
    ui::ScreenMode,
    views::{self, Nav, View},
};

fn app_with(config: AppConfig) -> App {
    App::new(config, Library::open_in_memory().unwrap()).unwrap()
}

fn app() -> App {
    app_with(AppConfig::default())
}

fn nav() -> Nav {
    let mut nav = Nav::new().unwrap();
    nav.push_root(views::library_screen().unwrap()).unwrap();
    nav
}

fn no_redraw(_: &mut App, _: &mut Nav) -> Result<()> {
    Ok(())
}

fn act(app: &mut App, nav: &mut Nav, action: AppAction) {
    act_at(app, nav, action, Instant::now());
}

fn act_at(app: &mut App, nav: &mut Nav, action: AppAction, now: Instant) {
    handle_action(app, nav, action, now, &mut no_redraw).unwrap();
    process_events(app, nav).unwrap();
}

fn press(app: &mut App, nav: &mut Nav, code: KeyCode) {
    process_key_event(app, nav, KeyEvent::from(code), Instant::now(), &mut no_redraw).unwrap();
    process_events(app, nav).unwrap();
}

fn type_text(app: &mut App, nav: &mut Nav, text: &str) {
    for ch in text.chars() {
        press(app, nav, KeyCode::Char(ch));
    }
}

fn clear_prompt(app: &mut App, nav: &mut Nav) {
    for _ in 0..32 {
        press(app, nav, KeyCode::Backspace);
    }
}

fn add_book(app: &mut App, nav: &mut Nav, path: &Path, position: usize) {
    let title = path.file_name().unwrap().to_string_lossy().into_owned();
    app.library
        .add(&path.display().to_string(), &title, position)
        .unwrap();
    crate::actions::commands::reload_books(app, nav);
}

fn notice(nav: &Nav) -> Option<&str> {
    match nav.active_body() {
        Some(View::Notice(message)) => Some(message.as_str()),
        _ => None,
    }
}

fn reader_index(nav: &Nav) -> usize {
    match nav.active_body() {
        Some(View::Reader(reader)) => reader.engine.index(),
        _ => panic!("no reader open"),
    }
}

#[test]
fn import_adds_the_chosen_file_once() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "some words").unwrap();

    let mut app = app_with(AppConfig {
        book_dirs: vec![dir.path().display().to_string()],
        ..AppConfig::default()
    });
    let mut nav = nav();

    act(&mut app, &mut nav, AppAction::ImportBook);
    assert_eq!(nav.bindings().title, "Import book");

    // "..", "b.txt"
    press(&mut app, &mut nav, KeyCode::Down);
    press(&mut app, &mut nav, KeyCode::Enter);

    assert_eq!(nav.depth(), 1);
    let titles: Vec<_> = app.books.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["b.txt"]);

    act(&mut app, &mut nav, AppAction::ImportBook);
    press(&mut app, &mut nav, KeyCode::Down);
    act(&mut app, &mut nav, AppAction::Submit);

    assert_eq!(notice(&nav), Some("That book already exists!"));
    assert_eq!(app.books.books().len(), 1);

    press(&mut app, &mut nav, KeyCode::Enter);
    assert_eq!(nav.depth(), 1);
}

#[test]
fn cancelled_import_adds_nothing() {
    let mut app = app();
    let mut nav = nav();

    act(&mut app, &mut nav, AppAction::ImportBook);
    press(&mut app, &mut nav, KeyCode::Esc);

    assert_eq!(nav.depth(), 1);
    assert!(app.books.is_empty());
}

#[test]
fn reading_position_is_saved_on_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    fs::write(&path, "one two three four").unwrap();

    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, &path, 0);

    act(&mut app, &mut nav, AppAction::OpenBook);
    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.screen_mode(), ScreenMode::Full);
    assert!(!nav.is_locked());
    assert_eq!(reader_index(&nav), 0);

    let t0 = Instant::now();
    act_at(&mut app, &mut nav, AppAction::Reader(ReaderCommand::Start), t0);

    // 250 wpm: 240ms per word
    tick(&mut nav, t0 + Duration::from_millis(239));
    assert_eq!(reader_index(&nav), 0);
    tick(&mut nav, t0 + Duration::from_millis(240));
    assert_eq!(reader_index(&nav), 1);

    act(&mut app, &mut nav, AppAction::Reader(ReaderCommand::Pause));
    tick(&mut nav, t0 + Duration::from_millis(480));
    assert_eq!(reader_index(&nav), 2);

    act(&mut app, &mut nav, AppAction::Reader(ReaderCommand::Close));

    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.screen_mode(), ScreenMode::Normal);
    assert_eq!(app.library.position(&path.display().to_string()).unwrap(), 2);
}

#[test]
fn saved_position_is_clamped_onto_the_book() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "a b c").unwrap();

    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, &path, 99);

    act(&mut app, &mut nav, AppAction::OpenBook);
    assert_eq!(reader_index(&nav), 2);
}

#[test]
fn unreadable_book_shows_an_error() {
    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, Path::new("/definitely/missing.txt"), 5);

    act(&mut app, &mut nav, AppAction::OpenBook);

    assert!(notice(&nav).unwrap().contains("/definitely/missing.txt"));
    assert_eq!(nav.bindings().title, "Error");
    assert_eq!(nav.screen_mode(), ScreenMode::Normal);
    assert!(!nav.is_locked());
    assert_eq!(app.library.position("/definitely/missing.txt").unwrap(), 5);
}

#[test]
fn empty_library_open_does_nothing() {
    let mut app = app();
    let mut nav = nav();

    act(&mut app, &mut nav, AppAction::OpenBook);
    act(&mut app, &mut nav, AppAction::RenameBook);
    act(&mut app, &mut nav, AppAction::RemoveBook);

    assert_eq!(nav.depth(), 1);
}

#[test]
fn set_speed_reprompts_until_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    fs::write(&path, "one two").unwrap();

    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, &path, 0);
    act(&mut app, &mut nav, AppAction::OpenBook);

    act(&mut app, &mut nav, AppAction::Reader(ReaderCommand::SetSpeed));
    assert_eq!(nav.bindings().title, "Set speed");

    clear_prompt(&mut app, &mut nav);
    type_text(&mut app, &mut nav, "333");
    press(&mut app, &mut nav, KeyCode::Enter);

    assert_eq!(nav.depth(), 3);
    match nav.active_body() {
        Some(View::Prompt(prompt)) => assert!(prompt.error().is_some()),
        _ => panic!("prompt closed on a bad rate"),
    }

    clear_prompt(&mut app, &mut nav);
    type_text(&mut app, &mut nav, "400wpm");
    press(&mut app, &mut nav, KeyCode::Enter);

    assert_eq!(nav.depth(), 2);
    match nav.active_body() {
        Some(View::Reader(reader)) => assert_eq!(reader.engine.wpm(), Wpm::new(400).unwrap()),
        _ => panic!("reader not active"),
    }
}

#[test]
fn set_speed_is_ignored_while_playing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    fs::write(&path, "one two").unwrap();

    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, &path, 0);
    act(&mut app, &mut nav, AppAction::OpenBook);
    act(&mut app, &mut nav, AppAction::Reader(ReaderCommand::Start));

    act(&mut app, &mut nav, AppAction::Reader(ReaderCommand::SetSpeed));

    assert_eq!(nav.depth(), 2);
}

#[test]
fn rename_rejects_empty_titles() {
    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, Path::new("/books/a.txt"), 7);

    act(&mut app, &mut nav, AppAction::RenameBook);
    clear_prompt(&mut app, &mut nav);
    press(&mut app, &mut nav, KeyCode::Enter);

    assert_eq!(nav.depth(), 2);

    type_text(&mut app, &mut nav, "Alpha");
    press(&mut app, &mut nav, KeyCode::Enter);

    assert_eq!(nav.depth(), 1);
    assert_eq!(app.books.selected().unwrap().title, "Alpha");
    assert_eq!(app.library.position("/books/a.txt").unwrap(), 7);
}

#[test]
fn remove_deletes_the_selected_book() {
    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, Path::new("/books/a.txt"), 0);
    add_book(&mut app, &mut nav, Path::new("/books/b.txt"), 0);

    press(&mut app, &mut nav, KeyCode::Down);
    act(&mut app, &mut nav, AppAction::RemoveBook);

    let titles: Vec<_> = app.books.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["a.txt"]);
}

#[test]
fn scan_locks_while_walking_and_reports_the_count() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "1").unwrap();
    fs::write(dir.path().join("two.fb2"), "<p>2</p>").unwrap();
    fs::write(dir.path().join("skip.doc"), "").unwrap();

    let mut app = app_with(AppConfig {
        book_dirs: vec![dir.path().display().to_string()],
        ..AppConfig::default()
    });
    let mut nav = nav();

    let mut captions = vec![];
    let mut redraw = |_: &mut App, nav: &mut Nav| -> Result<()> {
        captions.push((nav.is_locked(), nav.bindings().title.clone(), nav.bindings().menu.len()));
        Ok(())
    };
    handle_action(&mut app, &mut nav, AppAction::ScanLibrary, Instant::now(), &mut redraw).unwrap();

    assert_eq!(captions, [(true, "Scanning…".to_string(), 0)]);
    assert!(!nav.is_locked());
    assert_eq!(notice(&nav), Some("Added 2 books"));
    assert_eq!(app.books.books().len(), 2);
}

#[test]
fn menu_popup_fires_the_chosen_action() {
    let mut app = app();
    let mut nav = nav();

    press(&mut app, &mut nav, KeyCode::Char('m'));
    assert!(app.menu.is_some());

    // Wraps from the first entry to the last, "Exit".
    press(&mut app, &mut nav, KeyCode::Up);
    press(&mut app, &mut nav, KeyCode::Enter);

    assert!(app.menu.is_none());
    assert!(nav.exit_requested());
}

#[test]
fn tab_switches_to_key_help() {
    let mut app = app();
    let mut nav = nav();

    press(&mut app, &mut nav, KeyCode::Tab);

    assert!(matches!(nav.active_body(), Some(View::Help)));
    assert_eq!(nav.bindings().active_tab, Some(1));
    let labels: Vec<_> = nav.bindings().menu.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, ["Exit"]);
}

#[test]
fn keys_are_ignored_while_locked() {
    let mut app = app();
    let mut nav = nav();

    nav.lock("Busy");
    press(&mut app, &mut nav, KeyCode::Char('q'));
    press(&mut app, &mut nav, KeyCode::F(2));

    assert!(!nav.exit_requested());
    assert!(app.menu.is_none());
}

#[test]
fn reader_keys_follow_the_playback_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    fs::write(&path, "one two three").unwrap();

    let mut app = app();
    let mut nav = nav();
    add_book(&mut app, &mut nav, &path, 0);
    press(&mut app, &mut nav, KeyCode::Enter);

    press(&mut app, &mut nav, KeyCode::Right);
    assert_eq!(reader_index(&nav), 1);

    press(&mut app, &mut nav, KeyCode::Char(' '));
    match nav.active_body() {
        Some(View::Reader(reader)) => assert_eq!(reader.engine.state(), PlaybackState::Playing),
        _ => panic!("reader not active"),
    }
    assert!(poll_timeout(&nav, Instant::now()) <= Duration::from_millis(240));

    // Rewind is unbound while playing.
    press(&mut app, &mut nav, KeyCode::Left);
    assert_eq!(reader_index(&nav), 1);

    press(&mut app, &mut nav, KeyCode::Char('q'));
    assert_eq!(nav.depth(), 1);
    assert!(!nav.exit_requested());
    assert_eq!(app.library.position(&path.display().to_string()).unwrap(), 1);
}

#[test]
fn exit_key_on_the_library_exits() {
    let mut app = app();
    let mut nav = nav();

    assert_eq!(poll_timeout(&nav, Instant::now()), Duration::from_millis(250));

    press(&mut app, &mut nav, KeyCode::Esc);
    assert!(nav.exit_requested());
}
