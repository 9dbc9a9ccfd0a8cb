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

//! # Glance
//!
//! A terminal speed reader. Books are shown one word at a time at a fixed
//! pace (rapid serial visual presentation), with each word aligned on its
//! focus letter so the eye never has to move.
//!
//! ## Architecture
//!
//! * The **navigation stack** ([`ui::NavigationStack`]) owns what is on
//!   screen: the tabbed library screen and the dialogs pushed over it.
//! * The **event pump** ([`events::EventPump`]) waits for input no longer
//!   than the reader's next word deadline, so playback and input share the
//!   UI thread without any background workers.
//! * The **library** ([`db::Library`]) keeps books and reading positions in
//!   SQLite.
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even if the run fails.

mod actions;
mod canvas;
mod components;
mod config;
mod db;
mod events;
mod logging;
mod model;
mod reader;
mod render;
mod theme;
mod ui;
mod util;
mod views;
mod words;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::ListState};
use std::{
    io::{self},
    rc::Rc,
    sync::mpsc::{self, Receiver, Sender},
};

use crate::{
    actions::events::AppEvent,
    components::BookList,
    config::AppConfig,
    db::Library,
    events::EventPump,
    theme::Theme,
    views::Nav,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub library: Rc<Library>,
    pub books: BookList,

    /// The open menu popup, if any.
    pub menu: Option<ListState>,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, library: Library) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let books = BookList::new(library.list().context("Failed to read the library")?);

        Ok(Self {
            config,
            theme: Theme::default(),
            library: Rc::new(library),
            books,
            menu: None,
            event_tx,
            event_rx,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration, opens the library, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    logging::init_logging(&config, &config::data_dir());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let library = Library::open(&config.database_file)
        .with_context(|| format!("Failed to open library {}", config.database_file))?;

    let mut app = App::new(config, library).context("Failed to initalise application")?;

    let mut nav = Nav::new().context("Failed to create the navigation stack")?;
    nav.push_root(views::library_screen().context("The library screen has no tabs")?)?;

    let mut terminal = setup_terminal(&app)?;
    let res = nav.run(&mut EventPump::new(&mut terminal, &mut app));
    restore_terminal(&mut terminal);

    tracing::info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::paint_background(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_background();
    terminal.show_cursor().ok();
}
