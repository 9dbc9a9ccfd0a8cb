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

//! The navigation stack.
//!
//! [`NavigationStack`] is the single authority over what is on screen. It
//! owns the application screen, the modal screens stacked over it, the UI
//! lock and the termination signal, and it publishes the active screen's
//! title, menu, tabs and exit action as [`Bindings`] for the renderer and
//! the input dispatcher.
//!
//! Everything runs on one thread. [`NavigationStack::run`] blocks by handing
//! control to a [`Dispatcher`] until [`NavigationStack::request_exit`] has
//! been called, so input handling happens on the same execution context as
//! the rest of the UI.

use std::{
    cell::Cell,
    ops::{Deref, DerefMut},
};

use anyhow::Result;

use crate::ui::{
    error::NavigationError,
    screen::{MenuItem, ModalScreen, Screen},
};

thread_local! {
    static STACK_CLAIMED: Cell<bool> = const { Cell::new(false) };
}

/// How much of the display the active body gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ScreenMode {
    /// Title, tabs and menu hints are shown around the body.
    #[default]
    Normal,
    /// The body covers the whole display.
    Full,
}

/// What is currently bound to the display.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bindings<A> {
    pub(crate) title: String,
    pub(crate) menu: Vec<MenuItem<A>>,
    /// `None` means the exit key does nothing.
    pub(crate) exit_action: Option<A>,
    pub(crate) tabs: Vec<String>,
    pub(crate) active_tab: Option<usize>,
}

impl<A> Default for Bindings<A> {
    fn default() -> Self {
        Self {
            title: String::new(),
            menu: vec![],
            exit_action: None,
            tabs: vec![],
            active_tab: None,
        }
    }
}

/// An entry on the stack.
pub(crate) enum Layer<B, A> {
    Root(Screen<B, A>),
    Modal(ModalScreen<B, A>),
}

impl<B, A> Layer<B, A> {
    fn screen(&self) -> &Screen<B, A> {
        match self {
            Layer::Root(screen) => screen,
            Layer::Modal(modal) => modal.screen(),
        }
    }

    fn screen_mut(&mut self) -> &mut Screen<B, A> {
        match self {
            Layer::Root(screen) => screen,
            Layer::Modal(modal) => modal.screen_mut(),
        }
    }
}

/// Drives the UI while [`NavigationStack::run`] is blocked.
///
/// Each call to `pump` waits (cooperatively) for the next input or timer
/// event and dispatches it to the handlers bound on the stack.
pub(crate) trait Dispatcher<B, A> {
    fn pump(&mut self, nav: &mut NavigationStack<B, A>) -> Result<()>;
}

pub(crate) struct NavigationStack<B, A> {
    layers: Vec<Layer<B, A>>,
    root_installed: bool,
    lock_caption: Option<String>,
    bindings: Bindings<A>,
    exit_requested: bool,
    screen_mode: ScreenMode,
}

impl<B, A: Clone> NavigationStack<B, A> {
    /// Creates the navigation stack for this UI thread.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::AlreadyRunning`] if a stack was already
    /// created on the current thread.
    pub(crate) fn new() -> Result<Self, NavigationError> {
        if STACK_CLAIMED.with(|claimed| claimed.replace(true)) {
            return Err(NavigationError::AlreadyRunning);
        }

        Ok(Self {
            layers: vec![],
            root_installed: false,
            lock_caption: None,
            bindings: Bindings::default(),
            exit_requested: false,
            screen_mode: ScreenMode::Normal,
        })
    }

    /// Installs the application screen.
    ///
    /// # Errors
    ///
    /// Only one application screen is allowed for the lifetime of the stack,
    /// a second call returns [`NavigationError::RootAlreadyInstalled`].
    pub(crate) fn push_root(&mut self, screen: Screen<B, A>) -> Result<(), NavigationError> {
        if self.root_installed {
            return Err(NavigationError::RootAlreadyInstalled);
        }

        tracing::debug!(title = %screen.title, "application screen installed");

        self.root_installed = true;
        self.layers.insert(0, Layer::Root(screen));
        self.refresh();

        Ok(())
    }

    /// Binds the active screen to the display.
    ///
    /// While the UI is locked the body stays visible but the menu is empty,
    /// the tabs are hidden and the exit key does nothing.
    pub(crate) fn refresh(&mut self) {
        let Some(layer) = self.layers.last() else {
            self.bindings = Bindings::default();
            return;
        };

        let screen = layer.screen();

        if let Some(caption) = &self.lock_caption {
            self.bindings = Bindings {
                title: if caption.is_empty() {
                    screen.title.clone()
                } else {
                    caption.clone()
                },
                menu: vec![],
                exit_action: None,
                tabs: vec![],
                active_tab: None,
            };
            return;
        }

        self.bindings = Bindings {
            title: screen.title.clone(),
            menu: screen.effective_menu(),
            exit_action: Some(screen.exit_action.clone()),
            tabs: screen.tab_labels(),
            active_tab: screen.active_tab(),
        };
    }

    /// Pushes a modal over the active screen and activates it.
    pub(crate) fn push_modal(&mut self, modal: ModalScreen<B, A>) {
        tracing::debug!(title = %modal.screen().title, depth = self.layers.len() + 1, "modal pushed");

        self.layers.push(Layer::Modal(modal));
        self.refresh();
    }

    /// Removes the top modal without consulting its callback.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::CannotPopRoot`] when the top of the stack is
    /// the application screen.
    pub(crate) fn pop_modal(&mut self) -> Result<ModalScreen<B, A>, NavigationError> {
        match self.layers.pop() {
            Some(Layer::Modal(modal)) => {
                tracing::debug!(title = %modal.screen().title, depth = self.layers.len(), "modal popped");
                self.refresh();
                Ok(modal)
            }
            Some(root @ Layer::Root(_)) => {
                self.layers.push(root);
                Err(NavigationError::CannotPopRoot)
            }
            None => Err(NavigationError::NoActiveScreen),
        }
    }

    /// Closes the top modal.
    ///
    /// The modal's cancel flag is set to `cancelled`, then its result callback
    /// runs exactly once. If the callback accepts, the modal is popped and the
    /// screen beneath takes over, otherwise the modal is re-activated as the
    /// callback left it.
    ///
    /// Returns whether the modal was popped.
    pub(crate) fn close_modal(&mut self, cancelled: bool) -> Result<bool, NavigationError> {
        let accepted = match self.layers.last_mut() {
            Some(Layer::Modal(modal)) => modal.resolve(cancelled),
            Some(Layer::Root(_)) => return Err(NavigationError::NotModal),
            None => return Err(NavigationError::NoActiveScreen),
        };

        if accepted {
            self.pop_modal()?;
        } else {
            tracing::debug!("modal close rejected by callback");
            self.refresh();
        }

        Ok(accepted)
    }

    /// Locks the UI, showing `caption` in the title area when not empty.
    pub(crate) fn lock(&mut self, caption: &str) {
        tracing::debug!(caption, "ui locked");

        self.lock_caption = Some(caption.to_string());
        self.refresh();
    }

    /// Releases the UI lock.
    ///
    /// Bindings are only restored by the following [`refresh`](Self::refresh).
    pub(crate) fn unlock(&mut self) {
        tracing::debug!("ui unlocked");

        self.lock_caption = None;
    }

    /// Locks the UI until the returned guard is dropped, the guard unlocks and
    /// refreshes on every exit path.
    pub(crate) fn locked(&mut self, caption: &str) -> UiLock<'_, B, A> {
        self.lock(caption);
        UiLock { nav: self }
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.lock_caption.is_some()
    }

    /// Signals application termination.
    ///
    /// Returns `false` if termination was already signalled.
    pub(crate) fn request_exit(&mut self) -> bool {
        if self.exit_requested {
            return false;
        }

        tracing::info!("application exit requested");
        self.exit_requested = true;
        true
    }

    pub(crate) fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Shows the active screen and blocks until exit has been requested.
    ///
    /// All input is handled by `dispatcher` on the calling thread. On return
    /// the menu, tabs and exit action are unbound and every screen has been
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoActiveScreen`] if no application screen
    /// was installed, and any error raised by the dispatcher.
    pub(crate) fn run<D>(&mut self, dispatcher: &mut D) -> Result<()>
    where
        D: Dispatcher<B, A>,
    {
        if self.layers.is_empty() {
            return Err(NavigationError::NoActiveScreen.into());
        }

        self.refresh();

        let result = loop {
            if self.exit_requested {
                break Ok(());
            }
            if let Err(e) = dispatcher.pump(self) {
                break Err(e);
            }
        };

        self.teardown();

        result
    }

    fn teardown(&mut self) {
        self.lock_caption = None;
        self.layers.clear();
        self.bindings = Bindings::default();
        self.screen_mode = ScreenMode::Normal;
    }

    /// Activates tab `index` of the active screen and re-binds its menu.
    ///
    /// Ignored while the UI is locked.
    pub(crate) fn select_tab(&mut self, index: usize) -> bool {
        if self.is_locked() {
            return false;
        }

        let selected = self
            .layers
            .last_mut()
            .is_some_and(|layer| layer.screen_mut().select_tab(index));

        if selected {
            self.refresh();
        }

        selected
    }

    /// Moves to the next (or previous) tab, wrapping around.
    pub(crate) fn cycle_tab(&mut self, forward: bool) -> bool {
        let Some(screen) = self.top() else {
            return false;
        };
        let (Some(active), count) = (screen.active_tab(), screen.tab_count()) else {
            return false;
        };

        let next = if forward {
            (active + 1) % count
        } else {
            (active + count - 1) % count
        };

        self.select_tab(next)
    }

    pub(crate) fn bindings(&self) -> &Bindings<A> {
        &self.bindings
    }

    pub(crate) fn screen_mode(&self) -> ScreenMode {
        self.screen_mode
    }

    /// Changes the screen mode, returning the previous one.
    pub(crate) fn set_screen_mode(&mut self, mode: ScreenMode) -> ScreenMode {
        std::mem::replace(&mut self.screen_mode, mode)
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.layers.len()
    }

    pub(crate) fn top(&self) -> Option<&Screen<B, A>> {
        self.layers.last().map(Layer::screen)
    }

    pub(crate) fn top_is_modal(&self) -> bool {
        matches!(self.layers.last(), Some(Layer::Modal(_)))
    }

    /// The body of the active screen.
    pub(crate) fn active_body(&self) -> Option<&B> {
        self.top().map(Screen::body)
    }

    pub(crate) fn active_body_mut(&mut self) -> Option<&mut B> {
        self.layers.last_mut().map(|layer| layer.screen_mut().body_mut())
    }
}

/// Guard returned by [`NavigationStack::locked`].
pub(crate) struct UiLock<'a, B, A: Clone> {
    nav: &'a mut NavigationStack<B, A>,
}

impl<B, A: Clone> Deref for UiLock<'_, B, A> {
    type Target = NavigationStack<B, A>;

    fn deref(&self) -> &Self::Target {
        self.nav
    }
}

impl<B, A: Clone> DerefMut for UiLock<'_, B, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.nav
    }
}

impl<B, A> Drop for NavigationStack<B, A> {
    fn drop(&mut self) {
        STACK_CLAIMED.with(|claimed| claimed.set(false));
    }
}

impl<B, A: Clone> Drop for UiLock<'_, B, A> {
    fn drop(&mut self) {
        self.nav.unlock();
        self.nav.refresh();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::ui::screen::Tab;

    #[derive(Debug, Clone, PartialEq)]
    enum Act {
        Exit,
        Open,
        Close,
        Scan,
    }

    type Nav = NavigationStack<&'static str, Act>;

    fn root() -> Screen<&'static str, Act> {
        Screen::new("Library", "books", vec![MenuItem::new("Exit", Act::Exit)], Act::Exit)
    }

    fn dialog(title: &str) -> Screen<&'static str, Act> {
        Screen::new(title, "dialog", vec![MenuItem::new("Close", Act::Close)], Act::Close)
    }

    fn stack_with_root() -> Nav {
        let mut nav = Nav::new().unwrap();
        nav.push_root(root()).unwrap();
        nav
    }

    #[test]
    fn only_one_stack_per_thread() {
        let _nav = Nav::new().unwrap();
        assert_eq!(Nav::new().err(), Some(NavigationError::AlreadyRunning));
    }

    #[test]
    fn dropping_the_stack_releases_the_thread() {
        let nav = Nav::new().unwrap();
        drop(nav);

        let _nav = Nav::new().unwrap();
        assert_eq!(Nav::new().err(), Some(NavigationError::AlreadyRunning));
    }

    #[test]
    fn second_root_is_rejected() {
        let mut nav = stack_with_root();
        assert_eq!(nav.push_root(root()), Err(NavigationError::RootAlreadyInstalled));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn root_cannot_be_popped() {
        let mut nav = stack_with_root();
        assert_eq!(nav.pop_modal().err(), Some(NavigationError::CannotPopRoot));
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.close_modal(false), Err(NavigationError::NotModal));
    }

    #[test]
    fn push_and_pop_rebind_display() {
        let mut nav = stack_with_root();
        nav.push_modal(ModalScreen::new(dialog("Reader")));

        assert_eq!(nav.bindings().title, "Reader");
        assert_eq!(nav.bindings().exit_action, Some(Act::Close));
        assert_eq!(nav.active_body(), Some(&"dialog"));

        nav.pop_modal().unwrap();
        assert_eq!(nav.bindings().title, "Library");
        assert_eq!(nav.bindings().exit_action, Some(Act::Exit));
        assert_eq!(nav.bindings().menu, vec![MenuItem::new("Exit", Act::Exit)]);
    }

    #[test]
    fn rejected_close_keeps_depth_and_reactivates_modal() {
        let mut nav = stack_with_root();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);

        nav.push_modal(ModalScreen::with_callback(dialog("Prompt"), move |modal| {
            *counter.borrow_mut() += 1;
            modal.screen_mut().title = "Prompt (try again)".to_string();
            false
        }));

        assert_eq!(nav.close_modal(false), Ok(false));
        assert_eq!(nav.depth(), 2);
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(nav.bindings().title, "Prompt (try again)");
    }

    #[test]
    fn accepted_close_pops_exactly_one() {
        let mut nav = stack_with_root();
        nav.push_modal(ModalScreen::new(dialog("First")));
        nav.push_modal(ModalScreen::with_callback(dialog("Second"), |_| true));

        assert_eq!(nav.close_modal(false), Ok(true));
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.bindings().title, "First");
    }

    #[test]
    fn cancel_flag_is_visible_to_callback() {
        let mut nav = stack_with_root();
        let seen = Rc::new(RefCell::new(vec![]));

        for cancelled in [true, false] {
            let seen = Rc::clone(&seen);
            nav.push_modal(ModalScreen::with_callback(dialog("d"), move |modal| {
                seen.borrow_mut().push(modal.cancelled());
                true
            }));
            nav.close_modal(cancelled).unwrap();
        }

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn tabbed_screen_binds_active_tab_menu() {
        let mut nav = Nav::new().unwrap();
        let screen = Screen::tabbed(
            "App",
            vec![
                Tab::new("Library", "books", vec![MenuItem::new("Open", Act::Open)]),
                Tab::new("Keys", "help", vec![MenuItem::new("Scan", Act::Scan)]),
            ],
            vec![MenuItem::new("Exit", Act::Exit)],
            Act::Exit,
        )
        .unwrap();
        nav.push_root(screen).unwrap();

        assert_eq!(nav.bindings().tabs, ["Library", "Keys"]);
        assert_eq!(nav.bindings().active_tab, Some(0));
        assert_eq!(nav.bindings().menu[0].action, Act::Open);

        assert!(nav.select_tab(1));
        assert_eq!(nav.active_body(), Some(&"help"));
        let actions: Vec<_> = nav.bindings().menu.iter().map(|m| m.action.clone()).collect();
        assert_eq!(actions, [Act::Scan, Act::Exit]);

        // The active tab survives a modal round trip.
        nav.push_modal(ModalScreen::new(dialog("d")));
        assert_eq!(nav.bindings().tabs.len(), 0);
        nav.close_modal(false).unwrap();
        assert_eq!(nav.bindings().active_tab, Some(1));

        assert!(nav.cycle_tab(true));
        assert_eq!(nav.bindings().active_tab, Some(0));
        assert!(!nav.select_tab(5));
    }

    #[test]
    fn lock_hides_menu_and_exit_until_unlocked_and_refreshed() {
        let mut nav = stack_with_root();

        nav.lock("Scanning");
        assert!(nav.is_locked());
        assert_eq!(nav.bindings().title, "Scanning");
        assert!(nav.bindings().menu.is_empty());
        assert_eq!(nav.bindings().exit_action, None);
        assert_eq!(nav.active_body(), Some(&"books"));

        // A refresh while locked must not restore anything.
        nav.refresh();
        assert_eq!(nav.bindings().exit_action, None);

        nav.unlock();
        assert_eq!(nav.bindings().title, "Scanning");
        nav.refresh();
        assert_eq!(nav.bindings().title, "Library");
        assert_eq!(nav.bindings().exit_action, Some(Act::Exit));
    }

    #[test]
    fn lock_guard_restores_bindings_on_drop() {
        let mut nav = stack_with_root();
        {
            let mut guard = nav.locked("Opening");
            assert!(guard.is_locked());
            assert!(!guard.select_tab(0));
        }
        assert!(!nav.is_locked());
        assert_eq!(nav.bindings().title, "Library");
    }

    #[test]
    fn exit_is_signalled_once() {
        let mut nav = stack_with_root();
        assert!(nav.request_exit());
        assert!(!nav.request_exit());
        assert!(nav.exit_requested());
    }

    struct Scripted {
        pumps: usize,
        exit_after: usize,
    }

    impl Dispatcher<&'static str, Act> for Scripted {
        fn pump(&mut self, nav: &mut Nav) -> Result<()> {
            self.pumps += 1;
            if self.pumps == self.exit_after {
                let action = nav.bindings().exit_action.clone();
                assert_eq!(action, Some(Act::Exit));
                nav.request_exit();
            }
            Ok(())
        }
    }

    #[test]
    fn run_blocks_until_exit_then_tears_down() {
        let mut nav = stack_with_root();
        nav.set_screen_mode(ScreenMode::Full);
        let mut dispatcher = Scripted {
            pumps: 0,
            exit_after: 3,
        };

        nav.run(&mut dispatcher).unwrap();

        assert_eq!(dispatcher.pumps, 3);
        assert_eq!(nav.depth(), 0);
        assert_eq!(nav.bindings(), &Bindings::default());
        assert_eq!(nav.screen_mode(), ScreenMode::Normal);
    }

    #[test]
    fn run_without_root_fails() {
        let mut nav = Nav::new().unwrap();
        let mut dispatcher = Scripted {
            pumps: 0,
            exit_after: 1,
        };
        assert!(nav.run(&mut dispatcher).is_err());
    }
}
