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

//! Screen values held by the navigation stack.
//!
//! A [`Screen`] bundles everything that is bound to the display while it is
//! active: the title, the body (or a set of tabbed bodies), the options menu
//! and the action fired by the exit key. A [`ModalScreen`] is a screen pushed
//! over another one, carrying the result callback invoked when it closes.

use std::fmt;

/// A single entry in an options menu.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MenuItem<A> {
    pub(crate) label: String,
    pub(crate) action: A,
}

impl<A> MenuItem<A> {
    pub(crate) fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// One page of a tabbed screen, with its own menu.
///
/// The tab menu is shown above the screen's shared bottom menu.
pub(crate) struct Tab<B, A> {
    pub(crate) label: String,
    pub(crate) body: B,
    pub(crate) menu: Vec<MenuItem<A>>,
}

impl<B, A> Tab<B, A> {
    pub(crate) fn new(label: impl Into<String>, body: B, menu: Vec<MenuItem<A>>) -> Self {
        Self {
            label: label.into(),
            body,
            menu,
        }
    }
}

/// What a screen shows: one body, or several tabbed bodies.
enum Content<B, A> {
    Single(B),
    Tabbed { tabs: Vec<Tab<B, A>>, active: usize },
}

/// A unit of UI state.
pub(crate) struct Screen<B, A> {
    pub(crate) title: String,
    content: Content<B, A>,
    pub(crate) menu: Vec<MenuItem<A>>,
    pub(crate) exit_action: A,
}

impl<B, A> Screen<B, A> {
    /// Creates a screen with a single body.
    pub(crate) fn new(title: impl Into<String>, body: B, menu: Vec<MenuItem<A>>, exit_action: A) -> Self {
        Self {
            title: title.into(),
            content: Content::Single(body),
            menu,
            exit_action,
        }
    }

    /// Creates a tabbed screen, the first tab is active.
    ///
    /// Returns `None` when `tabs` is empty, a tabbed screen always has at
    /// least one tab.
    pub(crate) fn tabbed(
        title: impl Into<String>,
        tabs: Vec<Tab<B, A>>,
        menu: Vec<MenuItem<A>>,
        exit_action: A,
    ) -> Option<Self> {
        if tabs.is_empty() {
            return None;
        }

        Some(Self {
            title: title.into(),
            content: Content::Tabbed { tabs, active: 0 },
            menu,
            exit_action,
        })
    }

    /// The index of the active tab, `None` for a single-body screen.
    pub(crate) fn active_tab(&self) -> Option<usize> {
        match &self.content {
            Content::Single(_) => None,
            Content::Tabbed { active, .. } => Some(*active),
        }
    }

    pub(crate) fn tab_count(&self) -> usize {
        match &self.content {
            Content::Single(_) => 0,
            Content::Tabbed { tabs, .. } => tabs.len(),
        }
    }

    /// Makes tab `index` the active one, out of range indexes are ignored.
    pub(crate) fn select_tab(&mut self, index: usize) -> bool {
        match &mut self.content {
            Content::Tabbed { tabs, active } if index < tabs.len() => {
                *active = index;
                true
            }
            _ => false,
        }
    }

    /// The body currently shown, for a tabbed screen that of the active tab.
    pub(crate) fn body(&self) -> &B {
        match &self.content {
            Content::Single(body) => body,
            Content::Tabbed { tabs, active } => &tabs[*active].body,
        }
    }

    pub(crate) fn body_mut(&mut self) -> &mut B {
        match &mut self.content {
            Content::Single(body) => body,
            Content::Tabbed { tabs, active } => &mut tabs[*active].body,
        }
    }
}

impl<B, A: Clone> Screen<B, A> {
    /// The menu bound while this screen is active: the active tab's own
    /// entries followed by the shared bottom menu.
    pub(crate) fn effective_menu(&self) -> Vec<MenuItem<A>> {
        match &self.content {
            Content::Single(_) => self.menu.clone(),
            Content::Tabbed { tabs, active } => tabs[*active]
                .menu
                .iter()
                .chain(self.menu.iter())
                .cloned()
                .collect(),
        }
    }

    pub(crate) fn tab_labels(&self) -> Vec<String> {
        match &self.content {
            Content::Single(_) => vec![],
            Content::Tabbed { tabs, .. } => tabs.iter().map(|tab| tab.label.clone()).collect(),
        }
    }
}

/// Result callback of a modal screen.
///
/// Returning `false` keeps the modal on the stack and re-activates it, the
/// callback may have changed the modal before doing so.
pub(crate) type ResultCallback<B, A> = Box<dyn FnMut(&mut ModalScreen<B, A>) -> bool>;

/// A screen pushed over another one, returning control to it on close.
pub(crate) struct ModalScreen<B, A> {
    screen: Screen<B, A>,
    cancelled: bool,
    on_close: Option<ResultCallback<B, A>>,
}

impl<B, A> ModalScreen<B, A> {
    /// A modal without a result callback always closes.
    pub(crate) fn new(screen: Screen<B, A>) -> Self {
        Self {
            screen,
            cancelled: false,
            on_close: None,
        }
    }

    pub(crate) fn with_callback<F>(screen: Screen<B, A>, on_close: F) -> Self
    where
        F: FnMut(&mut ModalScreen<B, A>) -> bool + 'static,
    {
        Self {
            screen,
            cancelled: false,
            on_close: Some(Box::new(on_close)),
        }
    }

    pub(crate) fn screen(&self) -> &Screen<B, A> {
        &self.screen
    }

    pub(crate) fn screen_mut(&mut self) -> &mut Screen<B, A> {
        &mut self.screen
    }

    pub(crate) fn body(&self) -> &B {
        self.screen.body()
    }

    pub(crate) fn body_mut(&mut self) -> &mut B {
        self.screen.body_mut()
    }

    /// Whether the last close attempt went through the cancel path.
    pub(crate) fn cancelled(&self) -> bool {
        self.cancelled
    }

    /// Runs steps one and two of the close protocol: records how the modal is
    /// being closed, then asks the callback whether it may go.
    pub(crate) fn resolve(&mut self, cancelled: bool) -> bool {
        self.cancelled = cancelled;

        // The callback receives the modal itself, so it is moved out for the
        // duration of the call.
        match self.on_close.take() {
            Some(mut on_close) => {
                let accepted = on_close(self);
                self.on_close = Some(on_close);
                accepted
            }
            None => true,
        }
    }
}

impl<B, A> fmt::Debug for ModalScreen<B, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalScreen")
            .field("title", &self.screen.title)
            .field("cancelled", &self.cancelled)
            .field("has_callback", &self.on_close.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(labels: &[&str]) -> Vec<MenuItem<u8>> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| MenuItem::new(*label, i as u8))
            .collect()
    }

    #[test]
    fn tabbed_screen_requires_a_tab() {
        let screen: Option<Screen<&str, u8>> = Screen::tabbed("t", vec![], vec![], 0);
        assert!(screen.is_none());
    }

    #[test]
    fn tab_menu_is_followed_by_shared_menu() {
        let mut screen = Screen::tabbed(
            "t",
            vec![
                Tab::new("one", "body one", menu(&["open"])),
                Tab::new("two", "body two", menu(&["scan", "rename"])),
            ],
            vec![MenuItem::new("exit", 9)],
            9,
        )
        .unwrap();

        let labels: Vec<_> = screen.effective_menu().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, ["open", "exit"]);

        assert!(screen.select_tab(1));
        let labels: Vec<_> = screen.effective_menu().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, ["scan", "rename", "exit"]);
        assert_eq!(*screen.body(), "body two");
    }

    #[test]
    fn invalid_tab_keeps_active_tab() {
        let mut screen = Screen::tabbed("t", vec![Tab::new("one", 1, vec![])], vec![], 0u8).unwrap();
        assert!(!screen.select_tab(3));
        assert_eq!(screen.active_tab(), Some(0));
    }

    #[test]
    fn callback_sees_cancel_flag() {
        let mut modal = ModalScreen::with_callback(Screen::new("m", 0, vec![], 0u8), |modal| {
            *modal.body_mut() = if modal.cancelled() { 1 } else { 2 };
            true
        });

        assert!(modal.resolve(true));
        assert_eq!(*modal.body(), 1);

        assert!(modal.resolve(false));
        assert_eq!(*modal.body(), 2);
        assert!(!modal.cancelled());
    }
}
