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

//! Library book list and selection state.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::BookEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookListAction {
    Open,
}

#[derive(Debug, Default)]
pub(crate) struct BookList {
    books: Vec<BookEntry>,
    state: ListState,
}

impl BookList {
    pub(crate) fn new(books: Vec<BookEntry>) -> Self {
        let mut list = Self::default();
        list.set_books(books);
        list
    }

    /// Replaces the books, keeping the selection on the same row where
    /// possible.
    pub(crate) fn set_books(&mut self, books: Vec<BookEntry>) {
        self.books = books;

        let selected = match (self.books.len(), self.state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.state.select(selected);
    }

    #[cfg(test)]
    pub(crate) fn books(&self) -> &[BookEntry] {
        &self.books
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub(crate) fn selected(&self) -> Option<&BookEntry> {
        self.state.selected().and_then(|i| self.books.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.books.len();
        if len == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.books.len();
        if len == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.books.is_empty() {
            self.state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.books.len().checked_sub(1) {
            self.state.select(Some(last));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent};

    use super::*;

    fn book(title: &str) -> BookEntry {
        BookEntry {
            title: title.into(),
            path: format!("/books/{title}"),
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn selection_wraps() {
        let mut list = BookList::new(vec![book("a"), book("b"), book("c")]);
        assert_eq!(list.selected().unwrap().title, "a");

        list.process_event(&key(KeyCode::Up));
        assert_eq!(list.selected().unwrap().title, "c");

        list.process_event(&key(KeyCode::Char('j')));
        assert_eq!(list.selected().unwrap().title, "a");

        list.process_event(&key(KeyCode::Char('G')));
        assert_eq!(list.selected().unwrap().title, "c");
    }

    #[test]
    fn shrinking_clamps_selection() {
        let mut list = BookList::new(vec![book("a"), book("b"), book("c")]);
        list.process_event(&key(KeyCode::Char('G')));

        list.set_books(vec![book("a")]);
        assert_eq!(list.selected().unwrap().title, "a");

        list.set_books(vec![]);
        assert!(list.selected().is_none());
    }

    #[test]
    fn empty_list_never_opens() {
        let mut list = BookList::new(vec![]);
        assert_eq!(list.process_event(&key(KeyCode::Enter)), None);

        list.set_books(vec![book("a")]);
        assert_eq!(list.process_event(&key(KeyCode::Enter)), Some(BookListAction::Open));
    }
}
