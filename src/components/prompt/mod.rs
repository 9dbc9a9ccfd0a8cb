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

//! Single-line text prompt.
//!
//! Wraps a [`tui_input::Input`] with a label and an optional error hint. The
//! hint is set by whoever validates the value and cleared on the next edit.

mod render;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromptAction {
    Submit,
    Cancel,
}

#[derive(Debug)]
pub(crate) struct Prompt {
    label: String,
    input: Input,
    error: Option<String>,
}

impl Prompt {
    pub(crate) fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: Input::new(value.into()),
            error: None,
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    #[cfg(test)]
    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PromptAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(PromptAction::Submit),
            KeyCode::Esc => Some(PromptAction::Cancel),
            _ => {
                // Delegate all other key events to the managed input component.
                if self.input.handle_event(event).is_some() {
                    self.error = None;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn typing_edits_and_clears_the_hint() {
        let mut prompt = Prompt::new("Speed", "250");
        prompt.set_error("bad");

        assert_eq!(prompt.process_event(&key(KeyCode::Backspace)), None);
        assert_eq!(prompt.process_event(&key(KeyCode::Char('7'))), None);

        assert_eq!(prompt.value(), "257");
        assert_eq!(prompt.error(), None);
    }

    #[test]
    fn enter_and_esc_finish() {
        let mut prompt = Prompt::new("Title", "Dune");
        assert_eq!(prompt.process_event(&key(KeyCode::Enter)), Some(PromptAction::Submit));
        assert_eq!(prompt.process_event(&key(KeyCode::Esc)), Some(PromptAction::Cancel));
        assert_eq!(prompt.value(), "Dune");
    }
}
