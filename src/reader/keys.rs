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

//! Reader key bindings.
//!
//! The reader rebinds its keys whenever it starts or pauses, an unbound key
//! does nothing.

use std::collections::HashMap;

use crossterm::event::KeyCode;

/// The five hardware-style keys the reader listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ReaderKey {
    Select,
    Left,
    Right,
    Up,
    Down,
}

impl ReaderKey {
    pub(crate) fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Self::Select),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::Right),
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Down),
            _ => None,
        }
    }
}

/// Commands understood by the playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReaderCommand {
    Start,
    Pause,
    Rewind,
    Advance,
    Faster,
    Slower,
    SetSpeed,
    Close,
}

#[derive(Debug, Default)]
pub(crate) struct KeyMap {
    bindings: HashMap<ReaderKey, ReaderCommand>,
}

impl KeyMap {
    pub(crate) fn bind(&mut self, key: ReaderKey, command: ReaderCommand) {
        self.bindings.insert(key, command);
    }

    pub(crate) fn unbind(&mut self, key: ReaderKey) {
        self.bindings.remove(&key);
    }

    pub(crate) fn command(&self, key: ReaderKey) -> Option<ReaderCommand> {
        self.bindings.get(&key).copied()
    }
}
