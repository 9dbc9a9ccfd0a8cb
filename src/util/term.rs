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

//! Terminal emulator escapes the TUI backend has no command for.
//!
//! The window background is painted with OSC 11 so the margin around the
//! ratatui buffer matches the theme, and reset with OSC 111 on exit.
//! Terminals that don't understand the sequences ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Paints the window background, a no-op for non-RGB colours.
pub(crate) fn paint_background(colour: Color) {
    if let Some(hex) = Theme::to_hex(colour) {
        emit(&osc(11, Some(&hex)));
    }
}

/// Hands the window background back to the terminal's own setting.
pub(crate) fn reset_background() {
    emit(&osc(111, None));
}

fn osc(code: u16, payload: Option<&str>) -> String {
    match payload {
        Some(payload) => format!("\x1b]{code};{payload}\x07"),
        None => format!("\x1b]{code}\x07"),
    }
}

// Write errors are ignored, there is nowhere to report them.
fn emit(sequence: &str) {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(sequence.as_bytes());
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc_sequences() {
        assert_eq!(osc(11, Some("#1e1e1e")), "\x1b]11;#1e1e1e\x07");
        assert_eq!(osc(111, None), "\x1b]111\x07");
    }
}
