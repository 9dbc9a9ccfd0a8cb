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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

use crate::reader::{ReaderStyle, focus::WordStyle};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) book_title_fg: Color,
    pub(crate) book_path_fg: Color,
    pub(crate) placeholder_fg: Color,

    pub(crate) word_fg: Color,
    pub(crate) focus_fg: Color,
    pub(crate) guide_fg: Color,
    pub(crate) overlay_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            highlight_colour: Color::Rgb(70, 50, 90),
            error_colour: Color::Rgb(237, 28, 36),

            book_title_fg: Color::Rgb(255, 255, 255),
            book_path_fg: Color::Rgb(162, 161, 166),
            placeholder_fg: Color::Rgb(162, 161, 166),

            word_fg: Color::Rgb(255, 255, 255),
            focus_fg: Color::Rgb(237, 28, 36),
            guide_fg: Color::Rgb(102, 102, 102),
            overlay_fg: Color::Rgb(179, 157, 219),
        }
    }

    /// The reader colours.
    pub(crate) const fn reader_style(&self) -> ReaderStyle {
        ReaderStyle {
            word: WordStyle {
                text: self.word_fg,
                focus: self.focus_fg,
            },
            guide: self.guide_fg,
            overlay: self.overlay_fg,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Returns `None` for anything but a
    /// [`Color::Rgb`].
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::to_hex(Color::Rgb(40, 20, 50)).as_deref(), Some("#281432"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
