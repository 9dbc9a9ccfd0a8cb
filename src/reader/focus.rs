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

//! Focus letter selection and placement.
//!
//! The eye is anchored on one letter of every word. That letter is picked
//! from the word length alone and drawn centred on a fixed anchor, with the
//! rest of the word hanging off either side of it.

use crate::canvas::{DisplaySurface, Font};

/// Index of the letter to highlight in `word`, counted in characters.
///
/// | length      | focus |
/// |-------------|-------|
/// | 1           | 0     |
/// | 2 to 5      | 1     |
/// | 6 to 9      | 2     |
/// | 10 to 13    | 3     |
/// | 14+, or 0   | 4     |
pub(crate) fn focus_index(word: &str) -> usize {
    match word.chars().count() {
        1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// A word split around its focus letter.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FocusSplit<'a> {
    pub(crate) prefix: &'a str,
    pub(crate) focus: &'a str,
    pub(crate) suffix: &'a str,
}

/// Splits `word` into the text before, at and after its focus letter.
///
/// Returns `None` for an empty word.
pub(crate) fn split_word(word: &str) -> Option<FocusSplit<'_>> {
    let focus = focus_index(word);
    let mut boundaries = word.char_indices().map(|(i, _)| i).skip(focus);

    let start = boundaries.next()?;
    let end = boundaries.next().unwrap_or(word.len());

    Some(FocusSplit {
        prefix: &word[..start],
        focus: &word[start..end],
        suffix: &word[end..],
    })
}

/// Columns at which each part of a word is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FocusLayout {
    pub(crate) prefix_x: i32,
    pub(crate) focus_x: i32,
    pub(crate) suffix_x: i32,
}

impl FocusLayout {
    /// Centres a focus letter `focus_width` wide on `anchor`.
    ///
    /// The prefix ends where the focus letter starts and the suffix starts
    /// where it ends.
    pub(crate) fn new(anchor: i32, prefix_width: i32, focus_width: i32) -> Self {
        let focus_x = anchor - focus_width / 2;

        Self {
            prefix_x: focus_x - prefix_width,
            focus_x,
            suffix_x: focus_x + focus_width,
        }
    }
}

/// Colours and font used to draw a word.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WordStyle {
    pub(crate) text: ratatui::style::Color,
    pub(crate) focus: ratatui::style::Color,
}

/// Draws `word` onto `surface` with its focus letter on `(anchor_x, y)`.
///
/// Nothing is drawn for an empty word. The caller clears and presents.
pub(crate) fn draw_word<S: DisplaySurface>(
    surface: &mut S,
    word: &str,
    anchor_x: i32,
    y: i32,
    style: WordStyle,
) {
    let Some(split) = split_word(word) else {
        return;
    };

    let layout = FocusLayout::new(
        anchor_x,
        surface.measure_width(split.prefix, Font::Regular),
        surface.measure_width(split.focus, Font::Bold),
    );

    if !split.prefix.is_empty() {
        surface.draw_text(split.prefix, layout.prefix_x, y, style.text, Font::Regular);
    }
    surface.draw_text(split.focus, layout.focus_x, y, style.focus, Font::Bold);
    if !split.suffix.is_empty() {
        surface.draw_text(split.suffix, layout.suffix_x, y, style.text, Font::Regular);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_table() {
        let cases = [
            ("", 4),
            ("a", 0),
            ("an", 1),
            ("quick", 1),
            ("jumped", 2),
            ("wonderful", 2),
            ("understand", 3),
            ("extraordinary", 3),
            ("extraordinarily", 4),
        ];
        for (word, expected) in cases {
            assert_eq!(focus_index(word), expected, "{word}");
        }
    }

    #[test]
    fn focus_is_monotonic_and_bounded() {
        let mut previous = 0;
        for len in 1..40 {
            let focus = focus_index(&"x".repeat(len));
            assert!(focus <= 4);
            assert!(focus >= previous);
            assert!(focus < len);
            previous = focus;
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(focus_index("día"), 1);
        assert_eq!(
            split_word("día"),
            Some(FocusSplit {
                prefix: "d",
                focus: "í",
                suffix: "a"
            })
        );
    }

    #[test]
    fn split_single_letter() {
        assert_eq!(
            split_word("I"),
            Some(FocusSplit {
                prefix: "",
                focus: "I",
                suffix: ""
            })
        );
        assert_eq!(split_word(""), None);
    }

    #[test]
    fn layout_centres_focus_on_anchor() {
        let layout = FocusLayout::new(20, 3, 1);
        assert_eq!(layout.focus_x, 20);
        assert_eq!(layout.prefix_x, 17);
        assert_eq!(layout.suffix_x, 21);

        // Double width glyphs straddle the anchor.
        let wide = FocusLayout::new(20, 4, 2);
        assert_eq!(wide.focus_x, 19);
        assert_eq!(wide.prefix_x, 15);
        assert_eq!(wide.suffix_x, 21);
    }
}
