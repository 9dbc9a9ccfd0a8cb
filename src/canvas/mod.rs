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

//! Drawing surface for the reader.
//!
//! [`DisplaySurface`] is the minimal paint interface the playback engine
//! needs: clear, draw a run of text, present the frame, measure text.
//! [`Canvas`] implements it as an off-screen display list. Runs are staged
//! between `clear` and `present`, and only presented runs are blitted into
//! the terminal buffer by the renderer.

use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Regular,
    Bold,
}

pub(crate) trait DisplaySurface {
    /// Width and height in cells.
    fn size(&self) -> (u16, u16);

    fn clear(&mut self);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, colour: Color, font: Font);

    fn present(&mut self);

    fn measure_width(&self, text: &str, font: Font) -> i32;
}

/// A run of text at a cell position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextRun {
    pub(crate) text: String,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) colour: Color,
    pub(crate) font: Font,
}

#[derive(Debug, Default)]
pub(crate) struct Canvas {
    width: u16,
    height: u16,
    staged: Vec<TextRun>,
    presented: Vec<TextRun>,
    frames: u64,
}

impl Canvas {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Changes the canvas size, returning whether it changed.
    ///
    /// The presented frame is kept, callers redraw when the size changes.
    pub(crate) fn resize(&mut self, width: u16, height: u16) -> bool {
        if (self.width, self.height) == (width, height) {
            return false;
        }

        self.width = width;
        self.height = height;
        true
    }

    /// Runs of the last presented frame.
    pub(crate) fn runs(&self) -> &[TextRun] {
        &self.presented
    }

    /// Number of frames presented so far.
    #[cfg(test)]
    pub(crate) fn frames(&self) -> u64 {
        self.frames
    }

    /// Text of the presented runs drawn on row `y`, left to right.
    #[cfg(test)]
    pub(crate) fn row_text(&self, y: i32) -> String {
        let mut runs: Vec<_> = self.presented.iter().filter(|run| run.y == y).collect();
        runs.sort_by_key(|run| run.x);
        runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl DisplaySurface for Canvas {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.staged.clear();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, colour: Color, font: Font) {
        if text.is_empty() || y < 0 || y >= i32::from(self.height) {
            return;
        }

        self.staged.push(TextRun {
            text: text.to_string(),
            x,
            y,
            colour,
            font,
        });
    }

    fn present(&mut self) {
        self.presented.clone_from(&self.staged);
        self.frames += 1;
    }

    fn measure_width(&self, text: &str, _font: Font) -> i32 {
        i32::try_from(text.width()).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_presented_runs_are_visible() {
        let mut canvas = Canvas::new(20, 5);
        canvas.clear();
        canvas.draw_text("hello", 2, 1, Color::White, Font::Regular);
        assert!(canvas.runs().is_empty());

        canvas.present();
        assert_eq!(canvas.row_text(1), "hello");
        assert_eq!(canvas.frames(), 1);

        canvas.clear();
        canvas.present();
        assert!(canvas.runs().is_empty());
        assert_eq!(canvas.frames(), 2);
    }

    #[test]
    fn rows_outside_canvas_are_dropped() {
        let mut canvas = Canvas::new(10, 2);
        canvas.draw_text("x", 0, 2, Color::White, Font::Regular);
        canvas.draw_text("y", 0, -1, Color::White, Font::Regular);
        canvas.present();
        assert!(canvas.runs().is_empty());
    }

    #[test]
    fn measures_display_width() {
        let canvas = Canvas::new(10, 2);
        assert_eq!(canvas.measure_width("abc", Font::Regular), 3);
        assert_eq!(canvas.measure_width("日本", Font::Bold), 4);
    }

    #[test]
    fn resize_reports_change() {
        let mut canvas = Canvas::new(10, 2);
        assert!(!canvas.resize(10, 2));
        assert!(canvas.resize(40, 12));
        assert_eq!(canvas.size(), (40, 12));
    }
}
