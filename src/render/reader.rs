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

//! Copy the reader's canvas into the terminal buffer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthChar;

use crate::canvas::{Canvas, Font};

/// Draws the presented runs of `canvas` into `area`, clipping at the edges.
///
/// Run positions are relative to the top left of `area`.
pub(crate) fn blit(buf: &mut Buffer, area: Rect, canvas: &Canvas) {
    let width = i32::from(area.width);
    let height = i32::from(area.height);

    for run in canvas.runs() {
        if run.y < 0 || run.y >= height {
            continue;
        }

        let mut style = Style::default().fg(run.colour);
        if run.font == Font::Bold {
            style = style.add_modifier(Modifier::BOLD);
        }

        let mut x = run.x;
        for ch in run.text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w > 0 && x >= 0 && x + w <= width {
                let position = (area.x + x as u16, area.y + run.y as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_char(ch).set_style(style);
                }
            }
            x += w;
        }
    }
}
