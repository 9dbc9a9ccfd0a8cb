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

//! FictionBook word extraction.
//!
//! Only character data matters for reading, so the document is streamed with
//! [`quick_xml::Reader`] instead of being built into a tree. Element
//! boundaries separate words and `<binary>` payloads (base64 images) are
//! skipped.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Extracts the words of an FB2 document.
///
/// # Errors
///
/// Returns the [`quick_xml::Error`] of the first malformed construct, such
/// as a mismatched end tag.
pub(crate) fn parse_words(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::with_capacity(xml.len() / 2);
    let mut binary_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if binary_depth > 0 || e.local_name().as_ref() == b"binary" {
                    binary_depth += 1;
                }
                text.push(' ');
            }
            Event::End(_) => {
                binary_depth = binary_depth.saturating_sub(1);
                text.push(' ');
            }
            Event::Empty(_) => text.push(' '),
            Event::Text(e) if binary_depth == 0 => match e.unescape() {
                Ok(unescaped) => text.push_str(&unescaped),
                // Unknown entities are kept as written.
                Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
            },
            Event::CData(e) if binary_depth == 0 => {
                text.push_str(&String::from_utf8_lossy(&e));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text.split_whitespace().map(str::to_owned).collect())
}
