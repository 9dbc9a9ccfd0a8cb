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

//! Book text extraction.
//!
//! Turns a book file into the ordered list of words the reader paces through.
//! Plain text is split on whitespace. FictionBook (`.fb2`) files are XML: the
//! character data between tags is split the same way, embedded `<binary>`
//! payloads are skipped, and entity references are decoded.

mod fb2;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum WordSourceError {
    #[error("failed to read {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed FictionBook {path}: {source}", path = .path.display())]
    Markup {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("unsupported book format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Reads every word of a book, in order.
///
/// # Errors
///
/// Returns [`WordSourceError::UnsupportedFormat`] for anything but `.txt` and
/// `.fb2`, [`WordSourceError::Io`] if the file cannot be read and
/// [`WordSourceError::Markup`] if an `.fb2` file is not well-formed XML.
pub(crate) fn extract_words(path: &Path) -> Result<Vec<String>, WordSourceError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let markup = match extension.as_str() {
        "txt" => false,
        "fb2" => true,
        _ => return Err(WordSourceError::UnsupportedFormat(path.to_path_buf())),
    };

    let bytes = fs::read(path).map_err(|source| WordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let words = if markup {
        fb2::parse_words(&text).map_err(|source| WordSourceError::Markup {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        split_words(&text)
    };

    tracing::info!(path = %path.display(), words = words.len(), "extracted words");

    Ok(words)
}

/// Splits text on any run of whitespace.
pub(crate) fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
