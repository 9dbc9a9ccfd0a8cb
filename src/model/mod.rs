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

//! Domain types shared between the library store and the UI.

use std::path::Path;

/// A book in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BookEntry {
    pub(crate) title: String,
    pub(crate) path: String,
}

impl BookEntry {
    /// A book titled after its file name.
    pub(crate) fn from_path(path: &Path) -> Self {
        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            title,
            path: path.display().to_string(),
        }
    }
}

/// File extensions a book may have, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileMask {
    extensions: Vec<String>,
}

impl FileMask {
    pub(crate) fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub(crate) fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    /// The mask as a glob-ish hint, e.g. `*.txt, *.fb2`.
    pub(crate) fn describe(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!("*.{ext}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
