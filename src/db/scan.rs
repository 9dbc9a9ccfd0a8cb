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

//! Library folder scanning.
//!
//! Walks the configured book folders and imports every file that matches the
//! book mask. Books already in the library keep their title and position.
//!
//! # Performance
//!
//! The scan runs inside one SQLite transaction, so a large folder tree costs a
//! single commit.

use std::path::Path;

use rusqlite::params;
use walkdir::WalkDir;

use super::{Library, LibraryError};
use crate::model::{BookEntry, FileMask};

impl Library {
    /// Recursively scans `roots` for books and adds the new ones.
    ///
    /// # Arguments
    ///
    /// * `roots` - The folders to walk. Missing folders are skipped.
    /// * `mask` - The book file extensions.
    ///
    /// # Returns
    ///
    /// Returns the number of books added.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails or a database constraint is
    /// violated during insertion.
    pub(crate) fn scan<P: AsRef<Path>>(&self, roots: &[P], mask: &FileMask) -> Result<usize, LibraryError> {
        let tx = self.conn.unchecked_transaction()?;
        let mut added = 0;

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO books (path, title, position)
                 VALUES (?1, ?2, 0)
                 ON CONFLICT (path) DO NOTHING",
            )?;

            for root in roots {
                let root = root.as_ref();
                if !root.is_dir() {
                    tracing::warn!(root = %root.display(), "skipping missing book folder");
                    continue;
                }

                for entry in WalkDir::new(root)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file() && mask.matches(e.path()))
                {
                    let book = BookEntry::from_path(entry.path());
                    added += stmt.execute(params![book.path, book.title])?;
                }
            }
        }

        tx.commit()?;

        tracing::info!(added, "library scan finished");

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn scan_adds_matching_files_once() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("one.txt"), "one").unwrap();
        fs::write(nested.join("two.FB2"), "<p>two</p>").unwrap();
        fs::write(nested.join("cover.jpg"), "").unwrap();

        let library = Library::open_in_memory().unwrap();
        let mask = FileMask::new(["txt", "fb2"]);

        assert_eq!(library.scan(&[dir.path()], &mask).unwrap(), 2);
        assert_eq!(library.scan(&[dir.path()], &mask).unwrap(), 0);

        let titles: Vec<_> = library.list().unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["one.txt", "two.FB2"]);
    }

    #[test]
    fn scan_keeps_existing_positions() {
        let dir = tempfile::tempdir().unwrap();
        let book = dir.path().join("kept.txt");
        fs::write(&book, "a b c").unwrap();

        let library = Library::open_in_memory().unwrap();
        let path = book.display().to_string();
        library.add(&path, "Kept", 2).unwrap();

        library.scan(&[dir.path()], &FileMask::new(["txt"])).unwrap();

        assert_eq!(library.position(&path).unwrap(), 2);
        assert_eq!(library.list().unwrap()[0].title, "Kept");
    }

    #[test]
    fn missing_folders_are_skipped() {
        let library = Library::open_in_memory().unwrap();
        let added = library
            .scan(&["/definitely/not/here"], &FileMask::new(["txt"]))
            .unwrap();
        assert_eq!(added, 0);
    }
}
