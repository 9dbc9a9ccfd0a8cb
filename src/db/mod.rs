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

//! Data access layer.
//!
//! This module keeps the reading library in SQLite: one row per book, keyed
//! by the book's absolute path, holding its title and the index of the last
//! word read.
//!
//! # Tables
//!
//! * `books` - path, title and reading position of every imported book.
//!
//! # Performance
//!
//! Most functions in this module use [`rusqlite::Connection::prepare_cached`]
//! to reduce SQL parsing overhead.

mod model;
pub(crate) mod scan;

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::model::BookEntry;

#[derive(Debug, Error)]
pub(crate) enum LibraryError {
    /// The book is not in the library.
    #[error("no book at {0} in the library")]
    NotFound(String),

    #[error("library database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to switch to WAL mode, current mode: {0}")]
    JournalMode(String),
}

pub(crate) struct Library {
    conn: Connection,
}

impl Library {
    /// Opens the library database and configures it.
    ///
    /// This function performs the following setup:
    /// * **WAL Mode**: Enables Write-Ahead Logging.
    /// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
    /// * **Schema**: Executes [`create_schema`] to ensure the table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The database file cannot be opened.
    /// * The initial PRAGMA configurations fail.
    /// * The schema initialization fails.
    pub(crate) fn open(path: &str) -> Result<Self, LibraryError> {
        let conn = Connection::open(path)?;

        let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
        if journal_mode != "wal" {
            return Err(LibraryError::JournalMode(journal_mode));
        }

        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

        Self::with_connection(conn)
    }

    /// A library that lives only as long as the value.
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, LibraryError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, LibraryError> {
        conn.set_prepared_statement_cache_capacity(16);
        create_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Adds a book, unless a book with the same path is already present.
    ///
    /// Returns `false` for a duplicate path, in which case nothing changes.
    pub(crate) fn add(&self, path: &str, title: &str, position: usize) -> Result<bool, LibraryError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO books (path, title, position)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (path) DO NOTHING",
        )?;
        let inserted = stmt.execute(params![path, title, to_sql_position(position)])?;

        tracing::debug!(path, title, inserted = inserted == 1, "book added");

        Ok(inserted == 1)
    }

    /// Stores the title and reading position of a book.
    pub(crate) fn update(&self, path: &str, title: &str, position: usize) -> Result<(), LibraryError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO books (path, title, position)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (path)
             DO UPDATE SET title = ?2, position = ?3",
        )?;
        stmt.execute(params![path, title, to_sql_position(position)])?;

        tracing::debug!(path, title, position, "book updated");

        Ok(())
    }

    /// Removes a book.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::NotFound`] if no book has this path.
    pub(crate) fn remove(&self, path: &str) -> Result<(), LibraryError> {
        let mut stmt = self.conn.prepare_cached("DELETE FROM books WHERE path = ?1")?;
        if stmt.execute([path])? == 0 {
            return Err(LibraryError::NotFound(path.to_string()));
        }

        tracing::debug!(path, "book removed");

        Ok(())
    }

    /// Fetches every book, sorted by title.
    pub(crate) fn list(&self) -> Result<Vec<BookEntry>, LibraryError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT title, path FROM books ORDER BY title, path")?;
        let results = stmt
            .query_map([], BookEntry::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(results)
    }

    /// The index of the last word read in a book.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::NotFound`] if no book has this path.
    pub(crate) fn position(&self, path: &str) -> Result<usize, LibraryError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT position FROM books WHERE path = ?1")?;
        let position: Option<i64> = stmt.query_row([path], |row| row.get(0)).optional()?;

        position
            .map(|p| usize::try_from(p).unwrap_or_default())
            .ok_or_else(|| LibraryError::NotFound(path.to_string()))
    }
}

fn to_sql_position(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}

/// Create the database schema.
///
/// This function creates the `books` table if it does not already exist.
fn create_schema(conn: &Connection) -> Result<(), LibraryError> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS books (
            path TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            position INTEGER NOT NULL DEFAULT 0 CHECK (position >= 0)
        );

        COMMIT;",
    )?;

    Ok(())
}
