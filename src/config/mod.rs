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

//! Application configuration.
//!
//! This module manages the application configuration file. The file, the
//! library database and the log file all live in the same directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{model::FileMask, reader::Wpm};

const CONFIG_NAME: &str = "glance";

const DATABASE_FILE: &str = "library.db";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub database_file: String,
    pub book_dirs: Vec<String>,
    pub extensions: Vec<String>,
    pub default_wpm: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: data_dir().join(DATABASE_FILE).display().to_string(),
            book_dirs: vec![],
            extensions: vec!["txt".into(), "fb2".into()],
            default_wpm: Wpm::default().get(),
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    pub fn mask(&self) -> FileMask {
        FileMask::new(&self.extensions)
    }

    /// The configured reading rate, snapped onto the allowed steps.
    pub fn wpm(&self) -> Wpm {
        Wpm::saturating(self.default_wpm)
    }

    /// Where the file picker opens: the first book folder, else the current
    /// directory.
    pub fn start_dir(&self) -> PathBuf {
        self.book_dirs
            .first()
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// The directory holding the configuration file.
pub fn data_dir() -> PathBuf {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Loads the configuration, writing the defaults on first run.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();

        assert_eq!(config.wpm().get(), 250);
        assert!(config.mask().matches(Path::new("book.fb2")));
        assert!(config.database_file.ends_with(DATABASE_FILE));
    }

    #[test]
    fn rate_is_snapped() {
        let config = AppConfig {
            default_wpm: 5000,
            ..AppConfig::default()
        };
        assert_eq!(config.wpm().get(), 1000);
    }

    #[test]
    fn start_dir_prefers_book_folder() {
        let config = AppConfig {
            book_dirs: vec!["/books".into(), "/more".into()],
            ..AppConfig::default()
        };
        assert_eq!(config.start_dir(), PathBuf::from("/books"));
    }
}
