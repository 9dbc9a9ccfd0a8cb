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

//! File browsing dialog state.
//!
//! The picker lists one directory at a time: `..` first (unless at the
//! filesystem root), then sub-directories, then files accepted by the
//! [`FileMask`], each group sorted by name.

mod event;
mod render;

use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use ratatui::widgets::ListState;
use walkdir::WalkDir;

use crate::model::FileMask;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PickerEntry {
    Parent(PathBuf),
    Dir(PathBuf),
    File(PathBuf),
}

impl PickerEntry {
    pub(crate) fn label(&self) -> String {
        match self {
            PickerEntry::Parent(_) => "..".to_string(),
            PickerEntry::Dir(path) => format!("{}/", file_name(path)),
            PickerEntry::File(path) => file_name(path),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PickerEntry::Parent(_) => 0,
            PickerEntry::Dir(_) => 1,
            PickerEntry::File(_) => 2,
        }
    }

    fn path(&self) -> &Path {
        match self {
            PickerEntry::Parent(path) | PickerEntry::Dir(path) | PickerEntry::File(path) => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PickerAction {
    /// A file was chosen.
    Choose(PathBuf),
}

#[derive(Debug)]
pub(crate) struct FilePicker {
    dir: PathBuf,
    mask: FileMask,
    entries: Vec<PickerEntry>,
    state: ListState,
}

impl FilePicker {
    pub(crate) fn new(dir: impl Into<PathBuf>, mask: FileMask) -> Self {
        let mut picker = Self {
            dir: dir.into(),
            mask,
            entries: vec![],
            state: ListState::default(),
        };
        picker.reload();
        picker
    }

    pub(crate) fn selection(&self) -> Option<&PickerEntry> {
        self.state.selected().and_then(|i| self.entries.get(i))
    }

    /// The highlighted file, if the highlighted entry is a file.
    pub(crate) fn selected_file(&self) -> Option<&Path> {
        match self.selection() {
            Some(PickerEntry::File(path)) => Some(path),
            _ => None,
        }
    }

    /// Activates the highlighted entry.
    ///
    /// Directories (and `..`) are entered in place. A file is returned as the
    /// picker's result.
    pub(crate) fn activate(&mut self) -> Option<PickerAction> {
        match self.selection()? {
            PickerEntry::File(path) => Some(PickerAction::Choose(path.clone())),
            PickerEntry::Parent(path) | PickerEntry::Dir(path) => {
                let path = path.clone();
                self.descend(path);
                None
            }
        }
    }

    /// Moves to the parent directory.
    pub(crate) fn ascend(&mut self) {
        if let Some(PickerEntry::Parent(parent)) = self.entries.first() {
            let parent = parent.clone();
            self.descend(parent);
        }
    }

    fn descend(&mut self, dir: PathBuf) {
        tracing::debug!(dir = %dir.display(), "file picker changed directory");

        self.dir = dir;
        self.reload();
    }

    fn reload(&mut self) {
        let mut entries: Vec<PickerEntry> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let path = e.into_path();
                if path.is_dir() {
                    Some(PickerEntry::Dir(path))
                } else if self.mask.matches(&path) {
                    Some(PickerEntry::File(path))
                } else {
                    None
                }
            })
            .collect();

        if let Some(parent) = self.dir.parent() {
            entries.push(PickerEntry::Parent(parent.to_path_buf()));
        }

        entries.sort_by(compare_entries);

        self.entries = entries;
        self.state.select((!self.entries.is_empty()).then_some(0));
    }

    fn goto_next(&mut self) {
        let len = self.entries.len();
        if len == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.entries.len();
        if len == 0 { return; }
        let i = match self.state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.state.select(Some(i));
    }
}

fn compare_entries(a: &PickerEntry, b: &PickerEntry) -> Ordering {
    a.rank().cmp(&b.rank()).then_with(|| {
        file_name(a.path())
            .to_lowercase()
            .cmp(&file_name(b.path()).to_lowercase())
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{Event, KeyCode, KeyEvent};

    use super::*;

    fn scratch() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("A.FB2"), "a").unwrap();
        fs::write(dir.path().join("skip.pdf"), "").unwrap();
        fs::write(dir.path().join("zeta").join("inner.txt"), "inner").unwrap();
        dir
    }

    fn labels(picker: &FilePicker) -> Vec<String> {
        picker.entries.iter().map(PickerEntry::label).collect()
    }

    #[test]
    fn parent_then_dirs_then_masked_files() {
        let dir = scratch();
        let picker = FilePicker::new(dir.path(), FileMask::new(["txt", "fb2"]));

        assert_eq!(labels(&picker), ["..", "Alpha/", "zeta/", "A.FB2", "b.txt"]);
        assert_eq!(picker.selection().map(PickerEntry::label).as_deref(), Some(".."));
    }

    #[test]
    fn enter_descends_into_directories_and_chooses_files() {
        let dir = scratch();
        let mut picker = FilePicker::new(dir.path(), FileMask::new(["txt"]));
        let enter = Event::Key(KeyEvent::from(KeyCode::Enter));
        let down = Event::Key(KeyEvent::from(KeyCode::Down));

        // .. , Alpha/, zeta/, b.txt
        picker.process_event(&down);
        picker.process_event(&down);
        assert_eq!(picker.process_event(&enter), None);
        assert_eq!(picker.dir, dir.path().join("zeta"));
        assert_eq!(labels(&picker), ["..", "inner.txt"]);

        picker.process_event(&down);
        assert_eq!(picker.selected_file(), Some(dir.path().join("zeta").join("inner.txt").as_path()));
        assert_eq!(
            picker.process_event(&enter),
            Some(PickerAction::Choose(dir.path().join("zeta").join("inner.txt")))
        );

        picker.process_event(&Event::Key(KeyEvent::from(KeyCode::Backspace)));
        assert_eq!(picker.dir, dir.path());
    }

    #[test]
    fn unreadable_directory_lists_only_parent() {
        let dir = tempfile::tempdir().unwrap();
        let picker = FilePicker::new(dir.path().join("missing"), FileMask::new(["txt"]));

        assert_eq!(labels(&picker), [".."]);
        assert!(picker.selected_file().is_none());
    }
}
