// SPDX-License-Identifier: MPL-2.0
//! Playback value objects shared by the playlist controller and the UI.

use std::path::{Path, PathBuf};

/// Options applied when a playlist is populated.
///
/// Each viewer window owns one copy. Toggling an option never reorders the
/// playlist currently shown; it only affects the next population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackOptions {
    /// Randomize the order of discovered files.
    pub shuffle: bool,
    /// Ask for confirmation before deleting the current file.
    pub prompt_delete: bool,
    /// Unlink files instead of moving them to the trash.
    pub permanent_delete: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            shuffle: false,
            prompt_delete: true,
            permanent_delete: false,
        }
    }
}

impl PlaybackOptions {
    /// Flips a single option.
    pub fn toggle(&mut self, toggle: OptionToggle) {
        match toggle {
            OptionToggle::Shuffle => self.shuffle = !self.shuffle,
            OptionToggle::PromptDelete => self.prompt_delete = !self.prompt_delete,
            OptionToggle::PermanentDelete => self.permanent_delete = !self.permanent_delete,
        }
    }

    /// Returns the current value of a single option.
    #[must_use]
    pub fn get(&self, toggle: OptionToggle) -> bool {
        match toggle {
            OptionToggle::Shuffle => self.shuffle,
            OptionToggle::PromptDelete => self.prompt_delete,
            OptionToggle::PermanentDelete => self.permanent_delete,
        }
    }
}

/// Identifies one of the three user-toggleable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionToggle {
    Shuffle,
    PromptDelete,
    PermanentDelete,
}

impl OptionToggle {
    pub const ALL: [OptionToggle; 3] = [
        OptionToggle::Shuffle,
        OptionToggle::PromptDelete,
        OptionToggle::PermanentDelete,
    ];
}

/// What the user picked in a file selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    File(PathBuf),
    Directory(PathBuf),
}

impl Selection {
    /// Classifies an arbitrary path (e.g. from the command line) by querying
    /// the filesystem.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        if path.is_dir() {
            Selection::Directory(path)
        } else {
            Selection::File(path)
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Selection::File(path) | Selection::Directory(path) => path,
        }
    }
}

/// Direction for media navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Next,
    Previous,
}
