// SPDX-License-Identifier: MPL-2.0
//! Playlist controller: the ordered media list of one viewer window.
//!
//! A [`Playlist`] is never empty. Windows hold an `Option<Playlist>` where
//! `None` stands for the welcome screen, so operations that may empty the
//! list ([`delete_current`]) take the whole slot and clear it themselves.

use crate::application::deletion::{delete_file, DeletionMethod};
use crate::application::port::DeletionBackend;
use crate::directory_scanner;
use crate::domain::{NavigationDirection, PlaybackOptions, Selection};
use crate::error::{DeletionError, Result};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// Ordered media paths plus the index of the one on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    items: Vec<PathBuf>,
    current_index: usize,
}

/// Result of a successful [`delete_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The file is gone and another item is now current.
    Removed(DeletionMethod),
    /// The file is gone and it was the last one; the slot is now `None`.
    Emptied(DeletionMethod),
}

impl DeleteOutcome {
    #[must_use]
    pub fn method(self) -> DeletionMethod {
        match self {
            DeleteOutcome::Removed(method) | DeleteOutcome::Emptied(method) => method,
        }
    }
}

impl Playlist {
    /// Discovers media for `selection` and builds a playlist positioned on
    /// its first item, shuffled with the thread-local generator when
    /// `options.shuffle` is set.
    ///
    /// Returns `Ok(None)` when nothing playable was found.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Discovery`] if the selection cannot be
    /// read.
    pub fn populate(selection: &Selection, options: PlaybackOptions) -> Result<Option<Self>> {
        Self::populate_with_rng(selection, options, &mut rand::rng())
    }

    /// Same as [`Playlist::populate`] with an explicit random source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Discovery`] if the selection cannot be
    /// read.
    pub fn populate_with_rng<R: rand::Rng + ?Sized>(
        selection: &Selection,
        options: PlaybackOptions,
        rng: &mut R,
    ) -> Result<Option<Self>> {
        let items = directory_scanner::scan_selection(selection)?;
        tracing::info!(
            path = %selection.path().display(),
            found = items.len(),
            shuffle = options.shuffle,
            "media discovery finished"
        );
        Ok(Self::from_items(items, options, rng))
    }

    /// Builds a playlist from already filtered paths.
    ///
    /// Returns `None` for an empty list.
    pub fn from_items<R: rand::Rng + ?Sized>(
        mut items: Vec<PathBuf>,
        options: PlaybackOptions,
        rng: &mut R,
    ) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        if options.shuffle {
            shuffle(&mut items, rng);
        }
        Some(Self {
            items,
            current_index: 0,
        })
    }

    #[must_use]
    pub fn items(&self) -> &[PathBuf] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the path on screen.
    #[must_use]
    pub fn current(&self) -> &Path {
        &self.items[self.current_index]
    }

    /// One-based position and total, as shown in the caption.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.items.len())
    }

    /// Moves to the neighbouring item, wrapping around at both ends, and
    /// returns the new index.
    pub fn advance(&mut self, direction: NavigationDirection) -> usize {
        let len = self.items.len();
        self.current_index = match direction {
            NavigationDirection::Next => (self.current_index + 1) % len,
            NavigationDirection::Previous => (self.current_index + len - 1) % len,
        };
        self.current_index
    }

    /// Drops the current item without touching the filesystem.
    ///
    /// When the removed item was in the last position the index goes back to
    /// the start; otherwise it stays put, selecting the former next item.
    /// Returns `false` if the list is now empty.
    fn remove_current(&mut self) -> bool {
        self.items.remove(self.current_index);
        if self.current_index >= self.items.len() {
            self.current_index = 0;
        }
        !self.items.is_empty()
    }
}

/// Shuffles `items` in place with the Fisher–Yates algorithm: walking a
/// counter from `len` down to 1, the element at `counter - 1` is swapped with
/// one drawn uniformly from `[0, counter)`.
pub fn shuffle<T, R: rand::Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Advances the playlist in `slot`, returning the new index, or `None` when
/// the window has no playlist.
pub fn advance(slot: &mut Option<Playlist>, direction: NavigationDirection) -> Option<usize> {
    slot.as_mut().map(|playlist| playlist.advance(direction))
}

/// Deletes the current file from disk and from the playlist in `slot`.
///
/// Returns `Ok(None)` when there is no playlist. On failure the playlist is
/// left exactly as it was. When the last item goes away `slot` becomes
/// `None`.
///
/// # Errors
///
/// Returns the [`DeletionError`] reported by the deletion service.
pub fn delete_current(
    slot: &mut Option<Playlist>,
    backend: &impl DeletionBackend,
    permanent: bool,
) -> std::result::Result<Option<DeleteOutcome>, DeletionError> {
    let Some(playlist) = slot.as_mut() else {
        return Ok(None);
    };

    let method = delete_file(backend, playlist.current(), permanent)?;
    tracing::info!(path = %playlist.current().display(), ?method, "media file deleted");

    if playlist.remove_current() {
        Ok(Some(DeleteOutcome::Removed(method)))
    } else {
        *slot = None;
        Ok(Some(DeleteOutcome::Emptied(method)))
    }
}
