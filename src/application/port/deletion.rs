// SPDX-License-Identifier: MPL-2.0
//! Deletion port definition.
//!
//! The [`DeletionBackend`] trait exposes the two raw removal mechanisms.
//! Policy (which one to try first, when to fall back) lives in
//! [`crate::application::deletion`], so it can be exercised without touching
//! the real trash can.

use std::path::Path;

/// Raw filesystem removal primitives.
pub trait DeletionBackend {
    /// Moves `path` to the platform trash.
    ///
    /// # Errors
    ///
    /// Returns a human-readable cause when the trash is unavailable or the
    /// move fails.
    fn trash(&self, path: &Path) -> Result<(), String>;

    /// Removes `path` permanently.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn unlink(&self, path: &Path) -> std::io::Result<()>;
}
