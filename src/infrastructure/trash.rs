// SPDX-License-Identifier: MPL-2.0
//! Filesystem implementation of the deletion port.

use crate::application::port::DeletionBackend;
use std::path::Path;

/// Deletes through the desktop trash (`trash` crate) or `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDeletion;

impl DeletionBackend for SystemDeletion {
    fn trash(&self, path: &Path) -> Result<(), String> {
        trash::delete(path).map_err(|err| err.to_string())
    }

    fn unlink(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::delete_file;
    use tempfile::tempdir;

    #[test]
    fn unlink_removes_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gone.png");
        std::fs::write(&path, b"data").expect("failed to write");

        SystemDeletion.unlink(&path).expect("unlink should succeed");

        assert!(!path.exists());
    }

    #[test]
    fn permanent_delete_of_missing_file_reports_cause() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.png");

        let err = delete_file(&SystemDeletion, &path, true).expect_err("should fail");

        assert!(err.trash.is_none());
        assert!(!err.unlink.is_empty());
    }

    #[test]
    fn trash_mode_removes_file_from_its_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("to-trash.jpg");
        std::fs::write(&path, b"data").expect("failed to write");

        // Either the trash accepts it or the unlink fallback does.
        delete_file(&SystemDeletion, &path, false).expect("one mechanism should succeed");

        assert!(!path.exists());
    }
}
