// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding playable media files.
//!
//! Scanning is non-recursive and keeps the order in which the operating
//! system enumerates directory entries; nothing is sorted here.

use crate::domain::Selection;
use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// Collects the supported media files designated by a selection.
///
/// - For a directory, its immediate children that are files with a supported
///   extension, in enumeration order.
/// - For a single file, that file if its extension is supported.
///
/// An empty vector means nothing playable was found; it is not an error.
///
/// # Errors
///
/// Returns [`Error::Discovery`] when the selected path cannot be read.
pub fn scan_selection(selection: &Selection) -> Result<Vec<PathBuf>> {
    match selection {
        Selection::Directory(directory) => scan_directory(directory),
        Selection::File(file) => scan_file(file),
    }
}

/// Lists the supported media files directly inside `directory`.
///
/// # Errors
///
/// Returns [`Error::Discovery`] if the directory or one of its entries
/// cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let directory = absolute(directory)?;
    let entries = std::fs::read_dir(&directory).map_err(|err| discovery_error(&directory, &err))?;

    let mut media_files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| discovery_error(&directory, &err))?;
        let path = entry.path();

        if path.is_file() && media::is_supported_media(&path) {
            media_files.push(path);
        }
    }

    Ok(media_files)
}

/// Wraps a single file into a one-element list if it is supported.
///
/// # Errors
///
/// Returns [`Error::Discovery`] if the file does not exist or its metadata
/// cannot be read.
pub fn scan_file(file: &Path) -> Result<Vec<PathBuf>> {
    let file = absolute(file)?;
    std::fs::metadata(&file).map_err(|err| discovery_error(&file, &err))?;

    if media::is_supported_media(&file) {
        Ok(vec![file])
    } else {
        Ok(Vec::new())
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|err| discovery_error(path, &err))
}

fn discovery_error(path: &Path, err: &std::io::Error) -> Error {
    Error::Discovery(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake media data")
            .expect("failed to write test file");
        path
    }

    fn enumeration_order(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .expect("failed to read dir")
            .map(|entry| entry.expect("bad entry").path())
            .collect()
    }

    #[test]
    fn scan_directory_filters_and_keeps_enumeration_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.png");
        create_test_file(temp_dir.path(), "b.txt");
        create_test_file(temp_dir.path(), "c.jpg");
        create_test_file(temp_dir.path(), "D.JPG");

        let list = scan_directory(temp_dir.path()).expect("failed to scan directory");

        let expected: Vec<PathBuf> = enumeration_order(temp_dir.path())
            .into_iter()
            .filter(|p| p.extension().is_some_and(|e| e != "txt"))
            .collect();
        assert_eq!(list, expected);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn scan_directory_finds_both_images_and_videos() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.webm", "b.webp", "c.mp4", "d.jpeg", "e.gif", "f.bmp", "g.mkv"] {
            create_test_file(temp_dir.path(), name);
        }

        let list = scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(list.len(), 6);
    }

    #[test]
    fn scan_directory_is_not_recursive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("nested.png");
        fs::create_dir(&nested).expect("failed to create nested dir");
        create_test_file(&nested, "inner.png");
        create_test_file(temp_dir.path(), "top.png");

        let list = scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(list, vec![temp_dir.path().join("top.png")]);
    }

    #[test]
    fn scan_directory_returns_empty_for_no_media() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "readme.txt");

        let list = scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert!(list.is_empty());
    }

    #[test]
    fn scan_missing_directory_is_a_discovery_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone");

        let err = scan_directory(&missing).expect_err("scan should fail");

        assert!(matches!(err, Error::Discovery(message) if message.contains("gone")));
    }

    #[test]
    fn scan_file_accepts_supported_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let clip = create_test_file(temp_dir.path(), "clip.MP4");

        let list = scan_selection(&Selection::File(clip.clone())).expect("scan failed");

        assert_eq!(list, vec![clip]);
    }

    #[test]
    fn scan_file_ignores_unsupported_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let notes = create_test_file(temp_dir.path(), "notes.txt");

        let list = scan_selection(&Selection::File(notes)).expect("scan failed");

        assert!(list.is_empty());
    }

    #[test]
    fn scan_missing_file_is_a_discovery_error() {
        let result = scan_file(Path::new("/nonexistent/dir/photo.png"));
        assert!(matches!(result, Err(Error::Discovery(_))));
    }
}
