// SPDX-License-Identifier: MPL-2.0
//! Deletion service: move to trash, falling back to a permanent unlink.

use crate::application::port::DeletionBackend;
use crate::error::DeletionError;
use std::path::Path;

/// How a file was actually removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionMethod {
    Trashed,
    Unlinked,
}

/// Deletes `path` with the given backend.
///
/// With `permanent` set, only an unlink is attempted. Otherwise the file is
/// moved to the trash, and any trash failure triggers an unlink. An error is
/// returned only when every attempted mechanism failed.
///
/// # Errors
///
/// Returns a [`DeletionError`] carrying the cause of each failed attempt.
pub fn delete_file(
    backend: &impl DeletionBackend,
    path: &Path,
    permanent: bool,
) -> Result<DeletionMethod, DeletionError> {
    let trash_failure = if permanent {
        None
    } else {
        match backend.trash(path) {
            Ok(()) => return Ok(DeletionMethod::Trashed),
            Err(cause) => {
                tracing::warn!(path = %path.display(), %cause, "move to trash failed, deleting permanently");
                Some(cause)
            }
        }
    };

    match backend.unlink(path) {
        Ok(()) => Ok(DeletionMethod::Unlinked),
        Err(err) => Err(DeletionError {
            path: path.to_path_buf(),
            trash: trash_failure,
            unlink: err.to_string(),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Scripted backend recording every call it receives.
    #[derive(Default)]
    pub(crate) struct FakeBackend {
        pub trash_fails: bool,
        pub unlink_fails: bool,
        pub calls: RefCell<Vec<(&'static str, PathBuf)>>,
    }

    impl DeletionBackend for FakeBackend {
        fn trash(&self, path: &Path) -> Result<(), String> {
            self.calls.borrow_mut().push(("trash", path.to_path_buf()));
            if self.trash_fails {
                Err("trash unavailable".into())
            } else {
                Ok(())
            }
        }

        fn unlink(&self, path: &Path) -> std::io::Result<()> {
            self.calls.borrow_mut().push(("unlink", path.to_path_buf()));
            if self.unlink_fails {
                Err(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "permission denied",
                ))
            } else {
                Ok(())
            }
        }
    }

    impl FakeBackend {
        pub(crate) fn call_names(&self) -> Vec<&'static str> {
            self.calls.borrow().iter().map(|(name, _)| *name).collect()
        }
    }

    #[test]
    fn trash_success_skips_unlink() {
        let backend = FakeBackend::default();
        let result = delete_file(&backend, Path::new("a.png"), false);
        assert_eq!(result, Ok(DeletionMethod::Trashed));
        assert_eq!(backend.call_names(), vec!["trash"]);
    }

    #[test]
    fn trash_failure_falls_back_to_unlink() {
        let backend = FakeBackend {
            trash_fails: true,
            ..FakeBackend::default()
        };
        let result = delete_file(&backend, Path::new("a.png"), false);
        assert_eq!(result, Ok(DeletionMethod::Unlinked));
        assert_eq!(backend.call_names(), vec!["trash", "unlink"]);
    }

    #[test]
    fn failure_is_reported_only_when_both_mechanisms_fail() {
        let backend = FakeBackend {
            trash_fails: true,
            unlink_fails: true,
            ..FakeBackend::default()
        };
        let err = delete_file(&backend, Path::new("a.png"), false).expect_err("should fail");
        assert_eq!(err.trash.as_deref(), Some("trash unavailable"));
        assert!(err.unlink.contains("permission denied"));
        assert_eq!(backend.call_names(), vec!["trash", "unlink"]);
    }

    #[test]
    fn permanent_mode_never_touches_the_trash() {
        let backend = FakeBackend::default();
        let result = delete_file(&backend, Path::new("a.png"), true);
        assert_eq!(result, Ok(DeletionMethod::Unlinked));
        assert_eq!(backend.call_names(), vec!["unlink"]);
    }

    #[test]
    fn permanent_failure_has_no_trash_cause() {
        let backend = FakeBackend {
            unlink_fails: true,
            ..FakeBackend::default()
        };
        let err = delete_file(&backend, Path::new("a.png"), true).expect_err("should fail");
        assert!(err.trash.is_none());
    }
}
