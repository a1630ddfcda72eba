// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The selected path could not be enumerated.
    Discovery(String),
}

/// Both removal mechanisms failed for a file.
///
/// `trash` is `None` when trashing was never attempted (permanent mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionError {
    pub path: PathBuf,
    pub trash: Option<String>,
    pub unlink: String,
}

impl fmt::Display for DeletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trash {
            Some(trash) => write!(
                f,
                "{}: move to trash failed ({}), delete failed ({})",
                self.path.display(),
                trash,
                self.unlink
            ),
            None => write!(f, "{}: {}", self.path.display(), self.unlink),
        }
    }
}

impl std::error::Error for DeletionError {}

/// Failures raised while decoding a clip or an animation for display.
#[derive(Debug, Clone)]
pub enum VideoError {
    /// File exists but contains no video stream
    NoVideoStream,

    /// Decoding failed during playback
    DecodingFailed(String),

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),
}

impl VideoError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::NoVideoStream => "error-video-no-stream",
            VideoError::DecodingFailed(_) => "error-video-decoding",
            VideoError::IoError(_) => "error-video-io",
        }
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            VideoError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Discovery(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
