// SPDX-License-Identifier: MPL-2.0
//! Supported media formats and lightweight type detection.
//!
//! Detection is purely name based: a file is playable when its name ends with
//! one of [`extensions::SUPPORTED_EXTENSIONS`], compared case-insensitively.
//! Whether it is shown as a still image, an animation or a video clip is then
//! decided by [`detect_media_type`] and [`is_animated`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use image_rs::AnimationDecoder;

/// Represents different types of media formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

/// Supported media extensions
pub mod extensions {
    /// Every extension the player accepts, in the order shown to users.
    pub const SUPPORTED_EXTENSIONS: &[&str] = &[
        ".webm", ".webp", ".mp4", ".jpg", ".jpeg", ".png", ".gif", ".bmp",
    ];

    /// Extensions rendered as looping clips through FFmpeg.
    pub const VIDEO_EXTENSIONS: &[&str] = &[".webm", ".mp4"];

    /// Extensions that may carry more than one frame.
    pub const ANIMATABLE_EXTENSIONS: &[&str] = &[".gif", ".webp"];

    /// Extensions without the leading dot, as file dialog filters expect them.
    #[must_use]
    pub fn dialog_filter_extensions() -> Vec<&'static str> {
        SUPPORTED_EXTENSIONS
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect()
    }

    /// The supported list joined for display in notices.
    #[must_use]
    pub fn display_list() -> String {
        SUPPORTED_EXTENSIONS.join(", ")
    }
}

fn lowercase_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
}

fn name_ends_with_any(path: &Path, candidates: &[&str]) -> bool {
    lowercase_name(path).is_some_and(|name| candidates.iter().any(|ext| name.ends_with(ext)))
}

/// Checks if a file name carries one of the supported extensions.
#[must_use]
pub fn is_supported_media(path: &Path) -> bool {
    name_ends_with_any(path, extensions::SUPPORTED_EXTENSIONS)
}

/// Detects the media type from the file name, `None` for unsupported files.
#[must_use]
pub fn detect_media_type(path: &Path) -> Option<MediaType> {
    if !is_supported_media(path) {
        return None;
    }
    if name_ends_with_any(path, extensions::VIDEO_EXTENSIONS) {
        Some(MediaType::Video)
    } else {
        Some(MediaType::Image)
    }
}

/// Returns true when the GIF has more than one frame.
fn gif_has_multiple_frames(path: &Path) -> crate::error::Result<bool> {
    let reader = BufReader::new(File::open(path)?);
    let decoder = image_rs::codecs::gif::GifDecoder::new(reader)
        .map_err(|e| crate::error::Error::Io(e.to_string()))?;
    Ok(decoder.into_frames().take(2).count() > 1)
}

/// Detects if a WebP file is animated by checking for the ANMF chunk marker.
///
/// Animated WebP files contain "ANMF" (Animation Frame) chunks early in their
/// structure, so the first kilobyte is enough.
fn webp_has_animation_marker(path: &Path) -> crate::error::Result<bool> {
    let mut file = File::open(path)?;
    let mut buffer = vec![0u8; 1024];
    let bytes_read = file.read(&mut buffer)?;
    buffer.truncate(bytes_read);
    Ok(buffer.windows(4).any(|window| window == b"ANMF"))
}

/// Detects if a GIF or WebP file is animated (has multiple frames).
///
/// Unreadable files are reported as static; the image widget will surface
/// the decoding problem on its own.
#[must_use]
pub fn is_animated(path: &Path) -> bool {
    let Some(name) = lowercase_name(path) else {
        return false;
    };
    let result = if name.ends_with(".gif") {
        gif_has_multiple_frames(path)
    } else if name.ends_with(".webp") {
        webp_has_animation_marker(path)
    } else {
        Ok(false)
    };
    result.unwrap_or_else(|err| {
        tracing::debug!(path = %path.display(), %err, "could not read animation frames");
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn supported_media_matches_every_listed_extension() {
        for ext in extensions::SUPPORTED_EXTENSIONS {
            let name = format!("clip{ext}");
            assert!(is_supported_media(Path::new(&name)), "{name}");
        }
    }

    #[test]
    fn supported_media_is_case_insensitive() {
        assert!(is_supported_media(Path::new("D.JPG")));
        assert!(is_supported_media(Path::new("movie.WebM")));
        assert!(is_supported_media(Path::new("/some/dir/photo.JpEg")));
    }

    #[test]
    fn unsupported_formats_are_rejected() {
        assert!(!is_supported_media(Path::new("b.txt")));
        assert!(!is_supported_media(Path::new("movie.mkv")));
        assert!(!is_supported_media(Path::new("image.tiff")));
        assert!(!is_supported_media(Path::new("png")));
    }

    #[test]
    fn detect_media_type_splits_videos_from_images() {
        assert_eq!(detect_media_type(Path::new("a.mp4")), Some(MediaType::Video));
        assert_eq!(detect_media_type(Path::new("a.WEBM")), Some(MediaType::Video));
        assert_eq!(detect_media_type(Path::new("a.webp")), Some(MediaType::Image));
        assert_eq!(detect_media_type(Path::new("a.gif")), Some(MediaType::Image));
        assert_eq!(detect_media_type(Path::new("a.doc")), None);
    }

    #[test]
    fn dialog_filters_drop_leading_dot() {
        let filters = extensions::dialog_filter_extensions();
        assert_eq!(filters.len(), extensions::SUPPORTED_EXTENSIONS.len());
        assert!(filters.contains(&"jpeg"));
        assert!(filters.iter().all(|ext| !ext.starts_with('.')));
    }

    #[test]
    fn display_list_keeps_declared_order() {
        assert_eq!(
            extensions::display_list(),
            ".webm, .webp, .mp4, .jpg, .jpeg, .png, .gif, .bmp"
        );
    }

    #[test]
    fn webp_with_anmf_chunk_is_animated() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("anim.webp");
        let mut file = File::create(&path).expect("failed to create file");
        file.write_all(b"RIFF\0\0\0\0WEBPVP8X\0\0\0\0ANIM\0\0\0\0ANMF")
            .expect("failed to write file");

        assert!(is_animated(&path));
    }

    #[test]
    fn unreadable_or_plain_files_are_not_animated() {
        assert!(!is_animated(Path::new("/nonexistent/file.gif")));
        assert!(!is_animated(Path::new("photo.png")));
    }
}
