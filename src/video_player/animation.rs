// SPDX-License-Identifier: MPL-2.0
//! Animated GIF and WebP frames decoded with `image`.
//!
//! The whole animation is decoded up front; these files are small next to a
//! clip and looping them then costs nothing but a cursor reset.

use super::decoder::{DecodedFrame, FrameSource};
use crate::error::VideoError;
use image_rs::codecs::gif::GifDecoder;
use image_rs::codecs::webp::WebPDecoder;
use image_rs::{AnimationDecoder, Frame};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Delays at or below this are treated as unset, as browsers do.
const MIN_FRAME_DELAY_MS: f64 = 10.0;

/// Delay used for frames with an unset delay.
const DEFAULT_FRAME_DELAY_MS: f64 = 100.0;

/// Fully decoded animation.
#[derive(Debug)]
pub struct AnimationFrames {
    frames: Vec<DecodedFrame>,
    total_secs: f64,
    cursor: usize,
}

impl AnimationFrames {
    /// Decodes every frame of a GIF or WebP file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or if its
    /// extension is neither `.gif` nor `.webp`.
    pub fn open(path: &Path) -> Result<Self, VideoError> {
        let file = File::open(path).map_err(|e| VideoError::IoError(e.to_string()))?;
        let reader = BufReader::new(file);
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());

        let frames = match extension.as_deref() {
            Some("gif") => GifDecoder::new(reader)
                .and_then(|decoder| decoder.into_frames().collect_frames()),
            Some("webp") => WebPDecoder::new(reader)
                .and_then(|decoder| decoder.into_frames().collect_frames()),
            _ => {
                return Err(VideoError::DecodingFailed(format!(
                    "not an animation: {}",
                    path.display()
                )))
            }
        }
        .map_err(|e| VideoError::DecodingFailed(e.to_string()))?;

        Ok(Self::from_frames(frames))
    }

    fn from_frames(frames: Vec<Frame>) -> Self {
        let mut pts_secs = 0.0;
        let frames = frames
            .into_iter()
            .map(|frame| {
                let delay_secs = frame_delay_ms(&frame) / 1000.0;
                let buffer = frame.into_buffer();
                let decoded = DecodedFrame {
                    width: buffer.width(),
                    height: buffer.height(),
                    rgba_data: Arc::new(buffer.into_raw()),
                    pts_secs,
                };
                pts_secs += delay_secs;
                decoded
            })
            .collect();

        Self {
            frames,
            total_secs: pts_secs,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn frame_delay_ms(frame: &Frame) -> f64 {
    let (numer, denom) = frame.delay().numer_denom_ms();
    if denom == 0 {
        return DEFAULT_FRAME_DELAY_MS;
    }
    let delay = f64::from(numer) / f64::from(denom);
    if delay <= MIN_FRAME_DELAY_MS {
        DEFAULT_FRAME_DELAY_MS
    } else {
        delay
    }
}

impl FrameSource for AnimationFrames {
    fn next_frame(&mut self) -> Result<Option<DecodedFrame>, VideoError> {
        let frame = self.frames.get(self.cursor).cloned();
        if frame.is_some() {
            self.cursor += 1;
        }
        Ok(frame)
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        self.cursor = 0;
        Ok(())
    }

    fn loop_duration(&self) -> Option<f64> {
        Some(self.total_secs)
    }
}
