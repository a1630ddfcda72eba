// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter used for clip playback.
//!
//! [`ClipReader`] is a synchronous, video-only frame reader. Audio streams are
//! ignored entirely: clips always play muted. The async looping wrapper lives
//! in [`crate::video_player`].

use std::path::Path;
use std::sync::{Arc, Once};

use crate::error::VideoError;
use crate::video_player::DecodedFrame;

static FFMPEG_INIT: Once = Once::new();

/// Initializes `FFmpeg` once per process and silences its warning output.
///
/// # Errors
///
/// Returns an error if `FFmpeg` fails to initialize.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(VideoError::DecodingFailed(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Sequential reader over the best video stream of a file.
pub struct ClipReader {
    input_context: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    video_stream_index: usize,
    time_base_f64: f64,
    width: u32,
    height: u32,
}

impl ClipReader {
    /// Opens `path` and prepares an RGBA scaler for its video stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, has no video stream or
    /// uses a codec the local `FFmpeg` cannot decode.
    pub fn open(path: &Path) -> Result<Self, VideoError> {
        init_ffmpeg()?;

        let input_context = ffmpeg_next::format::input(&path)
            .map_err(|e| VideoError::IoError(format!("Failed to open video: {e}")))?;

        let input = input_context
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;
        let video_stream_index = input.index();
        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| VideoError::DecodingFailed(format!("codec context: {e}")))?;
        let decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| VideoError::DecodingFailed(format!("video decoder: {e}")))?;

        let width = decoder.width();
        let height = decoder.height();
        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to create scaler: {e}")))?;

        Ok(Self {
            input_context,
            decoder,
            scaler,
            video_stream_index,
            time_base_f64,
            width,
            height,
        })
    }

    /// Decodes the next frame, or `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns an error if a packet or frame cannot be decoded or converted.
    pub fn next_frame(&mut self) -> Result<Option<DecodedFrame>, VideoError> {
        let mut decoded = ffmpeg_next::frame::Video::empty();

        loop {
            if self.decoder.receive_frame(&mut decoded).is_ok() {
                return self.convert(&decoded).map(Some);
            }

            let Some((stream, packet)) = self.input_context.packets().next() else {
                // Drain frames still buffered inside the decoder.
                let _ = self.decoder.send_eof();
                return if self.decoder.receive_frame(&mut decoded).is_ok() {
                    self.convert(&decoded).map(Some)
                } else {
                    Ok(None)
                };
            };

            if stream.index() != self.video_stream_index {
                continue;
            }
            self.decoder
                .send_packet(&packet)
                .map_err(|e| VideoError::DecodingFailed(format!("Packet send failed: {e}")))?;
        }
    }

    /// Seeks back to the first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the container refuses the seek.
    pub fn rewind(&mut self) -> Result<(), VideoError> {
        self.input_context
            .seek(0, ..0)
            .map_err(|e| VideoError::DecodingFailed(format!("Seek failed: {e}")))?;
        self.decoder.flush();
        Ok(())
    }

    fn convert(&mut self, decoded: &ffmpeg_next::frame::Video) -> Result<DecodedFrame, VideoError> {
        let mut rgb_frame = ffmpeg_next::frame::Video::empty();
        self.scaler
            .run(decoded, &mut rgb_frame)
            .map_err(|e| VideoError::DecodingFailed(format!("Scaling failed: {e}")))?;

        #[allow(clippy::cast_precision_loss)]
        let pts_secs = decoded
            .timestamp()
            .map_or(0.0, |pts| pts as f64 * self.time_base_f64);

        Ok(DecodedFrame {
            rgba_data: Arc::new(extract_rgba_data(&rgb_frame)),
            width: self.width,
            height: self.height,
            pts_secs,
        })
    }
}

/// Extracts RGBA data from a decoded frame, handling stride correctly.
#[allow(clippy::cast_possible_truncation)] // stride is always < u32::MAX for video frames
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width();
    let height = frame.height();
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = (y * stride as u32) as usize;
        let row_end = row_start + (width * 4) as usize;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}
