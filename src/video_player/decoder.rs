// SPDX-License-Identifier: MPL-2.0
//! Looping frame decoder running on a blocking thread.
//!
//! Any [`FrameSource`] (an `FFmpeg` clip or a decoded GIF/WebP animation) is
//! driven from the start to the end, paced by its presentation timestamps,
//! then rewound and played again until the receiving side is dropped.

use crate::error::VideoError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Display interval assumed when a source gives no usable timing.
const FALLBACK_FRAME_INTERVAL_SECS: f64 = 0.1;

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// A rewindable sequence of frames.
pub trait FrameSource {
    /// Returns the next frame, or `Ok(None)` once the sequence is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be produced.
    fn next_frame(&mut self) -> Result<Option<DecodedFrame>, VideoError>;

    /// Goes back to the first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot seek.
    fn rewind(&mut self) -> Result<(), VideoError>;

    /// Total length of one pass, measured from the first frame's timestamp.
    ///
    /// `None` lets the decoder estimate it from the last frame interval.
    fn loop_duration(&self) -> Option<f64> {
        None
    }
}

impl FrameSource for crate::infrastructure::ClipReader {
    fn next_frame(&mut self) -> Result<Option<DecodedFrame>, VideoError> {
        crate::infrastructure::ClipReader::next_frame(self)
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        crate::infrastructure::ClipReader::rewind(self)
    }
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// A new frame is due for display.
    FrameReady(DecodedFrame),

    /// Playback stopped for good.
    Error(VideoError),
}

/// Handle on a looping decoder thread.
///
/// Dropping the handle stops the thread at its next frame.
#[derive(Debug)]
pub struct LoopingDecoder {
    /// Bounded so the thread never runs ahead of the UI.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl LoopingDecoder {
    /// Spawns a blocking task that opens a source with `open` and loops it.
    ///
    /// The source is created on the decoding thread itself, so it does not
    /// need to be `Send`.
    pub fn spawn<S, F>(open: F) -> Self
    where
        S: FrameSource,
        F: FnOnce() -> Result<S, VideoError> + Send + 'static,
    {
        let (event_tx, event_rx) = mpsc::channel(2);

        tokio::task::spawn_blocking(move || match open() {
            Ok(mut source) => {
                if let Err(err) = run_loop(&mut source, &event_tx) {
                    tracing::warn!(%err, "playback stopped");
                    let _ = event_tx.blocking_send(DecoderEvent::Error(err));
                }
            }
            Err(err) => {
                tracing::warn!(%err, "could not open media for playback");
                let _ = event_tx.blocking_send(DecoderEvent::Error(err));
            }
        });

        Self { event_rx }
    }

    /// Receives the next event from the decoder.
    ///
    /// Returns `None` if the decoder task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

/// Plays `source` forever. Returns `Ok(())` once the receiver is gone.
fn run_loop<S: FrameSource>(
    source: &mut S,
    event_tx: &mpsc::Sender<DecoderEvent>,
) -> Result<(), VideoError> {
    let mut pass_start = Instant::now();

    loop {
        let mut first_pts: Option<f64> = None;
        let mut last_pts = 0.0;
        let mut last_interval = FALLBACK_FRAME_INTERVAL_SECS;

        while let Some(frame) = source.next_frame()? {
            let first = *first_pts.get_or_insert(frame.pts_secs);
            let offset = (frame.pts_secs - first).max(0.0);
            if offset > last_pts {
                last_interval = offset - last_pts;
            }
            last_pts = offset;

            sleep_until(pass_start + Duration::from_secs_f64(offset));

            if event_tx.blocking_send(DecoderEvent::FrameReady(frame)).is_err() {
                return Ok(());
            }
        }

        if first_pts.is_none() {
            return Err(VideoError::DecodingFailed("no frames to display".into()));
        }

        let pass_length = source
            .loop_duration()
            .unwrap_or(last_pts + last_interval);
        pass_start += Duration::from_secs_f64(pass_length.max(0.0));
        sleep_until(pass_start);
        if event_tx.is_closed() {
            return Ok(());
        }

        source.rewind()?;
        // A slow consumer must not make the next pass try to catch up.
        pass_start = pass_start.max(Instant::now());
    }
}

fn sleep_until(target: Instant) {
    let now = Instant::now();
    if target > now {
        std::thread::sleep(target - now);
    }
}
