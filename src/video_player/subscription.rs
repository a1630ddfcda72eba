// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for looping playback.
//!
//! The subscription is identified by the window, the window's playback
//! generation and the file. Navigating changes the generation, which makes
//! iced drop the old stream, and with it the decoder thread.

use super::animation::AnimationFrames;
use super::decoder::{DecodedFrame, DecoderEvent, LoopingDecoder};
use crate::error::VideoError;
use crate::infrastructure::ClipReader;
use iced::futures::{SinkExt, Stream};
use iced::{stream, window};
use std::path::PathBuf;

/// How a file is turned into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackKind {
    /// `.mp4` / `.webm` through `FFmpeg`, muted.
    Clip,
    /// Multi-frame GIF or WebP.
    Animation,
}

/// Identity of one playback session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackKey {
    pub window: window::Id,
    pub generation: u64,
    pub path: PathBuf,
    pub kind: PlaybackKind,
}

/// Messages emitted by the playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// A new frame is ready for display.
    Frame(DecodedFrame),

    /// Playback stopped; the error replaces the frame on screen.
    Error(VideoError),
}

/// A [`PlaybackMessage`] tagged with the session it belongs to.
#[derive(Debug, Clone)]
pub struct PlaybackEvent {
    pub window: window::Id,
    pub generation: u64,
    pub message: PlaybackMessage,
}

/// Creates the playback subscription for one window.
pub fn media_playback(key: PlaybackKey) -> iced::Subscription<PlaybackEvent> {
    iced::Subscription::run_with(key, playback_stream)
}

fn playback_stream(key: &PlaybackKey) -> impl Stream<Item = PlaybackEvent> {
    let key = key.clone();

    stream::channel(4, move |mut output| async move {
        tracing::debug!(path = %key.path.display(), kind = ?key.kind, "playback started");

        let path = key.path.clone();
        let mut decoder = match key.kind {
            PlaybackKind::Clip => LoopingDecoder::spawn(move || ClipReader::open(&path)),
            PlaybackKind::Animation => LoopingDecoder::spawn(move || AnimationFrames::open(&path)),
        };

        while let Some(event) = decoder.recv_event().await {
            let message = match event {
                DecoderEvent::FrameReady(frame) => PlaybackMessage::Frame(frame),
                DecoderEvent::Error(err) => PlaybackMessage::Error(err),
            };
            let tagged = PlaybackEvent {
                window: key.window,
                generation: key.generation,
                message,
            };
            if output.send(tagged).await.is_err() {
                break;
            }
        }
    })
}
