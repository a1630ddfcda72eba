// SPDX-License-Identifier: MPL-2.0
//! Looping, muted playback for clips and animated images.
//!
//! Frames are decoded on a blocking thread and delivered to the UI through an
//! iced subscription.

mod animation;
mod decoder;
pub mod subscription;

pub use animation::AnimationFrames;
pub use decoder::{DecodedFrame, DecoderEvent, FrameSource, LoopingDecoder};
pub use subscription::{media_playback, PlaybackEvent, PlaybackKey, PlaybackKind, PlaybackMessage};
