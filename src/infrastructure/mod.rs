// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations wrapping external dependencies:
//!
//! - [`dialogs`]: Native file selectors and modal notices via `rfd`
//! - [`ffmpeg`]: Clip frame reading via `FFmpeg`
//! - [`trash`]: [`DeletionBackend`] over the platform trash and `std::fs`
//!
//! [`DeletionBackend`]: crate::application::port::DeletionBackend

pub mod dialogs;
pub mod ffmpeg;
pub mod trash;

pub use ffmpeg::ClipReader;
pub use trash::SystemDeletion;
