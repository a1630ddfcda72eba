// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback types with ZERO external dependencies.
//!
//! - [`playback`]: Per-window playback options, selections and navigation
//!   direction ([`PlaybackOptions`](playback::PlaybackOptions),
//!   [`Selection`](playback::Selection),
//!   [`NavigationDirection`](playback::NavigationDirection))

pub mod playback;

pub use playback::{NavigationDirection, OptionToggle, PlaybackOptions, Selection};
