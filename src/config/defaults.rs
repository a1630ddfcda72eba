// SPDX-License-Identifier: MPL-2.0
//! Centralized zoom and window constants.
//!
//! # Categories
//!
//! - **Zoom**: interface scale bounds and step
//! - **Window**: welcome and viewer window sizes

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Interface scale factor restored by "reset zoom".
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Scale increment applied by zoom in / zoom out.
pub const ZOOM_STEP: f32 = 0.1;

/// Smallest interface scale factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Largest interface scale factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Fixed size of a window waiting for a selection.
pub const WELCOME_WINDOW_SIZE: (f32, f32) = (500.0, 200.0);

/// Size a window grows to when it starts showing media.
pub const VIEWER_WINDOW_SIZE: (f32, f32) = (890.0, 510.0);

/// Size of the about window.
pub const ABOUT_WINDOW_SIZE: (f32, f32) = (440.0, 170.0);
