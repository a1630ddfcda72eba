// SPDX-License-Identifier: MPL-2.0
//! Views for viewer windows and the about window.

pub mod about;
pub mod design_tokens;
pub mod menu;
pub mod viewer;
pub mod welcome;
