// SPDX-License-Identifier: MPL-2.0
//! `smp` is a minimal multi-window media player built with the Iced GUI
//! framework.
//!
//! Each window plays one list of images, animations and muted looping clips,
//! gathered from a file or a directory. Items can be stepped through in
//! order or shuffled, and deleted to the trash or permanently.

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
pub mod video_player;
