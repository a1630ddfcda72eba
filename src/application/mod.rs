// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`deletion`]: Trash-with-fallback deletion service
//! - [`playlist`]: Playlist controller (discovery, ordering, navigation,
//!   removal)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services

pub mod deletion;
pub mod playlist;
pub mod port;

pub use deletion::{delete_file, DeletionMethod};
pub use playlist::{DeleteOutcome, Playlist};
