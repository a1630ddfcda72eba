// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`deletion`]: Filesystem removal primitives (trash, unlink)
//!
//! Traits use plain `std` types so tests can provide scripted fakes.

pub mod deletion;

pub use deletion::DeletionBackend;
