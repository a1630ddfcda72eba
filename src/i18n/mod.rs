// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent resources embedded at build time from
//! `assets/i18n/<locale>.ftl`. The active locale is picked from the command
//! line, then the config file, then the operating system, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
