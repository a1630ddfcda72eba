// SPDX-License-Identifier: MPL-2.0
//! Where SMP keeps its settings.
//!
//! The first of these that yields a directory wins:
//!
//! 1. a directory passed to [`config_dir_with_override`] (tests use this)
//! 2. `--config-dir` on the command line, recorded by [`init_cli_overrides`]
//! 3. a non-empty `SMP_CONFIG_DIR` environment variable
//! 4. the platform config directory from `dirs`, plus `SMP`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "SMP";

/// Environment variable naming a settings directory.
pub const ENV_CONFIG_DIR: &str = "SMP_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

/// Settings directory, e.g. `~/.config/SMP/` on Linux or
/// `~/Library/Application Support/SMP/` on macOS.
///
/// `None` when the platform has no notion of a config directory.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

#[must_use]
pub fn config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| {
            std::env::var(ENV_CONFIG_DIR)
                .ok()
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_NAME)))
}
