// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{NavigationDirection, Selection};
use crate::ui::menu::{self, MenuCommand};
use crate::ui::{about, viewer, welcome};
use crate::video_player::PlaybackEvent;
use iced::{keyboard, window, Size};

/// Top-level messages consumed by `App::update`. Component messages are
/// tagged with the window they came from.
#[derive(Debug, Clone)]
pub enum Message {
    Menu(window::Id, menu::Message),
    Welcome(window::Id, welcome::Message),
    Viewer(window::Id, viewer::Message),
    About(window::Id, about::Message),
    /// A key press nothing else consumed.
    KeyPressed {
        window: window::Id,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    },
    Command(window::Id, MenuCommand),
    Navigate(window::Id, NavigationDirection),
    DeleteRequested(window::Id),
    /// Answer from the delete confirmation dialog.
    DeleteConfirmed {
        window: window::Id,
        path: std::path::PathBuf,
        confirmed: bool,
    },
    /// Result from a file or directory dialog; `None` when cancelled.
    SelectionMade {
        window: window::Id,
        selection: Option<Selection>,
    },
    NoticeDismissed,
    Playback(PlaybackEvent),
    WindowOpened(window::Id),
    WindowFocused(window::Id),
    WindowResized(window::Id, Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional file or directory to open in the first window. Kept as a
    /// path so names that are not valid UTF-8 still open.
    pub file_path: Option<std::path::PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SMP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
