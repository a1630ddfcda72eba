// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are routed to `App::update`, and every
//! window that is playing a clip or an animation gets its own playback
//! subscription.

use super::Message;
use crate::domain::NavigationDirection;
use crate::ui::menu::MenuCommand;
use crate::video_player::{self, PlaybackKey};
use iced::keyboard::{key::Named, Key, Modifiers};
use iced::{event, window, Subscription};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Command(MenuCommand),
    Navigate(NavigationDirection),
    DeleteCurrent,
}

/// Maps a key press to a shortcut.
///
/// Accelerators use the platform command key (Ctrl, or Cmd on macOS). Viewer
/// keys only fire without modifiers.
#[must_use]
pub fn resolve_shortcut(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    if let Key::Named(Named::F11) = key {
        return Some(Shortcut::Command(MenuCommand::ToggleFullscreen));
    }

    if modifiers.command() {
        let Key::Character(c) = key else {
            return None;
        };
        let command = match c.to_lowercase().as_str() {
            "o" if modifiers.shift() => MenuCommand::OpenDirectory,
            "o" => MenuCommand::OpenFile,
            "n" => MenuCommand::NewWindow,
            "w" => MenuCommand::CloseWindow,
            "q" => MenuCommand::Quit,
            "r" => MenuCommand::Reload,
            "0" => MenuCommand::ResetZoom,
            "=" | "+" => MenuCommand::ZoomIn,
            "-" => MenuCommand::ZoomOut,
            _ => return None,
        };
        return Some(Shortcut::Command(command));
    }

    if modifiers.alt() || modifiers.control() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Navigate(NavigationDirection::Previous)),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Navigate(NavigationDirection::Next)),
        Key::Named(Named::Delete | Named::Backspace) => Some(Shortcut::DeleteCurrent),
        Key::Character(c) => match c.as_str() {
            "j" => Some(Shortcut::Navigate(NavigationDirection::Previous)),
            "k" => Some(Shortcut::Navigate(NavigationDirection::Next)),
            "x" => Some(Shortcut::DeleteCurrent),
            _ => None,
        },
        _ => None,
    }
}

/// Routes window lifecycle events and unhandled key presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocused(window_id)),
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(window_id, size))
        }
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => Some(Message::KeyPressed {
                    window: window_id,
                    key,
                    modifiers,
                }),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// One playback subscription per window that needs frames.
pub fn create_playback_subscription(
    keys: impl IntoIterator<Item = PlaybackKey>,
) -> Subscription<Message> {
    Subscription::batch(
        keys.into_iter()
            .map(|key| video_player::media_playback(key).map(Message::Playback)),
    )
}
