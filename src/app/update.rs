// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Populating a playlist, navigating and deleting all run synchronously
//! inside `update`, so each one completes before the next message is
//! handled. Only dialogs run asynchronously; their answers come back as
//! messages.

use super::window::ViewerWindow;
use super::{about_window_settings, subscription, Message};
use crate::application::playlist;
use crate::application::{DeleteOutcome, Playlist};
use crate::config::VIEWER_WINDOW_SIZE;
use crate::domain::{NavigationDirection, OptionToggle, PlaybackOptions, Selection};
use crate::i18n::fluent::I18n;
use crate::infrastructure::dialogs::{self, PickerLabels};
use crate::infrastructure::SystemDeletion;
use crate::media::extensions;
use crate::ui::menu::{self, MenuCommand, MenuState};
use crate::ui::{about, viewer, welcome};
use crate::video_player::PlaybackMessage;
use iced::{window, Size, Task};
use std::collections::{BTreeMap, BTreeSet};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub windows: &'a mut BTreeMap<window::Id, ViewerWindow>,
    pub about_windows: &'a mut BTreeSet<window::Id>,
    pub focused: &'a mut Option<window::Id>,
    pub menu: &'a mut MenuState,
}

/// Main message dispatcher.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Menu(id, message) => handle_menu_message(ctx, id, message),
        Message::Welcome(id, message) => match message {
            welcome::Message::OpenFile => handle_command(ctx, id, MenuCommand::OpenFile),
            welcome::Message::OpenDirectory => {
                handle_command(ctx, id, MenuCommand::OpenDirectory)
            }
        },
        Message::Viewer(id, message) => {
            if let Some(window) = ctx.windows.get_mut(&id) {
                window.hovering = matches!(message, viewer::Message::PointerEntered);
            }
            Task::none()
        }
        Message::About(id, about::Message::Close) => close_window(ctx, id),
        Message::KeyPressed {
            window,
            key,
            modifiers,
        } => match subscription::resolve_shortcut(&key, modifiers) {
            Some(subscription::Shortcut::Command(command)) => handle_command(ctx, window, command),
            Some(subscription::Shortcut::Navigate(direction)) => {
                handle_navigate(ctx, window, direction)
            }
            Some(subscription::Shortcut::DeleteCurrent) => handle_delete_requested(ctx, window),
            None => Task::none(),
        },
        Message::Command(id, command) => handle_command(ctx, id, command),
        Message::Navigate(id, direction) => handle_navigate(ctx, id, direction),
        Message::DeleteRequested(id) => handle_delete_requested(ctx, id),
        Message::DeleteConfirmed {
            window,
            path,
            confirmed,
        } => handle_delete_confirmed(ctx, window, &path, confirmed),
        Message::SelectionMade { window, selection } => match selection {
            Some(selection) => apply_selection(ctx, window, &selection),
            None => {
                tracing::debug!("selection cancelled");
                Task::none()
            }
        },
        Message::NoticeDismissed => Task::none(),
        Message::Playback(event) => {
            if let PlaybackMessage::Error(err) = &event.message {
                tracing::warn!(%err, "playback failed");
            }
            if let Some(window) = ctx.windows.get_mut(&event.window) {
                window.apply_playback(event.generation, event.message);
            }
            Task::none()
        }
        Message::WindowOpened(id) => {
            tracing::debug!(?id, "window opened");
            if ctx.focused.is_none() {
                focus_window(ctx, id);
            }
            Task::none()
        }
        Message::WindowFocused(id) => {
            focus_window(ctx, id);
            Task::none()
        }
        Message::WindowResized(id, size) => {
            if let Some(window) = ctx.windows.get_mut(&id) {
                window.size = size;
            }
            Task::none()
        }
        Message::WindowCloseRequested(id) => close_window(ctx, id),
    }
}

fn handle_menu_message(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    message: menu::Message,
) -> Task<Message> {
    let Some(window) = ctx.windows.get_mut(&id) else {
        return Task::none();
    };
    match message {
        menu::Message::Section(section) => {
            window.open_menu = if window.open_menu == Some(section) {
                None
            } else {
                Some(section)
            };
            Task::none()
        }
        menu::Message::Dismiss => {
            window.open_menu = None;
            Task::none()
        }
        menu::Message::Command(command) => {
            window.open_menu = None;
            handle_command(ctx, id, command)
        }
    }
}

/// Runs a menu command or accelerator against the window it came from.
pub fn handle_command(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    command: MenuCommand,
) -> Task<Message> {
    match command {
        MenuCommand::About => open_about_window(ctx),
        MenuCommand::Quit => iced::exit(),
        MenuCommand::NewWindow => open_viewer_window(ctx).1,
        MenuCommand::CloseWindow => close_window(ctx, id),
        MenuCommand::OpenFile => open_file_dialog(ctx, id),
        MenuCommand::OpenDirectory => open_directory_dialog(ctx, id),
        MenuCommand::Reload => {
            reload_window(ctx, id);
            Task::none()
        }
        MenuCommand::ResetZoom => with_window(ctx, id, ViewerWindow::reset_zoom),
        MenuCommand::ZoomIn => with_window(ctx, id, ViewerWindow::zoom_in),
        MenuCommand::ZoomOut => with_window(ctx, id, ViewerWindow::zoom_out),
        MenuCommand::ToggleFullscreen => toggle_fullscreen(ctx, id),
        MenuCommand::Toggle(toggle) => {
            toggle_option(ctx, id, toggle);
            Task::none()
        }
    }
}

fn with_window(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    apply: impl FnOnce(&mut ViewerWindow),
) -> Task<Message> {
    if let Some(window) = ctx.windows.get_mut(&id) {
        apply(window);
    }
    Task::none()
}

fn focus_window(ctx: &mut UpdateContext<'_>, id: window::Id) {
    if let Some(window) = ctx.windows.get(&id) {
        *ctx.focused = Some(id);
        *ctx.menu = MenuState::project(&window.options);
    }
}

/// Opens a new viewer window in welcome mode with default options.
pub fn open_viewer_window(ctx: &mut UpdateContext<'_>) -> (window::Id, Task<Message>) {
    let (id, open) = window::open(super::welcome_window_settings());
    ctx.windows
        .insert(id, ViewerWindow::new(PlaybackOptions::default()));
    (id, open.map(Message::WindowOpened))
}

fn open_about_window(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(id) = ctx.about_windows.first() {
        return window::gain_focus(*id);
    }
    let (id, open) = window::open(about_window_settings());
    ctx.about_windows.insert(id);
    open.map(Message::WindowOpened)
}

/// Closes a window. Closing the last viewer window quits.
fn close_window(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if ctx.about_windows.remove(&id) {
        return window::close(id);
    }
    if ctx.windows.remove(&id).is_none() {
        return Task::none();
    }
    if ctx.windows.is_empty() {
        tracing::info!("last window closed, exiting");
        return iced::exit();
    }
    if *ctx.focused == Some(id) {
        *ctx.focused = None;
    }
    window::close(id)
}

/// Drops the playlist and restores the default options.
fn reload_window(ctx: &mut UpdateContext<'_>, id: window::Id) {
    let defaults = PlaybackOptions::default();
    if let Some(window) = ctx.windows.get_mut(&id) {
        window.set_playlist(None);
        window.options = defaults;
        window.open_menu = None;
    }
    if *ctx.focused == Some(id) {
        *ctx.menu = MenuState::project(&defaults);
    }
}

fn toggle_fullscreen(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    let Some(window) = ctx.windows.get_mut(&id) else {
        return Task::none();
    };
    window.fullscreen = !window.fullscreen;
    window.open_menu = None;
    let mode = if window.fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(id, mode)
}

/// Flips an option on one window and refreshes the menu. Other windows and
/// later launches are unaffected.
fn toggle_option(ctx: &mut UpdateContext<'_>, id: window::Id, toggle: OptionToggle) {
    let Some(window) = ctx.windows.get_mut(&id) else {
        return;
    };
    window.options.toggle(toggle);
    let options = window.options;
    tracing::debug!(?toggle, value = options.get(toggle), "option toggled");

    *ctx.menu = MenuState::project(&options);
}

// =============================================================================
// Selection
// =============================================================================

fn open_file_dialog(ctx: &UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if !ctx.windows.contains_key(&id) {
        return Task::none();
    }
    let labels = PickerLabels {
        title: ctx.i18n.tr("dialog-open-file-title"),
        filter_name: ctx.i18n.tr("dialog-filter-media"),
    };
    Task::perform(dialogs::select_file(labels), move |path| {
        Message::SelectionMade {
            window: id,
            selection: path.map(Selection::File),
        }
    })
}

fn open_directory_dialog(ctx: &UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if !ctx.windows.contains_key(&id) {
        return Task::none();
    }
    let title = ctx.i18n.tr("dialog-open-directory-title");
    Task::perform(dialogs::select_directory(title), move |path| {
        Message::SelectionMade {
            window: id,
            selection: path.map(Selection::Directory),
        }
    })
}

/// Populates the window from a selection. The current playlist is kept
/// unless the selection produced a new one.
pub fn apply_selection(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    selection: &Selection,
) -> Task<Message> {
    let i18n = ctx.i18n;
    let Some(window) = ctx.windows.get_mut(&id) else {
        return Task::none();
    };

    match Playlist::populate(selection, window.options) {
        Ok(Some(playlist)) => {
            let entering = !window.is_showing_media();
            window.set_playlist(Some(playlist));
            if entering {
                enter_viewer_mode(id, window)
            } else {
                Task::none()
            }
        }
        Ok(None) => {
            tracing::info!(path = %selection.path().display(), "no supported media found");
            let message = i18n.tr_with_args(
                "notice-no-media-message",
                &[("extensions", &extensions::display_list())],
            );
            show_notice(i18n, "notice-no-media-title", message)
        }
        Err(err) => {
            tracing::warn!(%err, "media discovery failed");
            let message = i18n.tr_with_args(
                "notice-discovery-error-message",
                &[("cause", &err.to_string())],
            );
            show_notice(i18n, "notice-error-title", message)
        }
    }
}

/// Grows the small welcome window to viewer size.
fn enter_viewer_mode(id: window::Id, viewer: &mut ViewerWindow) -> Task<Message> {
    let (width, height) = VIEWER_WINDOW_SIZE;
    viewer.size = Size::new(width, height);
    Task::batch([
        window::set_resizable(id, true),
        window::resize(id, viewer.size),
    ])
}

// =============================================================================
// Navigation and deletion
// =============================================================================

fn handle_navigate(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    direction: NavigationDirection,
) -> Task<Message> {
    if let Some(window) = ctx.windows.get_mut(&id) {
        if playlist::advance(&mut window.playlist, direction).is_some() {
            window.refresh_presentation();
        }
    }
    Task::none()
}

fn handle_delete_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    let i18n = ctx.i18n;
    let Some(window) = ctx.windows.get_mut(&id) else {
        return Task::none();
    };
    if window.pending_delete.is_some() {
        tracing::debug!("delete confirmation already pending");
        return Task::none();
    }
    let Some(path) = window
        .playlist
        .as_ref()
        .map(|playlist| playlist.current().to_path_buf())
    else {
        return Task::none();
    };

    if !window.options.prompt_delete {
        return delete_current(ctx, id);
    }

    window.pending_delete = Some(path.clone());
    let title = i18n.tr("notice-delete-confirm-title");
    let message = i18n.tr("notice-delete-confirm-message");
    Task::perform(dialogs::confirm_delete(title, message), move |confirmed| {
        Message::DeleteConfirmed {
            window: id,
            path,
            confirmed,
        }
    })
}

fn handle_delete_confirmed(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    path: &std::path::Path,
    confirmed: bool,
) -> Task<Message> {
    let Some(window) = ctx.windows.get_mut(&id) else {
        return Task::none();
    };
    if window.pending_delete.take().as_deref() != Some(path) || !confirmed {
        return Task::none();
    }
    let still_current = window
        .playlist
        .as_ref()
        .is_some_and(|playlist| playlist.current() == path);
    if !still_current {
        tracing::info!(path = %path.display(), "current item changed while confirming, not deleting");
        return Task::none();
    }
    delete_current(ctx, id)
}

fn delete_current(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    let i18n = ctx.i18n;
    let Some(window) = ctx.windows.get_mut(&id) else {
        return Task::none();
    };
    let permanent = window.options.permanent_delete;

    match playlist::delete_current(&mut window.playlist, &SystemDeletion, permanent) {
        Ok(Some(outcome)) => {
            if let DeleteOutcome::Emptied(_) = outcome {
                window.hovering = false;
            }
            window.refresh_presentation();
            Task::none()
        }
        Ok(None) => Task::none(),
        Err(err) => {
            tracing::warn!(%err, "delete failed");
            let message = i18n.tr_with_args(
                "notice-delete-error-message",
                &[("cause", &err.to_string())],
            );
            show_notice(i18n, "notice-error-title", message)
        }
    }
}

pub(super) fn show_notice(i18n: &I18n, title_key: &str, message: String) -> Task<Message> {
    let title = i18n.tr(title_key);
    let dismiss = i18n.tr("dialog-dismiss");
    Task::perform(dialogs::show_error(title, message, dismiss), |()| {
        Message::NoticeDismissed
    })
}
