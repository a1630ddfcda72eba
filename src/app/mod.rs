// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between windows.
//!
//! The `App` struct owns every open window. Viewer windows each carry their
//! own playlist and options; about windows carry nothing. Messages are routed
//! by window id, and the process exits once the last viewer window closes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;
mod window;

pub use message::{Flags, Message};
pub use window::{Presentation, ViewerWindow};

use crate::config::{self, ABOUT_WINDOW_SIZE, DEFAULT_ZOOM_FACTOR, WELCOME_WINDOW_SIZE};
use crate::domain::Selection;
use crate::i18n::fluent::I18n;
use crate::ui::menu::MenuState;
use iced::widget::Space;
use iced::{window as iced_window, Element, Size, Subscription, Task, Theme};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    windows: BTreeMap<iced_window::Id, ViewerWindow>,
    about_windows: BTreeSet<iced_window::Id>,
    /// Viewer window whose options the menu currently reflects.
    focused: Option<iced_window::Id>,
    menu: MenuState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("windows", &self.windows.len())
            .field("about_windows", &self.about_windows.len())
            .field("focused", &self.focused)
            .finish()
    }
}

/// Settings for a new viewer window, which starts on the welcome screen.
pub fn welcome_window_settings() -> iced_window::Settings {
    let (width, height) = WELCOME_WINDOW_SIZE;
    iced_window::Settings {
        size: Size::new(width, height),
        resizable: false,
        exit_on_close_request: false,
        ..iced_window::Settings::default()
    }
}

/// Settings for the about window.
pub fn about_window_settings() -> iced_window::Settings {
    let (width, height) = ABOUT_WINDOW_SIZE;
    iced_window::Settings {
        size: Size::new(width, height),
        resizable: false,
        minimizable: false,
        exit_on_close_request: false,
        ..iced_window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced daemon.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 wants a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::daemon(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .scale_factor(App::scale_factor)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn with_i18n(i18n: I18n) -> Self {
        Self {
            i18n,
            windows: BTreeMap::new(),
            about_windows: BTreeSet::new(),
            focused: None,
            menu: MenuState::default(),
        }
    }

    /// Loads settings, opens the first window and, when a path was given on
    /// the command line, populates it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        tracing::info!(locale = %i18n.current_locale(), "starting");

        let mut app = Self::with_i18n(i18n);
        let mut ctx = app.context();
        let (id, open) = update::open_viewer_window(&mut ctx);

        let mut tasks = vec![open];
        if let Some(path) = flags.file_path {
            let selection = Selection::from_path(path);
            tasks.push(update::apply_selection(&mut ctx, id, &selection));
        }
        if let Some(key) = config_warning {
            let message = ctx.i18n.tr(&key);
            tasks.push(update::show_notice(ctx.i18n, "notice-error-title", message));
        }

        // Window tasks must follow the open request.
        let task = tasks
            .into_iter()
            .reduce(Task::chain)
            .unwrap_or_else(Task::none);
        (app, task)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            windows: &mut self.windows,
            about_windows: &mut self.about_windows,
            focused: &mut self.focused,
            menu: &mut self.menu,
        }
    }

    fn title(&self, id: iced_window::Id) -> String {
        let app_name = self.i18n.tr("app-name");
        if self.about_windows.contains(&id) {
            return self.i18n.tr("window-title-about");
        }

        let file_name = self
            .windows
            .get(&id)
            .and_then(|window| window.playlist.as_ref())
            .and_then(|playlist| playlist.current().file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    /// Dark while showing media, light on the welcome and about screens.
    fn theme(&self, id: iced_window::Id) -> Theme {
        if self
            .windows
            .get(&id)
            .is_some_and(ViewerWindow::is_showing_media)
        {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn scale_factor(&self, id: iced_window::Id) -> f32 {
        self.windows
            .get(&id)
            .map_or(DEFAULT_ZOOM_FACTOR, ViewerWindow::effective_zoom)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let playback_sub = subscription::create_playback_subscription(
            self.windows
                .iter()
                .filter_map(|(id, window)| window.playback_key(*id)),
        );

        Subscription::batch([event_sub, playback_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();
        update::update(&mut ctx, message)
    }

    fn view(&self, id: iced_window::Id) -> Element<'_, Message> {
        if self.about_windows.contains(&id) {
            return view::view_about(&self.i18n, id);
        }
        match self.windows.get(&id) {
            Some(window) => view::view(view::ViewContext {
                i18n: &self.i18n,
                id,
                window,
                menu: &self.menu,
            }),
            None => Space::new().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::PlaybackOptions;
    use std::fs;

    fn test_app() -> App {
        App::with_i18n(I18n::new(Some("en-US".to_string()), &Config::default()))
    }

    fn insert_window(app: &mut App) -> iced_window::Id {
        let id = iced_window::Id::unique();
        app.windows
            .insert(id, ViewerWindow::new(PlaybackOptions::default()));
        id
    }

    #[test]
    fn title_shows_app_name_on_welcome() {
        let mut app = test_app();
        let id = insert_window(&mut app);

        assert_eq!(app.title(id), "SMP");
    }

    #[test]
    fn title_shows_file_name_while_viewing() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("sunset.png"), b"png").expect("failed to write");
        let mut app = test_app();
        let id = insert_window(&mut app);

        let _ = app.update(Message::SelectionMade {
            window: id,
            selection: Some(Selection::Directory(dir.path().to_path_buf())),
        });

        assert_eq!(app.title(id), "sunset.png - SMP");
    }

    #[test]
    fn theme_follows_window_mode() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("a.jpg"), b"jpg").expect("failed to write");
        let mut app = test_app();
        let viewing = insert_window(&mut app);
        let idle = insert_window(&mut app);

        let _ = app.update(Message::SelectionMade {
            window: viewing,
            selection: Some(Selection::Directory(dir.path().to_path_buf())),
        });

        assert_eq!(app.theme(viewing), Theme::Dark);
        assert_eq!(app.theme(idle), Theme::Light);
    }

    #[test]
    fn scale_factor_tracks_zoom() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("a.png"), b"png").expect("failed to write");
        let mut app = test_app();
        let id = insert_window(&mut app);
        let _ = app.update(Message::SelectionMade {
            window: id,
            selection: Some(Selection::Directory(dir.path().to_path_buf())),
        });

        let _ = app.update(Message::Command(id, crate::ui::menu::MenuCommand::ZoomIn));

        assert!((app.scale_factor(id) - 1.1).abs() < 1e-6);
        assert!((app.scale_factor(iced_window::Id::unique()) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn welcome_window_ignores_zoom() {
        let mut app = test_app();
        let id = insert_window(&mut app);

        for _ in 0..5 {
            let _ = app.update(Message::Command(id, crate::ui::menu::MenuCommand::ZoomIn));
        }

        assert!((app.scale_factor(id) - DEFAULT_ZOOM_FACTOR).abs() < f32::EPSILON);
    }

    #[test]
    fn windows_keep_independent_playlists() {
        let first_dir = tempfile::tempdir().expect("failed to create temp dir");
        let second_dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(first_dir.path().join("one.png"), b"png").expect("failed to write");
        fs::write(second_dir.path().join("two.png"), b"png").expect("failed to write");
        let mut app = test_app();
        let first = insert_window(&mut app);
        let second = insert_window(&mut app);

        for (id, dir) in [(first, &first_dir), (second, &second_dir)] {
            let _ = app.update(Message::SelectionMade {
                window: id,
                selection: Some(Selection::Directory(dir.path().to_path_buf())),
            });
        }

        assert_eq!(app.title(first), "one.png - SMP");
        assert_eq!(app.title(second), "two.png - SMP");
    }
}
