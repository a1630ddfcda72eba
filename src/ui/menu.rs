// SPDX-License-Identifier: MPL-2.0
//! Application menu bar.
//!
//! The menu is drawn at the top of every viewer window. Its checkbox entries
//! are a read-only projection of the focused window's [`PlaybackOptions`]:
//! toggling one emits a command, and the application re-projects the menu
//! from the window once the option has changed.

use crate::domain::{OptionToggle, PlaybackOptions};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, checkbox, container, rule, scrollable, text, Column, Row, Space};
use iced::{alignment::Vertical, Element, Length, Size};

/// Top-level menus, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSection {
    App,
    File,
    View,
    Playback,
}

impl MenuSection {
    pub const ALL: [MenuSection; 4] = [Self::App, Self::File, Self::View, Self::Playback];

    fn label_key(self) -> &'static str {
        match self {
            Self::App => "menu-app",
            Self::File => "menu-file",
            Self::View => "menu-view",
            Self::Playback => "menu-playback",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Placement of an open dropdown inside the content area of a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownLayout {
    /// Distance from the left edge of the window.
    pub offset: f32,
    pub width: f32,
    /// Taller entry lists scroll.
    pub max_height: f32,
}

impl DropdownLayout {
    /// Places the dropdown under its bar button, pulled left and shortened so
    /// it stays inside `viewport` (the window size in layout units).
    #[must_use]
    pub fn fit(section: MenuSection, viewport: Size) -> Self {
        let width = sizing::MENU_DROPDOWN_WIDTH.min((viewport.width - 2.0 * spacing::XS).max(0.0));

        #[allow(clippy::cast_precision_loss)]
        let under_button =
            section.index() as f32 * (sizing::MENU_BUTTON_WIDTH + spacing::XXS) + spacing::XS;
        let offset = under_button.min((viewport.width - width - spacing::XS).max(0.0));

        let max_height = (viewport.height - sizing::MENU_BAR_HEIGHT - spacing::XS).max(0.0);

        Self {
            offset,
            width,
            max_height,
        }
    }
}

/// Window-level commands reachable from the menu or an accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    About,
    Quit,
    OpenFile,
    OpenDirectory,
    NewWindow,
    CloseWindow,
    Reload,
    ResetZoom,
    ZoomIn,
    ZoomOut,
    ToggleFullscreen,
    Toggle(OptionToggle),
}

/// Checked state of the playback entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub shuffle: bool,
    pub prompt_delete: bool,
    pub permanent_delete: bool,
}

impl MenuState {
    /// Mirrors a window's options.
    #[must_use]
    pub fn project(options: &PlaybackOptions) -> Self {
        Self {
            shuffle: options.shuffle,
            prompt_delete: options.prompt_delete,
            permanent_delete: options.permanent_delete,
        }
    }

    #[must_use]
    pub fn is_checked(&self, toggle: OptionToggle) -> bool {
        match toggle {
            OptionToggle::Shuffle => self.shuffle,
            OptionToggle::PromptDelete => self.prompt_delete,
            OptionToggle::PermanentDelete => self.permanent_delete,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the section, or close it if it is already open.
    Section(MenuSection),
    Dismiss,
    Command(MenuCommand),
}

enum Entry {
    Action {
        command: MenuCommand,
        label_key: &'static str,
        accelerator: Option<&'static str>,
    },
    Check {
        toggle: OptionToggle,
        label_key: &'static str,
    },
    Separator,
}

const fn action(
    command: MenuCommand,
    label_key: &'static str,
    accelerator: Option<&'static str>,
) -> Entry {
    Entry::Action {
        command,
        label_key,
        accelerator,
    }
}

const APP_ENTRIES: &[Entry] = &[
    action(MenuCommand::About, "menu-app-about", None),
    Entry::Separator,
    action(MenuCommand::Quit, "menu-app-quit", Some("Ctrl+Q")),
];

const FILE_ENTRIES: &[Entry] = &[
    action(MenuCommand::OpenFile, "menu-file-open-file", Some("Ctrl+O")),
    action(
        MenuCommand::OpenDirectory,
        "menu-file-open-directory",
        Some("Ctrl+Shift+O"),
    ),
    Entry::Separator,
    action(MenuCommand::NewWindow, "menu-file-new-window", Some("Ctrl+N")),
    action(MenuCommand::CloseWindow, "menu-file-close-window", Some("Ctrl+W")),
];

const VIEW_ENTRIES: &[Entry] = &[
    action(MenuCommand::Reload, "menu-view-reload", Some("Ctrl+R")),
    Entry::Separator,
    action(MenuCommand::ResetZoom, "menu-view-reset-zoom", Some("Ctrl+0")),
    action(MenuCommand::ZoomIn, "menu-view-zoom-in", Some("Ctrl+=")),
    action(MenuCommand::ZoomOut, "menu-view-zoom-out", Some("Ctrl+-")),
    Entry::Separator,
    action(MenuCommand::ToggleFullscreen, "menu-view-fullscreen", Some("F11")),
];

const PLAYBACK_ENTRIES: &[Entry] = &[
    Entry::Check {
        toggle: OptionToggle::Shuffle,
        label_key: "menu-playback-shuffle",
    },
    Entry::Check {
        toggle: OptionToggle::PromptDelete,
        label_key: "menu-playback-prompt-delete",
    },
    Entry::Check {
        toggle: OptionToggle::PermanentDelete,
        label_key: "menu-playback-permanent-delete",
    },
];

fn entries(section: MenuSection) -> &'static [Entry] {
    match section {
        MenuSection::App => APP_ENTRIES,
        MenuSection::File => FILE_ENTRIES,
        MenuSection::View => VIEW_ENTRIES,
        MenuSection::Playback => PLAYBACK_ENTRIES,
    }
}

/// Renders the bar of section buttons.
pub fn view_bar<'a>(open: Option<MenuSection>, i18n: &'a I18n) -> Element<'a, Message> {
    let bar = MenuSection::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &section| {
            let style = if open == Some(section) {
                button::secondary
            } else {
                button::text
            };
            row.push(
                button(text(i18n.tr(section.label_key())).size(typography::BODY_SM))
                    .width(sizing::MENU_BUTTON_WIDTH)
                    .style(style)
                    .on_press(Message::Section(section)),
            )
        });

    container(bar)
        .width(Length::Fill)
        .height(sizing::MENU_BAR_HEIGHT)
        .padding([spacing::XXS, spacing::XS])
        .style(container::bordered_box)
        .into()
}

/// Renders the entries of an open section under its bar button, kept inside
/// `viewport`.
pub fn view_dropdown<'a>(
    section: MenuSection,
    state: &MenuState,
    i18n: &'a I18n,
    viewport: Size,
) -> Element<'a, Message> {
    let layout = DropdownLayout::fit(section, viewport);
    let column = entries(section)
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, entry| {
            column.push(view_entry(entry, state, i18n))
        });

    let dropdown = container(scrollable(column).width(Length::Fill))
        .width(layout.width)
        .max_height(layout.max_height)
        .padding(spacing::XS)
        .style(container::bordered_box);

    Row::new()
        .push(Space::new().width(layout.offset))
        .push(dropdown)
        .into()
}

fn view_entry<'a>(entry: &Entry, state: &MenuState, i18n: &'a I18n) -> Element<'a, Message> {
    match entry {
        Entry::Action {
            command,
            label_key,
            accelerator,
        } => {
            let label = Row::new()
                .align_y(Vertical::Center)
                .push(text(i18n.tr(label_key)).size(typography::BODY_SM))
                .push(Space::new().width(Length::Fill))
                .push(text(accelerator.unwrap_or_default()).size(typography::CAPTION));
            button(label)
                .width(Length::Fill)
                .style(button::text)
                .on_press(Message::Command(*command))
                .into()
        }
        Entry::Check { toggle, label_key } => {
            let toggle = *toggle;
            checkbox(state.is_checked(toggle))
                .label(i18n.tr(label_key))
                .text_size(typography::BODY_SM)
                .on_toggle(move |_| Message::Command(MenuCommand::Toggle(toggle)))
                .into()
        }
        Entry::Separator => rule::horizontal(1).into(),
    }
}
