// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Each window renders independently: about windows show the about panel,
//! viewer windows show either the welcome screen or the current media item,
//! topped by the in-window menu unless fullscreen.

use super::window::{Presentation, ViewerWindow};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::menu::{self, MenuState};
use crate::ui::viewer::{self, Surface, ViewContext as ViewerViewContext};
use crate::ui::{about, welcome};
use iced::widget::{mouse_area, Column, Container, Space, Stack};
use iced::{window, Element, Length};

/// Context required to render a viewer window.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub id: window::Id,
    pub window: &'a ViewerWindow,
    pub menu: &'a MenuState,
}

/// Renders the about panel for an about window.
pub fn view_about(i18n: &I18n, id: window::Id) -> Element<'_, Message> {
    about::view(i18n).map(move |message| Message::About(id, message))
}

/// Renders a viewer window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let id = ctx.id;
    let body = match (&ctx.window.playlist, &ctx.window.presentation) {
        (Some(playlist), Some(presentation)) => viewer::view(ViewerViewContext {
            surface: surface(presentation, ctx.i18n),
            path: playlist.current().display().to_string(),
            position: playlist.position(),
            hovering: ctx.window.hovering,
        })
        .map(move |message| Message::Viewer(id, message)),
        _ => welcome::view(ctx.i18n).map(move |message| Message::Welcome(id, message)),
    };

    if ctx.window.fullscreen {
        return body;
    }

    let to_app = move |message: menu::Message| Message::Menu(id, message);
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body);
    if let Some(section) = ctx.window.open_menu {
        // Clicking anywhere outside the dropdown closes it.
        let dismiss: Element<'_, menu::Message> = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(menu::Message::Dismiss)
        .into();
        let dropdown =
            menu::view_dropdown(section, ctx.menu, ctx.i18n, ctx.window.viewport()).map(to_app);
        layers = layers.push(dismiss.map(to_app)).push(dropdown);
    }

    Column::new()
        .push(menu::view_bar(ctx.window.open_menu, ctx.i18n).map(to_app))
        .push(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn surface<'a>(presentation: &'a Presentation, i18n: &I18n) -> Surface<'a> {
    match presentation {
        Presentation::Still(handle) => Surface::Image(handle),
        Presentation::Playing {
            error: Some(err), ..
        } => Surface::Failed(i18n.tr_with_args(err.i18n_key(), &[("message", &err.to_string())])),
        Presentation::Playing {
            frame: Some(handle),
            ..
        } => Surface::Image(handle),
        Presentation::Playing { .. } => Surface::Waiting,
    }
}
