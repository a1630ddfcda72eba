// SPDX-License-Identifier: MPL-2.0
//! Media surface: the current file scaled to fit, plus a hover caption.

use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::widget::{container, image, mouse_area, Container, Stack, Text};
use iced::{alignment, Background, Border, Color, ContentFit, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    PointerEntered,
    PointerLeft,
}

/// What to draw for the current item.
#[derive(Debug)]
pub enum Surface<'a> {
    /// A still image or the latest decoded frame.
    Image(&'a image::Handle),
    /// Playback has started but no frame has arrived yet.
    Waiting,
    /// Playback failed; the message replaces the frame.
    Failed(String),
}

pub struct ViewContext<'a> {
    pub surface: Surface<'a>,
    /// Full path of the current item.
    pub path: String,
    /// One-based position and playlist length.
    pub position: (usize, usize),
    pub hovering: bool,
}

/// Caption text shown while hovering: the path, then "position/total".
#[must_use]
pub fn caption(path: &str, position: (usize, usize)) -> String {
    format!("{}\n{}/{}", path, position.0, position.1)
}

/// Renders the viewer surface.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let media: Element<'_, Message> = match ctx.surface {
        Surface::Image(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Surface::Waiting => Text::new("").into(),
        Surface::Failed(message) => Text::new(message)
            .size(typography::BODY)
            .color(palette::ERROR_500)
            .into(),
    };

    let media = Container::new(media)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(media);

    if ctx.hovering {
        let label = Text::new(caption(&ctx.path, ctx.position))
            .size(typography::CAPTION)
            .color(palette::WHITE);
        let badge = container(label)
            .padding([spacing::XXS, spacing::XS])
            .style(|_theme| container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::BLACK
                })),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });
        stack = stack.push(
            Container::new(badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Bottom),
        );
    }

    let surface = container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(palette::BLACK)),
            ..container::Style::default()
        });

    mouse_area(surface)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft)
        .into()
}
