// SPDX-License-Identifier: MPL-2.0
//! Welcome view displayed while a window has no playlist.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    OpenFile,
    OpenDirectory,
}

/// Renders the welcome view.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("welcome-title")).size(typography::TITLE_LG);

    let hint = Text::new(i18n.tr("welcome-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("welcome-open-file")))
                .padding([spacing::XS, spacing::MD])
                .style(button::primary)
                .on_press(Message::OpenFile),
        )
        .push(
            button(Text::new(i18n.tr("welcome-open-directory")))
                .padding([spacing::XS, spacing::MD])
                .style(button::secondary)
                .on_press(Message::OpenDirectory),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint)
        .push(buttons);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
