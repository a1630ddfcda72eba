// SPDX-License-Identifier: MPL-2.0
//! About window showing the application name, version and license.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Render the about window.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("app-description")).size(typography::BODY))
        .push(
            Text::new(i18n.tr_with_args("about-version", &[("version", APP_VERSION)]))
                .size(typography::CAPTION),
        )
        .push(Text::new(i18n.tr("app-license")).size(typography::CAPTION))
        .push(button(Text::new(i18n.tr("about-close"))).on_press(Message::Close));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
