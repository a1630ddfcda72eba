// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: base colors
//! - **Opacity**: overlay levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: menu bar and dropdown sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const OVERLAY_STRONG: f32 = 0.7;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

pub mod sizing {
    /// Width of one entry in the menu bar.
    pub const MENU_BUTTON_WIDTH: f32 = 96.0;

    /// Width of an open dropdown.
    pub const MENU_DROPDOWN_WIDTH: f32 = 260.0;

    /// Height of the menu bar, padding included.
    pub const MENU_BAR_HEIGHT: f32 = 40.0;
}

pub mod typography {
    /// Large title - welcome heading
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - app name in the about window
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - menu entries
    pub const BODY_SM: f32 = 13.0;

    /// Caption - hover caption, accelerators
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_STRONG > 0.0 && opacity::OVERLAY_STRONG < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::MENU_DROPDOWN_WIDTH > sizing::MENU_BUTTON_WIDTH);
    assert!(sizing::MENU_BAR_HEIGHT > typography::BODY_SM + 2.0 * spacing::XS);
};
