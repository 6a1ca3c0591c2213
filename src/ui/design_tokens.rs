// SPDX-License-Identifier: MPL-2.0
//! Shared sizes and colors for the gallery and chart screens.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.95);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.62);

    pub const ACCENT_500: Color = Color::from_rgb(0.96, 0.62, 0.18);
}

pub mod opacity {
    /// Label strip over a card thumbnail.
    pub const CARD_OVERLAY: f32 = 0.6;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const SIDEBAR_WIDTH: f32 = 290.0;

    pub const CARD_WIDTH: f32 = 240.0;
    pub const CARD_HEIGHT: f32 = 180.0;

    /// Icon inside a tag toggle.
    pub const TAG_ICON: f32 = 40.0;
    pub const TAG_BUTTON_WIDTH: f32 = 84.0;

    pub const ZOOM_BUTTON: f32 = 32.0;

    /// Smallest height an image container is drawn with.
    pub const MIN_VIEWER_HEIGHT: f32 = 120.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
    /// JSON panel.
    pub const CODE: f32 = 13.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::TAG_BUTTON_WIDTH > sizing::TAG_ICON);
    assert!(sizing::MIN_VIEWER_HEIGHT > sizing::ZOOM_BUTTON);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(opacity::CARD_OVERLAY > 0.0 && opacity::CARD_OVERLAY < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
