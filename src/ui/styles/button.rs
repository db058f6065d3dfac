// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action ("Buy Plan", "Submit Request").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::BRAND_500, palette::BRAND_600, shadow::SM)
        }
        button::Status::Hovered => (palette::BRAND_400, palette::BRAND_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
    };
    let text_color = if status == button::Status::Disabled {
        palette::GRAY_400
    } else {
        WHITE
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Secondary action ("Cancel", "Back to House Plans"). Adapts to the theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (background, border_color) = match status {
        button::Status::Hovered => (
            if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.36, 0.36, 0.38)
            },
            palette::BRAND_500,
        ),
        _ => (bg_color, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Translucent button drawn over images (carousel arrows, close buttons).
pub fn overlay(
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Text-only button ("Show more", "View gallery").
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_400,
        _ => palette::BRAND_500,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Whole-card button on the listing screen.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_500,
        _ => ext.background.strong.color,
    };
    button::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        text_color: ext.background.base.text,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Gallery thumbnail; the current image gets a brand-colored frame.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (color, width) = if selected {
            (palette::BRAND_500, border::WIDTH_MD)
        } else if status == button::Status::Hovered {
            (palette::GRAY_200, border::WIDTH_SM)
        } else {
            (Color::TRANSPARENT, border::WIDTH_SM)
        };
        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navbar entry; the active screen is highlighted.
pub fn nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ext = theme.extended_palette();
        let text_color = if active || status == button::Status::Hovered {
            palette::BRAND_500
        } else {
            ext.background.base.text
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    palette::BRAND_500
                } else {
                    Color::TRANSPARENT
                },
                width: if active { border::WIDTH_MD } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::BRAND_500)));
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn disabled_primary_is_grey() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_200)));
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(0.5, 0.8);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn selected_thumbnail_has_brand_border() {
        let style = thumbnail(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::BRAND_500);
        let style = thumbnail(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }
}
