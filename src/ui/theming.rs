// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and shared text colors.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced theme to render with.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Next mode for the navbar toggle: System, Light, Dark, then System.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

/// Secondary text such as captions and placeholders.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

pub fn error_text_color() -> Color {
    palette::ERROR_500
}

pub fn success_text_color() -> Color {
    palette::SUCCESS_500
}

/// Prices and other brand-highlighted text.
pub fn accent_text_color() -> Color {
    palette::BRAND_500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_themes() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
        // System mode depends on the desktop; only check it does not panic.
        let _ = ThemeMode::System.to_theme();
    }

    #[test]
    fn cycle_visits_every_mode() {
        let mut mode = ThemeMode::System;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.cycle();
            seen.push(mode);
        }
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
    }
}
