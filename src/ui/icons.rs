// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small monochrome SVG documents embedded as string constants.
//! Handles are cached with `OnceLock`, and callers tint them through
//! [`styles::overlay::icon`](crate::ui::styles::overlay::icon) or
//! [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_gallery`).

use crate::ui::styles;
use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function backed by a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $doc:literal, $body:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation
// =============================================================================

define_icon!(chevron_left, "Chevron pointing left.", r#"<path d="M15 18l-6-6 6-6"/>"#);
define_icon!(chevron_right, "Chevron pointing right.", r#"<path d="M9 18l6-6-6-6"/>"#);
define_icon!(chevron_down, "Chevron pointing down.", r#"<path d="M6 9l6 6 6-6"/>"#);
define_icon!(chevron_up, "Chevron pointing up.", r#"<path d="M18 15l-6-6-6 6"/>"#);
define_icon!(cross, "Diagonal cross.", r#"<path d="M18 6L6 18M6 6l12 12"/>"#);
define_icon!(
    expand,
    "Four outward corners.",
    r#"<path d="M8 3H3v5M21 8V3h-5M16 21h5v-5M3 16v5h5"/>"#
);

// =============================================================================
// Plan Properties
// =============================================================================

define_icon!(
    bed,
    "Bed seen from the side.",
    r#"<path d="M2 18V6M2 12h20v6M22 18v-4a3 3 0 0 0-3-3H10v4"/><circle cx="6" cy="10" r="2"/>"#
);
define_icon!(
    bath,
    "Bathtub.",
    r#"<path d="M3 12h18v3a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4zM6 12V5a2 2 0 0 1 4 0M7 19l-1 2M17 19l1 2"/>"#
);
define_icon!(
    car,
    "Car front.",
    r#"<path d="M5 17h14v-5l-2-5H7l-2 5zM5 12h14"/><circle cx="8" cy="15" r="1"/><circle cx="16" cy="15" r="1"/>"#
);
define_icon!(
    layers,
    "Stacked layers.",
    r#"<path d="M12 3l9 5-9 5-9-5zM3 13l9 5 9-5"/>"#
);
define_icon!(
    ruler,
    "Square with dimension ticks.",
    r#"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 9h4M3 15h4M9 3v4M15 3v4"/>"#
);

// =============================================================================
// Actions
// =============================================================================

define_icon!(
    heart,
    "Heart outline.",
    r#"<path d="M20.8 4.6a5.5 5.5 0 0 0-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 0 0-7.8 7.8l1 1.1L12 21l7.8-7.5 1-1.1a5.5 5.5 0 0 0 0-7.8z"/>"#
);
define_icon!(
    heart_filled,
    "Filled heart.",
    r#"<path fill="black" d="M20.8 4.6a5.5 5.5 0 0 0-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 0 0-7.8 7.8l1 1.1L12 21l7.8-7.5 1-1.1a5.5 5.5 0 0 0 0-7.8z"/>"#
);
define_icon!(
    play,
    "Triangle pointing right inside a circle.",
    r#"<circle cx="12" cy="12" r="10"/><path fill="black" d="M10 8l6 4-6 4z"/>"#
);
define_icon!(
    copy,
    "Two overlapping sheets.",
    r#"<rect x="9" y="9" width="12" height="12" rx="2"/><path d="M5 15H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h10a1 1 0 0 1 1 1v1"/>"#
);
define_icon!(
    contrast,
    "Half-filled circle for the theme toggle.",
    r#"<circle cx="12" cy="12" r="9"/><path fill="black" d="M12 3a9 9 0 0 1 0 18z"/>"#
);

// =============================================================================
// Status
// =============================================================================

define_icon!(checkmark, "Check mark.", r#"<path d="M20 6L9 17l-5-5"/>"#);
define_icon!(
    info,
    "Letter i in a circle.",
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4M12 8h.01"/>"#
);
define_icon!(
    warning,
    "Exclamation mark in a triangle.",
    r#"<path d="M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0zM12 9v4M12 17h.01"/>"#
);

/// Sets both dimensions of an icon.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes and tints an icon.
#[must_use]
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    sized(icon, size).style(styles::overlay::icon(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_build_without_panicking() {
        for icon in [
            chevron_left(),
            chevron_right(),
            cross(),
            heart(),
            heart_filled(),
            play(),
            copy(),
            checkmark(),
            warning(),
        ] {
            let _ = sized(icon, 16.0);
        }
    }
}
