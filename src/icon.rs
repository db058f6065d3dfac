// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//!
//! The brand SVG is embedded and rasterized at startup for the title bar.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/cedric_plans.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterizes the brand mark to a square RGBA buffer.
///
/// Returns `None` if parsing or rendering fails; the window then uses the
/// platform default icon.
#[must_use]
pub fn render_rgba(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;
    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

pub fn load_window_icon() -> Option<Icon> {
    let rgba = render_rgba(ICON_SIZE)?;
    match icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::debug!(error = %err, "window icon rejected");
            None
        }
    }
}
