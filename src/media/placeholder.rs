// SPDX-License-Identifier: MPL-2.0
//! "Image not available" placeholder.
//!
//! Rasterizes the embedded placeholder SVG once and shares the handle. The
//! caption is drawn by the view, so the SVG needs no fonts.

use iced::widget::image;
use resvg::usvg;
use std::sync::OnceLock;

const SVG_SOURCE: &str = include_str!("../../assets/placeholder.svg");

/// Caption shown with the placeholder graphic.
pub const CAPTION: &str = "Image not available";

/// Raster width of the placeholder.
pub const WIDTH: u32 = 400;
/// Raster height of the placeholder.
pub const HEIGHT: u32 = 300;

/// Shared placeholder handle, rendered on first use.
///
/// Falls back to a flat grey image if the SVG cannot be rendered.
pub fn handle() -> image::Handle {
    static HANDLE: OnceLock<image::Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            let rgba = render_rgba(WIDTH, HEIGHT).unwrap_or_else(|| flat_grey(WIDTH, HEIGHT));
            image::Handle::from_rgba(WIDTH, HEIGHT, rgba)
        })
        .clone()
}

/// Rasterizes the placeholder SVG to `width` x `height` RGBA pixels.
///
/// Returns `None` if parsing or rendering fails.
#[must_use]
pub fn render_rgba(width: u32, height: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let size = tree.size();
    #[allow(clippy::cast_precision_loss)]
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(width, height)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

fn flat_grey(width: u32, height: u32) -> Vec<u8> {
    [0x33, 0x33, 0x33, 0xFF].repeat((width * height) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_renders_expected_size() {
        let rgba = render_rgba(WIDTH, HEIGHT).expect("embedded SVG renders");
        assert_eq!(rgba.len(), (WIDTH * HEIGHT * 4) as usize);
    }

    #[test]
    fn placeholder_background_is_dark_grey() {
        let rgba = render_rgba(40, 30).expect("embedded SVG renders");
        // Top-left corner is background.
        assert_eq!(&rgba[..4], &[0x33, 0x33, 0x33, 0xFF]);
    }
}
