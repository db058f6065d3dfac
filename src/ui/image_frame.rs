// SPDX-License-Identifier: MPL-2.0
//! Draws a plan image from the cache, or a stand-in while it is missing.

use crate::media::{placeholder, ImageCache, ImageSlot};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming;
use iced::widget::{column, container, image, text};
use iced::{alignment, ContentFit, Element, Length};

/// Image for `reference`, sized to `width` x `height`.
///
/// Only failed images draw the placeholder graphic. Images still
/// downloading, or not requested yet, draw a short caption.
pub fn view<'a, M: 'a>(
    cache: &ImageCache,
    reference: &str,
    width: Length,
    height: Length,
    fit: ContentFit,
) -> Element<'a, M> {
    match cache.peek(reference) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
        Some(ImageSlot::Loading) | None => container(
            text("Loading image...")
                .size(typography::BODY_SM)
                .color(theming::muted_text_color()),
        )
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
        Some(ImageSlot::Failed) => unavailable(width, height),
    }
}

/// The "Image not available" placeholder at the given size.
pub fn unavailable<'a, M: 'a>(width: Length, height: Length) -> Element<'a, M> {
    container(
        column![
            image(placeholder::handle())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
            text(placeholder::CAPTION)
                .size(typography::CAPTION)
                .color(theming::muted_text_color()),
        ]
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center),
    )
    .width(width)
    .height(height)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
