// SPDX-License-Identifier: MPL-2.0
//! Modal image carousel with keyboard navigation and a thumbnail strip.
//!
//! The gallery only exists while it is open. Opening it with an empty image
//! list is ignored, so a visible gallery always has a valid index.

use crate::domain::gallery::GalleryIndex;
use crate::media::ImageCache;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::{icons, image_frame, styles};
use iced::widget::{
    button, column, container, mouse_area, opaque, row, scrollable, stack, text, Row,
};
use iced::{alignment, ContentFit, Element, Length};

/// Image references nearest the shown image first, so a load budget
/// smaller than the list still covers what is on screen.
#[must_use]
pub fn load_order(images: &[String], index: GalleryIndex) -> Vec<String> {
    index
        .nearest_first()
        .into_iter()
        .filter_map(|i| images.get(i).cloned())
        .collect()
}

/// Navigation key routed to an open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
    Close,
}

#[derive(Debug, Clone)]
struct Open {
    images: Vec<String>,
    index: GalleryIndex,
    title: Option<String>,
}

/// Gallery state; `None` inside means closed.
#[derive(Debug, Clone, Default)]
pub struct State {
    open: Option<Open>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open {
        images: Vec<String>,
        initial: usize,
        title: Option<String>,
    },
    Next,
    Previous,
    Select(usize),
    Close,
    Key(NavKey),
}

/// Effects produced by gallery changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// These image references should be fetched if not cached.
    LoadImages(Vec<String>),
    Closed,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open {
                images,
                initial,
                title,
            } => match GalleryIndex::new(images.len(), initial) {
                Some(index) => {
                    let effect = Effect::LoadImages(load_order(&images, index));
                    self.open = Some(Open {
                        images,
                        index,
                        title,
                    });
                    effect
                }
                None => Effect::None,
            },
            Message::Next | Message::Key(NavKey::Next) => self.step(GalleryIndex::next),
            Message::Previous | Message::Key(NavKey::Previous) => {
                self.step(GalleryIndex::previous)
            }
            Message::Select(i) => self.step(|index| index.select(i)),
            Message::Close | Message::Key(NavKey::Close) => {
                if self.open.take().is_some() {
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Moves the index and asks again for images the cache may have
    /// evicted since the gallery opened.
    fn step(&mut self, f: impl FnOnce(GalleryIndex) -> GalleryIndex) -> Effect {
        match &mut self.open {
            Some(open) => {
                open.index = f(open.index);
                Effect::LoadImages(load_order(&open.images, open.index))
            }
            None => Effect::None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Current index, if open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.open.as_ref().map(|open| open.index.current())
    }

    /// Renders the modal, or `None` when closed.
    pub fn view<'a>(&'a self, cache: &'a ImageCache) -> Option<Element<'a, Message>> {
        let open = self.open.as_ref()?;
        let index = open.index;

        let mut header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(title) = &open.title {
            header = header.push(text(title).size(typography::TITLE_SM));
        }
        header = header
            .push(
                container(text(index.counter_label()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::overlay::indicator(radius::FULL)),
            )
            .push(container(text("")).width(Length::Fill))
            .push(close_button(Message::Close));

        let image = image_frame::view(
            cache,
            &open.images[index.current()],
            Length::Fill,
            Length::Fixed(sizing::CAROUSEL_HEIGHT),
            ContentFit::Contain,
        );

        let carousel: Element<'a, Message> = if index.has_multiple() {
            row![
                arrow_button(icons::chevron_left(), Message::Previous),
                image,
                arrow_button(icons::chevron_right(), Message::Next),
            ]
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .into()
        } else {
            image
        };

        let mut content = column![header, carousel]
            .spacing(spacing::MD)
            .max_width(1100);

        if index.has_multiple() {
            content = content.push(thumbnail_strip(
                cache,
                &open.images,
                index.current(),
                Message::Select,
            ));
        }

        Some(modal(content.into(), Message::Close))
    }
}

/// Stacks `content` over a dimmed backdrop that emits `on_backdrop` when
/// clicked. Clicks inside `content` never reach the backdrop.
pub fn modal<'a, M: Clone + 'a>(content: Element<'a, M>, on_backdrop: M) -> Element<'a, M> {
    let backdrop = mouse_area(
        container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(on_backdrop);

    let foreground = container(opaque(container(content).padding(spacing::LG)))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    stack![backdrop, foreground].into()
}

/// Round translucent close button.
pub fn close_button<'a, M: Clone + 'static>(on_press: M) -> Element<'a, M> {
    button(icons::tinted(
        icons::cross(),
        sizing::ICON_SM,
        iced::Color::WHITE,
    ))
    .padding(spacing::XS)
    .on_press(on_press)
    .style(styles::button::overlay(
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .into()
}

/// Round translucent carousel arrow.
pub fn arrow_button<'a, M: Clone + 'static>(
    icon: iced::widget::Svg<'static>,
    on_press: M,
) -> Element<'a, M> {
    button(icons::tinted(icon, sizing::ICON_MD, iced::Color::WHITE))
        .padding(spacing::XS)
        .on_press(on_press)
        .style(styles::button::overlay(
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .into()
}

/// Horizontal strip of clickable thumbnails.
pub fn thumbnail_strip<'a, M: Clone + 'a>(
    cache: &ImageCache,
    images: &[String],
    current: usize,
    on_select: impl Fn(usize) -> M,
) -> Element<'a, M> {
    let thumbs = images.iter().enumerate().map(|(i, reference)| {
        button(image_frame::view(
            cache,
            reference,
            Length::Fixed(sizing::THUMBNAIL),
            Length::Fixed(sizing::THUMBNAIL),
            ContentFit::Cover,
        ))
        .padding(spacing::XXS)
        .on_press(on_select(i))
        .style(styles::button::thumbnail(i == current))
        .into()
    });

    scrollable(Row::with_children(thumbs).spacing(spacing::XS))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/media/{i}.jpg")).collect()
    }

    fn opened(n: usize, initial: usize) -> State {
        let mut state = State::default();
        state.handle(Message::Open {
            images: images(n),
            initial,
            title: Some("Marula".into()),
        });
        state
    }

    #[test]
    fn opening_requests_images() {
        let mut state = State::default();
        let effect = state.handle(Message::Open {
            images: images(2),
            initial: 1,
            title: None,
        });
        let mut expected = images(2);
        expected.reverse();
        assert_eq!(effect, Effect::LoadImages(expected));
        assert_eq!(state.current(), Some(1));
    }

    #[test]
    fn navigation_requests_images_again() {
        let mut state = opened(10, 0);
        let Effect::LoadImages(references) = state.handle(Message::Previous) else {
            panic!("navigation should request images");
        };
        let all = images(10);
        assert_eq!(references.len(), 10);
        assert_eq!(references[0], all[9]);
        assert_eq!(references[1], all[0]);
        assert_eq!(references[2], all[8]);
    }

    #[test]
    fn navigation_when_closed_requests_nothing() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Next), Effect::None);
    }

    #[test]
    fn empty_list_stays_closed() {
        let mut state = State::default();
        let effect = state.handle(Message::Open {
            images: Vec::new(),
            initial: 0,
            title: None,
        });
        assert_eq!(effect, Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn keys_navigate_with_wraparound() {
        let mut state = opened(3, 0);
        state.handle(Message::Key(NavKey::Previous));
        assert_eq!(state.current(), Some(2));
        state.handle(Message::Key(NavKey::Next));
        assert_eq!(state.current(), Some(0));
    }

    #[test]
    fn thumbnail_selects_directly() {
        let mut state = opened(4, 0);
        state.handle(Message::Select(3));
        assert_eq!(state.current(), Some(3));
    }

    #[test]
    fn escape_closes_once() {
        let mut state = opened(2, 0);
        assert_eq!(state.handle(Message::Key(NavKey::Close)), Effect::Closed);
        assert!(!state.is_open());
        assert_eq!(state.handle(Message::Key(NavKey::Close)), Effect::None);
    }

    #[test]
    fn overlay_buttons_accept_owned_messages() {
        let _close: Element<'_, String> = close_button("close".to_string());
        let _arrow: Element<'_, String> =
            arrow_button(icons::chevron_left(), "previous".to_string());
    }

    #[test]
    fn keys_are_ignored_when_closed() {
        let mut state = State::default();
        state.handle(Message::Key(NavKey::Next));
        assert_eq!(state.current(), None);
    }
}
