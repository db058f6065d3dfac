// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Shows the brand, the two top-level destinations, and the theme toggle.
//! The detail page has no entry of its own; the listing link stays
//! highlighted while a plan is open.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::{self, ThemeMode};
use crate::ui::{icons, styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, row, text, Row};
use iced::{Element, Font, Length};

/// Top-level destination highlighted in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Listing,
    Quote,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Destination,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenListing,
    OpenQuote,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(Destination),
    ThemeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::OpenListing => Event::Navigate(Destination::Listing),
        Message::OpenQuote => Event::Navigate(Destination::Quote),
        Message::CycleTheme => {
            *theme_mode = theme_mode.cycle();
            Event::ThemeChanged(*theme_mode)
        }
    }
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let brand = row![
        icons::tinted(icons::layers(), sizing::ICON_MD, theming::accent_text_color()),
        text("Cedric House Plans").size(typography::TITLE_SM).font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        }),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    let link = |label: &'a str, target: Destination, message: Message| {
        button(text(label))
            .padding([spacing::XS, spacing::SM])
            .on_press(message)
            .style(styles::button::nav(ctx.active == target))
    };

    let theme_toggle = button(
        row![
            icons::sized(icons::contrast(), sizing::ICON_SM),
            text(ctx.theme_mode.label()).size(typography::BODY_SM),
        ]
        .spacing(spacing::XXS)
        .align_y(Vertical::Center),
    )
    .padding([spacing::XS, spacing::SM])
    .on_press(Message::CycleTheme)
    .style(styles::button::secondary);

    let bar = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(container(text("")).width(Length::Fill))
        .push(link("House Plans", Destination::Listing, Message::OpenListing))
        .push(link("Get a Quote", Destination::Quote, Message::OpenQuote))
        .push(theme_toggle);

    container(bar)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_navigate() {
        let mut mode = ThemeMode::System;
        assert_eq!(
            update(Message::OpenQuote, &mut mode),
            Event::Navigate(Destination::Quote)
        );
        assert_eq!(mode, ThemeMode::System);
    }

    #[test]
    fn theme_toggle_cycles_mode() {
        let mut mode = ThemeMode::System;
        assert_eq!(
            update(Message::CycleTheme, &mut mode),
            Event::ThemeChanged(ThemeMode::Light)
        );
        assert_eq!(mode, ThemeMode::Light);
    }
}
