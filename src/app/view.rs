// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the active screen. The listing gallery and the
//! toast stack are layered on top of everything.

use super::{Message, Screen};
use crate::application::port::PlanCatalog;
use crate::media::ImageCache;
use crate::ui::navbar::{self, Destination, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, listing, plan_details, quote};
use iced::widget::{column, container, stack, text, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub catalog: &'a dyn PlanCatalog,
    pub images: &'a ImageCache,
    pub gallery: &'a gallery::State,
    pub plan_details: Option<&'a plan_details::State>,
    pub quote: &'a quote::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active = match ctx.screen {
        Screen::Listing | Screen::PlanDetails => Destination::Listing,
        Screen::GetQuote => Destination::Quote,
    };
    let navbar = navbar::view(NavbarViewContext {
        active,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match (ctx.screen, ctx.plan_details) {
        (Screen::Listing, _) => listing::view(ctx.catalog, ctx.images).map(Message::Listing),
        (Screen::PlanDetails, Some(details)) => {
            plan_details::view(details, ctx.images).map(Message::PlanDetails)
        }
        (Screen::PlanDetails, None) => container(text("Loading...")).center(Length::Fill)
            .into(),
        (Screen::GetQuote, _) => quote::view(ctx.quote).map(Message::Quote),
    };

    let page = column![
        navbar,
        container(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    ];

    let mut layers: Stack<'_, Message> = stack![page];

    if let Some(modal) = ctx.gallery.view(ctx.images) {
        layers = layers.push(modal.map(Message::Gallery));
    }
    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
