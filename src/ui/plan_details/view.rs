// SPDX-License-Identifier: MPL-2.0
//! Detail page rendering.

use super::component::{Load, Message, State};
use super::overlay::ActiveOverlay;
use super::purchase;
use crate::app::config::DESCRIPTION_PREVIEW_CHARS;
use crate::domain::gallery::GalleryIndex;
use crate::domain::plan::{truncate_description, FloorDescriptor, PlanRecord};
use crate::domain::purchase::WizardAction;
use crate::media::ImageCache;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::gallery::{arrow_button, close_button, modal, thumbnail_strip};
use crate::ui::listing::badge;
use crate::ui::{icons, image_frame, styles, theming};
use iced::widget::{
    button, column, container, row, scrollable, stack, text, Column, Row, Svg,
};
use iced::{alignment, ContentFit, Element, Font, Length};

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Renders the whole page plus whichever overlay is open.
pub fn view<'a>(state: &'a State, cache: &'a ImageCache) -> Element<'a, Message> {
    let (plan, carousel) = match state.load() {
        Load::Loading => return centered(text("Loading...").size(typography::TITLE_SM).into()),
        Load::NotFound => return not_found(),
        Load::Ready { plan, carousel, .. } => (plan.as_ref(), *carousel),
    };

    let page = scrollable(
        container(
            column![
                back_button(),
                media(state, plan, carousel, cache),
                summary(state, plan),
                key_features(plan),
                floors(state, plan),
                specifications(plan),
                property_details(plan),
                amenities(plan),
                button(text("Buy Plan").size(typography::BODY_LG).font(BOLD))
                    .padding([spacing::SM, spacing::XL])
                    .on_press(Message::Wizard(WizardAction::Buy))
                    .style(styles::button::primary),
            ]
            .spacing(spacing::LG)
            .max_width(1100),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill);

    let overlay = match state.overlay() {
        ActiveOverlay::None => None,
        ActiveOverlay::Fullscreen => {
            carousel.map(|index| fullscreen(plan, index, cache))
        }
        ActiveOverlay::Video => state.embed_link().map(video_panel),
        ActiveOverlay::Purchase(stage) => {
            purchase::view(stage, plan, state.checkout(), state.missing_contact())
        }
    };

    match overlay {
        Some(layer) => stack![page, layer].into(),
        None => page.into(),
    }
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn not_found<'a>() -> Element<'a, Message> {
    centered(
        column![
            text("House Plan Not Found").size(typography::TITLE_LG).font(BOLD),
            text("The house plan you're looking for doesn't exist.")
                .color(theming::muted_text_color()),
            button(text("Back to House Plans"))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::BackToListing)
                .style(styles::button::primary),
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into(),
    )
}

fn back_button<'a>() -> Element<'a, Message> {
    button(
        row![
            icons::sized(icons::chevron_left(), sizing::ICON_SM),
            text("Back to House Plans"),
        ]
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center),
    )
    .padding(0)
    .on_press(Message::BackToListing)
    .style(styles::button::link)
    .into()
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![text(title).size(typography::TITLE_MD).font(BOLD), body].spacing(spacing::SM),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

// =============================================================================
// Carousel
// =============================================================================

fn media<'a>(
    state: &'a State,
    plan: &'a PlanRecord,
    carousel: Option<GalleryIndex>,
    cache: &'a ImageCache,
) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::CAROUSEL_HEIGHT);

    let Some(index) = carousel else {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(image_frame::unavailable(Length::Fill, height));
        if plan.has_video() {
            column = column.push(watch_video_button());
        }
        return column.into();
    };

    let picture = image_frame::view(
        cache,
        &plan.images[index.current()],
        Length::Fill,
        height,
        ContentFit::Cover,
    );

    let heart = if state.is_favourite() {
        icons::tinted(icons::heart_filled(), sizing::ICON_MD, palette::FAVOURITE)
    } else {
        icons::tinted(icons::heart(), sizing::ICON_MD, palette::WHITE)
    };

    let top = row![
        container(text("")).width(Length::Fill),
        overlay_button(heart, Message::ToggleFavourite),
        overlay_button(
            icons::tinted(icons::expand(), sizing::ICON_MD, palette::WHITE),
            Message::OpenFullscreen,
        ),
    ]
    .spacing(spacing::XS);

    let mut controls = column![top].padding(spacing::SM).height(height);

    if index.has_multiple() {
        controls = controls.push(
            container(
                row![
                    arrow_button(icons::chevron_left(), Message::CarouselPrevious),
                    container(text("")).width(Length::Fill),
                    arrow_button(icons::chevron_right(), Message::CarouselNext),
                ]
                .align_y(alignment::Vertical::Center),
            )
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
        );
        controls = controls.push(
            container(
                container(text(index.counter_label()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::overlay::indicator(radius::FULL)),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
        );
    }

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(stack![picture, controls]);

    if index.has_multiple() {
        column = column.push(thumbnail_strip(
            cache,
            &plan.images,
            index.current(),
            Message::CarouselSelect,
        ));
    }
    if plan.has_video() {
        column = column.push(watch_video_button());
    }
    column.into()
}

fn overlay_button<'a>(icon: Svg<'static>, on_press: Message) -> Element<'a, Message> {
    button(icon)
        .padding(spacing::XS)
        .on_press(on_press)
        .style(styles::button::overlay(0.4, 0.6))
        .into()
}

fn watch_video_button<'a>() -> Element<'a, Message> {
    button(
        row![
            icons::tinted(icons::play(), sizing::ICON_SM, palette::WHITE),
            text("Watch Video"),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .on_press(Message::OpenVideo)
    .style(styles::button::primary)
    .into()
}

// =============================================================================
// Summary and features
// =============================================================================

fn summary<'a>(state: &'a State, plan: &'a PlanRecord) -> Element<'a, Message> {
    let mut heading = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text(&plan.title).size(typography::TITLE_LG).font(BOLD));
    if plan.is_new {
        heading = heading.push(badge("New Listing", palette::SUCCESS_500));
    }

    let mut column = column![
        heading,
        text(plan.price_label())
            .size(typography::TITLE_MD)
            .font(BOLD)
            .color(theming::accent_text_color()),
    ]
    .spacing(spacing::SM);

    if !plan.description.is_empty() {
        let truncated = truncate_description(&plan.description, DESCRIPTION_PREVIEW_CHARS);
        let is_long = !matches!(truncated, std::borrow::Cow::Borrowed(_));
        let shown = if state.shows_full_description() {
            plan.description.clone()
        } else {
            truncated.into_owned()
        };
        column = column.push(text(shown).color(theming::muted_text_color()));
        if is_long {
            let label = if state.shows_full_description() {
                "- Show less"
            } else {
                "+ Show more"
            };
            column = column.push(
                button(text(label).size(typography::BODY_SM))
                    .padding(0)
                    .on_press(Message::ToggleDescription)
                    .style(styles::button::link),
            );
        }
    }

    column.into()
}

fn property_card<'a>(icon: Svg<'static>, value: String, label: &'a str) -> Element<'a, Message> {
    container(
        column![
            icons::tinted(icon, sizing::ICON_MD, theming::accent_text_color()),
            text(value).size(typography::TITLE_SM).font(BOLD),
            text(label).size(typography::CAPTION).color(theming::muted_text_color()),
        ]
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(120.0))
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}

fn checklist<'a>(items: &'a [String]) -> Element<'a, Message> {
    Row::with_children(items.iter().map(|item| -> Element<'a, Message> {
        row![
            icons::tinted(icons::checkmark(), sizing::ICON_SM, theming::success_text_color()),
            text(item),
        ]
        .spacing(spacing::XS)
        .width(Length::Fixed(260.0))
        .align_y(alignment::Vertical::Center)
        .into()
    }))
    .spacing(spacing::MD)
    .wrap()
    .vertical_spacing(spacing::XS)
    .into()
}

fn key_features<'a>(plan: &'a PlanRecord) -> Element<'a, Message> {
    let cards = Row::new()
        .spacing(spacing::SM)
        .push(property_card(icons::bed(), plan.bedrooms.to_string(), "Bedrooms"))
        .push(property_card(icons::bath(), plan.bathrooms.to_string(), "Bathrooms"))
        .push(property_card(icons::car(), plan.garage.to_string(), "Garage"))
        .push(property_card(icons::layers(), plan.levels.to_string(), "Levels"))
        .push(property_card(
            icons::ruler(),
            format!("{} m²", plan.floor_area),
            "Floor Area",
        ))
        .wrap()
        .vertical_spacing(spacing::SM);

    let mut body = Column::new().spacing(spacing::MD).push(cards);
    if !plan.features.is_empty() {
        body = body.push(checklist(&plan.features));
    }
    section("Key Features", body.into())
}

// =============================================================================
// Floors
// =============================================================================

fn floors<'a>(state: &'a State, plan: &'a PlanRecord) -> Element<'a, Message> {
    if plan.floors.is_empty() {
        return column![].into();
    }

    let rows = plan
        .floors
        .iter()
        .enumerate()
        .map(|(i, floor)| floor_row(i, floor, state.is_floor_expanded(i)));

    section(
        "Floor Plans",
        Column::with_children(rows).spacing(spacing::XS).into(),
    )
}

fn floor_row<'a>(index: usize, floor: &'a FloorDescriptor, expanded: bool) -> Element<'a, Message> {
    let chevron = if expanded {
        icons::chevron_up()
    } else {
        icons::chevron_down()
    };

    let header = button(
        row![
            text(floor.heading()).font(BOLD).width(Length::Fill),
            text(format!("{} m²", floor.area)).color(theming::muted_text_color()),
            icons::sized(chevron, sizing::ICON_SM),
        ]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .on_press(Message::ToggleFloor(index))
    .style(styles::button::secondary);

    if !expanded {
        return header.into();
    }

    let mut details = column![
        detail_line("Floor Area", format!("{} m²", floor.area)),
        detail_line("Bedrooms", floor.bedrooms.to_string()),
        detail_line("Bathrooms", format_bathrooms(floor.bathrooms)),
        detail_line("Lounges", floor.lounges.to_string()),
        detail_line("Dining Areas", floor.dining_areas.to_string()),
    ]
    .spacing(spacing::XXS)
    .padding([spacing::XS, spacing::MD]);

    if let Some(notes) = floor.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        details = details.push(
            text(notes)
                .size(typography::BODY_SM)
                .color(theming::muted_text_color()),
        );
    }

    column![header, details].into()
}

fn format_bathrooms(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

// =============================================================================
// Specifications, details, amenities
// =============================================================================

fn detail_line<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).color(theming::muted_text_color()).width(Length::Fill),
        text(value).font(BOLD),
    ]
    .spacing(spacing::SM)
    .into()
}

fn specifications<'a>(plan: &'a PlanRecord) -> Element<'a, Message> {
    section(
        "Specifications",
        column![
            detail_line("Dimensions", plan.dimensions_label()),
            detail_line("Floor Area", format!("{} m²", plan.floor_area)),
            detail_line("Levels", plan.levels.to_string()),
            detail_line("Garage", format!("{} car", plan.garage)),
        ]
        .spacing(spacing::XS)
        .into(),
    )
}

fn property_details<'a>(plan: &'a PlanRecord) -> Element<'a, Message> {
    let styles_label = if plan.styles.is_empty() {
        "-".to_string()
    } else {
        plan.styles.join(", ")
    };
    let pets = if plan.pet_friendly { "Yes" } else { "No" };

    section(
        "Property Details",
        column![
            detail_line("Style", styles_label),
            detail_line("Status", plan.status_label().to_string()),
            detail_line("Pet Friendly", pets.to_string()),
        ]
        .spacing(spacing::XS)
        .into(),
    )
}

fn amenities<'a>(plan: &'a PlanRecord) -> Element<'a, Message> {
    if plan.amenities.is_empty() {
        return column![].into();
    }
    section("Property Amenities", checklist(&plan.amenities))
}

// =============================================================================
// Overlays
// =============================================================================

fn fullscreen<'a>(
    plan: &'a PlanRecord,
    index: GalleryIndex,
    cache: &'a ImageCache,
) -> Element<'a, Message> {
    let header = row![
        text(&plan.title).size(typography::TITLE_SM),
        container(text(index.counter_label()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::FULL)),
        container(text("")).width(Length::Fill),
        close_button(Message::CloseOverlay),
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center);

    let picture = image_frame::view(
        cache,
        &plan.images[index.current()],
        Length::Fill,
        Length::Fill,
        ContentFit::Contain,
    );

    let mut content = Column::new().spacing(spacing::MD).push(header);
    if index.has_multiple() {
        content = content
            .push(
                row![
                    arrow_button(icons::chevron_left(), Message::CarouselPrevious),
                    picture,
                    arrow_button(icons::chevron_right(), Message::CarouselNext),
                ]
                .spacing(spacing::SM)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
            )
            .push(thumbnail_strip(
                cache,
                &plan.images,
                index.current(),
                Message::CarouselSelect,
            ));
    } else {
        content = content.push(picture);
    }

    modal(content.into(), Message::CloseOverlay)
}

fn video_panel<'a>(link: String) -> Element<'a, Message> {
    let panel = container(
        column![
            row![
                text("Plan Video").size(typography::TITLE_MD).font(BOLD).width(Length::Fill),
                close_button(Message::CloseOverlay),
            ]
            .align_y(alignment::Vertical::Center),
            text("Open this link in your browser to watch the walkthrough.")
                .color(theming::muted_text_color()),
            container(text(link).size(typography::BODY_SM))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::panel),
            button(
                row![
                    icons::tinted(icons::copy(), sizing::ICON_SM, palette::WHITE),
                    text("Copy link"),
                ]
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center),
            )
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::CopyVideoLink)
            .style(styles::button::primary),
        ]
        .spacing(spacing::MD),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::modal);

    modal(panel.into(), Message::CloseOverlay)
}
