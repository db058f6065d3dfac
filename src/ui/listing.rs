// SPDX-License-Identifier: MPL-2.0
//! Listing screen: a card for every catalog entry.

use crate::application::port::{CatalogSection, PlanCatalog};
use crate::domain::plan::{PlanId, PlanRecord};
use crate::media::ImageCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, image_frame, styles, theming};
use iced::widget::{button, column, container, row, scrollable, text, Column, Row};
use iced::{alignment, ContentFit, Element, Font, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenPlan(PlanId),
    OpenGallery(PlanId),
}

/// Section headings, in display order.
const SECTIONS: [(CatalogSection, &str); 2] = [
    (CatalogSection::HousePlans, "House Plans"),
    (CatalogSection::BuiltHomes, "Built Homes"),
];

/// First image of every card, for preloading.
#[must_use]
pub fn cover_images(catalog: &dyn PlanCatalog) -> Vec<String> {
    SECTIONS
        .iter()
        .flat_map(|(section, _)| catalog.section(*section))
        .filter_map(|plan| plan.images.first().cloned())
        .collect()
}

pub fn view<'a>(catalog: &'a dyn PlanCatalog, cache: &'a ImageCache) -> Element<'a, Message> {
    let mut page = Column::new().spacing(spacing::XL).padding(spacing::LG);

    for (section, heading) in SECTIONS {
        let plans = catalog.section(section);
        if plans.is_empty() {
            continue;
        }
        let cards = Row::with_children(plans.iter().map(|plan| card(plan, cache)))
            .spacing(spacing::MD)
            .wrap()
            .vertical_spacing(spacing::MD);

        page = page.push(
            column![text(heading).size(typography::TITLE_LG), cards].spacing(spacing::MD),
        );
    }

    scrollable(page).height(Length::Fill).into()
}

fn card<'a>(plan: &'a PlanRecord, cache: &ImageCache) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match plan.images.first() {
        Some(reference) => image_frame::view(
            cache,
            reference,
            Length::Fill,
            Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
            ContentFit::Cover,
        ),
        None => image_frame::unavailable(Length::Fill, Length::Fixed(sizing::CARD_IMAGE_HEIGHT)),
    };

    let mut title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text(&plan.title)
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        );
    if plan.is_new {
        title_row = title_row.push(badge("New", palette::SUCCESS_500));
    }
    if plan.is_popular {
        title_row = title_row.push(badge("Popular", palette::BRAND_500));
    }

    let stats = row![
        stat(icons::bed(), plan.bedrooms.to_string()),
        stat(icons::bath(), plan.bathrooms.to_string()),
        stat(icons::ruler(), format!("{} m²", plan.floor_area)),
    ]
    .spacing(spacing::MD);

    let mut actions = Row::new().spacing(spacing::SM).align_y(alignment::Vertical::Center).push(
        text(plan.price_label())
            .size(typography::BODY_LG)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(theming::accent_text_color())
            .width(Length::Fill),
    );
    if plan.images.len() > 1 {
        actions = actions.push(
            button(text("View gallery").size(typography::BODY_SM))
                .on_press(Message::OpenGallery(plan.id.clone()))
                .style(styles::button::link),
        );
    }

    let body = column![
        cover,
        column![title_row, stats, actions]
            .spacing(spacing::XS)
            .padding(spacing::SM),
    ];

    button(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(0)
        .on_press(Message::OpenPlan(plan.id.clone()))
        .style(styles::button::card)
        .into()
}

fn stat<'a>(icon: iced::widget::Svg<'static>, value: String) -> Element<'a, Message> {
    row![
        icons::tinted(icon, sizing::ICON_SM, theming::muted_text_color()),
        text(value).size(typography::BODY_SM),
    ]
    .spacing(spacing::XXS)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// Pill label used on cards and the detail page.
pub fn badge<'a, M: 'a>(label: &'a str, color: iced::Color) -> Element<'a, M> {
    container(text(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::EmbeddedCatalog;

    #[test]
    fn cover_images_take_first_image_of_each_entry() {
        let catalog = EmbeddedCatalog::load().expect("embedded catalog");
        let covers = cover_images(&catalog);
        let with_images = SECTIONS
            .iter()
            .flat_map(|(s, _)| catalog.section(*s))
            .filter(|p| !p.images.is_empty())
            .count();
        assert_eq!(covers.len(), with_images);
        assert_eq!(
            covers.first(),
            catalog.section(CatalogSection::HousePlans)[0].images.first()
        );
    }
}
