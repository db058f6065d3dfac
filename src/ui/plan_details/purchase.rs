// SPDX-License-Identifier: MPL-2.0
//! Purchase wizard panels: contact capture, payment capture, confirmation.
//!
//! Payment is simulated. "Complete Purchase" only moves the wizard forward.

use super::component::Message;
use crate::domain::plan::PlanRecord;
use crate::domain::purchase::{
    Checkout, ContactField, PaymentField, WizardAction, WizardStage,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::{close_button, modal};
use crate::ui::{icons, styles, theming};
use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{alignment, Element, Font, Length};

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Modal for `stage`, or `None` when the wizard is closed.
pub fn view<'a>(
    stage: WizardStage,
    plan: &'a PlanRecord,
    checkout: &'a Checkout,
    missing: &'a [ContactField],
) -> Option<Element<'a, Message>> {
    let panel = match stage {
        WizardStage::Closed => return None,
        WizardStage::BuyIntent => buy_intent(plan, checkout, missing),
        WizardStage::Payment => payment(plan, checkout),
        WizardStage::Success => success(plan, checkout),
    };

    let card = container(panel)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal);

    Some(modal(card.into(), Message::CloseOverlay))
}

fn header<'a>(title: String) -> Element<'a, Message> {
    row![
        text(title).size(typography::TITLE_MD).font(BOLD).width(Length::Fill),
        close_button(Message::Wizard(WizardAction::Cancel)),
    ]
    .align_y(alignment::Vertical::Center)
    .into()
}

fn caption<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(typography::BODY_SM)
        .color(theming::muted_text_color())
        .into()
}

fn price<'a>(plan: &PlanRecord, size: f32) -> Element<'a, Message> {
    text(plan.price_label())
        .size(size)
        .font(BOLD)
        .color(theming::accent_text_color())
        .into()
}

fn actions<'a>(primary: &'a str, action: WizardAction) -> Element<'a, Message> {
    column![
        button(text(primary).width(Length::Fill).align_x(alignment::Horizontal::Center))
            .width(Length::Fill)
            .padding(spacing::SM)
            .on_press(Message::Wizard(action))
            .style(styles::button::primary),
        button(text("Cancel").width(Length::Fill).align_x(alignment::Horizontal::Center))
            .width(Length::Fill)
            .padding(spacing::XS)
            .on_press(Message::Wizard(WizardAction::Cancel))
            .style(styles::button::secondary),
    ]
    .spacing(spacing::XS)
    .into()
}

fn buy_intent<'a>(
    plan: &'a PlanRecord,
    checkout: &'a Checkout,
    missing: &'a [ContactField],
) -> Element<'a, Message> {
    let inputs = ContactField::ALL.into_iter().map(|field| -> Element<'a, Message> {
        text_input(field.placeholder(), checkout.contact.get(field))
            .on_input(move |value| Message::ContactChanged(field, value))
            .padding(spacing::XS)
            .into()
    });

    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(header(format!("Purchase {}", plan.title)))
        .push(
            column![caption("Plan Price"), price(plan, typography::TITLE_LG)]
                .spacing(spacing::XXS),
        )
        .push(
            column![
                caption("Contact Information"),
                Column::with_children(inputs).spacing(spacing::XS)
            ]
            .spacing(spacing::XS),
        );

    if !missing.is_empty() {
        let names: Vec<&str> = missing
            .iter()
            .map(|f| f.placeholder().trim_start_matches("Your "))
            .collect();
        body = body.push(
            text(format!("Please fill in: {}", names.join(", ")))
                .size(typography::BODY_SM)
                .color(theming::error_text_color()),
        );
    }

    body.push(actions("Proceed to Payment", WizardAction::Proceed))
        .into()
}

fn payment<'a>(plan: &'a PlanRecord, checkout: &'a Checkout) -> Element<'a, Message> {
    let contact = &checkout.contact;
    let summary = |label: &'a str, value: &'a str| -> Element<'a, Message> {
        column![caption(label), text(value).size(typography::BODY_LG).font(BOLD)]
            .spacing(spacing::XXS)
            .into()
    };

    let card_input = |placeholder: &'a str, value: &'a str, field: PaymentField| {
        text_input(placeholder, value)
            .on_input(move |raw| Message::PaymentChanged(field, raw))
            .padding(spacing::XS)
    };

    let payment = &checkout.payment;
    column![
        header("Payment Details".to_string()),
        // Name and email are required to reach this stage.
        summary("Full Name", &contact.name),
        summary("Email", &contact.email),
        column![
            caption("Card Number"),
            card_input("1234 5678 9012 3456", payment.card_number(), PaymentField::CardNumber),
        ]
        .spacing(spacing::XXS),
        row![
            column![
                caption("Expiry Date"),
                card_input("MM/YY", payment.expiry(), PaymentField::Expiry),
            ]
            .spacing(spacing::XXS)
            .width(Length::FillPortion(1)),
            column![caption("CVV"), card_input("123", payment.cvv(), PaymentField::Cvv)]
                .spacing(spacing::XXS)
                .width(Length::FillPortion(1)),
        ]
        .spacing(spacing::SM),
        row![
            text("Total Amount:").font(BOLD).width(Length::Fill),
            price(plan, typography::TITLE_MD),
        ]
        .align_y(alignment::Vertical::Center),
        actions("Complete Purchase", WizardAction::Complete),
    ]
    .spacing(spacing::MD)
    .into()
}

fn success<'a>(plan: &'a PlanRecord, checkout: &'a Checkout) -> Element<'a, Message> {
    let email = checkout.contact.email.as_str();
    let line = |label: &'a str, value: String| -> Element<'a, Message> {
        row![
            text(label).color(theming::muted_text_color()).width(Length::Fill),
            text(value).font(BOLD),
        ]
        .into()
    };

    column![
        icons::tinted(icons::checkmark(), sizing::ICON_XL, theming::success_text_color()),
        text("Purchase Successful!").size(typography::TITLE_MD).font(BOLD),
        text("Thank you for your purchase.").color(theming::muted_text_color()),
        container(
            column![
                line("Plan:", plan.title.clone()),
                line("Amount:", plan.price_label()),
                line("Email:", email.to_string()),
            ]
            .spacing(spacing::XS),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::success),
        text(format!("A confirmation email has been sent to {email}"))
            .size(typography::BODY_SM),
        button(
            text("Continue Shopping")
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(Message::Wizard(WizardAction::ContinueShopping))
        .style(styles::button::primary),
    ]
    .spacing(spacing::MD)
    .align_x(alignment::Horizontal::Center)
    .into()
}
