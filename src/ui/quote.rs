// SPDX-License-Identifier: MPL-2.0
//! "Get a Quote" screen: custom design request form.
//!
//! Submission is a single POST. On success the form shows a confirmation
//! panel and clears itself after a short delay; on failure the typed values
//! stay in place so the visitor can retry.

use crate::application::port::FetchError;
use crate::domain::quote::{
    MissingInput, QuoteField, QuoteForm, QuoteRequest, BUDGET_OPTIONS, STYLE_OPTIONS,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles, theming};
use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_input, Column,
};
use iced::{alignment, Element, Font, Length};

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    /// Confirmation panel is visible until the reset fires.
    Sent,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(QuoteField, String),
    StylePicked(&'static str),
    BudgetPicked(&'static str),
    Submit,
    Submitted(Result<(), FetchError>),
    /// Delay after a successful submit has elapsed.
    ResetAfterSent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send this request to the quote endpoint.
    Submit(QuoteRequest),
    /// Submit was refused; these inputs are blank.
    Missing(Vec<MissingInput>),
    /// The server accepted the request; schedule the form reset.
    Sent,
    Failed(FetchError),
}

#[derive(Debug, Default)]
pub struct State {
    form: QuoteForm,
    phase: Phase,
    missing: Vec<MissingInput>,
}

impl State {
    #[must_use]
    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn missing(&self) -> &[MissingInput] {
        &self.missing
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::FieldChanged(field, value) => {
                if self.phase == Phase::Editing {
                    self.form.set(field, value);
                    self.missing.retain(|m| *m != MissingInput::Field(field));
                }
                Effect::None
            }
            Message::StylePicked(style) => {
                if self.phase == Phase::Editing {
                    self.form.preferred_style = Some(style);
                    self.missing.retain(|m| *m != MissingInput::Style);
                }
                Effect::None
            }
            Message::BudgetPicked(budget) => {
                if self.phase == Phase::Editing {
                    self.form.budget = Some(budget);
                    self.missing.retain(|m| *m != MissingInput::Budget);
                }
                Effect::None
            }
            Message::Submit => {
                if self.phase != Phase::Editing {
                    return Effect::None;
                }
                let missing = self.form.missing_required();
                if !missing.is_empty() {
                    self.missing.clone_from(&missing);
                    return Effect::Missing(missing);
                }
                self.missing.clear();
                self.phase = Phase::Submitting;
                Effect::Submit(self.form.to_request())
            }
            Message::Submitted(result) => {
                if self.phase != Phase::Submitting {
                    return Effect::None;
                }
                match result {
                    Ok(()) => {
                        self.phase = Phase::Sent;
                        Effect::Sent
                    }
                    Err(error) => {
                        self.phase = Phase::Editing;
                        Effect::Failed(error)
                    }
                }
            }
            Message::ResetAfterSent => {
                if self.phase == Phase::Sent {
                    *self = Self::default();
                }
                Effect::None
            }
        }
    }

    fn is_missing(&self, input: &MissingInput) -> bool {
        self.missing.contains(input)
    }
}

// =============================================================================
// View
// =============================================================================

pub fn view(state: &State) -> Element<'_, Message> {
    let body: Element<'_, Message> = match state.phase {
        Phase::Sent => sent_panel(),
        Phase::Editing | Phase::Submitting => form(state),
    };

    scrollable(
        container(
            column![
                text("Get Your FREE Custom Quote").size(typography::TITLE_LG).font(BOLD),
                text("Tell us about your dream home and we'll provide a personalized design quote.")
                    .color(theming::muted_text_color()),
                body,
            ]
            .spacing(spacing::LG)
            .max_width(sizing::FORM_WIDTH),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn sent_panel<'a>() -> Element<'a, Message> {
    let step = |n: &'a str, line: &'a str| -> Element<'a, Message> {
        row![text(n).font(BOLD), text(line)].spacing(spacing::XS).into()
    };

    container(
        column![
            icons::tinted(icons::checkmark(), sizing::ICON_XL, theming::success_text_color()),
            text("Request Sent Successfully!").size(typography::TITLE_LG).font(BOLD),
            text("Thank you for submitting your house plan quote request."),
            column![
                text("What happens next?").font(BOLD),
                step("1.", "Your request has been saved for our team"),
                step("2.", "Our team will review your requirements"),
                step(
                    "3.",
                    "We'll contact you within 24 hours at the email or phone you provided"
                ),
            ]
            .spacing(spacing::XS),
            text("Returning to the form in 3 seconds...")
                .size(typography::BODY_SM)
                .color(theming::muted_text_color()),
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::success)
    .into()
}

fn label<'a>(content: &'a str, missing: bool) -> Element<'a, Message> {
    let label = text(content).size(typography::BODY_SM).font(BOLD);
    if missing {
        label.color(theming::error_text_color()).into()
    } else {
        label.into()
    }
}

fn field<'a>(state: &'a State, field: QuoteField) -> Element<'a, Message> {
    let mut input = text_input(field.placeholder(), state.form.get(field)).padding(spacing::XS);
    if state.phase == Phase::Editing {
        input = input.on_input(move |value| Message::FieldChanged(field, value));
    }
    column![
        label(field.label(), state.is_missing(&MissingInput::Field(field))),
        input
    ]
    .spacing(spacing::XXS)
    .width(Length::Fill)
    .into()
}

fn pair<'a>(left: Element<'a, Message>, right: Element<'a, Message>) -> Element<'a, Message> {
    row![left, right].spacing(spacing::MD).into()
}

fn card<'a>(title: &'a str, body: Column<'a, Message>) -> Element<'a, Message> {
    container(
        column![text(title).size(typography::TITLE_MD).font(BOLD), body.spacing(spacing::MD)]
            .spacing(spacing::MD),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

fn form(state: &State) -> Element<'_, Message> {
    let style_picker = column![
        label("Preferred Style *", state.is_missing(&MissingInput::Style)),
        pick_list(STYLE_OPTIONS, state.form.preferred_style, Message::StylePicked)
            .placeholder("Select a style")
            .width(Length::Fill),
    ]
    .spacing(spacing::XXS);

    let mut preferences = Column::new().push(style_picker);
    if state.form.wants_custom_style() {
        preferences = preferences.push(field(state, QuoteField::CustomStyle));
    }
    preferences = preferences
        .push(pair(
            field(state, QuoteField::Bedrooms),
            field(state, QuoteField::Bathrooms),
        ))
        .push(field(state, QuoteField::OtherRooms));

    let budget_picker = column![
        label("Budget *", state.is_missing(&MissingInput::Budget)),
        pick_list(BUDGET_OPTIONS, state.form.budget, Message::BudgetPicked)
            .placeholder("Select a budget range")
            .width(Length::Fill),
    ]
    .spacing(spacing::XXS);

    let submit_label = if state.phase == Phase::Submitting {
        "Submitting..."
    } else {
        "Submit Request"
    };
    let mut submit = button(
        text(submit_label)
            .font(BOLD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary);
    if state.phase == Phase::Editing {
        submit = submit.on_press(Message::Submit);
    }

    let mut content = column![
        card(
            "Personal Details",
            column![
                pair(
                    field(state, QuoteField::FullName),
                    field(state, QuoteField::Email)
                ),
                pair(
                    field(state, QuoteField::Phone),
                    field(state, QuoteField::City)
                ),
            ],
        ),
        card("Design Preferences", preferences),
        card(
            "Property Details",
            column![
                pair(
                    field(state, QuoteField::YardLength),
                    field(state, QuoteField::YardBreadth)
                ),
                budget_picker,
            ],
        ),
        card("Tell Us More", column![field(state, QuoteField::Description)]),
    ]
    .spacing(spacing::LG);

    if !state.missing.is_empty() {
        let names: Vec<&str> = state.missing.iter().map(MissingInput::label).collect();
        content = content.push(
            text(format!("Please fill in: {}", names.join(", ")))
                .color(theming::error_text_color()),
        );
    }

    content
        .push(submit)
        .push(
            text("By submitting, you agree to our terms and will be contacted via WhatsApp/Email.")
                .size(typography::BODY_SM)
                .color(theming::muted_text_color()),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::default();
        for (field, value) in [
            (QuoteField::FullName, "Naledi Dlamini"),
            (QuoteField::Email, "naledi@example.com"),
            (QuoteField::Phone, "0831234567"),
            (QuoteField::City, "Durban"),
            (QuoteField::Bedrooms, "3"),
            (QuoteField::Bathrooms, "2"),
            (QuoteField::YardLength, "15"),
            (QuoteField::YardBreadth, "25"),
            (QuoteField::Description, "Single storey with a wide stoep."),
        ] {
            state.handle(Message::FieldChanged(field, value.into()));
        }
        state.handle(Message::StylePicked("Farmhouse"));
        state.handle(Message::BudgetPicked("R3,000 - R3,500"));
        state
    }

    #[test]
    fn blank_submit_reports_missing_inputs() {
        let mut state = State::default();
        let effect = state.handle(Message::Submit);
        let Effect::Missing(missing) = effect else {
            panic!("expected missing inputs, got {effect:?}");
        };
        assert!(missing.contains(&MissingInput::Budget));
        assert_eq!(state.phase(), Phase::Editing);
        assert_eq!(state.missing(), missing.as_slice());
    }

    #[test]
    fn editing_clears_missing_marker() {
        let mut state = State::default();
        state.handle(Message::Submit);
        state.handle(Message::FieldChanged(QuoteField::Email, "a@b.co".into()));
        assert!(!state
            .missing()
            .contains(&MissingInput::Field(QuoteField::Email)));
    }

    #[test]
    fn complete_submit_emits_request() {
        let mut state = filled();
        let effect = state.handle(Message::Submit);
        let Effect::Submit(request) = effect else {
            panic!("expected submit, got {effect:?}");
        };
        assert_eq!(request.email, "naledi@example.com");
        assert!(request.house_plan.is_none());
        assert!(request.requirements.starts_with("Style: Farmhouse\n"));
        assert_eq!(state.phase(), Phase::Submitting);
    }

    #[test]
    fn success_shows_panel_then_resets() {
        let mut state = filled();
        state.handle(Message::Submit);
        assert_eq!(state.handle(Message::Submitted(Ok(()))), Effect::Sent);
        assert_eq!(state.phase(), Phase::Sent);

        state.handle(Message::ResetAfterSent);
        assert_eq!(state.phase(), Phase::Editing);
        assert_eq!(*state.form(), QuoteForm::default());
    }

    #[test]
    fn failure_keeps_form_values() {
        let mut state = filled();
        state.handle(Message::Submit);
        let effect = state.handle(Message::Submitted(Err(FetchError::Status(500))));
        assert_eq!(effect, Effect::Failed(FetchError::Status(500)));
        assert_eq!(state.phase(), Phase::Editing);
        assert_eq!(state.form().city, "Durban");
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut state = filled();
        state.handle(Message::Submit);
        state.handle(Message::FieldChanged(QuoteField::City, "Cape Town".into()));
        assert_eq!(state.form().city, "Durban");
    }

    #[test]
    fn stray_reset_does_not_clear_editing_form() {
        let mut state = filled();
        state.handle(Message::ResetAfterSent);
        assert_eq!(state.form().city, "Durban");
    }
}
