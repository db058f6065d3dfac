// SPDX-License-Identifier: MPL-2.0
//! Custom quote request form.
//!
//! The backend stores a quote as contact details plus one free-text
//! `requirements` blob, so the structured form is flattened into a fixed
//! multi-line summary before it is sent.

use super::plan::PlanId;

/// Architectural styles offered in the form.
pub const STYLE_OPTIONS: &[&str] = &[
    "Modern",
    "Contemporary",
    "Traditional",
    "Mediterranean",
    "Farmhouse",
    "Tuscan",
    "Tuscan Roof",
    "Minimalist",
    "Craftsman",
    "Colonial",
    "Ranch",
    "Victorian",
    "Not sure",
    OTHER_STYLE,
];

/// Style option that reveals the free-text style field.
pub const OTHER_STYLE: &str = "Other";

/// Budget ranges offered in the form.
pub const BUDGET_OPTIONS: &[&str] = &[
    "R1,000 - R1,500",
    "R2,000 - R2,500",
    "R3,000 - R3,500",
    "R4,000 - R4,500",
    "R5,000 - R5,500",
    "R6,000 - R6,500",
    "R7,000 - R7,500",
    "R8,000 - R8,500",
    "R9,000 - R9,500",
    "R10,000+",
    "Not sure yet",
];

/// Free-text field of the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    FullName,
    Email,
    Phone,
    City,
    CustomStyle,
    Bedrooms,
    Bathrooms,
    OtherRooms,
    YardLength,
    YardBreadth,
    Description,
}

impl QuoteField {
    /// Label shown above the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuoteField::FullName => "Full Name *",
            QuoteField::Email => "Email *",
            QuoteField::Phone => "Phone Number *",
            QuoteField::City => "City *",
            QuoteField::CustomStyle => "Describe Your Style *",
            QuoteField::Bedrooms => "Bedrooms *",
            QuoteField::Bathrooms => "Bathrooms *",
            QuoteField::OtherRooms => "Other Required Rooms",
            QuoteField::YardLength => "Length (m) *",
            QuoteField::YardBreadth => "Breadth (m) *",
            QuoteField::Description => "Project Description *",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            QuoteField::FullName => "Your full name",
            QuoteField::Email => "your@email.com",
            QuoteField::Phone => "+27 (0) 123 456 789",
            QuoteField::City => "Your city",
            QuoteField::CustomStyle => "e.g., Blend of Modern and Tuscan with minimalist interiors",
            QuoteField::Bedrooms => "e.g., 3",
            QuoteField::Bathrooms => "e.g., 2",
            QuoteField::OtherRooms => "e.g., Home office, gym, guest suite, entertainment area...",
            QuoteField::YardLength => "e.g., 20",
            QuoteField::YardBreadth => "e.g., 30",
            QuoteField::Description => {
                "Describe your vision for the home, any specific features, lifestyle needs, or inspiration..."
            }
        }
    }
}

/// What the form lacks before it can be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingInput {
    Field(QuoteField),
    Style,
    Budget,
}

impl MissingInput {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MissingInput::Field(field) => field.label().trim_end_matches(" *"),
            MissingInput::Style => "Preferred Style",
            MissingInput::Budget => "Budget",
        }
    }
}

/// State of the quote form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub preferred_style: Option<&'static str>,
    pub custom_style: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub other_rooms: String,
    pub yard_length: String,
    pub yard_breadth: String,
    pub budget: Option<&'static str>,
    pub description: String,
}

/// Payload sent to the quote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub house_plan: Option<PlanId>,
    pub requirements: String,
}

impl QuoteForm {
    #[must_use]
    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::FullName => &self.full_name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::City => &self.city,
            QuoteField::CustomStyle => &self.custom_style,
            QuoteField::Bedrooms => &self.bedrooms,
            QuoteField::Bathrooms => &self.bathrooms,
            QuoteField::OtherRooms => &self.other_rooms,
            QuoteField::YardLength => &self.yard_length,
            QuoteField::YardBreadth => &self.yard_breadth,
            QuoteField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: QuoteField, value: String) {
        let slot = match field {
            QuoteField::FullName => &mut self.full_name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::City => &mut self.city,
            QuoteField::CustomStyle => &mut self.custom_style,
            QuoteField::Bedrooms => &mut self.bedrooms,
            QuoteField::Bathrooms => &mut self.bathrooms,
            QuoteField::OtherRooms => &mut self.other_rooms,
            QuoteField::YardLength => &mut self.yard_length,
            QuoteField::YardBreadth => &mut self.yard_breadth,
            QuoteField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Returns `true` when "Other" is picked and the custom style is needed.
    #[must_use]
    pub fn wants_custom_style(&self) -> bool {
        self.preferred_style == Some(OTHER_STYLE)
    }

    /// Style written into the requirements summary.
    #[must_use]
    pub fn effective_style(&self) -> &str {
        if self.wants_custom_style() {
            &self.custom_style
        } else {
            self.preferred_style.unwrap_or_default()
        }
    }

    /// Required inputs that are still blank, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<MissingInput> {
        let blank = |field: QuoteField| {
            self.get(field)
                .trim()
                .is_empty()
                .then_some(MissingInput::Field(field))
        };

        [
            blank(QuoteField::FullName),
            blank(QuoteField::Email),
            blank(QuoteField::Phone),
            blank(QuoteField::City),
            self.preferred_style.is_none().then_some(MissingInput::Style),
            self.wants_custom_style()
                .then(|| blank(QuoteField::CustomStyle))
                .flatten(),
            blank(QuoteField::Bedrooms),
            blank(QuoteField::Bathrooms),
            blank(QuoteField::YardLength),
            blank(QuoteField::YardBreadth),
            self.budget.is_none().then_some(MissingInput::Budget),
            blank(QuoteField::Description),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Multi-line summary stored as the quote's requirements.
    #[must_use]
    pub fn requirements(&self) -> String {
        let other_rooms = if self.other_rooms.trim().is_empty() {
            "None"
        } else {
            self.other_rooms.as_str()
        };

        format!(
            "Style: {style}\n\
             Bedrooms: {bedrooms}\n\
             Bathrooms: {bathrooms}\n\
             Other Rooms: {other_rooms}\n\
             Yard Size: {length}m x {breadth}m\n\
             Budget: {budget}\n\
             City: {city}\n\
             \n\
             Description:\n\
             {description}",
            style = self.effective_style(),
            bedrooms = self.bedrooms,
            bathrooms = self.bathrooms,
            length = self.yard_length,
            breadth = self.yard_breadth,
            budget = self.budget.unwrap_or_default(),
            city = self.city,
            description = self.description,
        )
        .trim()
        .to_string()
    }

    /// Builds the request body. Quotes from this form are never tied to a
    /// specific plan.
    #[must_use]
    pub fn to_request(&self) -> QuoteRequest {
        QuoteRequest {
            name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            house_plan: None,
            requirements: self.requirements(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> QuoteForm {
        QuoteForm {
            full_name: "Lerato Mokoena".into(),
            email: "lerato@example.com".into(),
            phone: "0711234567".into(),
            city: "Pretoria".into(),
            preferred_style: Some("Tuscan"),
            custom_style: String::new(),
            bedrooms: "4".into(),
            bathrooms: "3".into(),
            other_rooms: String::new(),
            yard_length: "20".into(),
            yard_breadth: "30".into(),
            budget: Some("R5,000 - R5,500"),
            description: "Open plan living with a large patio.".into(),
        }
    }

    #[test]
    fn requirements_summary_layout() {
        let expected = "Style: Tuscan\n\
                        Bedrooms: 4\n\
                        Bathrooms: 3\n\
                        Other Rooms: None\n\
                        Yard Size: 20m x 30m\n\
                        Budget: R5,000 - R5,500\n\
                        City: Pretoria\n\
                        \n\
                        Description:\n\
                        Open plan living with a large patio.";
        assert_eq!(complete().requirements(), expected);
    }

    #[test]
    fn other_style_uses_custom_text() {
        let mut form = complete();
        form.preferred_style = Some(OTHER_STYLE);
        form.custom_style = "Cape Dutch revival".into();
        assert!(form.requirements().starts_with("Style: Cape Dutch revival\n"));
    }

    #[test]
    fn other_rooms_are_listed_when_given() {
        let mut form = complete();
        form.other_rooms = "Home office".into();
        assert!(form.requirements().contains("Other Rooms: Home office\n"));
    }

    #[test]
    fn request_has_no_house_plan() {
        let request = complete().to_request();
        assert_eq!(request.name, "Lerato Mokoena");
        assert!(request.house_plan.is_none());
        assert!(request.requirements.contains("Yard Size: 20m x 30m"));
    }

    #[test]
    fn complete_form_has_nothing_missing() {
        assert!(complete().missing_required().is_empty());
    }

    #[test]
    fn empty_form_lists_missing_inputs() {
        let missing = QuoteForm::default().missing_required();
        assert!(missing.contains(&MissingInput::Field(QuoteField::FullName)));
        assert!(missing.contains(&MissingInput::Style));
        assert!(missing.contains(&MissingInput::Budget));
        assert!(!missing.contains(&MissingInput::Field(QuoteField::OtherRooms)));
        assert!(!missing.contains(&MissingInput::Field(QuoteField::CustomStyle)));
    }

    #[test]
    fn custom_style_required_only_for_other() {
        let mut form = complete();
        form.preferred_style = Some(OTHER_STYLE);
        assert_eq!(
            form.missing_required(),
            vec![MissingInput::Field(QuoteField::CustomStyle)]
        );
    }

    #[test]
    fn missing_input_labels_drop_marker() {
        assert_eq!(MissingInput::Field(QuoteField::Email).label(), "Email");
        assert_eq!(MissingInput::Budget.label(), "Budget");
    }
}
