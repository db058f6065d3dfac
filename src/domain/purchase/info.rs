// SPDX-License-Identifier: MPL-2.0
//! Details collected by the purchase wizard.

use super::masking;
use super::stage::{WizardAction, WizardStage};
use std::fmt;

// =============================================================================
// ContactInfo
// =============================================================================

/// Editable contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Province,
    City,
    PickupPoint,
    Area,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [ContactField; 7] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Province,
        ContactField::City,
        ContactField::PickupPoint,
        ContactField::Area,
    ];

    /// Input placeholder shown in the form.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Phone => "Your Phone",
            ContactField::Province => "Province",
            ContactField::City => "City",
            ContactField::PickupPoint => "Pick-up Point",
            ContactField::Area => "Area / Mall",
        }
    }

    /// Whether the field must be non-blank before proceeding to payment.
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Email | ContactField::Phone
        )
    }
}

/// Buyer contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub pickup_point: String,
    pub area: String,
}

impl ContactInfo {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Province => &self.province,
            ContactField::City => &self.city,
            ContactField::PickupPoint => &self.pickup_point,
            ContactField::Area => &self.area,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Province => &mut self.province,
            ContactField::City => &mut self.city,
            ContactField::PickupPoint => &mut self.pickup_point,
            ContactField::Area => &mut self.area,
        };
        *slot = value;
    }

    /// Required fields that are still blank. Presence only, no format check.
    #[must_use]
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// PaymentInfo
// =============================================================================

/// Editable payment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    Expiry,
    Cvv,
}

/// Masked card details for the simulated payment.
///
/// Values only change through the setters, which apply the input masks.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PaymentInfo {
    card_number: String,
    expiry: String,
    cvv: String,
}

impl PaymentInfo {
    /// Applies the matching input mask to `raw` and stores the result.
    pub fn set(&mut self, field: PaymentField, raw: &str) {
        match field {
            PaymentField::CardNumber => self.card_number = masking::format_card_number(raw),
            PaymentField::Expiry => self.expiry = masking::format_expiry(raw),
            PaymentField::Cvv => self.cvv = masking::format_cvv(raw),
        }
    }

    #[must_use]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    #[must_use]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    #[must_use]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// Card details never reach logs, even through `{:?}`.
impl fmt::Debug for PaymentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentInfo")
            .field("card_number", &"<redacted>")
            .field("expiry", &"<redacted>")
            .field("cvv", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Why a wizard action was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The action is not valid from the current stage.
    InvalidTransition,
    /// Proceeding needs these contact fields filled in.
    MissingContact(Vec<ContactField>),
}

/// Contact and payment details owned by one purchase attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkout {
    pub contact: ContactInfo,
    pub payment: PaymentInfo,
}

impl Checkout {
    /// Runs `action` against `stage`, returning the next stage.
    ///
    /// Cancelling or finishing wipes both contact and payment details.
    /// Proceeding to payment requires the required contact fields.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] and leaves the details untouched when the
    /// action is invalid from `stage` or required contact fields are blank.
    pub fn apply(
        &mut self,
        stage: WizardStage,
        action: WizardAction,
    ) -> Result<WizardStage, Rejection> {
        let next = stage
            .apply(action)
            .ok_or(Rejection::InvalidTransition)?;

        if action == WizardAction::Proceed {
            let missing = self.contact.missing_required();
            if !missing.is_empty() {
                return Err(Rejection::MissingContact(missing));
            }
        }

        if action.clears_details() {
            self.clear();
        }
        Ok(next)
    }

    /// Resets both contact and payment details to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
