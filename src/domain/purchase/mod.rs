// SPDX-License-Identifier: MPL-2.0
//! Simulated purchase flow.
//!
//! - [`WizardStage`] / [`WizardAction`]: the stage machine
//! - [`Checkout`]: contact and payment details owned by one attempt
//! - [`masking`]: card, expiry and CVV input masks
//!
//! Nothing here talks to a payment processor. "Complete Purchase" is a local
//! stage change only.

mod info;
pub mod masking;
mod stage;

pub use info::{Checkout, ContactField, ContactInfo, PaymentField, PaymentInfo, Rejection};
pub use stage::{WizardAction, WizardStage};
