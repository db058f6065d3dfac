// SPDX-License-Identifier: MPL-2.0
//! Purchase wizard stages.

/// Step of the purchase wizard on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStage {
    /// No purchase overlay visible.
    #[default]
    Closed,
    /// Contact details are being collected.
    BuyIntent,
    /// Card details are being collected.
    Payment,
    /// Confirmation shown after the simulated payment.
    Success,
}

/// User action that may move the wizard to another stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// "Buy Plan".
    Buy,
    /// "Proceed to Payment".
    Proceed,
    /// "Complete Purchase".
    Complete,
    /// "Continue Shopping".
    ContinueShopping,
    /// Close button or "Cancel".
    Cancel,
}

impl WizardAction {
    /// Returns `true` if this action wipes the collected contact and
    /// payment details when it is accepted.
    #[must_use]
    pub fn clears_details(self) -> bool {
        matches!(self, Self::Cancel | Self::ContinueShopping)
    }
}

impl WizardStage {
    /// Returns the stage reached by `action`, or `None` when the action is
    /// not valid from this stage.
    ///
    /// Stages only move forward (`BuyIntent → Payment → Success`), and any
    /// open stage can be cancelled back to [`WizardStage::Closed`].
    #[must_use]
    pub fn apply(self, action: WizardAction) -> Option<Self> {
        match (self, action) {
            (Self::Closed, WizardAction::Buy) => Some(Self::BuyIntent),
            (Self::BuyIntent, WizardAction::Proceed) => Some(Self::Payment),
            (Self::Payment, WizardAction::Complete) => Some(Self::Success),
            (Self::Success, WizardAction::ContinueShopping) => Some(Self::Closed),
            (Self::BuyIntent | Self::Payment | Self::Success, WizardAction::Cancel) => {
                Some(Self::Closed)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::Closed
    }
}
