// SPDX-License-Identifier: MPL-2.0
//! The one overlay the detail page may show at a time.

use crate::domain::purchase::WizardStage;

/// Modal currently covering the detail page.
///
/// A single value rather than one flag per modal, so two overlays can never
/// be visible together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveOverlay {
    #[default]
    None,
    /// Full-window image viewer driven by the page carousel index.
    Fullscreen,
    Video,
    /// Purchase wizard at an open stage (never [`WizardStage::Closed`]).
    Purchase(WizardStage),
}

impl ActiveOverlay {
    /// Overlay showing `stage`; a closed wizard means no overlay.
    #[must_use]
    pub fn from_stage(stage: WizardStage) -> Self {
        if stage.is_open() {
            Self::Purchase(stage)
        } else {
            Self::None
        }
    }

    /// Current wizard stage, [`WizardStage::Closed`] unless the wizard is up.
    #[must_use]
    pub fn wizard_stage(self) -> WizardStage {
        match self {
            Self::Purchase(stage) => stage,
            Self::None | Self::Fullscreen | Self::Video => WizardStage::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_stage_means_no_overlay() {
        assert_eq!(ActiveOverlay::from_stage(WizardStage::Closed), ActiveOverlay::None);
        assert_eq!(
            ActiveOverlay::from_stage(WizardStage::Payment),
            ActiveOverlay::Purchase(WizardStage::Payment)
        );
    }

    #[test]
    fn non_purchase_overlays_report_closed_wizard() {
        assert_eq!(ActiveOverlay::Fullscreen.wizard_stage(), WizardStage::Closed);
        assert_eq!(ActiveOverlay::Video.wizard_stage(), WizardStage::Closed);
        assert!(ActiveOverlay::Video.is_open());
        assert!(!ActiveOverlay::None.is_open());
    }
}
