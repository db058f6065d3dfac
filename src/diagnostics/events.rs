// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! Events describe what the user did and what the application did in
//! response. They never carry contact or payment details; purchase steps are
//! recorded by stage name only.

use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// User-initiated actions captured for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Screen Navigation
    // ==========================================================================
    OpenListing,
    OpenPlan { plan_id: String },
    OpenQuote,

    // ==========================================================================
    // Gallery
    // ==========================================================================
    OpenGallery,
    CloseGallery,
    NextImage,
    PreviousImage,
    SelectImage { index: usize },

    // ==========================================================================
    // Detail Page Overlays
    // ==========================================================================
    OpenFullscreen,
    CloseFullscreen,
    OpenVideo,
    CopyVideoLink,
    CloseVideo,
    ToggleFavourite,

    // ==========================================================================
    // Purchase Wizard
    // ==========================================================================
    /// A wizard action was accepted; `stage` is the stage entered.
    PurchaseStep { stage: &'static str },

    // ==========================================================================
    // Quote & Settings
    // ==========================================================================
    SubmitQuote,
    ChangeTheme { mode: &'static str },
}

/// Application-side outcomes captured for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// Plan detail resolved; `source` is `api`, `catalog` or `not_found`.
    PlanResolved { plan_id: String, source: &'static str },
    ImageLoadFailed { reason: String },
    QuoteSubmitted,
    QuoteFailed { reason: String },
    ConfigWarning { message: String },
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        details: Option<String>,
    },
    App(AppEvent),
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::OpenListing => write!(f, "open_listing"),
            UserAction::OpenPlan { plan_id } => write!(f, "open_plan({plan_id})"),
            UserAction::OpenQuote => write!(f, "open_quote"),
            UserAction::OpenGallery => write!(f, "open_gallery"),
            UserAction::CloseGallery => write!(f, "close_gallery"),
            UserAction::NextImage => write!(f, "next_image"),
            UserAction::PreviousImage => write!(f, "previous_image"),
            UserAction::SelectImage { index } => write!(f, "select_image({index})"),
            UserAction::OpenFullscreen => write!(f, "open_fullscreen"),
            UserAction::CloseFullscreen => write!(f, "close_fullscreen"),
            UserAction::OpenVideo => write!(f, "open_video"),
            UserAction::CopyVideoLink => write!(f, "copy_video_link"),
            UserAction::CloseVideo => write!(f, "close_video"),
            UserAction::ToggleFavourite => write!(f, "toggle_favourite"),
            UserAction::PurchaseStep { stage } => write!(f, "purchase_step({stage})"),
            UserAction::SubmitQuote => write!(f, "submit_quote"),
            UserAction::ChangeTheme { mode } => write!(f, "change_theme({mode})"),
        }
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEvent::PlanResolved { plan_id, source } => {
                write!(f, "plan_resolved({plan_id}, {source})")
            }
            AppEvent::ImageLoadFailed { reason } => write!(f, "image_load_failed: {reason}"),
            AppEvent::QuoteSubmitted => write!(f, "quote_submitted"),
            AppEvent::QuoteFailed { reason } => write!(f, "quote_failed: {reason}"),
            AppEvent::ConfigWarning { message } => write!(f, "config_warning: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_display_is_snake_case() {
        assert_eq!(UserAction::NextImage.to_string(), "next_image");
        assert_eq!(
            UserAction::PurchaseStep { stage: "payment" }.to_string(),
            "purchase_step(payment)"
        );
    }

    #[test]
    fn app_event_display_includes_source() {
        let event = AppEvent::PlanResolved {
            plan_id: "3".into(),
            source: "catalog",
        };
        assert_eq!(event.to_string(), "plan_resolved(3, catalog)");
    }
}
