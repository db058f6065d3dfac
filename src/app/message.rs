// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::FetchError;
use crate::ui::gallery::{self, NavKey};
use crate::ui::{listing, navbar, notifications, plan_details, quote};
use iced::widget::image;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Listing(listing::Message),
    PlanDetails(plan_details::Message),
    Gallery(gallery::Message),
    Quote(quote::Message),
    Notification(notifications::NotificationMessage),
    /// A gallery image finished downloading and decoding.
    ImageLoaded {
        reference: String,
        result: Result<image::Handle, FetchError>,
    },
    /// Navigation key pressed while an overlay is open.
    Key(NavKey),
    /// Periodic tick for notification expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Plan identity to open on startup instead of the listing.
    pub plan: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over `CEDRIC_PLANS_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// API base URL override. Takes precedence over the settings file and
    /// `CEDRIC_PLANS_API_BASE_URL`.
    pub api_base: Option<String>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics: Option<PathBuf>,
}
