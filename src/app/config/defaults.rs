// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Endpoint paths relative to the configured base URL
//! - **Network**: Request timeout
//! - **Gallery**: Decoded image cache size
//! - **Notifications**: Toast lifetimes
//! - **Quote**: Form reset delay after a successful submission

use crate::domain::settings::{image_cache_bounds, request_timeout_bounds};

// ==========================================================================
// API Defaults
// ==========================================================================

/// Plan listing endpoint, relative to the API base URL.
pub const DEFAULT_PLANS_ENDPOINT: &str = "/api/core/plans/";

/// Plan detail endpoint template; `:id` is replaced by the plan identity.
pub const DEFAULT_PLAN_DETAIL_ENDPOINT: &str = "/api/core/plans/:id/";

/// Quote submission endpoint, relative to the API base URL.
pub const DEFAULT_QUOTES_ENDPOINT: &str = "/api/core/quotes/";

// ==========================================================================
// Environment Overrides
// ==========================================================================

pub const ENV_API_BASE_URL: &str = "CEDRIC_PLANS_API_BASE_URL";
pub const ENV_API_PLAN_DETAIL: &str = "CEDRIC_PLANS_API_PLAN_DETAIL";
pub const ENV_API_QUOTES: &str = "CEDRIC_PLANS_API_QUOTES";
pub const ENV_MEDIA_BASE_URL: &str = "CEDRIC_PLANS_MEDIA_BASE_URL";

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout applied to API and image requests (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = request_timeout_bounds::DEFAULT_SECS;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = image_cache_bounds::DEFAULT;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum toasts shown at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Lifetime of success and info toasts (milliseconds).
pub const NOTIFICATION_SHORT_MS: u64 = 3000;

/// Lifetime of warning toasts (milliseconds).
pub const NOTIFICATION_LONG_MS: u64 = 5000;

// ==========================================================================
// Quote Defaults
// ==========================================================================

/// Delay before the quote form resets after a successful submission (ms).
pub const QUOTE_RESET_DELAY_MS: u64 = 3000;

// ==========================================================================
// Detail Page Defaults
// ==========================================================================

/// Description length shown before "Show more".
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_template_has_id_placeholder() {
        assert!(DEFAULT_PLAN_DETAIL_ENDPOINT.contains(":id"));
    }

    #[test]
    fn error_toasts_outlive_info_toasts() {
        assert!(NOTIFICATION_LONG_MS > NOTIFICATION_SHORT_MS);
    }
}
