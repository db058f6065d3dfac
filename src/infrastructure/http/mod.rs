// SPDX-License-Identifier: MPL-2.0
//! HTTP adapters for the storefront API.
//!
//! - [`HttpPlanSource`]: implements [`PlanSource`](crate::application::port::PlanSource)
//! - [`HttpQuoteSubmitter`]: implements [`QuoteSubmitter`](crate::application::port::QuoteSubmitter)
//! - [`images`]: gallery image download and decoding
//!
//! All adapters share one `reqwest::Client` built by [`build_client`].

pub mod images;
mod payload;
mod plan_source;
mod quote;

pub use payload::{PlanPayload, QuotePayload};
pub use plan_source::HttpPlanSource;
pub use quote::HttpQuoteSubmitter;

use crate::application::port::FetchError;
use crate::domain::plan::PlanId;
use crate::domain::settings::RequestTimeout;

/// Placeholder replaced by the plan identity in the detail endpoint.
pub const ID_PLACEHOLDER: &str = ":id";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("CedricPlans/", env!("CARGO_PKG_VERSION"));

/// Fully resolved endpoint URLs.
///
/// Relative endpoints from the configuration are joined onto the base URL
/// when the endpoints are built; see [`ApiEndpoints::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiEndpoints {
    /// Detail URL template containing [`ID_PLACEHOLDER`].
    pub plan_detail: Option<String>,
    pub quotes: Option<String>,
    /// Base for server-relative image paths such as `/media/plans/a.jpg`.
    pub media_base: Option<String>,
}

impl ApiEndpoints {
    /// Resolves each endpoint against `base_url`. Blank values, and relative
    /// values without a base, stay unset.
    #[must_use]
    pub fn new(
        base_url: Option<&str>,
        plan_detail: Option<&str>,
        quotes: Option<&str>,
        media_base: Option<&str>,
    ) -> Self {
        let base_url = base_url.map(str::trim).filter(|b| !b.is_empty());
        let resolve = |endpoint: Option<&str>| {
            let endpoint = endpoint.map(str::trim).filter(|e| !e.is_empty())?;
            if base_url.is_none() && !is_absolute(endpoint) {
                return None;
            }
            Some(join_url(base_url, endpoint))
        };
        Self {
            plan_detail: resolve(plan_detail),
            quotes: resolve(quotes),
            media_base: media_base
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .or_else(|| base_url.map(origin_of)),
        }
    }

    /// Detail URL for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotConfigured`] when no detail endpoint is set.
    pub fn plan_detail_url(&self, id: &PlanId) -> Result<String, FetchError> {
        self.plan_detail
            .as_deref()
            .map(|template| template.replace(ID_PLACEHOLDER, id.as_str()))
            .ok_or(FetchError::NotConfigured)
    }

    /// Absolute URL for an image reference, or `None` when a relative path
    /// cannot be resolved.
    #[must_use]
    pub fn media_url(&self, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        if is_absolute(reference) {
            return Some(reference.to_string());
        }
        self.media_base
            .as_deref()
            .map(|base| join_url(Some(base), reference))
    }
}

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns [`FetchError::Network`] if the TLS backend cannot be initialised.
pub fn build_client(timeout: RequestTimeout) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout.as_duration())
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn join_url(base: Option<&str>, path: &str) -> String {
    match base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) if !is_absolute(path) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        _ => path.to_string(),
    }
}

/// `scheme://host[:port]` part of a URL.
fn origin_of(url: &str) -> String {
    let after_scheme = url.find("://").map_or(0, |i| i + 3);
    match url[after_scheme..].find('/') {
        Some(slash) => url[..after_scheme + slash].to_string(),
        None => url.to_string(),
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> ApiEndpoints {
        ApiEndpoints::new(
            Some("https://api.example.com/api/"),
            Some("/plans/:id/"),
            Some("quotes/"),
            None,
        )
    }

    #[test]
    fn relative_endpoints_join_base() {
        let endpoints = endpoints();
        assert_eq!(
            endpoints.plan_detail_url(&PlanId::from("7")).as_deref(),
            Ok("https://api.example.com/api/plans/7/")
        );
        assert_eq!(
            endpoints.quotes.as_deref(),
            Some("https://api.example.com/api/quotes/")
        );
    }

    #[test]
    fn absolute_endpoint_ignores_base() {
        let endpoints = ApiEndpoints::new(
            Some("https://api.example.com"),
            Some("https://other.example.com/p/:id"),
            None,
            None,
        );
        assert_eq!(
            endpoints.plan_detail_url(&PlanId::from("x")).as_deref(),
            Ok("https://other.example.com/p/x")
        );
        assert!(endpoints.quotes.is_none());
    }

    #[test]
    fn relative_endpoint_without_base_is_unset() {
        let endpoints = ApiEndpoints::new(None, Some("/api/core/plans/:id/"), None, None);
        assert!(endpoints.plan_detail.is_none());
        assert!(endpoints.media_base.is_none());
    }

    #[test]
    fn missing_detail_endpoint_is_not_configured() {
        let endpoints = ApiEndpoints::default();
        assert_eq!(
            endpoints.plan_detail_url(&PlanId::from("1")),
            Err(FetchError::NotConfigured)
        );
    }

    #[test]
    fn media_base_defaults_to_api_origin() {
        let endpoints = endpoints();
        assert_eq!(
            endpoints.media_url("/media/plans/a.jpg").as_deref(),
            Some("https://api.example.com/media/plans/a.jpg")
        );
        assert_eq!(
            endpoints.media_url("https://cdn.example.com/a.jpg").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn relative_media_without_base_is_unresolvable() {
        assert_eq!(ApiEndpoints::default().media_url("/media/a.jpg"), None);
        assert_eq!(ApiEndpoints::default().media_url("  "), None);
    }
}
