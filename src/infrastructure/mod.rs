// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `reqwest`, the `image` decoders, and the embedded catalog assets.
//!
//! # Available Adapters
//!
//! - [`http`]: Storefront API client (implements [`PlanSource`] and [`QuoteSubmitter`])
//! - [`catalog`]: Bundled plan catalog (implements [`PlanCatalog`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Wire formats stay here; the domain never sees `serde`
//!
//! [`PlanSource`]: crate::application::port::PlanSource
//! [`QuoteSubmitter`]: crate::application::port::QuoteSubmitter
//! [`PlanCatalog`]: crate::application::port::PlanCatalog

pub mod catalog;
pub mod http;

// Re-export main types for convenience
pub use catalog::EmbeddedCatalog;
pub use http::{ApiEndpoints, HttpPlanSource, HttpQuoteSubmitter};
