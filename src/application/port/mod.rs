// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of the HTTP client and of the embedded asset format.
//!
//! # Available Ports
//!
//! - [`catalog`]: Bundled plan catalog ([`PlanCatalog`])
//! - [`plan_source`]: Remote plan payloads ([`PlanSource`])
//! - [`quote`]: Quote submission ([`QuoteSubmitter`])
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so adapters can be shared through `Arc`
//! - Async methods return a boxed future so callers can wrap them in `Task::perform`

pub mod catalog;
pub mod plan_source;
pub mod quote;

// Re-export main types for convenience
pub use catalog::{CatalogSection, PlanCatalog};
pub use plan_source::{BoxFuture, CancellationToken, FetchError, PlanSource};
pub use quote::QuoteSubmitter;
