// SPDX-License-Identifier: MPL-2.0
//! `cedric_plans` is a desktop storefront for house plans built with the
//! Iced GUI framework.
//!
//! Visitors browse the bundled catalog, open a plan's detail page (fetched
//! from the storefront API with a catalog fallback), step through a simulated
//! purchase, watch the plan video link, and send custom quote requests.
//!
//! # Layers
//!
//! - [`domain`]: pure rules (plans, gallery index, purchase wizard, quote form)
//! - [`application`]: ports and the plan lookup query
//! - [`infrastructure`]: HTTP adapters and the embedded catalog
//! - [`media`]: decoded image cache and placeholder
//! - [`ui`]: screens, overlays and styling
//! - [`app`]: the Iced application, configuration and paths
//! - [`diagnostics`]: bounded in-memory event log mirrored to `tracing`

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod icon;
pub mod infrastructure;
pub mod media;
pub mod ui;
