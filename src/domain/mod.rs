// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core storefront rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends on `std` only, so every rule here is testable without a window,
//! a network, or an async runtime.
//!
//! # Modules
//!
//! - [`gallery`]: Carousel position ([`GalleryIndex`](gallery::GalleryIndex))
//! - [`plan`]: Plan records and payload normalization
//!   ([`PlanRecord`](plan::PlanRecord), [`RawPlan`](plan::RawPlan))
//! - [`purchase`]: Simulated checkout ([`WizardStage`](purchase::WizardStage),
//!   [`Checkout`](purchase::Checkout), input masks)
//! - [`quote`]: Quote request form ([`QuoteForm`](quote::QuoteForm))
//! - [`settings`]: Settings newtypes
//!   ([`ImageCacheCapacity`](settings::ImageCacheCapacity),
//!   [`RequestTimeout`](settings::RequestTimeout))
//! - [`video`]: Video link normalization ([`embed_url`](video::embed_url))

pub mod gallery;
pub mod plan;
pub mod purchase;
pub mod quote;
pub mod settings;
pub mod video;
