// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading plan data. These services
//! do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`plan_lookup`]: Plan detail resolution with catalog fallback (`PlanLookup`)
//!
//! # Design Notes
//!
//! Query services are part of the application layer because they:
//! - Coordinate domain operations
//! - Use ports for data access
//! - Implement application-specific use cases

pub mod plan_lookup;

// Re-export main types
pub use plan_lookup::{PlanLookup, PlanResolution};
