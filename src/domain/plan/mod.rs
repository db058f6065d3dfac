// SPDX-License-Identifier: MPL-2.0
//! House plan types.
//!
//! - [`PlanRecord`]: the normalized, immutable plan shown by the detail page
//! - [`RawPlan`]: the loosely-typed plan as the REST API describes it
//! - [`PlanId`]: plan identity shared by the API and the static catalog

mod normalize;
mod record;

pub use normalize::{defaults as normalize_defaults, RawFloor, RawPlan};
pub use record::{format_rand, truncate_description, FloorDescriptor, PlanId, PlanRecord};
