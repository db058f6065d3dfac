// SPDX-License-Identifier: MPL-2.0
//! Static plan catalog port definition.
//!
//! The catalog is the local, always-available plan list shipped with the
//! application. It backs the listing screen and is the fallback when the API
//! cannot serve a plan.

use crate::domain::plan::{PlanId, PlanRecord};

/// Which part of the catalog a plan belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    /// Plans for sale.
    HousePlans,
    /// Completed builds shown as showcase.
    BuiltHomes,
}

/// Read-only access to the bundled plan records.
pub trait PlanCatalog: Send + Sync {
    /// Records of one section, in catalog order.
    fn section(&self, section: CatalogSection) -> &[PlanRecord];

    /// Looks `id` up in the house plans first, then in the built homes.
    fn find(&self, id: &PlanId) -> Option<&PlanRecord> {
        [CatalogSection::HousePlans, CatalogSection::BuiltHomes]
            .into_iter()
            .find_map(|section| self.section(section).iter().find(|plan| &plan.id == id))
    }
}
