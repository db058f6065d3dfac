// SPDX-License-Identifier: MPL-2.0
//! Bundled plan catalog.
//!
//! The catalog JSON files under `data/` are embedded into the binary with
//! `rust-embed` and parsed once at startup.

use crate::application::port::{CatalogSection, PlanCatalog};
use crate::domain::plan::{FloorDescriptor, PlanId, PlanRecord};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "data/"]
struct CatalogAssets;

const HOUSE_PLANS_FILE: &str = "house_plans.json";
const BUILT_HOMES_FILE: &str = "built_homes.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FloorEntry {
    level: String,
    floor_area: u32,
    #[serde(default)]
    bedrooms: u32,
    #[serde(default)]
    bathrooms: f32,
    #[serde(default)]
    lounges: u32,
    #[serde(default)]
    dining_areas: u32,
    #[serde(default)]
    notes: Option<String>,
}

// Allow excessive bools: catalog flags mirror the JSON schema.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    id: String,
    title: String,
    price: u64,
    bedrooms: u32,
    bathrooms: u32,
    #[serde(default)]
    garage: u32,
    floor_area: u32,
    #[serde(default)]
    levels: u32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    depth: f32,
    #[serde(default)]
    style: Vec<String>,
    #[serde(default)]
    is_new: bool,
    #[serde(default)]
    is_popular: bool,
    #[serde(default)]
    pet_friendly: bool,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    floors: Vec<FloorEntry>,
    #[serde(default)]
    video_url: Option<String>,
}

impl From<CatalogEntry> for PlanRecord {
    fn from(entry: CatalogEntry) -> Self {
        PlanRecord {
            id: PlanId::new(&entry.id),
            title: entry.title,
            price: entry.price,
            bedrooms: entry.bedrooms,
            bathrooms: entry.bathrooms,
            garage: entry.garage,
            floor_area: entry.floor_area,
            levels: entry.levels,
            width: entry.width,
            depth: entry.depth,
            styles: entry.style,
            is_new: entry.is_new,
            is_popular: entry.is_popular,
            pet_friendly: entry.pet_friendly,
            images: entry.images,
            description: entry.description,
            features: entry.features,
            amenities: entry.amenities,
            floors: entry
                .floors
                .into_iter()
                .map(|f| FloorDescriptor {
                    level: f.level,
                    area: f.floor_area,
                    bedrooms: f.bedrooms,
                    bathrooms: f.bathrooms,
                    lounges: f.lounges,
                    dining_areas: f.dining_areas,
                    notes: f.notes.filter(|n| !n.trim().is_empty()),
                })
                .collect(),
            video: entry.video_url.filter(|v| !v.trim().is_empty()),
        }
    }
}

/// Catalog parsed from the embedded JSON files.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedCatalog {
    house_plans: Vec<PlanRecord>,
    built_homes: Vec<PlanRecord>,
}

impl EmbeddedCatalog {
    /// Parses both embedded catalog files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if a file is missing or malformed.
    pub fn load() -> Result<Self> {
        Ok(Self {
            house_plans: load_section(HOUSE_PLANS_FILE)?,
            built_homes: load_section(BUILT_HOMES_FILE)?,
        })
    }

    /// Builds a catalog from already-parsed records.
    #[must_use]
    pub fn from_records(house_plans: Vec<PlanRecord>, built_homes: Vec<PlanRecord>) -> Self {
        Self {
            house_plans,
            built_homes,
        }
    }

    /// Total number of records across both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.house_plans.len() + self.built_homes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlanCatalog for EmbeddedCatalog {
    fn section(&self, section: CatalogSection) -> &[PlanRecord] {
        match section {
            CatalogSection::HousePlans => &self.house_plans,
            CatalogSection::BuiltHomes => &self.built_homes,
        }
    }
}

fn load_section(file: &str) -> Result<Vec<PlanRecord>> {
    let asset = CatalogAssets::get(file)
        .ok_or_else(|| Error::Catalog(format!("missing embedded file {file}")))?;
    parse_section(&asset.data)
}

fn parse_section(json: &[u8]) -> Result<Vec<PlanRecord>> {
    let entries: Vec<CatalogEntry> = serde_json::from_slice(json)?;
    Ok(entries.into_iter().map(PlanRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = EmbeddedCatalog::load().expect("embedded catalog parses");
        assert!(!catalog.section(CatalogSection::HousePlans).is_empty());
        assert!(!catalog.section(CatalogSection::BuiltHomes).is_empty());
    }

    #[test]
    fn embedded_ids_are_unique() {
        let catalog = EmbeddedCatalog::load().expect("embedded catalog parses");
        let mut ids: Vec<_> = [CatalogSection::HousePlans, CatalogSection::BuiltHomes]
            .into_iter()
            .flat_map(|s| catalog.section(s).iter().map(|p| p.id.clone()))
            .collect();
        let total = ids.len();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn find_prefers_house_plans() {
        let json = br#"[{"id":"1","title":"Plan","price":10,"bedrooms":1,"bathrooms":1,"floorArea":50}]"#;
        let plans = parse_section(json).expect("valid");
        let json = br#"[{"id":"1","title":"Home","price":20,"bedrooms":2,"bathrooms":1,"floorArea":60}]"#;
        let homes = parse_section(json).expect("valid");
        let catalog = EmbeddedCatalog::from_records(plans, homes);
        let found = catalog.find(&PlanId::from("1")).expect("present");
        assert_eq!(found.title, "Plan");
    }

    #[test]
    fn find_searches_built_homes_second() {
        let json = br#"[{"id":"bh-1","title":"Home","price":20,"bedrooms":2,"bathrooms":1,"floorArea":60,"videoUrl":""}]"#;
        let homes = parse_section(json).expect("valid");
        let catalog = EmbeddedCatalog::from_records(Vec::new(), homes);
        let found = catalog.find(&PlanId::from("bh-1")).expect("present");
        assert_eq!(found.title, "Home");
        assert!(found.video.is_none());
        assert!(catalog.find(&PlanId::from("nope")).is_none());
    }

    #[test]
    fn malformed_json_is_catalog_error() {
        assert!(matches!(parse_section(b"{"), Err(Error::Catalog(_))));
    }
}
