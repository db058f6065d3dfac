// SPDX-License-Identifier: MPL-2.0
//! Raw plan payload and its normalization into [`PlanRecord`].
//!
//! The backend leaves most descriptive fields optional and serializes decimal
//! columns loosely. [`RawPlan::normalize`] fills the gaps with the storefront
//! defaults so the detail page never has to deal with missing data.

use super::record::{FloorDescriptor, PlanId, PlanRecord};

/// Values substituted for missing or zero fields during normalization.
pub mod defaults {
    /// Garage bays when the payload has none.
    pub const GARAGE: u32 = 2;
    /// Levels when the payload lists no floors.
    pub const LEVELS: u32 = 2;
    /// Plot width in metres.
    pub const WIDTH: f32 = 30.0;
    /// Plot depth in metres.
    pub const DEPTH: f32 = 40.0;
    /// Architectural style shown for API plans.
    pub const STYLE: &str = "Modern";
    /// Feature listed when the payload has none.
    pub const FEATURE: &str = "Quality Build";
    /// Amenity listed when the payload has none.
    pub const AMENITY: &str = "Built in cupboards";
}

/// One floor entry as sent by the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFloor {
    pub level: String,
    pub floor_area: u32,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub lounges: Option<u32>,
    pub dining_areas: Option<u32>,
    pub notes: Option<String>,
}

/// Plan payload as returned by the plan-detail endpoint.
///
/// Required fields are constructor arguments; everything else starts out
/// absent and is set directly.
// Allow excessive bools: optional flags mirror the payload one to one.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub garage: Option<u32>,
    pub square_feet: u32,
    pub floors: Option<Vec<RawFloor>>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub is_new: Option<bool>,
    pub is_popular: Option<bool>,
    pub pet_friendly: Option<bool>,
    /// `plan_images[].image_url`, in gallery order.
    pub plan_images: Vec<String>,
    /// Primary image, appended after the gallery images.
    pub image_url: Option<String>,
    pub description: Option<String>,
    /// `features[].name`.
    pub features: Option<Vec<String>>,
    /// `amenities[].name`.
    pub amenities: Option<Vec<String>>,
    pub video_url: Option<String>,
}

impl RawPlan {
    /// Creates a payload with only the required fields set.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        bedrooms: u32,
        bathrooms: f64,
        square_feet: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            bedrooms,
            bathrooms,
            garage: None,
            square_feet,
            floors: None,
            width: None,
            depth: None,
            is_new: None,
            is_popular: None,
            pet_friendly: None,
            plan_images: Vec::new(),
            image_url: None,
            description: None,
            features: None,
            amenities: None,
            video_url: None,
        }
    }

    /// Converts the payload into a display-ready [`PlanRecord`].
    ///
    /// Zero garage, width and depth values count as missing. An explicitly
    /// empty feature or amenity list stays empty.
    #[must_use]
    pub fn normalize(self) -> PlanRecord {
        let images = self
            .plan_images
            .into_iter()
            .chain(self.image_url)
            .filter(|url| !url.trim().is_empty())
            .collect();

        let floors: Vec<FloorDescriptor> = self
            .floors
            .unwrap_or_default()
            .into_iter()
            .map(RawFloor::normalize)
            .collect();

        let levels = match u32::try_from(floors.len()) {
            Ok(0) | Err(_) => defaults::LEVELS,
            Ok(count) => count,
        };

        PlanRecord {
            id: PlanId::new(&self.id),
            title: self.name,
            price: round_non_negative(self.price),
            bedrooms: self.bedrooms,
            bathrooms: u32::try_from(round_non_negative(self.bathrooms)).unwrap_or(u32::MAX),
            garage: self.garage.filter(|g| *g > 0).unwrap_or(defaults::GARAGE),
            floor_area: self.square_feet,
            levels,
            width: positive_or(self.width, defaults::WIDTH),
            depth: positive_or(self.depth, defaults::DEPTH),
            styles: vec![defaults::STYLE.to_string()],
            is_new: self.is_new.unwrap_or(false),
            is_popular: self.is_popular.unwrap_or(false),
            pet_friendly: self.pet_friendly.unwrap_or(false),
            images,
            description: self.description.unwrap_or_default(),
            features: self
                .features
                .unwrap_or_else(|| vec![defaults::FEATURE.to_string()]),
            amenities: self
                .amenities
                .unwrap_or_else(|| vec![defaults::AMENITY.to_string()]),
            floors,
            video: self.video_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

impl RawFloor {
    fn normalize(self) -> FloorDescriptor {
        FloorDescriptor {
            level: self.level,
            area: self.floor_area,
            bedrooms: self.bedrooms,
            bathrooms: narrow(self.bathrooms),
            lounges: self.lounges.unwrap_or(0),
            dining_areas: self.dining_areas.unwrap_or(0),
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

// Allow truncation and sign loss: inputs are clamped to a non-negative finite
// value first, and prices never approach u64::MAX.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_non_negative(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

fn positive_or(value: Option<f64>, fallback: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => narrow(v),
        _ => fallback,
    }
}

// Allow truncation: room counts and plot sizes fit comfortably in f32.
#[allow(clippy::cast_possible_truncation)]
fn narrow(value: f64) -> f32 {
    value as f32
}
