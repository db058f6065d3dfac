// SPDX-License-Identifier: MPL-2.0
//! Wire format of the storefront API.
//!
//! Django REST Framework renders decimal columns (`price`, `bathrooms`,
//! `width`, `depth`) as strings, while integer columns stay numbers. The
//! payload types here accept either form and convert into the domain's
//! [`RawPlan`].

use crate::domain::plan::{RawFloor, RawPlan};
use crate::domain::quote::QuoteRequest;
use serde::{Deserialize, Deserializer, Serialize};

/// A JSON value that is either a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
}

impl Loose {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Loose::Number(n) => Some(*n),
            Loose::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Loose::deserialize(deserializer)?;
    value
        .as_f64()
        .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {value:?}")))
}

fn loose_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|v| v.as_f64()))
}

// Allow truncation and sign loss: counts are clamped to u32 first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

fn loose_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    loose_f64(deserializer).map(to_count)
}

fn loose_opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    loose_opt_f64(deserializer).map(|v| v.map(to_count))
}

fn loose_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Int(u64),
        Text(String),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Int(n) => n.to_string(),
        Id::Text(s) => s,
    })
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct FloorPayload {
    #[serde(default)]
    level: String,
    #[serde(default, deserialize_with = "loose_u32")]
    floor_area: u32,
    #[serde(default, deserialize_with = "loose_u32")]
    bedrooms: u32,
    #[serde(default, deserialize_with = "loose_f64")]
    bathrooms: f64,
    #[serde(default, deserialize_with = "loose_opt_u32")]
    lounges: Option<u32>,
    #[serde(default, deserialize_with = "loose_opt_u32")]
    dining_areas: Option<u32>,
    #[serde(default)]
    notes: Option<String>,
}

/// Body of `GET plan_detail`.
#[derive(Debug, Deserialize)]
pub struct PlanPayload {
    #[serde(deserialize_with = "loose_id")]
    id: String,
    name: String,
    #[serde(deserialize_with = "loose_f64")]
    price: f64,
    #[serde(deserialize_with = "loose_u32")]
    bedrooms: u32,
    #[serde(deserialize_with = "loose_f64")]
    bathrooms: f64,
    #[serde(default, deserialize_with = "loose_opt_u32")]
    garage: Option<u32>,
    #[serde(deserialize_with = "loose_u32")]
    square_feet: u32,
    #[serde(default)]
    floors: Option<Vec<FloorPayload>>,
    #[serde(default, deserialize_with = "loose_opt_f64")]
    width: Option<f64>,
    #[serde(default, deserialize_with = "loose_opt_f64")]
    depth: Option<f64>,
    #[serde(default)]
    is_new: Option<bool>,
    #[serde(default)]
    is_popular: Option<bool>,
    #[serde(default)]
    pet_friendly: Option<bool>,
    #[serde(default)]
    plan_images: Option<Vec<ImageRef>>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    features: Option<Vec<NamedRef>>,
    #[serde(default)]
    amenities: Option<Vec<NamedRef>>,
    #[serde(default)]
    video_url: Option<String>,
}

impl From<PlanPayload> for RawPlan {
    fn from(payload: PlanPayload) -> Self {
        let mut raw = RawPlan::new(
            payload.id,
            payload.name,
            payload.price,
            payload.bedrooms,
            payload.bathrooms,
            payload.square_feet,
        );
        raw.garage = payload.garage;
        raw.floors = payload.floors.map(|floors| {
            floors
                .into_iter()
                .map(|f| RawFloor {
                    level: f.level,
                    floor_area: f.floor_area,
                    bedrooms: f.bedrooms,
                    bathrooms: f.bathrooms,
                    lounges: f.lounges,
                    dining_areas: f.dining_areas,
                    notes: f.notes,
                })
                .collect()
        });
        raw.width = payload.width;
        raw.depth = payload.depth;
        raw.is_new = payload.is_new;
        raw.is_popular = payload.is_popular;
        raw.pet_friendly = payload.pet_friendly;
        raw.plan_images = payload
            .plan_images
            .unwrap_or_default()
            .into_iter()
            .filter_map(|img| img.image_url)
            .collect();
        raw.image_url = payload.image_url;
        raw.description = payload.description;
        raw.features = payload
            .features
            .map(|list| list.into_iter().map(|f| f.name).collect());
        raw.amenities = payload
            .amenities
            .map(|list| list.into_iter().map(|a| a.name).collect());
        raw.video_url = payload.video_url;
        raw
    }
}

/// Body of `POST quotes`.
#[derive(Debug, Serialize)]
pub struct QuotePayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    house_plan: Option<&'a str>,
    requirements: &'a str,
}

impl<'a> From<&'a QuoteRequest> for QuotePayload<'a> {
    fn from(request: &'a QuoteRequest) -> Self {
        Self {
            name: &request.name,
            email: &request.email,
            phone: &request.phone,
            house_plan: request.house_plan.as_ref().map(|id| id.as_str()),
            requirements: &request.requirements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRF_BODY: &str = r#"{
        "id": 12,
        "name": "The Acacia",
        "price": "1250000.00",
        "bedrooms": 4,
        "bathrooms": "2.5",
        "garage": 0,
        "square_feet": 240,
        "width": "18.50",
        "depth": null,
        "is_new": true,
        "plan_images": [{"image_url": "/media/plans/a.jpg"}, {"image_url": null}],
        "image_url": "https://cdn.example.com/plans/main.jpg",
        "features": [{"id": 1, "name": "Open plan kitchen"}],
        "floors": [{"level": "ground", "floor_area": 140, "bedrooms": 2, "bathrooms": "1.5", "lounges": 1, "notes": ""}],
        "video_url": "https://youtu.be/abc123"
    }"#;

    #[test]
    fn drf_decimal_strings_are_accepted() {
        let payload: PlanPayload = serde_json::from_str(DRF_BODY).expect("valid payload");
        let raw = RawPlan::from(payload);
        assert_eq!(raw.id, "12");
        assert!((raw.price - 1_250_000.0).abs() < f64::EPSILON);
        assert!((raw.bathrooms - 2.5).abs() < f64::EPSILON);
        assert_eq!(raw.width, Some(18.5));
        assert_eq!(raw.depth, None);
        assert_eq!(raw.plan_images, vec!["/media/plans/a.jpg".to_string()]);
        assert_eq!(raw.features, Some(vec!["Open plan kitchen".to_string()]));
        assert!(raw.amenities.is_none());
    }

    #[test]
    fn normalized_payload_applies_defaults() {
        let payload: PlanPayload = serde_json::from_str(DRF_BODY).expect("valid payload");
        let plan = RawPlan::from(payload).normalize();
        assert_eq!(plan.price, 1_250_000);
        assert_eq!(plan.bathrooms, 3);
        assert_eq!(plan.garage, 2);
        assert_eq!(plan.levels, 1);
        assert_eq!(plan.images.len(), 2);
        assert_eq!(plan.floors[0].notes, None);
        assert_eq!(plan.amenities, vec!["Built in cupboards".to_string()]);
    }

    #[test]
    fn string_id_is_kept() {
        let body = r#"{"id":"hp-3","name":"X","price":1,"bedrooms":"2","bathrooms":1,"square_feet":"80"}"#;
        let payload: PlanPayload = serde_json::from_str(body).expect("valid payload");
        let raw = RawPlan::from(payload);
        assert_eq!(raw.id, "hp-3");
        assert_eq!(raw.bedrooms, 2);
        assert_eq!(raw.square_feet, 80);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let body = r#"{"id":1,"name":"X","price":"free","bedrooms":1,"bathrooms":1,"square_feet":1}"#;
        assert!(serde_json::from_str::<PlanPayload>(body).is_err());
    }

    #[test]
    fn quote_payload_serializes_null_house_plan() {
        let request = QuoteRequest {
            name: "A".into(),
            email: "a@example.com".into(),
            phone: "1".into(),
            house_plan: None,
            requirements: "Style: Modern".into(),
        };
        let json = serde_json::to_value(QuotePayload::from(&request)).expect("serializable");
        assert_eq!(json["house_plan"], serde_json::Value::Null);
        assert_eq!(json["requirements"], "Style: Modern");
    }
}
