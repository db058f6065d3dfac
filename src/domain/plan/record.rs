// SPDX-License-Identifier: MPL-2.0
//! Normalized plan record.

use std::borrow::Cow;
use std::fmt;

// =============================================================================
// PlanId
// =============================================================================

/// Plan identity.
///
/// The API uses integer keys while the static catalog uses strings, so the
/// identity is kept in its textual form and compared as such.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanId(String);

impl PlanId {
    /// Creates an identity, trimming surrounding whitespace.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// FloorDescriptor
// =============================================================================

/// Room breakdown for one level of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorDescriptor {
    /// Level name as stored by the backend, e.g. `ground` or `first`.
    pub level: String,
    /// Floor area in square metres.
    pub area: u32,
    pub bedrooms: u32,
    /// Half bathrooms exist, hence the fractional count.
    pub bathrooms: f32,
    pub lounges: u32,
    pub dining_areas: u32,
    pub notes: Option<String>,
}

impl FloorDescriptor {
    /// Upper-cased level heading, e.g. `GROUND FLOOR`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} FLOOR", self.level.to_uppercase())
    }
}

// =============================================================================
// PlanRecord
// =============================================================================

/// A sellable house design, normalized for display.
///
/// Built once from either the REST payload or the static catalog and never
/// mutated afterwards.
// Allow excessive bools: independent marketing flags from the catalog.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRecord {
    pub id: PlanId,
    pub title: String,
    /// Price in whole rand.
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub garage: u32,
    /// Floor area in square metres.
    pub floor_area: u32,
    pub levels: u32,
    /// Plot width in metres.
    pub width: f32,
    /// Plot depth in metres.
    pub depth: f32,
    pub styles: Vec<String>,
    pub is_new: bool,
    pub is_popular: bool,
    pub pet_friendly: bool,
    /// Ordered image references, absolute URLs or server-relative paths.
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub floors: Vec<FloorDescriptor>,
    /// Video link as entered by the admin; see [`crate::domain::video`].
    pub video: Option<String>,
}

impl PlanRecord {
    /// Price formatted for display, e.g. `R1,250,000`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format_rand(self.price)
    }

    /// Plot dimensions, e.g. `30m × 40m`.
    #[must_use]
    pub fn dimensions_label(&self) -> String {
        format!("{}m × {}m", trim_number(self.width), trim_number(self.depth))
    }

    /// Marketing status shown in the property details.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_popular {
            "Featured"
        } else {
            "Available"
        }
    }

    /// Returns `true` when the plan has a video to play.
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// Formats a whole-rand amount with thousands separators.
#[must_use]
pub fn format_rand(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('R');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Shortens `text` to at most `max_chars` characters followed by `...`.
///
/// Text that already fits is returned as is.
#[must_use]
pub fn truncate_description(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", text[..cut].trim_end())),
        None => Cow::Borrowed(text),
    }
}

fn trim_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rand_groups_thousands() {
        assert_eq!(format_rand(0), "R0");
        assert_eq!(format_rand(999), "R999");
        assert_eq!(format_rand(1_000), "R1,000");
        assert_eq!(format_rand(1_234_567), "R1,234,567");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_description("short", 150), "short");
    }

    #[test]
    fn truncate_cuts_long_text_on_char_boundary() {
        let text = "é".repeat(200);
        let cut = truncate_description(&text, 150);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 153);
    }

    #[test]
    fn plan_id_trims_whitespace() {
        assert_eq!(PlanId::new("  42 ").as_str(), "42");
        assert_eq!(PlanId::from("hp-1").to_string(), "hp-1");
    }

    #[test]
    fn floor_heading_is_uppercase() {
        let floor = FloorDescriptor {
            level: "ground".into(),
            area: 120,
            bedrooms: 2,
            bathrooms: 1.5,
            lounges: 1,
            dining_areas: 1,
            notes: None,
        };
        assert_eq!(floor.heading(), "GROUND FLOOR");
    }

    #[test]
    fn dimensions_drop_trailing_zero() {
        let plan = crate::domain::plan::RawPlan::new("1", "Test", 1.0, 1, 1.0, 100)
            .normalize();
        assert_eq!(plan.dimensions_label(), "30m × 40m");
    }
}
