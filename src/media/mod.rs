// SPDX-License-Identifier: MPL-2.0
//! Image handling for the gallery.
//!
//! - [`image_cache`]: LRU cache of decoded images and in-flight loads
//! - [`placeholder`]: fallback graphic for images that fail to load

pub mod image_cache;
pub mod placeholder;

pub use image_cache::{CacheStats, ImageCache, ImageSlot};
