// SPDX-License-Identifier: MPL-2.0
//! Decoded gallery image cache.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Count-bounded**: Capacity comes from [`ImageCacheCapacity`]
//! - **Reference-keyed**: Entries are indexed by the image reference as it
//!   appears in the plan record, before URL resolution
//! - **Load tracking**: In-flight and failed loads are remembered, so an
//!   image is requested at most once while it stays cached. Evicted entries
//!   are simply unknown again and are re-requested on the next navigation

use crate::domain::settings::ImageCacheCapacity;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// State of one image reference.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// A download is in flight.
    Loading,
    /// Decoded and ready to draw.
    Ready(image::Handle),
    /// Download or decoding failed; the placeholder is shown instead.
    Failed,
}

/// Statistics about cache behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// LRU cache of gallery images keyed by image reference.
pub struct ImageCache {
    slots: LruCache<String, ImageSlot>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.slots.len())
            .field("capacity", &self.slots.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

impl ImageCache {
    #[must_use]
    pub fn new(capacity: ImageCacheCapacity) -> Self {
        let capacity = NonZeroUsize::new(capacity.value()).unwrap_or(NonZeroUsize::MIN);
        Self {
            slots: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Looks `url` up without touching the LRU order. Used by views.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.peek(url)
    }

    /// Marks `url` as loading and returns `true` if the caller should start
    /// a download. Known URLs are promoted and return `false`.
    pub fn begin_load(&mut self, url: &str) -> bool {
        if self.slots.get(url).is_some() {
            self.stats.hits += 1;
            return false;
        }
        self.stats.misses += 1;
        self.put(url.to_string(), ImageSlot::Loading);
        true
    }

    /// Stores a decoded image.
    pub fn insert_ready(&mut self, url: String, handle: image::Handle) {
        self.put(url, ImageSlot::Ready(handle));
    }

    /// Remembers that `url` cannot be shown.
    pub fn insert_failed(&mut self, url: String) {
        self.put(url, ImageSlot::Failed);
    }

    fn put(&mut self, url: String, slot: ImageSlot) {
        if let Some((evicted, _)) = self.slots.push(url.clone(), slot) {
            if evicted != url {
                self.stats.evictions += 1;
            }
        }
    }

    /// Maximum number of remembered references.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
