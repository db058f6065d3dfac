// SPDX-License-Identifier: MPL-2.0
//! Settings newtypes.
//!
//! Type-safe wrappers for user-tunable values, always within valid ranges.

use std::time::Duration;

// =============================================================================
// Image Cache Capacity
// =============================================================================

/// Image cache capacity bounds (8 to 512 decoded images).
pub mod image_cache_bounds {
    /// Minimum number of cached images.
    pub const MIN: usize = 8;
    /// Maximum number of cached images.
    pub const MAX: usize = 512;
    /// Default number of cached images.
    pub const DEFAULT: usize = 64;
}

/// Number of decoded gallery images kept in memory.
///
/// # Example
///
/// ```ignore
/// let capacity = ImageCacheCapacity::new(5000);
/// assert_eq!(capacity.value(), 512); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCacheCapacity(usize);

impl ImageCacheCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(image_cache_bounds::MIN, image_cache_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for ImageCacheCapacity {
    fn default() -> Self {
        Self(image_cache_bounds::DEFAULT)
    }
}

// =============================================================================
// Request Timeout
// =============================================================================

/// HTTP request timeout bounds, in seconds.
pub mod request_timeout_bounds {
    pub const MIN_SECS: u64 = 1;
    pub const MAX_SECS: u64 = 120;
    pub const DEFAULT_SECS: u64 = 15;
}

/// Timeout applied to every API and image request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(u64);

impl RequestTimeout {
    /// Creates a new timeout, clamping to the valid range.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.clamp(
            request_timeout_bounds::MIN_SECS,
            request_timeout_bounds::MAX_SECS,
        ))
    }

    #[must_use]
    pub fn as_secs(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(request_timeout_bounds::DEFAULT_SECS)
    }
}
