// SPDX-License-Identifier: MPL-2.0
//! Carousel position over an ordered image list.
//!
//! [`GalleryIndex`] is the single source of truth for "which image is shown"
//! in both the gallery overlay and the detail page carousel. It can only be
//! built for a non-empty list, so wraparound arithmetic never divides by zero.

// =============================================================================
// GalleryIndex
// =============================================================================

/// Current position in a non-empty image list, always within `[0, len)`.
///
/// # Example
///
/// ```ignore
/// let index = GalleryIndex::new(3, 0).unwrap();
/// assert_eq!(index.previous().current(), 2);
/// assert_eq!(index.next().next().next(), index);
///
/// // Empty lists have no index
/// assert!(GalleryIndex::new(0, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryIndex {
    current: usize,
    len: usize,
}

impl GalleryIndex {
    /// Creates an index for a list of `len` images starting at `initial`.
    ///
    /// Returns `None` for an empty list. An out-of-range `initial` is
    /// clamped to the last image.
    #[must_use]
    pub fn new(len: usize, initial: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            current: initial.min(len - 1),
            len,
        })
    }

    /// Returns the zero-based position of the shown image.
    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    /// Returns the number of images in the list.
    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    /// Always `false`; an index cannot exist for an empty list.
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Returns `true` when there is more than one image to move between.
    #[must_use]
    pub fn has_multiple(self) -> bool {
        self.len > 1
    }

    /// Advances one image, wrapping from the last image to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            current: (self.current + 1) % self.len,
            len: self.len,
        }
    }

    /// Retreats one image, wrapping from the first image to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        Self {
            current: (self.current + self.len - 1) % self.len,
            len: self.len,
        }
    }

    /// Jumps to `index`. Out-of-range indices leave the position unchanged.
    #[must_use]
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self {
                current: index,
                len: self.len,
            }
        } else {
            self
        }
    }

    /// Every position ordered by circular distance from the current one.
    ///
    /// At equal distance the next image comes before the previous one, so
    /// the images a viewer is about to reach are listed first.
    #[must_use]
    pub fn nearest_first(self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len);
        order.push(self.current);
        for step in 1..=self.len / 2 {
            let forward = (self.current + step) % self.len;
            let back = (self.current + self.len - step) % self.len;
            order.push(forward);
            if back != forward {
                order.push(back);
            }
        }
        order
    }

    /// Human-readable one-based counter, e.g. `"2 / 5"`.
    #[must_use]
    pub fn counter_label(self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_index() {
        assert!(GalleryIndex::new(0, 0).is_none());
        assert!(GalleryIndex::new(0, 5).is_none());
    }

    #[test]
    fn initial_index_is_clamped() {
        let index = GalleryIndex::new(3, 10).expect("non-empty");
        assert_eq!(index.current(), 2);
    }

    #[test]
    fn next_wraps_to_first() {
        let index = GalleryIndex::new(3, 2).expect("non-empty");
        assert_eq!(index.next().current(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let index = GalleryIndex::new(4, 0).expect("non-empty");
        assert_eq!(index.previous().current(), 3);
    }

    #[test]
    fn n_steps_forward_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let origin = GalleryIndex::new(len, start).expect("non-empty");
                let mut index = origin;
                for _ in 0..len {
                    index = index.next();
                }
                assert_eq!(index, origin, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn n_steps_backward_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let origin = GalleryIndex::new(len, start).expect("non-empty");
                let mut index = origin;
                for _ in 0..len {
                    index = index.previous();
                }
                assert_eq!(index, origin, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn single_image_stays_put() {
        let index = GalleryIndex::new(1, 0).expect("non-empty");
        assert_eq!(index.next().current(), 0);
        assert_eq!(index.previous().current(), 0);
        assert!(!index.has_multiple());
    }

    #[test]
    fn select_sets_index_directly() {
        let index = GalleryIndex::new(5, 0).expect("non-empty");
        assert_eq!(index.select(3).current(), 3);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let index = GalleryIndex::new(5, 1).expect("non-empty");
        assert_eq!(index.select(5), index);
    }

    #[test]
    fn nearest_first_covers_every_position_once() {
        for len in 1..=9 {
            for start in 0..len {
                let mut order = GalleryIndex::new(len, start)
                    .expect("non-empty")
                    .nearest_first();
                assert_eq!(order[0], start);
                order.sort_unstable();
                assert_eq!(order, (0..len).collect::<Vec<_>>(), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn nearest_first_alternates_around_current() {
        let index = GalleryIndex::new(10, 0).expect("non-empty");
        assert_eq!(index.nearest_first()[..5], [0, 1, 9, 2, 8]);
    }

    #[test]
    fn counter_label_is_one_based() {
        let index = GalleryIndex::new(5, 1).expect("non-empty");
        assert_eq!(index.counter_label(), "2 / 5");
    }
}
