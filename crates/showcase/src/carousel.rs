//! Hero carousel pointer.
//!
//! The carousel rotates through the movies currently in cinemas. It knows
//! nothing about time: callers move it with [`Carousel::advance`],
//! [`Carousel::retreat`] and [`Carousel::go_to`], and a
//! [`CarouselTicker`](crate::CarouselTicker) can drive `advance` on a timer.

use catalog::{Catalog, MovieRecord};

/// Movies the carousel rotates through.
///
/// The "now showing" movies in catalog order, or the whole catalog when
/// nothing is showing, so the hero never renders empty while the catalog
/// has movies.
pub fn hero_subset(catalog: &Catalog) -> Vec<&MovieRecord> {
    let now = catalog.now_showing();
    if now.is_empty() {
        catalog.movies().iter().collect()
    } else {
        now
    }
}

/// Index into the hero subset.
///
/// The index always lies in `[0, len - 1]` (or is 0 when `len` is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping past the end
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move to the previous slide, wrapping past the start
    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indices clamp to the last slide
    pub fn go_to(&mut self, index: usize) {
        self.index = self.clamp(index);
    }

    /// Adopt a new subset size, re-clamping the current index
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = self.clamp(self.index);
    }

    /// The record at the current index
    pub fn select<'a>(&self, subset: &[&'a MovieRecord]) -> Option<&'a MovieRecord> {
        subset.get(self.index).copied()
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }
}
