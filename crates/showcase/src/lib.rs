//! Showcase crate: the browse session behind the storefront page.
//!
//! This crate wires the catalog and query engine into what a page needs:
//! the movie grid, result count, facet lists and the rotating hero slot.

pub mod carousel;
pub mod config;
pub mod storefront;
pub mod ticker;

pub use carousel::{Carousel, hero_subset};
pub use config::{CatalogSource, DEFAULT_HERO_INTERVAL, LOCATIONS, Location, ShowcaseConfig};
pub use storefront::{BrowseView, Storefront};
pub use ticker::{CarouselTicker, SharedCarousel, lock_carousel};
