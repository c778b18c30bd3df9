//! Query engine deriving the visible movie list from user criteria.
//!
//! This crate provides:
//! - QueryState, the user's tab/search/facet/sort selection
//! - Filter trait and implementations for each pipeline stage
//! - FilterPipeline for composing filters
//! - Stable sorting by popularity, rating, duration or title
//! - QueryEngine tying it all together over a shared Catalog
//!
//! ## Architecture
//! Each evaluation runs in fixed stages:
//! 1. Tab filter (hard partition, never bypassed)
//! 2. Text search over title, language and genres
//! 3. Language, genre and format filters (OR within, AND across)
//! 4. Stable sort by the selected key
//!
//! ## Example Usage
//! ```ignore
//! use query::{QueryEngine, QueryState, SortKey, Tab};
//! use catalog::{Catalog, Facet};
//!
//! let engine = QueryEngine::new(Arc::new(Catalog::demo()?));
//!
//! let query = QueryState::new(Tab::NowShowing)
//!     .with_search("drama")
//!     .with_sort(SortKey::Rating)
//!     .toggled(Facet::Language, "Hindi");
//!
//! let result = engine.evaluate(&query);
//! println!("Showing {} movies", result.count());
//! ```

pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod sort;
pub mod state;
pub mod traits;

// Re-export main types
pub use engine::{QueryEngine, QueryResult};
pub use error::{QueryError, Result};
pub use filter_pipeline::FilterPipeline;
pub use sort::{collate, sort_movies};
pub use state::{QueryState, SortKey, Tab};
pub use traits::Filter;
