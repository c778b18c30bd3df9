//! # Catalog Crate
//!
//! This crate holds the fixed movie catalog the storefront browses.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, ReleaseStatus, Facet, Catalog)
//! - **parser**: Parse JSON catalog sources, including the built-in demo dataset
//! - **index**: Validate records, index them by id and extract facet option lists
//! - **format**: Display helpers for durations and vote counts
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Facet};
//!
//! let catalog = Catalog::demo()?;
//!
//! let movie = catalog.get_movie("border-2").unwrap();
//! let languages = catalog.facets().options(Facet::Language);
//!
//! println!("{} is in {}; {} languages on offer", movie.title, movie.language, languages.len());
//! ```

// Public modules
pub mod error;
pub mod format;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use format::{format_duration, format_votes};
pub use index::extract_facets;
pub use types::{Catalog, Facet, Facets, MovieId, MovieRecord, ReleaseStatus};
