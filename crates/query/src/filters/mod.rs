//! Filter implementations for the query pipeline.
//!
//! One filter per pipeline stage. The standard order is tab, search,
//! language, genre, format (see [`FilterPipeline::standard`]).
//!
//! [`FilterPipeline::standard`]: crate::FilterPipeline::standard

pub mod format;
pub mod genre;
pub mod language;
pub mod search;
pub mod tab;

// Re-export for convenience
pub use format::FormatFilter;
pub use genre::GenreFilter;
pub use language::LanguageFilter;
pub use search::SearchFilter;
pub use tab::TabFilter;

use crate::state::QueryState;
use catalog::{Facet, MovieRecord};

/// Keep movies carrying at least one of the tags selected for `facet`.
///
/// An empty selection keeps everything. For single-valued facets this is
/// plain set membership.
fn retain_selected<'a>(
    movies: Vec<&'a MovieRecord>,
    query: &QueryState,
    facet: Facet,
) -> Vec<&'a MovieRecord> {
    let selected = query.selected(facet);
    if selected.is_empty() {
        return movies;
    }

    movies
        .into_iter()
        .filter(|movie| {
            movie
                .facet_values(facet)
                .iter()
                .any(|value| selected.contains(value))
        })
        .collect()
}
