//! Filter to keep only movies in the selected genres.

use crate::filters::retain_selected;
use crate::state::QueryState;
use crate::traits::Filter;
use catalog::{Facet, MovieRecord};

/// Keeps movies having at least one selected genre.
///
/// ## Algorithm
/// OR within the dimension: a movie tagged `[Action, Drama]` passes a
/// selection of `{Drama, Comedy}`.
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, query: &QueryState) -> Vec<&'a MovieRecord> {
        retain_selected(movies, query, Facet::Genre)
    }
}
