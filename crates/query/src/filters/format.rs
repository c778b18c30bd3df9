//! Filter on projection format (2D, 3D, IMAX, ...).

use crate::filters::retain_selected;
use crate::state::QueryState;
use crate::traits::Filter;
use catalog::{Facet, MovieRecord};

/// Keeps movies offered in at least one selected format.
pub struct FormatFilter;

impl Filter for FormatFilter {
    fn name(&self) -> &str {
        "FormatFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, query: &QueryState) -> Vec<&'a MovieRecord> {
        retain_selected(movies, query, Facet::Format)
    }
}
