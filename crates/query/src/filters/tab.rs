//! Filter restricting the list to the selected tab.
//!
//! This is always the first filter in the pipeline and has no bypass: a
//! movie outside the selected tab is never visible.

use crate::state::QueryState;
use crate::traits::Filter;
use catalog::MovieRecord;

/// Keeps only movies whose release status matches the query's tab.
pub struct TabFilter;

impl Filter for TabFilter {
    fn name(&self) -> &str {
        "TabFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, query: &QueryState) -> Vec<&'a MovieRecord> {
        let status = query.tab.status();
        movies.into_iter().filter(|m| m.status == status).collect()
    }
}
