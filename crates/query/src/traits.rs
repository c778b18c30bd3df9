//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the catalog.

use crate::state::QueryState;
use catalog::MovieRecord;

/// Core trait for narrowing a list of movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across threads
/// - Filters take ownership of the Vec and return the retained subset
/// - Filters only ever drop entries; relative order is preserved
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `query` - The user's current browse criteria
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, query: &QueryState) -> Vec<&'a MovieRecord>;
}
