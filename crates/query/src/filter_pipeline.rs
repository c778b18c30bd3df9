//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{FormatFilter, GenreFilter, LanguageFilter, SearchFilter};
use crate::state::QueryState;
use crate::traits::Filter;
use catalog::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter)
///     .add_filter(LanguageFilter);
///
/// let visible = pipeline.apply(catalog.movies().iter().collect(), &query);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The refinement stages: search, language, genre, format.
    ///
    /// The tab partition is not part of any pipeline; `QueryEngine` applies
    /// it before the pipeline runs.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchFilter)
            .add_filter(LanguageFilter)
            .add_filter(GenreFilter)
            .add_filter(FormatFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// ## Algorithm
    /// 1. Start with the input movies
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        query: &QueryState,
    ) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, query);
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
