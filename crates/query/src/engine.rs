//! # Query Engine
//!
//! Derives the visible movie list from the catalog and a [`QueryState`]:
//! 1. Partition by tab (always, whatever pipeline the engine holds)
//! 2. Run the refinement pipeline (search, language, genre, format)
//! 3. Stable-sort the survivors by the selected key
//!
//! Evaluation is a pure function of its inputs. The catalog is never
//! modified and every call builds a fresh list.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::TabFilter;
use crate::sort::sort_movies;
use crate::state::QueryState;
use crate::traits::Filter;
use catalog::{Catalog, Facets, MovieRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The ordered result of one query evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub movies: Vec<&'a MovieRecord>,
}

impl<'a> QueryResult<'a> {
    /// Number of visible movies
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Ids in result order
    pub fn ids(&self) -> Vec<&'a str> {
        self.movies.iter().map(|m| m.id.as_str()).collect()
    }
}

/// Evaluates queries against a shared catalog
pub struct QueryEngine {
    catalog: Arc<Catalog>,
    pipeline: FilterPipeline,
}

impl QueryEngine {
    /// Create an engine with the standard filter pipeline
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_pipeline(catalog, FilterPipeline::standard())
    }

    /// Create an engine with a custom refinement pipeline.
    ///
    /// The tab partition is applied before `pipeline` regardless of its
    /// contents.
    pub fn with_pipeline(catalog: Arc<Catalog>, pipeline: FilterPipeline) -> Self {
        Self { catalog, pipeline }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Facet option lists for the filter UI
    pub fn facets(&self) -> &Facets {
        self.catalog.facets()
    }

    /// Compute the ordered visible subset for `query`
    #[instrument(skip(self, query), fields(tab = %query.tab, sort = %query.sort_key))]
    pub fn evaluate(&self, query: &QueryState) -> QueryResult<'_> {
        let all: Vec<&MovieRecord> = self.catalog.movies().iter().collect();
        let on_tab = TabFilter.apply(all, query);

        let mut movies = self.pipeline.apply(on_tab, query);
        sort_movies(&mut movies, query.sort_key);

        debug!("Query matched {} of {} movies", movies.len(), self.catalog.len());
        QueryResult { movies }
    }
}
