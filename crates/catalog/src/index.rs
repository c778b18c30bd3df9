//! Catalog building, validation and facet extraction.
//!
//! A [`Catalog`] is only ever constructed through [`Catalog::from_records`],
//! which validates every record, builds the id index and computes the facet
//! option lists exactly once.

use crate::error::{CatalogError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

impl Catalog {
    /// Build a catalog from records in their supplied order.
    ///
    /// Steps:
    /// 1. Validate every record
    /// 2. Build the id index, rejecting duplicate ids
    /// 3. Extract facet option lists
    pub fn from_records(movies: Vec<MovieRecord>) -> Result<Self> {
        for movie in &movies {
            validate_record(movie)?;
        }

        let mut id_index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            if id_index.insert(movie.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(movie.id.clone()));
            }
        }

        let facets = extract_facets(&movies);
        debug!(
            languages = facets.languages.len(),
            genres = facets.genres.len(),
            formats = facets.formats.len(),
            "Extracted facets"
        );
        info!("Catalog built with {} movies", movies.len());

        Ok(Self {
            movies,
            id_index,
            facets,
        })
    }
}

/// Check the invariants a single record must satisfy
fn validate_record(movie: &MovieRecord) -> Result<()> {
    let invalid = |field: &str, value: String| CatalogError::InvalidValue {
        id: movie.id.clone(),
        field: field.to_string(),
        value,
    };

    if movie.id.trim().is_empty() {
        return Err(invalid("id", format!("{:?}", movie.id)));
    }
    if movie.title.trim().is_empty() {
        return Err(invalid("title", format!("{:?}", movie.title)));
    }
    // NaN fails the range check as well
    if !(0.0..=5.0).contains(&movie.rating) {
        return Err(invalid("rating", movie.rating.to_string()));
    }
    if movie.duration_minutes == 0 {
        return Err(invalid("durationMins", "0".to_string()));
    }
    if movie.genres.is_empty() {
        return Err(invalid("genres", "[]".to_string()));
    }
    if movie.formats.is_empty() {
        return Err(invalid("format", "[]".to_string()));
    }
    Ok(())
}

/// Collect the distinct languages, genres and formats used by `movies`.
///
/// Each list is sorted ascending by plain (case-sensitive) string order and
/// contains every value used by at least one record, exactly once.
pub fn extract_facets(movies: &[MovieRecord]) -> Facets {
    let collect = |facet: Facet| -> Vec<String> {
        movies
            .par_iter()
            .fold(BTreeSet::new, |mut acc, movie| {
                acc.extend(movie.facet_values(facet).iter().cloned());
                acc
            })
            .reduce(BTreeSet::new, |mut a, b| {
                a.extend(b);
                a
            })
            .into_iter()
            .collect()
    };

    Facets {
        languages: collect(Facet::Language),
        genres: collect(Facet::Genre),
        formats: collect(Facet::Format),
    }
}
