//! Core domain types for the movie catalog.
//!
//! The catalog is a fixed, ordered collection of [`MovieRecord`]s supplied
//! once at startup. Nothing in this crate mutates a record after the
//! [`Catalog`] has been built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable, unique identifier of a movie (e.g. `"border-2"`)
pub type MovieId = String;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Release status of a movie. Decides which tab the movie is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseStatus {
    #[serde(rename = "Now Showing")]
    NowShowing,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseStatus::NowShowing => f.write_str("Now Showing"),
            ReleaseStatus::ComingSoon => f.write_str("Coming Soon"),
        }
    }
}

/// A single movie in the catalog.
///
/// The serialized field names follow the listing feed shape (`cert`,
/// `lang`, `durationMins`, `votes`, `format`), so catalog files and a real
/// listing service can share one parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    #[serde(rename = "cert")]
    pub certification: String,
    /// Non-empty, in display order
    pub genres: Vec<String>,
    #[serde(rename = "lang")]
    pub language: String,
    #[serde(rename = "durationMins")]
    pub duration_minutes: u32,
    /// Audience rating in `[0, 5]`
    pub rating: f32,
    #[serde(rename = "votes")]
    pub vote_count: u64,
    pub status: ReleaseStatus,
    /// Non-empty, e.g. `["2D", "IMAX"]`
    #[serde(rename = "format")]
    pub formats: Vec<String>,

    // Display-only fields
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(rename = "banner", default)]
    pub banner_url: String,
    #[serde(rename = "poster", default)]
    pub poster_url: String,
}

impl MovieRecord {
    /// Tags this movie carries for a facet dimension
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Language => std::slice::from_ref(&self.language),
            Facet::Genre => &self.genres,
            Facet::Format => &self.formats,
        }
    }
}

// =============================================================================
// Facets
// =============================================================================

/// A filterable dimension of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    Language,
    Genre,
    Format,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Language, Facet::Genre, Facet::Format];
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Language => f.write_str("Language"),
            Facet::Genre => f.write_str("Genre"),
            Facet::Format => f.write_str("Format"),
        }
    }
}

/// Distinct option values for every facet, each sorted ascending.
///
/// Derived once from the full catalog and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub languages: Vec<String>,
    pub genres: Vec<String>,
    pub formats: Vec<String>,
}

impl Facets {
    /// Option list for one facet
    pub fn options(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Language => &self.languages,
            Facet::Genre => &self.genres,
            Facet::Format => &self.formats,
        }
    }
}

// =============================================================================
// Catalog - the immutable in-memory collection
// =============================================================================

/// The full, validated movie catalog.
///
/// Records keep the order they were supplied in; that order is the
/// tie-breaker for every stable sort downstream.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) movies: Vec<MovieRecord>,
    /// Position of each movie in `movies`
    pub(crate) id_index: HashMap<MovieId, usize>,
    pub(crate) facets: Facets,
}

impl Catalog {
    /// All records in catalog order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Look up a movie by id
    pub fn get_movie(&self, id: &str) -> Option<&MovieRecord> {
        self.id_index.get(id).map(|&pos| &self.movies[pos])
    }

    /// Facet option lists computed when the catalog was built
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Movies currently in cinemas, in catalog order
    pub fn now_showing(&self) -> Vec<&MovieRecord> {
        self.movies
            .iter()
            .filter(|m| m.status == ReleaseStatus::NowShowing)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
