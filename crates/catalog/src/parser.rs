//! Parsing catalog sources.
//!
//! A catalog source is a JSON array of movie records in the listing feed
//! shape (see [`MovieRecord`]). The built-in demo dataset uses the same
//! format and is embedded into the binary at compile time.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::path::Path;
use tracing::info;

/// The demo dataset shipped with the crate
const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

/// Parse a JSON array of movie records, keeping their order
pub fn parse_movies(json: &str, source_name: &str) -> Result<Vec<MovieRecord>> {
    serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

impl Catalog {
    /// Load and validate a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        info!("Loading catalog from {:?}", path);

        let json = std::fs::read_to_string(path)?;
        let movies = parse_movies(&json, &path.display().to_string())?;
        Catalog::from_records(movies)
    }

    /// Parse and validate a catalog from an in-memory JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies = parse_movies(json, "<inline>")?;
        Catalog::from_records(movies)
    }

    /// The built-in demo catalog
    pub fn demo() -> Result<Self> {
        let movies = parse_movies(DEMO_CATALOG, "demo_catalog.json")?;
        Catalog::from_records(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_loads() {
        let catalog = Catalog::demo().unwrap();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.now_showing().len(), 5);

        let border = catalog.get_movie("border-2").unwrap();
        assert_eq!(border.title, "Border 2");
        assert_eq!(border.certification, "UA13+");
        assert_eq!(border.duration_minutes, 152);
        assert_eq!(border.vote_count, 18243);
        assert_eq!(border.status, ReleaseStatus::NowShowing);

        let krrish = catalog.get_movie("krrish-x").unwrap();
        assert_eq!(krrish.status, ReleaseStatus::ComingSoon);
    }

    #[test]
    fn test_demo_facets() {
        let catalog = Catalog::demo().unwrap();
        let facets = catalog.facets();

        assert_eq!(facets.languages, vec!["English", "Hindi"]);
        assert_eq!(facets.formats, vec!["2D", "3D", "IMAX"]);
        assert_eq!(
            facets.genres,
            vec![
                "Action",
                "Adventure",
                "Comedy",
                "Drama",
                "Fantasy",
                "Mystery",
                "Romance",
                "Sci-Fi",
                "Thriller"
            ]
        );
    }

    #[test]
    fn test_parse_minimal_record() {
        let json = r#"[{
            "id": "x",
            "title": "X",
            "cert": "U",
            "genres": ["Drama"],
            "lang": "Tamil",
            "durationMins": 95,
            "rating": 3.5,
            "votes": 12,
            "status": "Coming Soon",
            "format": ["2D"]
        }]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        let movie = catalog.get_movie("x").unwrap();
        assert_eq!(movie.status, ReleaseStatus::ComingSoon);
        assert!(movie.synopsis.is_empty());
        assert!(movie.cast.is_empty());
    }

    #[test]
    fn test_parse_unknown_status_fails() {
        let json = r#"[{
            "id": "x", "title": "X", "cert": "U", "genres": ["Drama"],
            "lang": "Tamil", "durationMins": 95, "rating": 3.5, "votes": 12,
            "status": "Archived", "format": ["2D"]
        }]"#;

        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::load_from_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
