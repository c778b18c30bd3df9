//! Runtime settings for the storefront session.

use std::path::PathBuf;
use std::time::Duration;

/// How long each hero slide stays up before the carousel advances
pub const DEFAULT_HERO_INTERVAL: Duration = Duration::from_millis(6500);

/// A city the storefront can show listings for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub city: &'static str,
    pub state: &'static str,
}

/// Selectable cities; the first is the default
pub const LOCATIONS: [Location; 5] = [
    Location { city: "Gurugram", state: "Haryana" },
    Location { city: "Ahmedabad", state: "Gujarat" },
    Location { city: "Surat", state: "Gujarat" },
    Location { city: "Mumbai", state: "Maharashtra" },
    Location { city: "Delhi", state: "Delhi" },
];

impl Location {
    /// Case-insensitive lookup by city name
    pub fn find(city: &str) -> Option<Location> {
        let city = city.trim();
        LOCATIONS
            .iter()
            .find(|l| l.city.eq_ignore_ascii_case(city))
            .copied()
    }
}

impl Default for Location {
    fn default() -> Self {
        LOCATIONS[0]
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in demo dataset
    #[default]
    Demo,
    /// A JSON file of movie records
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub catalog: CatalogSource,
    pub hero_interval: Duration,
    pub location: Location,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Demo,
            hero_interval: DEFAULT_HERO_INTERVAL,
            location: Location::default(),
        }
    }
}
