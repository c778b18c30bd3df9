//! # Storefront Session
//!
//! Coordinates everything one browse view needs:
//! 1. Load the catalog
//! 2. Keep the user's current QueryState and replace it on every action
//! 3. Evaluate the query for the movie grid and result count
//! 4. Expose facet option lists for the filter panel
//! 5. Track the hero carousel over the now-showing subset
//!
//! The session owns no timers. Call [`Storefront::start_ticker`] to get a
//! [`CarouselTicker`] whose lifetime the caller controls.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, instrument};

use catalog::{Catalog, Facet, Facets, MovieId, MovieRecord};
use query::{QueryEngine, QueryState, SortKey, Tab};

use crate::carousel::{Carousel, hero_subset};
use crate::config::{CatalogSource, LOCATIONS, Location, ShowcaseConfig};
use crate::ticker::{CarouselTicker, SharedCarousel, lock_carousel};

/// Everything the browse page renders for the current state
#[derive(Debug, Clone)]
pub struct BrowseView<'a> {
    /// Grid contents in display order
    pub movies: Vec<&'a MovieRecord>,
    pub count: usize,
    pub facets: &'a Facets,
    /// Featured movie, `None` only for an empty catalog
    pub hero: Option<&'a MovieRecord>,
    pub hero_index: usize,
    pub hero_count: usize,
    pub location: Location,
}

impl BrowseView<'_> {
    /// Result header, e.g. "Showing 5 movies in Gurugram"
    pub fn header(&self) -> String {
        format!("Showing {} movies in {}", self.count, self.location.city)
    }
}

/// One user's browse session over a shared catalog
pub struct Storefront {
    engine: QueryEngine,
    query: QueryState,
    hero_ids: Vec<MovieId>,
    carousel: SharedCarousel,
    location: Location,
}

impl Storefront {
    /// Create a session on the "Now Showing" tab with no filters
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let hero_ids = hero_ids(&catalog);
        let carousel = Arc::new(Mutex::new(Carousel::new(hero_ids.len())));
        Self {
            engine: QueryEngine::new(catalog),
            query: QueryState::new(Tab::NowShowing),
            hero_ids,
            carousel,
            location: Location::default(),
        }
    }

    /// Load the configured catalog and open a session on it
    pub fn load(config: &ShowcaseConfig) -> Result<Self> {
        let catalog = match &config.catalog {
            CatalogSource::Demo => Catalog::demo().context("Failed to load demo catalog")?,
            CatalogSource::File(path) => Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        };
        info!("Storefront opened with {} movies", catalog.len());
        let mut store = Self::new(Arc::new(catalog));
        store.location = config.location;
        Ok(store)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.engine.catalog()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Replace the whole query state
    pub fn set_query(&mut self, query: QueryState) {
        debug!(?query, "Query replaced");
        self.query = query;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.set_query(self.query.clone().with_search(term));
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.set_query(self.query.clone().with_tab(tab));
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.set_query(self.query.clone().with_sort(sort_key));
    }

    /// Check or uncheck one facet option
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        self.set_query(self.query.toggled(facet, value));
    }

    /// Reset search, facet selections and sort; the tab is kept
    pub fn clear_all(&mut self) {
        self.set_query(self.query.cleared());
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Switch the selected city; an unknown city keeps the current one
    pub fn set_location(&mut self, city: &str) -> Result<()> {
        let location = Location::find(city).ok_or_else(|| {
            let known: Vec<&str> = LOCATIONS.iter().map(|l| l.city).collect();
            anyhow!("Unknown city '{}' (choose one of: {})", city, known.join(", "))
        })?;
        debug!(city = location.city, "Location changed");
        self.location = location;
        Ok(())
    }

    /// Details for one movie, e.g. when a card is clicked
    pub fn open_movie(&self, id: &str) -> Option<&MovieRecord> {
        self.catalog().get_movie(id)
    }

    /// Swap in a reloaded catalog.
    ///
    /// The query state is kept and the carousel index is re-clamped to the
    /// new hero subset.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.hero_ids = hero_ids(&catalog);
        lock_carousel(&self.carousel).resize(self.hero_ids.len());
        self.engine = QueryEngine::new(catalog);
        info!("Catalog replaced, {} hero movies", self.hero_ids.len());
    }

    /// Shared carousel handle, e.g. for a ticker
    pub fn carousel(&self) -> SharedCarousel {
        self.carousel.clone()
    }

    pub fn next_hero(&self) {
        lock_carousel(&self.carousel).advance();
    }

    pub fn previous_hero(&self) {
        lock_carousel(&self.carousel).retreat();
    }

    pub fn go_to_hero(&self, index: usize) {
        lock_carousel(&self.carousel).go_to(index);
    }

    /// The movie currently featured in the hero slot
    pub fn hero(&self) -> Option<&MovieRecord> {
        let index = lock_carousel(&self.carousel).index();
        self.hero_at(index)
    }

    fn hero_at(&self, index: usize) -> Option<&MovieRecord> {
        self.hero_ids
            .get(index)
            .and_then(|id| self.catalog().get_movie(id))
    }

    /// Start rotating the hero on `config.hero_interval`
    pub fn start_ticker(&self, config: &ShowcaseConfig) -> CarouselTicker {
        CarouselTicker::start(self.carousel(), config.hero_interval)
    }

    /// Evaluate the current state into what the page shows
    #[instrument(skip(self))]
    pub fn view(&self) -> BrowseView<'_> {
        let result = self.engine.evaluate(&self.query);
        let carousel = *lock_carousel(&self.carousel);

        BrowseView {
            count: result.count(),
            movies: result.movies,
            facets: self.engine.facets(),
            hero: self.hero_at(carousel.index()),
            hero_index: carousel.index(),
            hero_count: carousel.len(),
            location: self.location,
        }
    }
}

fn hero_ids(catalog: &Catalog) -> Vec<MovieId> {
    hero_subset(catalog).iter().map(|m| m.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_storefront() -> Storefront {
        Storefront::load(&ShowcaseConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_view() {
        let store = demo_storefront();
        let view = store.view();

        assert_eq!(view.count, 5);
        assert_eq!(view.movies[0].id, "mystic-river");
        assert_eq!(view.facets.languages, vec!["English", "Hindi"]);
        assert_eq!(view.hero.unwrap().id, "border-2");
        assert_eq!(view.hero_count, 5);
    }

    #[test]
    fn test_actions_update_view() {
        let mut store = demo_storefront();

        store.toggle(Facet::Language, "English");
        assert_eq!(store.view().count, 2);

        store.set_sort(SortKey::Duration);
        let ids: Vec<&str> = store.view().movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["skyline", "comicverse"]);

        store.toggle(Facet::Language, "English");
        store.set_search("romance");
        assert_eq!(store.view().movies[0].id, "desi-dil");

        store.set_tab(Tab::ComingSoon);
        assert_eq!(store.view().count, 0);

        store.clear_all();
        let view = store.view();
        assert_eq!(view.count, 1);
        assert_eq!(view.movies[0].id, "krrish-x");
        assert_eq!(store.query(), &QueryState::new(Tab::ComingSoon));
    }

    #[test]
    fn test_hero_navigation() {
        let store = demo_storefront();

        store.previous_hero();
        assert_eq!(store.hero().unwrap().id, "desi-dil");
        store.next_hero();
        assert_eq!(store.hero().unwrap().id, "border-2");
        store.go_to_hero(2);
        assert_eq!(store.hero().unwrap().id, "mystic-river");
        store.go_to_hero(42);
        assert_eq!(store.hero().unwrap().id, "desi-dil");
    }

    #[test]
    fn test_hero_is_independent_of_tab() {
        let mut store = demo_storefront();
        store.set_tab(Tab::ComingSoon);

        let view = store.view();
        assert_eq!(view.hero_count, 5);
        assert!(view.movies.iter().all(|m| m.id == "krrish-x"));
    }

    #[test]
    fn test_view_hero_matches_hero_index() {
        let store = demo_storefront();

        for _ in 0..7 {
            let view = store.view();
            assert_eq!(view.hero.unwrap().id, store.hero_ids[view.hero_index]);
            store.next_hero();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_view_hero_consistent_while_ticking() {
        let store = demo_storefront();
        let config = ShowcaseConfig {
            hero_interval: std::time::Duration::from_millis(1),
            ..ShowcaseConfig::default()
        };
        let ticker = store.start_ticker(&config);

        for _ in 0..500 {
            let view = store.view();
            assert_eq!(view.hero.unwrap().id, store.hero_ids[view.hero_index]);
            tokio::task::yield_now().await;
        }
        drop(ticker);
    }

    #[test]
    fn test_location_header() {
        let mut store = demo_storefront();
        assert_eq!(store.view().header(), "Showing 5 movies in Gurugram");

        store.set_location("mumbai").unwrap();
        store.toggle(Facet::Language, "English");
        assert_eq!(store.location().state, "Maharashtra");
        assert_eq!(store.view().header(), "Showing 2 movies in Mumbai");
    }

    #[test]
    fn test_unknown_location_keeps_current() {
        let mut store = demo_storefront();
        store.set_location("Surat").unwrap();

        let err = store.set_location("Atlantis").unwrap_err();
        assert!(err.to_string().contains("Atlantis"));
        assert_eq!(store.location().city, "Surat");
    }

    #[test]
    fn test_load_uses_configured_location() {
        let config = ShowcaseConfig {
            location: Location::find("Delhi").unwrap(),
            ..ShowcaseConfig::default()
        };
        let store = Storefront::load(&config).unwrap();
        assert_eq!(store.view().location.city, "Delhi");
    }

    #[test]
    fn test_open_movie() {
        let store = demo_storefront();
        assert_eq!(store.open_movie("skyline").unwrap().title, "Skyline Run");
        assert!(store.open_movie("missing").is_none());
    }

    #[test]
    fn test_replace_catalog_reclamps_carousel() {
        let mut store = demo_storefront();
        store.go_to_hero(4);

        let json = r#"[
            {"id": "p", "title": "P", "cert": "U", "genres": ["Drama"], "lang": "Tamil",
             "durationMins": 95, "rating": 3.5, "votes": 12, "status": "Now Showing", "format": ["2D"]},
            {"id": "q", "title": "Q", "cert": "U", "genres": ["Drama"], "lang": "Tamil",
             "durationMins": 99, "rating": 3.1, "votes": 40, "status": "Now Showing", "format": ["2D"]}
        ]"#;
        store.replace_catalog(Arc::new(Catalog::from_json_str(json).unwrap()));

        let view = store.view();
        assert_eq!(view.hero_index, 1);
        assert_eq!(view.hero.unwrap().id, "q");
        assert_eq!(view.facets.languages, vec!["Tamil"]);
    }

    #[test]
    fn test_empty_catalog() {
        let store = Storefront::new(Arc::new(Catalog::from_records(vec![]).unwrap()));
        store.next_hero();

        let view = store.view();
        assert_eq!(view.count, 0);
        assert!(view.hero.is_none());
        assert_eq!(view.hero_index, 0);
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let config = ShowcaseConfig {
            catalog: CatalogSource::File("no/such/catalog.json".into()),
            ..ShowcaseConfig::default()
        };

        let err = Storefront::load(&config).err().unwrap();
        assert!(err.to_string().contains("no/such/catalog.json"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_rotates_storefront_hero() {
        let store = demo_storefront();
        let config = ShowcaseConfig::default();
        let ticker = store.start_ticker(&config);
        let mut ticks = ticker.subscribe();

        ticks.changed().await.unwrap();
        assert_eq!(store.hero().unwrap().id, "skyline");
        drop(ticker);
    }
}
