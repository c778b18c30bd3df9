//! Filter on the movie's language.

use crate::filters::retain_selected;
use crate::state::QueryState;
use crate::traits::Filter;
use catalog::{Facet, MovieRecord};

/// Keeps movies whose language is one of the selected languages.
///
/// Exact string equality; "Hin" does not select "Hindi".
pub struct LanguageFilter;

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, query: &QueryState) -> Vec<&'a MovieRecord> {
        retain_selected(movies, query, Facet::Language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::movie;
    use catalog::ReleaseStatus;

    #[test]
    fn test_language_filter_exact_match() {
        let movies = vec![
            movie("a", "A", ReleaseStatus::NowShowing, "Hindi", &["Action"], &["2D"]),
            movie("b", "B", ReleaseStatus::NowShowing, "English", &["Action"], &["2D"]),
            movie("c", "C", ReleaseStatus::NowShowing, "Tamil", &["Action"], &["2D"]),
        ];
        let refs: Vec<&MovieRecord> = movies.iter().collect();

        let query = QueryState::default()
            .toggled(Facet::Language, "Hindi")
            .toggled(Facet::Language, "Tamil");
        let filtered = LanguageFilter.apply(refs.clone(), &query);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "a");
        assert_eq!(filtered[1].id, "c");

        let partial = QueryState::default().toggled(Facet::Language, "Hin");
        assert!(LanguageFilter.apply(refs, &partial).is_empty());
    }
}
