//! Free-text search over title, language and genres.

use crate::state::QueryState;
use crate::traits::Filter;
use catalog::MovieRecord;

/// Keeps movies whose searchable text contains the search term.
///
/// ## Algorithm
/// 1. Trim the term and lower-case it; a blank term keeps everything
/// 2. Build the haystack `"{title} {language} {genres...}"`, lower-cased
/// 3. Plain substring match, internal whitespace in the term is kept
pub struct SearchFilter;

/// The lower-cased text a search term is matched against
pub fn haystack(movie: &MovieRecord) -> String {
    format!(
        "{} {} {}",
        movie.title,
        movie.language,
        movie.genres.join(" ")
    )
    .to_lowercase()
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, query: &QueryState) -> Vec<&'a MovieRecord> {
        let Some(term) = query.normalized_search() else {
            return movies;
        };

        movies
            .into_iter()
            .filter(|movie| haystack(movie).contains(&term))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::movie;
    use catalog::ReleaseStatus;

    fn sample() -> Vec<MovieRecord> {
        vec![
            movie("a", "Mystic River", ReleaseStatus::NowShowing, "Hindi", &["Drama", "Mystery"], &["2D"]),
            movie("b", "Skyline Run", ReleaseStatus::NowShowing, "English", &["Thriller"], &["IMAX"]),
        ]
    }

    fn ids(movies: &[&MovieRecord]) -> Vec<String> {
        movies.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_haystack_layout() {
        let movies = sample();
        assert_eq!(haystack(&movies[0]), "mystic river hindi drama mystery");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let movies = sample();
        let refs: Vec<&MovieRecord> = movies.iter().collect();

        let query = QueryState::default().with_search("MYST");
        assert_eq!(ids(&SearchFilter.apply(refs.clone(), &query)), vec!["a"]);

        // Matches on language and genre, not just title
        let query = QueryState::default().with_search("english");
        assert_eq!(ids(&SearchFilter.apply(refs.clone(), &query)), vec!["b"]);
        let query = QueryState::default().with_search("thrill");
        assert_eq!(ids(&SearchFilter.apply(refs, &query)), vec!["b"]);
    }

    #[test]
    fn test_search_trims_but_keeps_inner_whitespace() {
        let movies = sample();
        let refs: Vec<&MovieRecord> = movies.iter().collect();

        let query = QueryState::default().with_search("   skyline run  ");
        assert_eq!(ids(&SearchFilter.apply(refs.clone(), &query)), vec!["b"]);

        let query = QueryState::default().with_search("skyline  run");
        assert!(SearchFilter.apply(refs, &query).is_empty());
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let movies = sample();
        let refs: Vec<&MovieRecord> = movies.iter().collect();

        let query = QueryState::default().with_search(" \t ");
        assert_eq!(SearchFilter.apply(refs, &query).len(), 2);
    }
}
