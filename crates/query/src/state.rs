//! Query state: everything the user has selected in the browse view.
//!
//! A [`QueryState`] is a plain value. Every user action (typing, toggling a
//! checkbox, switching tab, picking a sort) produces a new state rather than
//! mutating a shared one, so evaluation stays a pure function of
//! `(catalog, state)`.

use crate::error::{QueryError, Result};
use catalog::{Facet, ReleaseStatus};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Top-level partition of the catalog. There is no "all" tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    NowShowing,
    ComingSoon,
}

impl Tab {
    /// The release status a movie must have to be listed under this tab
    pub fn status(self) -> ReleaseStatus {
        match self {
            Tab::NowShowing => ReleaseStatus::NowShowing,
            Tab::ComingSoon => ReleaseStatus::ComingSoon,
        }
    }
}

impl FromStr for Tab {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "now" | "now-showing" | "nowshowing" => Ok(Tab::NowShowing),
            "soon" | "coming-soon" | "comingsoon" => Ok(Tab::ComingSoon),
            _ => Err(QueryError::UnknownTab(s.to_string())),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status(), f)
    }
}

/// How the filtered list is ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Most votes first
    #[default]
    Popularity,
    /// Highest rating first
    Rating,
    /// Shortest running time first
    Duration,
    /// Title A-Z
    Alphabetical,
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Unknown keys are rejected here, so the pipeline never sees one.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "popularity" => Ok(SortKey::Popularity),
            "rating" => Ok(SortKey::Rating),
            "duration" => Ok(SortKey::Duration),
            "az" | "a-z" | "alphabetical" => Ok(SortKey::Alphabetical),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
            SortKey::Duration => "duration",
            SortKey::Alphabetical => "az",
        };
        f.write_str(label)
    }
}

/// The user's current browse criteria.
///
/// Filter sets are unordered collections of tag strings; an empty set
/// places no restriction on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub search_term: String,
    pub tab: Tab,
    pub sort_key: SortKey,
    pub languages: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub formats: BTreeSet<String>,
}

impl QueryState {
    /// A fresh, filter-less query on `tab`
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    /// Selected tags for one facet
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Language => &self.languages,
            Facet::Genre => &self.genres,
            Facet::Format => &self.formats,
        }
    }

    /// Return a state with `value` toggled in the `facet` selection.
    ///
    /// The selection set is rebuilt and replaced as a whole; the previous
    /// state is left untouched.
    pub fn toggled(&self, facet: Facet, value: &str) -> Self {
        let mut selection = self.selected(facet).clone();
        if !selection.remove(value) {
            selection.insert(value.to_string());
        }

        let mut next = self.clone();
        match facet {
            Facet::Language => next.languages = selection,
            Facet::Genre => next.genres = selection,
            Facet::Format => next.formats = selection,
        }
        next
    }

    /// "Clear all": drop the search term and every facet selection and
    /// reset the sort. The tab is kept.
    pub fn cleared(&self) -> Self {
        Self::new(self.tab)
    }

    /// Trimmed search term, or `None` when there is nothing to search for
    pub fn normalized_search(&self) -> Option<String> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// Whether any search term or facet selection narrows the result
    pub fn has_active_filters(&self) -> bool {
        self.normalized_search().is_some()
            || Facet::ALL.iter().any(|&f| !self.selected(f).is_empty())
    }
}
