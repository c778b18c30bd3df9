//! Error types for the query crate.
//!
//! Evaluation itself never fails. Errors only arise at the boundary, when
//! user-supplied strings are turned into a [`Tab`](crate::Tab) or a
//! [`SortKey`](crate::SortKey).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort key '{0}' (expected popularity, rating, duration or az)")]
    UnknownSortKey(String),

    #[error("Unknown tab '{0}' (expected now or soon)")]
    UnknownTab(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
