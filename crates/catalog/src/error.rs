//! Error types for the catalog crate.
//!
//! Loading a catalog can fail in two places: reading/parsing the JSON
//! source, and validating the parsed records. Both surface as
//! [`CatalogError`].

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog source is not a valid JSON array of movie records
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A record field had an invalid value
    #[error("Invalid value for {field} on movie '{id}': {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Two records share the same id
    #[error("Duplicate movie id: {0}")]
    DuplicateId(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
