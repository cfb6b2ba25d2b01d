//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog document is not valid JSON or has the wrong shape
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field of an entry had an out-of-range value
    #[error("Invalid value for {field} on entry {id}: {value}")]
    InvalidValue {
        id: u32,
        field: String,
        value: String,
    },

    /// Two entries share the same id
    #[error("Duplicate entry id: {0}")]
    DuplicateId(u32),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
