//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog.
///
/// Loading is fatal at startup: callers are expected to abort
/// initialization rather than recover from any of these.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while opening or reading the source file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader failed (malformed row, bad quoting, type mismatch)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the CSV header
    #[error("Missing required column in catalog source: {column}")]
    MissingColumn { column: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
