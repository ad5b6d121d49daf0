//! Parser for the catalog CSV source.
//!
//! The catalog is a tabular file with at minimum the columns
//! `id`, `title`, `overview` (nullable) and `genre` (comma-joined,
//! nullable). Extra columns are ignored.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, MovieId, MovieRecord};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Columns the source must carry for the catalog to be loadable
const REQUIRED_COLUMNS: [&str; 4] = ["id", "title", "overview", "genre"];

/// Raw CSV row before normalization into a MovieRecord
#[derive(Debug, Deserialize)]
struct RawRow {
    id: MovieId,
    title: String,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    genre: Option<String>,
}

/// Split the comma-joined genre field into a genre list.
///
/// An absent or empty field yields the empty sequence; otherwise the raw
/// value is split on `,` with no further transformation.
fn parse_genres(raw: Option<String>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(s) if s.is_empty() => Vec::new(),
        Some(s) => s.split(',').map(|g| g.to_string()).collect(),
    }
}

/// Parse the catalog CSV file into a Catalog.
///
/// Fails if the file is unreadable, a required column is missing from the
/// header, or a row cannot be decoded.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path)?;

    // Validate the header up front so a column-level problem surfaces as
    // a single clear error instead of a per-row decode failure.
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut catalog = Catalog::new();
    for row in reader.deserialize() {
        let raw: RawRow = row?;
        catalog.insert(MovieRecord {
            id: raw.id,
            title: raw.title,
            overview: raw.overview.unwrap_or_default(),
            genres: parse_genres(raw.genre),
        });
    }

    info!("Loaded {} movies from {}", catalog.len(), path.display());
    Ok(catalog)
}
