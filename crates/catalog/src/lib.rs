//! # Catalog Crate
//!
//! This crate handles loading and holding the in-memory movie catalog
//! (the TMDB top-10K CSV export).
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Catalog)
//! - **parser**: Parse the CSV source into a Catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_csv(Path::new("data/top10K-TMDB-movies.csv"))?;
//!
//! let movie = catalog.get_by_title("The Godfather").unwrap();
//! println!("{} has {} genres", movie.title, movie.genres.len());
//! ```
//!
//! The Catalog is read-only after load, so sharing it across requests
//! behind an `Arc` needs no locking.

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, MovieId, MovieRecord};

use std::path::Path;

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// This is the main entry point for loading data; it is expected to be
    /// called once at process start, with the resulting Catalog injected
    /// into whatever needs it.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        parser::parse_catalog(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: MovieId, title: &str, overview: &str, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            overview: overview.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get_by_title("Anything").is_none());
        assert!(catalog.genres().is_empty());
    }

    #[test]
    fn test_lookup_by_title_and_id() {
        let mut catalog = Catalog::new();
        catalog.insert(record(10, "Heat", "a heist", &["Crime"]));
        catalog.insert(record(20, "Alien", "in space", &["Horror", "Science Fiction"]));

        assert_eq!(catalog.get_by_title("Alien").unwrap().id, 20);
        assert_eq!(catalog.get(10).unwrap().title, "Heat");
        assert!(catalog.get_by_title("alien").is_none()); // lookup is exact
    }

    #[test]
    fn test_duplicate_titles_first_match_wins() {
        let mut catalog = Catalog::new();
        catalog.insert(record(1, "The Thing", "antarctic horror", &["Horror"]));
        catalog.insert(record(2, "The Thing", "2011 prequel", &["Horror"]));

        // Title uniqueness is not guaranteed by the source; the first
        // loaded record is the one lookups resolve to.
        assert_eq!(catalog.get_by_title("The Thing").unwrap().id, 1);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_titles_preserve_load_order() {
        let mut catalog = Catalog::new();
        catalog.insert(record(3, "Zodiac", "", &[]));
        catalog.insert(record(1, "Amadeus", "", &[]));

        assert_eq!(catalog.titles(), vec!["Zodiac", "Amadeus"]);
    }

    #[test]
    fn test_genres_distinct_and_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert(record(1, "A", "", &["Drama", "Crime"]));
        catalog.insert(record(2, "B", "", &["Crime", "Action"]));

        assert_eq!(catalog.genres(), vec!["Action", "Crime", "Drama"]);
    }
}
