//! Optional filter for genre restriction.
//!
//! When the caller selects one or more genres, only candidates tagged
//! with at least one of them survive. With no selection the filter is a
//! pass-through.

use crate::candidates::{Candidate, QueryContext};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use std::sync::Arc;

/// Keeps only candidates whose genre list intersects the requested genres.
pub struct GenreFilter {
    catalog: Arc<Catalog>,
}

impl GenreFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &QueryContext,
    ) -> Result<Vec<Candidate>> {
        if context.genres.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = self.catalog.get(candidate.movie_id) {
                    movie
                        .genres
                        .iter()
                        .any(|genre| context.genres.contains(genre))
                } else {
                    false
                }
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MovieRecord;

    fn create_test_catalog() -> Arc<Catalog> {
        let mut catalog = Catalog::new();
        catalog.insert(MovieRecord {
            id: 1,
            title: "Die Hard".to_string(),
            overview: String::new(),
            genres: vec!["Action".to_string(), "Thriller".to_string()],
        });
        catalog.insert(MovieRecord {
            id: 2,
            title: "Before Sunrise".to_string(),
            overview: String::new(),
            genres: vec!["Romance".to_string()],
        });
        catalog.insert(MovieRecord {
            id: 3,
            title: "Koyaanisqatsi".to_string(),
            overview: String::new(),
            genres: vec![],
        });
        Arc::new(catalog)
    }

    #[test]
    fn test_genre_filter_keeps_intersecting() {
        let catalog = create_test_catalog();
        let mut context = QueryContext::new("Anything");
        context.genres = vec!["Action".to_string(), "Comedy".to_string()];

        let candidates = vec![Candidate::new(1), Candidate::new(2), Candidate::new(3)];

        let filter = GenreFilter::new(catalog);
        let filtered = filter.apply(candidates, &context).unwrap();

        assert_eq!(filtered, vec![Candidate::new(1)]);
    }

    #[test]
    fn test_genre_filter_empty_selection_passes_through() {
        let catalog = create_test_catalog();
        let context = QueryContext::new("Anything");

        let candidates = vec![Candidate::new(1), Candidate::new(2), Candidate::new(3)];

        let filter = GenreFilter::new(catalog);
        let filtered = filter.apply(candidates.clone(), &context).unwrap();

        assert_eq!(filtered, candidates);
    }
}
