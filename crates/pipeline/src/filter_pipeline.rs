//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::candidates::{Candidate, QueryContext};
use crate::traits::Filter;
use anyhow::Result;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExcludedTitlesFilter::new(catalog.clone()))
///     .add_filter(GenreFilter::new(catalog.clone()));
///
/// let filtered = pipeline.apply(candidates, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &QueryContext,
    ) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ExcludedTitlesFilter, GenreFilter};
    use catalog::{Catalog, MovieRecord};
    use std::sync::Arc;

    fn create_test_catalog() -> Arc<Catalog> {
        let mut catalog = Catalog::new();
        catalog.insert(MovieRecord {
            id: 1,
            title: "Seven".to_string(),
            overview: String::new(),
            genres: vec!["Crime".to_string()],
        });
        catalog.insert(MovieRecord {
            id: 2,
            title: "Zodiac".to_string(),
            overview: String::new(),
            genres: vec!["Crime".to_string(), "Drama".to_string()],
        });
        catalog.insert(MovieRecord {
            id: 3,
            title: "Up".to_string(),
            overview: String::new(),
            genres: vec!["Animation".to_string()],
        });
        Arc::new(catalog)
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let context = QueryContext::new("Seven");

        let candidates = vec![Candidate::new(1), Candidate::new(2)];

        let filtered = pipeline.apply(candidates.clone(), &context).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_exclusion_then_genre() {
        let catalog = create_test_catalog();
        let mut context = QueryContext::new("Seven");
        context.genres = vec!["Crime".to_string()];

        let pipeline = FilterPipeline::new()
            .add_filter(ExcludedTitlesFilter::new(catalog.clone()))
            .add_filter(GenreFilter::new(catalog.clone()));

        let candidates = vec![Candidate::new(1), Candidate::new(2), Candidate::new(3)];

        let filtered = pipeline.apply(candidates, &context).unwrap();
        assert_eq!(filtered, vec![Candidate::new(2)]);
    }
}
