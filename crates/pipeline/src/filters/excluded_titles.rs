//! Filter to remove the query title and caller-excluded titles.
//!
//! This is the first filter in the pipeline: the query movie must never
//! rank against itself, and previously surfaced titles stay out.

use crate::candidates::{Candidate, QueryContext};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use std::sync::Arc;

/// Removes candidates whose title is the query title or is in the
/// caller-supplied exclusion set.
///
/// Candidates whose id no longer resolves in the catalog are dropped too.
pub struct ExcludedTitlesFilter {
    catalog: Arc<Catalog>,
}

impl ExcludedTitlesFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for ExcludedTitlesFilter {
    fn name(&self) -> &str {
        "ExcludedTitlesFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &QueryContext,
    ) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = self.catalog.get(candidate.movie_id) {
                    movie.title != context.query_title && !context.excluded.contains(&movie.title)
                } else {
                    false
                }
            })
            .collect();
        Ok(filtered)
    }
}
