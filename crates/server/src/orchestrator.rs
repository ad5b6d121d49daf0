//! # Recommendation Orchestrator
//!
//! This module coordinates the entire recommendation pipeline:
//! 1. Resolve the query title to its catalog record
//! 2. Build the candidate set (exclusion + optional genre filter)
//! 3. Rank candidates by overview similarity (CPU-bound, off the runtime)
//! 4. Take the top 5
//! 5. Enrich each selection from the metadata gateway, fetched
//!    concurrently and reassembled in ranking order
//!
//! Gateway failures are isolated per item: one failed lookup becomes an
//! `Err` entry in the result, never an aborted batch.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use catalog::{Catalog, MovieId};
use pipeline::filters::{ExcludedTitlesFilter, GenreFilter};
use pipeline::{Candidate, FilterPipeline, QueryContext, ScoredCandidate, SimilarityRanker};
use tmdb::{GatewayError, MetadataGateway};

/// Maximum number of recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Errors that abort a recommendation request as a whole.
///
/// Gateway failures are not listed here: they stay inside the result as
/// per-item errors.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The query title does not resolve in the catalog. Recoverable by
    /// re-prompting the caller.
    #[error("title not found in catalog: {0}")]
    TitleNotFound(String),

    /// A filter refused the candidate set
    #[error(transparent)]
    Filter(#[from] anyhow::Error),

    /// A spawned task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// One recommendation with its display metadata from the gateway.
#[derive(Debug, Clone)]
pub struct EnrichedRecommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f64,
    pub poster_url: String,
    pub overview: String,
    pub popularity: f64,
    pub release_date: String,
    pub rating: f64,
}

/// The result of one recommendation request.
///
/// `titles` and `enriched` are parallel sequences in ranking order; an
/// entry whose enrichment failed is present in `titles` and carries the
/// gateway error in `enriched`.
#[derive(Debug)]
pub struct Recommendations {
    pub titles: Vec<String>,
    pub enriched: Vec<Result<EnrichedRecommendation, GatewayError>>,
}

/// Main orchestrator that coordinates the recommendation pipeline.
///
/// Holds the injected catalog; no ambient global state. The catalog is
/// read-only after load, so one orchestrator can serve many requests.
pub struct RecommendationOrchestrator<G> {
    catalog: Arc<Catalog>,
    filter_pipeline: Arc<FilterPipeline>,
    ranker: Arc<SimilarityRanker>,
    gateway: Arc<G>,
}

impl<G> RecommendationOrchestrator<G>
where
    G: MetadataGateway + 'static,
{
    /// Create a new orchestrator over an injected catalog and gateway.
    pub fn new(catalog: Arc<Catalog>, gateway: G) -> Self {
        let filter_pipeline = Arc::new(
            FilterPipeline::new()
                .add_filter(ExcludedTitlesFilter::new(catalog.clone()))
                .add_filter(GenreFilter::new(catalog.clone())),
        );
        let ranker = Arc::new(SimilarityRanker::new(catalog.clone()));
        Self {
            catalog,
            filter_pipeline,
            ranker,
            gateway: Arc::new(gateway),
        }
    }

    /// Main entry point: recommend titles similar to `query_title`.
    ///
    /// `excluded` titles never appear in the result; a non-empty `genres`
    /// list restricts candidates to records tagged with at least one of
    /// them. Returns at most [`MAX_RECOMMENDATIONS`] entries; fewer (or
    /// none) when filtering leaves a short candidate set, which is not an
    /// error.
    pub async fn recommend(
        &self,
        query_title: &str,
        excluded: HashSet<String>,
        genres: Vec<String>,
    ) -> Result<Recommendations, RecommendError> {
        let start_time = Instant::now();

        // Resolve the query record (first match wins on duplicate titles)
        let query = self
            .catalog
            .get_by_title(query_title)
            .ok_or_else(|| RecommendError::TitleNotFound(query_title.to_string()))?;
        let query_overview = query.overview.clone();

        // Build the candidate set from the whole catalog
        let mut context = QueryContext::new(query_title);
        context.excluded = excluded;
        context.genres = genres;

        let candidates: Vec<Candidate> = self
            .catalog
            .records()
            .iter()
            .map(|movie| Candidate::new(movie.id))
            .collect();
        let candidates = self.filter_pipeline.apply(candidates, &context)?;
        info!(
            "Query '{}': {} candidates after filtering",
            query_title,
            candidates.len()
        );

        // TF-IDF fit + scoring is CPU-bound; keep it off the async runtime
        let ranking = {
            let ranker = self.ranker.clone();
            let candidates = candidates.clone();
            let query_overview = query_overview.clone();
            tokio::task::spawn_blocking(move || ranker.rank(&candidates, &query_overview)).await?
        };

        let selected: Vec<ScoredCandidate> =
            ranking.into_iter().take(MAX_RECOMMENDATIONS).collect();

        let titles: Vec<String> = selected
            .iter()
            .filter_map(|scored| self.catalog.get(scored.movie_id))
            .map(|movie| movie.title.clone())
            .collect();

        let enriched = self.enrich(&selected, &titles).await?;

        info!(
            "Query '{}': {} recommendations in {:.2?}",
            query_title,
            titles.len(),
            start_time.elapsed()
        );
        Ok(Recommendations { titles, enriched })
    }

    /// Fetch poster and details for each selection concurrently.
    ///
    /// Fetches are independent and keyed by distinct ids, so they are
    /// spawned in parallel; results are reassembled in ranking order.
    async fn enrich(
        &self,
        selected: &[ScoredCandidate],
        titles: &[String],
    ) -> Result<Vec<Result<EnrichedRecommendation, GatewayError>>, RecommendError> {
        let mut handles = Vec::with_capacity(selected.len());
        for scored in selected {
            let gateway = self.gateway.clone();
            let movie_id = scored.movie_id;
            handles.push(tokio::spawn(async move {
                let poster_url = gateway.fetch_poster(movie_id).await?;
                let details = gateway.fetch_details(movie_id).await?;
                Ok::<_, GatewayError>((poster_url, details))
            }));
        }

        let mut enriched = Vec::with_capacity(selected.len());
        for ((scored, title), handle) in selected.iter().zip(titles).zip(handles) {
            let fetched = handle.await?;
            if let Err(error) = &fetched {
                warn!("Enrichment failed for '{}': {}", title, error);
            }
            enriched.push(fetched.map(|(poster_url, details)| EnrichedRecommendation {
                movie_id: scored.movie_id,
                title: title.clone(),
                score: scored.score,
                poster_url,
                overview: details.overview,
                popularity: details.popularity,
                release_date: details.release_date,
                rating: details.vote_average,
            }));
        }
        Ok(enriched)
    }
}
