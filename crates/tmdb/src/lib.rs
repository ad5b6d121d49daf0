//! Metadata gateway for the TMDB movie-details API.
//!
//! This crate provides an async HTTP client for fetching poster art and
//! display metadata by movie id. It handles:
//! - Request construction and per-request timeouts
//! - Decoding the details payload
//! - Building fully-qualified poster URLs from the returned poster path
//!
//! The gateway is exposed behind the [`MetadataGateway`] trait so callers
//! can be tested against a mock without a network. No retries and no
//! caching: every fetch is fresh.

use async_trait::async_trait;
use catalog::MovieId;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when talking to the metadata service.
///
/// A timed-out request surfaces as `Http` (reqwest reports expiry as a
/// transport error), so one slow call is bounded and fails like any other
/// gateway failure.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("metadata service returned status {status} for movie {movie_id}")]
    Status {
        movie_id: MovieId,
        status: reqwest::StatusCode,
    },

    #[error("metadata response for movie {movie_id} has no poster path")]
    MissingPoster { movie_id: MovieId },
}

/// Display metadata for one movie, as returned by the details endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Configuration for the TMDB client.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub api_url: String,
    pub image_base_url: String,
    /// Bound on each request so one slow call cannot stall a whole batch
    pub timeout: Duration,
}

impl TmdbConfig {
    /// Configuration with the production TMDB endpoints and default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Operations the recommendation core consumes from the remote catalog
/// service, keyed by movie id.
#[async_trait]
pub trait MetadataGateway: Send + Sync {
    /// Fetch display metadata for one movie.
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, GatewayError>;

    /// Fetch the fully-qualified poster image URL for one movie.
    async fn fetch_poster(&self, movie_id: MovieId) -> Result<String, GatewayError>;
}

/// HTTP client for the TMDB API.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http_client: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http_client,
            config,
        })
    }
}

/// Concatenate the fixed image-host base path with a returned poster path.
fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{}{}", image_base_url, poster_path)
}

#[async_trait]
impl MetadataGateway for TmdbClient {
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, GatewayError> {
        let url = format!("{}/movie/{}", self.config.api_url, movie_id);
        debug!("Fetching details for movie {}", movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status { movie_id, status });
        }

        let details = response.json::<MovieDetails>().await?;
        Ok(details)
    }

    async fn fetch_poster(&self, movie_id: MovieId) -> Result<String, GatewayError> {
        let details = self.fetch_details(movie_id).await?;
        let poster_path = details
            .poster_path
            .ok_or(GatewayError::MissingPoster { movie_id })?;
        Ok(poster_url(&self.config.image_base_url, &poster_path))
    }
}
