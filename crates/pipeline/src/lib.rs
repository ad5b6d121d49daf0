//! Pipeline for candidate filtering and similarity ranking.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate selection
//! - FilterPipeline for composing filters
//! - TfidfVectorizer for plot-text vectorization
//! - SimilarityRanker for cosine-similarity ranking
//!
//! ## Architecture
//! A recommendation request flows through two stages:
//! 1. Filters narrow the catalog to the candidate set (drop the query
//!    title and exclusions, restrict by genre when requested)
//! 2. The ranker fits TF-IDF over the candidate overviews and orders the
//!    candidates by cosine similarity to the query movie's overview
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Candidate, FilterPipeline, QueryContext, SimilarityRanker};
//! use pipeline::filters::*;
//!
//! let context = QueryContext::new("The Godfather");
//! let pipeline = FilterPipeline::new()
//!     .add_filter(ExcludedTitlesFilter::new(catalog.clone()))
//!     .add_filter(GenreFilter::new(catalog.clone()));
//!
//! let candidates = pipeline.apply(candidates, &context)?;
//! let ranking = SimilarityRanker::new(catalog.clone()).rank(&candidates, query_overview);
//! ```

pub mod candidates;
pub mod filter_pipeline;
pub mod filters;
pub mod ranking;
pub mod stopwords;
pub mod tfidf;
pub mod traits;

// Re-export main types
pub use candidates::{Candidate, QueryContext};
pub use filter_pipeline::FilterPipeline;
pub use ranking::{ScoredCandidate, SimilarityRanker};
pub use tfidf::TfidfVectorizer;
pub use traits::Filter;
