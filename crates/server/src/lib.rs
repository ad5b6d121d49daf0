//! Server crate for the Curator recommendation engine.
//!
//! This crate contains the orchestrator that coordinates all components
//! of the recommendation pipeline.

pub mod orchestrator;

pub use orchestrator::{
    EnrichedRecommendation, MAX_RECOMMENDATIONS, RecommendError, RecommendationOrchestrator,
    Recommendations,
};
