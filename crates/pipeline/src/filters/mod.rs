//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod excluded_titles;
pub mod genre;

// Re-export for convenience
pub use excluded_titles::ExcludedTitlesFilter;
pub use genre::GenreFilter;
