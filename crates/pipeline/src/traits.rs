//! Core traits for the candidate filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::candidates::{Candidate, QueryContext};
use anyhow::Result;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec,
///   preserving the relative order of survivors (the ranking tie-break
///   depends on it)
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    fn apply(&self, candidates: Vec<Candidate>, context: &QueryContext)
    -> Result<Vec<Candidate>>;
}
