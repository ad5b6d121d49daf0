//! Candidate and query-context types shared by filters and the ranker.

use catalog::MovieId;
use std::collections::HashSet;

/// A catalog record eligible for ranking against the query title.
///
/// Candidates are request-scoped: built fresh from the catalog for each
/// recommendation request and discarded after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub movie_id: MovieId,
}

impl Candidate {
    pub fn new(movie_id: MovieId) -> Self {
        Self { movie_id }
    }
}

/// Per-request filtering inputs.
///
/// `excluded` holds titles the caller never wants back (e.g. already
/// recommended ones); `genres` is the optional genre restriction, with an
/// empty list meaning "no restriction".
#[derive(Debug, Clone)]
pub struct QueryContext {
    pub query_title: String,
    pub excluded: HashSet<String>,
    pub genres: Vec<String>,
}

impl QueryContext {
    pub fn new(query_title: impl Into<String>) -> Self {
        Self {
            query_title: query_title.into(),
            excluded: HashSet::new(),
            genres: Vec::new(),
        }
    }
}
