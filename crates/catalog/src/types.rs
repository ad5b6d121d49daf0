//! Core domain types for the movie catalog.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Unique identifier for a movie (the external TMDB id)
pub type MovieId = u32;

/// One row of the catalog: a single movie title.
///
/// Invariant: `overview` is always a resolvable string. Rows with no
/// overview in the source are loaded with an empty string, never skipped,
/// since the similarity computation needs a text value for every candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    /// Free-text plot summary; empty if absent in the source
    pub overview: String,
    /// Genre tags in source order; empty if the source field was absent
    pub genres: Vec<String>,
}

/// Immutable-after-load set of movie records.
///
/// Records are kept in file order so that downstream ranking has a stable
/// tie-break order. Titles are indexed for point lookup; titles are not
/// guaranteed unique in the source, so the first occurrence wins.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    /// title -> index of the first record with that title
    title_index: HashMap<String, usize>,
    /// id -> index of the record
    id_index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keeping load order and first-match-wins title lookup
    pub fn insert(&mut self, record: MovieRecord) {
        let idx = self.records.len();
        self.title_index.entry(record.title.clone()).or_insert(idx);
        self.id_index.entry(record.id).or_insert(idx);
        self.records.push(record);
    }

    /// Look up a record by title (first match wins on duplicate titles)
    pub fn get_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.title_index.get(title).map(|&idx| &self.records[idx])
    }

    /// Look up a record by id
    pub fn get(&self, id: MovieId) -> Option<&MovieRecord> {
        self.id_index.get(&id).map(|&idx| &self.records[idx])
    }

    /// All records in load order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// All titles in load order, for building a query selector
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }

    /// All distinct genres present in the catalog, sorted,
    /// for building filter controls
    pub fn genres(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.genres.iter().map(|g| g.as_str()))
            .collect();
        set.into_iter().map(|g| g.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
