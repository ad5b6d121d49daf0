//! Cosine-similarity ranking of candidates against a query overview.

use crate::candidates::Candidate;
use crate::tfidf::{TfidfVectorizer, dot};
use catalog::{Catalog, MovieId};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// A candidate with its similarity score to the query text.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate {
    pub movie_id: MovieId,
    pub score: f64,
}

/// Ranks candidates by textual closeness of their plot overviews to a
/// query text.
///
/// `rank` is a pure function of its inputs: the vectorizer is fitted
/// fresh over the candidate overviews on every call and nothing is cached
/// across requests.
pub struct SimilarityRanker {
    catalog: Arc<Catalog>,
}

impl SimilarityRanker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Rank `candidates` by descending cosine similarity to `query_text`.
    ///
    /// Ties keep the relative order of `candidates` as supplied (the sort
    /// is stable and no secondary key exists). An empty candidate set
    /// yields an empty ranking; an empty query text scores every
    /// candidate at zero.
    pub fn rank(&self, candidates: &[Candidate], query_text: &str) -> Vec<ScoredCandidate> {
        if candidates.is_empty() {
            return Vec::new();
        }

        // Candidate overviews only; the query document is not part of
        // the fitted corpus.
        let documents: Vec<&str> = candidates
            .iter()
            .map(|candidate| {
                self.catalog
                    .get(candidate.movie_id)
                    .map(|movie| movie.overview.as_str())
                    .unwrap_or("")
            })
            .collect();

        let vectorizer = TfidfVectorizer::fit(&documents);
        let query_vector = vectorizer.transform(query_text);
        debug!(
            "Fitted vocabulary of {} terms over {} candidates",
            vectorizer.vocabulary_size(),
            candidates.len()
        );

        let mut scored: Vec<ScoredCandidate> = candidates
            .par_iter()
            .zip(documents.par_iter())
            .map(|(candidate, document)| ScoredCandidate {
                movie_id: candidate.movie_id,
                score: dot(&query_vector, &vectorizer.transform(document)),
            })
            .collect();

        // Stable sort: equal scores retain candidate order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MovieRecord;

    fn catalog_from(entries: &[(MovieId, &str, &str)]) -> Arc<Catalog> {
        let mut catalog = Catalog::new();
        for &(id, title, overview) in entries {
            catalog.insert(MovieRecord {
                id,
                title: title.to_string(),
                overview: overview.to_string(),
                genres: vec![],
            });
        }
        Arc::new(catalog)
    }

    #[test]
    fn test_rank_empty_candidates() {
        let catalog = catalog_from(&[]);
        let ranker = SimilarityRanker::new(catalog);
        assert!(ranker.rank(&[], "a spy thriller").is_empty());
    }

    #[test]
    fn test_rank_prefers_shared_rare_terms() {
        // Shared "spy thriller" must outweigh shared "paris".
        let catalog = catalog_from(&[
            (2, "B", "a romantic comedy in Paris"),
            (3, "C", "a spy thriller in Berlin"),
        ]);
        let ranker = SimilarityRanker::new(catalog);
        let candidates = [Candidate::new(2), Candidate::new(3)];

        let ranking = ranker.rank(&candidates, "a spy thriller in Paris");

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].movie_id, 3);
        assert!(ranking[0].score > ranking[1].score);
    }

    #[test]
    fn test_rank_empty_query_scores_zero_in_stable_order() {
        let catalog = catalog_from(&[
            (1, "A", "first overview text"),
            (2, "B", "second overview text"),
            (3, "C", "third overview text"),
        ]);
        let ranker = SimilarityRanker::new(catalog);
        let candidates = [Candidate::new(1), Candidate::new(2), Candidate::new(3)];

        let ranking = ranker.rank(&candidates, "");

        let ids: Vec<MovieId> = ranking.iter().map(|s| s.movie_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(ranking.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_rank_all_empty_overviews_keeps_candidate_order() {
        let catalog = catalog_from(&[(5, "A", ""), (6, "B", ""), (7, "C", "")]);
        let ranker = SimilarityRanker::new(catalog);
        let candidates = [Candidate::new(6), Candidate::new(5), Candidate::new(7)];

        let ranking = ranker.rank(&candidates, "some query text");

        let ids: Vec<MovieId> = ranking.iter().map(|s| s.movie_id).collect();
        assert_eq!(ids, vec![6, 5, 7]);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let catalog = catalog_from(&[
            (1, "A", "a heist crew pulls one last job"),
            (2, "B", "a detective hunts a serial killer"),
            (3, "C", "one last job for the aging thief"),
        ]);
        let ranker = SimilarityRanker::new(catalog);
        let candidates = [Candidate::new(1), Candidate::new(2), Candidate::new(3)];

        let first = ranker.rank(&candidates, "one last heist job");
        let second = ranker.rank(&candidates, "one last heist job");

        let ids = |r: &[ScoredCandidate]| r.iter().map(|s| s.movie_id).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }
}
