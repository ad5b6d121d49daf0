//! TF-IDF vectorization over plot overview text.
//!
//! The vectorizer is fitted per request over the candidate overviews only;
//! the query document is projected into that space afterwards and is never
//! part of the fitted corpus. Vectors are L2-normalized at transform time,
//! so the dot product of two transformed vectors is their cosine
//! similarity.

use crate::stopwords::is_stop_word;
use std::collections::{HashMap, HashSet};

/// Lowercase a text and split it into vocabulary tokens.
///
/// Tokens are alphanumeric runs of at least two characters, with stop
/// words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !is_stop_word(token))
        .map(|token| token.to_string())
        .collect()
}

/// A sparse TF-IDF vector: (vocabulary index, weight) pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Term-frequency / inverse-document-frequency weighting fitted over a
/// document corpus.
///
/// Uses the smoothed IDF `ln((1 + n) / (1 + df)) + 1`, which keeps terms
/// appearing in every document at a positive weight and never divides by
/// zero.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit the vocabulary and IDF weights over `documents`.
    pub fn fit(documents: &[&str]) -> Self {
        let n_documents = documents.len();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen: HashSet<usize> = HashSet::new();
            for token in tokenize(document) {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(token).or_insert(next_index);
                if index == document_frequency.len() {
                    document_frequency.push(0);
                }
                if seen.insert(index) {
                    document_frequency[index] += 1;
                }
            }
        }

        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Project a text into the fitted space as an L2-normalized sparse
    /// vector. Terms outside the fitted vocabulary are ignored; an empty
    /// or out-of-vocabulary text yields the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut term_counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *term_counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = term_counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        vector.sort_by_key(|&(index, _)| index);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }
}

/// Dot product of two sparse vectors (merge join on sorted indices).
///
/// With L2-normalized inputs this is the cosine similarity.
pub fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_stop_words() {
        let tokens = tokenize("The Spy, a thriller set IN Paris!");
        assert_eq!(tokens, vec!["spy", "thriller", "set", "paris"]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens = tokenize("a b agent 7");
        assert_eq!(tokens, vec!["agent"]);
    }

    #[test]
    fn test_fit_counts_document_frequency_once_per_document() {
        let vectorizer = TfidfVectorizer::fit(&["spy spy spy", "spy thriller"]);
        assert_eq!(vectorizer.vocabulary_size(), 2);

        // "spy" appears in both documents, "thriller" in one, so the
        // rarer term must carry the larger IDF.
        let spy = vectorizer.transform("spy");
        let thriller = vectorizer.transform("thriller");
        assert_eq!(spy.len(), 1);
        assert_eq!(thriller.len(), 1);
        // Both single-term vectors normalize to weight 1.0.
        assert!((spy[0].1 - 1.0).abs() < 1e-12);
        assert!((thriller[0].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = TfidfVectorizer::fit(&["spy thriller paris", "comedy paris"]);
        let vector = vectorizer.transform("spy thriller in paris");
        let norm: f64 = vector.iter().map(|(_, w)| w * w).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_empty_text_is_zero_vector() {
        let vectorizer = TfidfVectorizer::fit(&["spy thriller"]);
        assert!(vectorizer.transform("").is_empty());
        assert!(vectorizer.transform("the and of").is_empty());
    }

    #[test]
    fn test_transform_ignores_out_of_vocabulary_terms() {
        let vectorizer = TfidfVectorizer::fit(&["spy thriller"]);
        let vector = vectorizer.transform("spy submarine");
        assert_eq!(vector.len(), 1);
    }

    #[test]
    fn test_dot_of_disjoint_vectors_is_zero() {
        let a = vec![(0, 0.8), (2, 0.6)];
        let b = vec![(1, 1.0)];
        assert_eq!(dot(&a, &b), 0.0);
    }

    #[test]
    fn test_dot_matches_shared_indices() {
        let a = vec![(0, 0.5), (1, 0.5)];
        let b = vec![(1, 0.4), (3, 0.2)];
        assert!((dot(&a, &b) - 0.2).abs() < 1e-12);
    }
}
