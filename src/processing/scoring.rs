//! TF-IDF weighting and cosine similarity over a single small batch.
//!
//! The vocabulary is fitted on the documents and the query together so that
//! every vector shares the same dimensions.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Runs of two or more word characters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("query must contain at least one non-whitespace character")]
    InvalidQuery,
}

/// Scores documents against a keyword query.
#[derive(Clone, Debug, Default)]
pub struct TfidfScorer {
    stop_words: HashSet<String>,
}

impl TfidfScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terms that are dropped during tokenization. Matching is case-insensitive.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }

    /// Returns one similarity in `[0, 1]` per document, in input order.
    ///
    /// Documents with no terms and queries that tokenize to nothing score 0.
    /// A query that is empty or only whitespace is rejected.
    pub fn score<S: AsRef<str>>(&self, documents: &[S], query: &str) -> Result<Vec<f64>, ScoringError> {
        if query.trim().is_empty() {
            return Err(ScoringError::InvalidQuery);
        }

        let mut tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.tokenize(d.as_ref()))
            .collect();
        tokenized.push(self.tokenize(query));

        let vocabulary = build_vocabulary(&tokenized);
        if vocabulary.is_empty() {
            log::debug!("Empty vocabulary; every document scores 0");
            return Ok(vec![0.0; documents.len()]);
        }

        let idf = inverse_document_frequency(&tokenized, &vocabulary);
        let mut vectors: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();
        let query_vector = vectors.pop().unwrap_or_default();

        Ok(vectors
            .iter()
            .map(|v| cosine_similarity(&query_vector, v))
            .collect())
    }
}

/// Maps each distinct term to its dimension, in lexical order.
fn build_vocabulary(tokenized: &[Vec<String>]) -> BTreeMap<&str, usize> {
    let mut vocabulary: BTreeMap<&str, usize> = tokenized
        .iter()
        .flatten()
        .map(|t| (t.as_str(), 0))
        .collect();
    for (index, slot) in vocabulary.values_mut().enumerate() {
        *slot = index;
    }
    vocabulary
}

/// Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`.
fn inverse_document_frequency(tokenized: &[Vec<String>], vocabulary: &BTreeMap<&str, usize>) -> Vec<f64> {
    let mut df = vec![0usize; vocabulary.len()];
    for tokens in tokenized {
        let distinct: HashSet<usize> = tokens
            .iter()
            .filter_map(|t| vocabulary.get(t.as_str()).copied())
            .collect();
        for index in distinct {
            df[index] += 1;
        }
    }

    let n = tokenized.len() as f64;
    df.into_iter()
        .map(|d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
        .collect()
}

fn weigh(tokens: &[String], vocabulary: &BTreeMap<&str, usize>, idf: &[f64]) -> Vec<f64> {
    let mut vector = vec![0.0; vocabulary.len()];
    for token in tokens {
        if let Some(&index) = vocabulary.get(token.as_str()) {
            vector[index] += 1.0;
        }
    }
    for (weight, idf) in vector.iter_mut().zip(idf) {
        *weight *= idf;
    }
    vector
}

/// Cosine of the angle between two vectors, clamped to `[0, 1]`.
///
/// Returns 0 when either vector has zero length.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
