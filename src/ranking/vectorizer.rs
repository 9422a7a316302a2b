//! TF-IDF vector space construction

use crate::ranking::tokenizer::Tokenizer;
use std::collections::{BTreeSet, HashMap};

/// Builds a TF-IDF weighted vector space over a set of documents.
///
/// The vocabulary is rebuilt from scratch on every `fit_transform`
/// call: the vector space is local to one ranking invocation and
/// nothing is cached across calls.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
}

impl TfidfVectorizer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Transform `documents` into L2-normalized TF-IDF row vectors.
    ///
    /// Term frequency is the raw count in the document; idf uses the
    /// smoothed form `ln((1 + n) / (1 + df)) + 1`. A document with no
    /// recognized terms maps to the zero vector.
    pub fn fit_transform(&self, documents: &[&str]) -> Vec<Vec<f64>> {
        let token_lists: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc))
            .collect();

        // Sorted term set gives every term a deterministic column index.
        let terms: BTreeSet<&str> = token_lists
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: HashMap<&str, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term, column))
            .collect();

        // Document frequency per term.
        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &token_lists {
            let mut seen = vec![false; vocabulary.len()];
            for token in tokens {
                let column = vocabulary[token.as_str()];
                if !seen[column] {
                    seen[column] = true;
                    document_frequency[column] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        token_lists
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0f64; vocabulary.len()];
                for token in tokens {
                    row[vocabulary[token.as_str()]] += 1.0;
                }
                for (column, weight) in row.iter_mut().enumerate() {
                    *weight *= idf[column];
                }
                l2_normalize(&mut row);
                row
            })
            .collect()
    }
}

/// Normalize a vector in place; the zero vector stays zero.
fn l2_normalize(vector: &mut [f64]) {
    let norm: f64 = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine similarity of two L2-normalized vectors of equal length.
/// Defined as 0.0 when either vector is all-zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical_documents_have_unit_similarity() {
        let vectorizer = TfidfVectorizer::default();
        let rows = vectorizer.fit_transform(&["rust systems programming", "rust systems programming"]);
        let score = cosine_similarity(&rows[0], &rows[1]);
        assert!((score - 1.0).abs() < EPS);
    }

    #[test]
    fn test_disjoint_documents_have_zero_similarity() {
        let vectorizer = TfidfVectorizer::default();
        let rows = vectorizer.fit_transform(&["rust systems", "gardening painting"]);
        let score = cosine_similarity(&rows[0], &rows[1]);
        assert!(score.abs() < EPS);
    }

    #[test]
    fn test_empty_document_maps_to_zero_vector() {
        let vectorizer = TfidfVectorizer::default();
        let rows = vectorizer.fit_transform(&["rust systems", ""]);
        assert!(rows[1].iter().all(|&x| x == 0.0));

        let score = cosine_similarity(&rows[0], &rows[1]);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let vectorizer = TfidfVectorizer::default();
        let rows = vectorizer.fit_transform(&["machine learning engineer", "machine learning"]);
        for row in &rows {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_vector_space_is_deterministic() {
        let vectorizer = TfidfVectorizer::default();
        let docs = ["machine learning engineer", "painting and gardening", "rust developer"];
        let first = vectorizer.fit_transform(&docs);
        let second = vectorizer.fit_transform(&docs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rare_terms_weigh_more_than_common_terms() {
        let vectorizer = TfidfVectorizer::default();
        // "shared" appears in all documents, "unique" in one.
        let rows = vectorizer.fit_transform(&["shared unique", "shared other", "shared thing"]);

        // Column order is alphabetical: other, shared, thing, unique.
        let shared_weight = rows[0][1];
        let unique_weight = rows[0][3];
        assert!(unique_weight > shared_weight);
    }
}
