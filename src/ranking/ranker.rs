//! Cosine-similarity ranking of candidate texts against a query

use crate::config::RankingConfig;
use crate::ranking::tokenizer::Tokenizer;
use crate::ranking::vectorizer::{cosine_similarity, TfidfVectorizer};
use serde::{Deserialize, Serialize};

/// A candidate text with its display name.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub text: String,
}

/// One entry of the ranking, tied back to the candidate's input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    pub index: usize,
    pub name: String,
    pub score: f64,
}

/// The full ranking plus the raw score vector aligned to input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub ranking: Vec<RankedResume>,
    pub scores: Vec<f64>,
}

/// Scores candidates against a query in a single batch.
///
/// Each call builds a fresh TF-IDF space over {query} ∪ candidates;
/// no vocabulary or idf weights survive between calls.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    vectorizer: TfidfVectorizer,
}

impl Ranker {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(Tokenizer::new(config.min_token_length)),
        }
    }

    pub fn rank(&self, query: &str, candidates: &[Candidate]) -> RankingResult {
        if candidates.is_empty() {
            return RankingResult {
                ranking: Vec::new(),
                scores: Vec::new(),
            };
        }

        let mut documents: Vec<&str> = Vec::with_capacity(candidates.len() + 1);
        documents.push(query);
        documents.extend(candidates.iter().map(|c| c.text.as_str()));

        let rows = self.vectorizer.fit_transform(&documents);
        let query_row = &rows[0];
        let candidate_rows = &rows[1..];

        let scores: Vec<f64> = candidate_rows
            .iter()
            .map(|row| cosine_similarity(query_row, row))
            .collect();

        let mut ranking: Vec<RankedResume> = candidates
            .iter()
            .zip(scores.iter())
            .enumerate()
            .map(|(index, (candidate, &score))| RankedResume {
                index,
                name: candidate.name.clone(),
                score,
            })
            .collect();

        // Stable sort on score alone: ties keep ascending input order.
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        RankingResult { ranking, scores }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(texts: &[&str]) -> Vec<Candidate> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Candidate {
                name: format!("resume_{}.txt", i),
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_relevant_resume_ranks_first() {
        let ranker = Ranker::default();
        let result = ranker.rank(
            "machine learning engineer",
            &candidates(&[
                "I am a machine learning engineer with 5 years experience",
                "I enjoy painting and gardening",
            ]),
        );

        assert_eq!(result.ranking[0].index, 0);
        assert!(result.scores[0] > result.scores[1]);
    }

    #[test]
    fn test_scores_align_with_input_order() {
        let ranker = Ranker::default();
        let result = ranker.rank(
            "rust developer",
            &candidates(&["gardening", "rust developer", "some rust"]),
        );

        assert_eq!(result.scores.len(), 3);
        assert!(result.scores[1] > result.scores[0]);
        assert!(result.scores[1] > result.scores[2]);
    }

    #[test]
    fn test_ranking_is_a_permutation() {
        let ranker = Ranker::default();
        let result = ranker.rank(
            "query terms",
            &candidates(&["one", "two terms", "three query", "query terms"]),
        );

        let mut indices: Vec<usize> = result.ranking.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ordering_is_descending_with_stable_ties() {
        let ranker = Ranker::default();
        // Two identical candidates tie exactly.
        let result = ranker.rank(
            "shared vocabulary",
            &candidates(&["shared vocabulary", "unrelated words", "shared vocabulary"]),
        );

        for pair in result.ranking.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].index < pair[1].index);
            }
        }
        assert_eq!(result.ranking[0].index, 0);
        assert_eq!(result.ranking[1].index, 2);
    }

    #[test]
    fn test_empty_candidate_list() {
        let ranker = Ranker::default();
        let result = ranker.rank("anything", &[]);
        assert!(result.ranking.is_empty());
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_single_candidate() {
        let ranker = Ranker::default();
        let result = ranker.rank("rust", &candidates(&["rust developer"]));
        assert_eq!(result.ranking.len(), 1);
        assert_eq!(result.ranking[0].index, 0);
    }

    #[test]
    fn test_empty_query_yields_zero_scores() {
        let ranker = Ranker::default();
        let result = ranker.rank("", &candidates(&["some resume", "another resume"]));

        for &score in &result.scores {
            assert_eq!(score, 0.0);
            assert!(!score.is_nan());
        }
    }

    #[test]
    fn test_empty_candidate_text_scores_zero() {
        let ranker = Ranker::default();
        let result = ranker.rank("rust developer", &candidates(&["rust developer", ""]));

        assert_eq!(result.scores[1], 0.0);
        assert!(!result.scores[1].is_nan());
        assert_eq!(result.ranking.last().unwrap().index, 1);
    }

    #[test]
    fn test_exact_match_scores_highest() {
        let ranker = Ranker::default();
        let query = "senior rust engineer distributed systems";
        let result = ranker.rank(
            query,
            &candidates(&[
                "frontend designer css html",
                query,
                "project manager agile scrum",
            ]),
        );

        assert_eq!(result.ranking[0].index, 1);
        assert!(result.scores[1] > result.scores[0]);
        assert!(result.scores[1] > result.scores[2]);
        assert!(result.scores[1] <= 1.0 + 1e-9);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let ranker = Ranker::default();
        let result = ranker.rank(
            "machine learning",
            &candidates(&["machine learning", "machine", "learning curve", ""]),
        );

        for &score in &result.scores {
            assert!((0.0..=1.0 + 1e-9).contains(&score));
        }
    }

    #[test]
    fn test_rank_is_deterministic() {
        let ranker = Ranker::default();
        let cands = candidates(&["alpha beta", "beta gamma", "gamma delta"]);

        let first = ranker.rank("beta delta", &cands);
        let second = ranker.rank("beta delta", &cands);
        assert_eq!(first, second);
    }
}
