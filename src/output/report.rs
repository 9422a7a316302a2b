//! Ranking report structure

use crate::ranking::ranker::{RankingResult, RankedResume};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete outcome of one ranking run, ready for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    /// Display name of the job description input
    pub job_description: String,

    /// Ranked resumes, best match first
    pub ranking: Vec<RankedResume>,

    /// Raw similarity scores aligned to resume input order
    pub scores: Vec<f64>,

    /// Number of documents that made it into the ranking
    pub document_count: usize,

    pub processing_time_ms: u64,

    pub generated_at: DateTime<Utc>,
}

impl RankingReport {
    pub fn new(
        job_description: impl Into<String>,
        result: RankingResult,
        document_count: usize,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            job_description: job_description.into(),
            ranking: result.ranking,
            scores: result.scores,
            document_count,
            processing_time_ms,
            generated_at: Utc::now(),
        }
    }

    /// Keep only the best `n` entries of the ranking. The raw score
    /// vector stays complete so it remains aligned with input order.
    pub fn truncate_ranking(&mut self, n: usize) {
        self.ranking.truncate(n);
    }
}
