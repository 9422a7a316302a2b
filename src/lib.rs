//! Resume ranker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod ranking;

pub use config::Config;
pub use error::{ResumeRankerError, Result};
pub use ranking::ranker::{RankedResume, Ranker, RankingResult};
