//! Job matcher library: skill extraction and job match scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use matching::catalog::SkillCatalog;
pub use matching::extractor::SkillExtractor;
pub use matching::scorer::{CandidateProfile, JobRecord, MatchResult, MatchScorer, RankedMatches};
pub use matching::similarity::cosine_similarity;
