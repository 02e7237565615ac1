//! Match scoring: keyword overlap analysis and embedding-based job ranking

use crate::error::{MatcherError, Result};
use crate::matching::catalog::SkillCatalog;
use crate::matching::extractor::{SkillExtractor, SkillSet};
use crate::matching::normalize::SkillNormalizer;
use crate::matching::similarity::cosine_similarity;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Soft cap on reported matching/missing skill lists. Truncation keeps the
/// order the set produced; there is no secondary "top 10 best" ranking.
pub const DEFAULT_SKILL_LIST_CAP: usize = 10;

/// A candidate's materialized inputs: extracted skills plus an optional
/// pre-computed embedding. Embedding computation is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: SkillSet,
    pub embedding: Option<Vec<f32>>,
}

/// One job as read from the external job store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

/// Keyword overlap between a candidate's skills and one job's text.
///
/// `matching_skills` carries the candidate's display spellings,
/// `missing_skills` the job's; equality is decided on normalization keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillOverlap {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Per-job output of the ranking pipeline. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub score: f32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatches {
    /// Top matches, descending by score, at most the requested `top_n`.
    pub ranked: Vec<MatchResult>,
    /// How many jobs had a usable embedding and were actually scored.
    pub total_scored: usize,
}

/// Combines skill extraction, normalization, and cosine scoring into the
/// caller-facing match operations.
///
/// Stateless between calls; safe to share across threads behind a reference.
pub struct MatchScorer {
    extractor: SkillExtractor,
    normalizer: SkillNormalizer,
    skill_list_cap: usize,
}

impl MatchScorer {
    pub fn new(catalog: &SkillCatalog) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new(catalog)?,
            normalizer: SkillNormalizer::new(),
            skill_list_cap: DEFAULT_SKILL_LIST_CAP,
        })
    }

    pub fn with_parts(extractor: SkillExtractor, normalizer: SkillNormalizer) -> Self {
        Self {
            extractor,
            normalizer,
            skill_list_cap: DEFAULT_SKILL_LIST_CAP,
        }
    }

    pub fn set_skill_list_cap(&mut self, cap: usize) {
        self.skill_list_cap = cap;
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    /// Which candidate skills are relevant to a job, and which job-implied
    /// skills the candidate lacks.
    ///
    /// Total over its input domain: malformed or empty inputs yield empty
    /// lists, never an error. Both lists are truncated to the configured cap.
    pub fn analyze_match<S: AsRef<str>>(
        &self,
        candidate_skills: &SkillSet,
        job_description: &str,
        job_requirements: &[S],
    ) -> SkillOverlap {
        let job_skills = self.extractor.extract_all(job_description, job_requirements);

        let candidate_map = self
            .normalizer
            .normalize_set(candidate_skills.iter().map(String::as_str));
        let job_map = self
            .normalizer
            .normalize_set(job_skills.iter().map(String::as_str));

        let matching_skills: Vec<String> = candidate_map
            .iter()
            .filter(|(key, _)| job_map.contains_key(*key))
            .map(|(_, display)| display.clone())
            .take(self.skill_list_cap)
            .collect();

        let missing_skills: Vec<String> = job_map
            .iter()
            .filter(|(key, _)| !candidate_map.contains_key(*key))
            .map(|(_, display)| display.clone())
            .take(self.skill_list_cap)
            .collect();

        SkillOverlap {
            matching_skills,
            missing_skills,
        }
    }

    /// Score one job against a candidate embedding and skill set.
    ///
    /// Returns `None` when the job carries no embedding (filtered, not an
    /// error); propagates `DimensionMismatch` unmodified.
    pub fn score_job(
        &self,
        candidate_embedding: &[f32],
        candidate_skills: &SkillSet,
        job: &JobRecord,
    ) -> Option<Result<MatchResult>> {
        let job_embedding = job.embedding.as_ref()?;

        let score = match cosine_similarity(candidate_embedding, job_embedding) {
            Ok(score) => score,
            Err(e) => return Some(Err(e)),
        };

        let overlap = self.analyze_match(candidate_skills, &job.description, &job.requirements);

        Some(Ok(MatchResult {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            score,
            matching_skills: overlap.matching_skills,
            missing_skills: overlap.missing_skills,
        }))
    }

    /// Rank jobs for a full candidate profile. The profile must carry an
    /// embedding; skill-only profiles can still use [`Self::analyze_match`].
    pub fn rank_for_profile(
        &self,
        profile: &CandidateProfile,
        jobs: &[JobRecord],
        top_n: usize,
    ) -> Result<RankedMatches> {
        let embedding = profile.embedding.as_deref().ok_or_else(|| {
            MatcherError::InvalidInput("candidate profile has no embedding".to_string())
        })?;
        self.rank_jobs(embedding, &profile.skills, jobs, top_n)
    }

    /// Rank a collection of jobs against a candidate, descending by cosine
    /// score, truncated to `top_n`.
    ///
    /// Jobs without an embedding are skipped and do not count towards
    /// `total_scored`. Ties keep input order (stable sort, no secondary key).
    pub fn rank_jobs(
        &self,
        candidate_embedding: &[f32],
        candidate_skills: &SkillSet,
        jobs: &[JobRecord],
        top_n: usize,
    ) -> Result<RankedMatches> {
        let mut results = Vec::new();

        for job in jobs {
            match self.score_job(candidate_embedding, candidate_skills, job) {
                Some(result) => results.push(result?),
                None => debug!("skipping job {} without embedding", job.id),
            }
        }

        let total_scored = results.len();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(top_n);

        debug!("scored {} jobs, returning top {}", total_scored, results.len());

        Ok(RankedMatches {
            ranked: results,
            total_scored,
        })
    }
}
