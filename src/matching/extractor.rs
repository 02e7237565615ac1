//! Pattern-based skill extraction from free text

use crate::error::{MatcherError, Result};
use crate::matching::catalog::SkillCatalog;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

/// Set of canonical skill names extracted from one text blob.
///
/// Ordered so that iteration (and therefore downstream output) is
/// deterministic for a given input.
pub type SkillSet = BTreeSet<String>;

/// A near-miss found by the fuzzy scan: a word in the text that is close to,
/// but not exactly, a catalog skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzyCandidate {
    pub word: String,
    pub canonical: String,
    pub similarity: f32,
}

/// Scans free text against a [`SkillCatalog`] and reports the canonical
/// names of every skill present.
///
/// Matching is whole-word and case-insensitive. All surface spellings of an
/// entry collapse to its canonical name, and longer patterns win over
/// shorter ones at the same position ("React Native" is not "React").
/// Presence is boolean; extraction is deterministic and never fails on any
/// input text.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    // pattern id -> canonical display name
    pattern_canonicals: Vec<String>,
    canonical_lower: Vec<(String, String)>,
    fuzzy_threshold: f32,
}

const DEFAULT_FUZZY_THRESHOLD: f32 = 0.88;

impl SkillExtractor {
    pub fn new(catalog: &SkillCatalog) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_canonicals = Vec::new();
        let mut canonical_lower = Vec::new();

        for entry in catalog.entries() {
            canonical_lower.push((entry.canonical.clone(), entry.canonical.to_lowercase()));
            for form in &entry.surface_forms {
                patterns.push(form.clone());
                pattern_canonicals.push(entry.canonical.clone());
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| MatcherError::Pattern(format!("failed to build skill matcher: {}", e)))?;

        Ok(Self {
            matcher,
            pattern_canonicals,
            canonical_lower,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        })
    }

    /// Extract the set of canonical skill names present in `text`.
    ///
    /// Empty or skill-free text yields an empty set, not an error.
    pub fn extract(&self, text: &str) -> SkillSet {
        let bytes = text.as_bytes();
        let mut skills = SkillSet::new();

        for mat in self.matcher.find_iter(text) {
            if !Self::is_word_bounded(bytes, mat.start(), mat.end()) {
                continue;
            }
            skills.insert(self.pattern_canonicals[mat.pattern().as_usize()].clone());
        }

        skills
    }

    /// Extract skills from a description plus an ordered list of requirement
    /// strings, unioning all results.
    pub fn extract_all<S: AsRef<str>>(&self, description: &str, requirements: &[S]) -> SkillSet {
        let mut skills = self.extract(description);
        for req in requirements {
            skills.extend(self.extract(req.as_ref()));
        }
        skills
    }

    /// Scan for words that nearly match a catalog skill (likely typos).
    ///
    /// Advisory only: results never feed the match pipeline, so `extract`
    /// stays strictly exact-match.
    pub fn fuzzy_candidates(&self, text: &str) -> Vec<FuzzyCandidate> {
        let mut candidates: Vec<FuzzyCandidate> = Vec::new();

        for word in text.unicode_words() {
            let clean = Self::clean_word(word);
            if clean.len() < 3 {
                continue;
            }
            let clean_lower = clean.to_lowercase();

            for (canonical, lower) in &self.canonical_lower {
                if clean_lower == *lower {
                    continue;
                }
                let similarity = jaro_winkler(&clean_lower, lower) as f32;
                if similarity >= self.fuzzy_threshold {
                    candidates.push(FuzzyCandidate {
                        word: clean.clone(),
                        canonical: canonical.clone(),
                        similarity,
                    });
                }
            }
        }

        // Keep the best suggestion per (word, canonical) pair
        candidates.sort_by(|a, b| {
            a.word
                .cmp(&b.word)
                .then_with(|| a.canonical.cmp(&b.canonical))
                .then_with(|| b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal))
        });
        candidates.dedup_by(|a, b| a.word == b.word && a.canonical == b.canonical);

        candidates
    }

    pub fn set_fuzzy_threshold(&mut self, threshold: f32) {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn fuzzy_threshold(&self) -> f32 {
        self.fuzzy_threshold
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_canonicals.len()
    }

    /// A match counts only when it is not embedded in a longer alphanumeric
    /// token: "sql" inside "NoSQL" or "java" inside "javascripting" is not a
    /// skill occurrence.
    fn is_word_bounded(bytes: &[u8], start: usize, end: usize) -> bool {
        let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        before_ok && after_ok
    }

    fn clean_word(word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '#')
            .collect()
    }
}
