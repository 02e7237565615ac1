//! Match report assembly and rendering

use crate::error::Result;
use crate::matching::extractor::SkillSet;
use crate::matching::scorer::RankedMatches;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Everything a caller needs to present one ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub candidate_skills: Vec<String>,
    pub total_scored: usize,
    pub matches: RankedMatches,
}

impl MatchReport {
    pub fn new(candidate_skills: &SkillSet, matches: RankedMatches) -> Self {
        Self {
            generated_at: Utc::now(),
            candidate_skills: candidate_skills.iter().cloned().collect(),
            total_scored: matches.total_scored,
            matches,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable console rendering.
    pub fn render_console(&self, detailed: bool, use_colors: bool) -> String {
        if !use_colors {
            colored::control::set_override(false);
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", "Job Match Report".bold());
        let _ = writeln!(
            out,
            "Searched {} jobs, showing top {}",
            self.total_scored,
            self.matches.ranked.len()
        );
        let _ = writeln!(
            out,
            "Candidate skills: {}",
            self.candidate_skills.join(", ")
        );
        let _ = writeln!(out);

        for (i, m) in self.matches.ranked.iter().enumerate() {
            let header = format!("{}. {} at {}", i + 1, m.title, m.company);
            let _ = writeln!(out, "{}", header.bold());
            let _ = writeln!(out, "   Score: {}", format_score(m.score));

            if !m.matching_skills.is_empty() {
                let _ = writeln!(
                    out,
                    "   {} {}",
                    "Matching:".green(),
                    m.matching_skills.join(", ")
                );
            }
            if !m.missing_skills.is_empty() {
                let _ = writeln!(
                    out,
                    "   {} {}",
                    "Missing:".yellow(),
                    m.missing_skills.join(", ")
                );
            }
            if detailed {
                let _ = writeln!(out, "   Job ID: {}", m.job_id);
            }
            let _ = writeln!(out);
        }

        if !use_colors {
            colored::control::unset_override();
        }

        out
    }
}

fn format_score(score: f32) -> String {
    let rendered = format!("{:.3}", score);
    if score >= 0.7 {
        rendered.green().to_string()
    } else if score >= 0.4 {
        rendered.yellow().to_string()
    } else {
        rendered.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::MatchResult;

    fn report() -> MatchReport {
        let matches = RankedMatches {
            ranked: vec![MatchResult {
                job_id: "j1".to_string(),
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                score: 0.83,
                matching_skills: vec!["Python".to_string()],
                missing_skills: vec!["Kubernetes".to_string()],
            }],
            total_scored: 4,
        };
        let skills: SkillSet = ["Python".to_string()].into_iter().collect();
        MatchReport::new(&skills, matches)
    }

    #[test]
    fn console_rendering_mentions_counts_and_skills() {
        let rendered = report().render_console(false, false);
        assert!(rendered.contains("Searched 4 jobs, showing top 1"));
        assert!(rendered.contains("Backend Engineer at Acme"));
        assert!(rendered.contains("Python"));
        assert!(rendered.contains("Kubernetes"));
    }

    #[test]
    fn json_rendering_is_valid() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_scored"], 4);
        assert_eq!(value["matches"]["ranked"][0]["job_id"], "j1");
    }
}
