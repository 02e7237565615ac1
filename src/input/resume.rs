//! Regex-based resume parsing
//!
//! The deterministic, dependency-free baseline for turning raw resume text
//! into a candidate profile: contact details via regex heuristics, skills via
//! the catalog extractor. LLM-backed parsing strategies live with the caller;
//! this one is always available and needs no network.

use crate::error::Result;
use crate::matching::extractor::{SkillExtractor, SkillSet};
use crate::matching::scorer::CandidateProfile;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: SkillSet,
}

impl ParsedResume {
    /// Pair the parsed skills with an externally computed embedding.
    pub fn into_profile(self, embedding: Option<Vec<f32>>) -> CandidateProfile {
        CandidateProfile {
            skills: self.skills,
            embedding,
        }
    }
}

pub struct ResumeParser {
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
                .expect("Invalid phone regex");

        Self {
            email_regex,
            phone_regex,
        }
    }

    /// Parse a resume into contact details plus extracted skills.
    ///
    /// Fields that cannot be found are `None`; parsing itself never fails on
    /// any text.
    pub fn parse(&self, text: &str, extractor: &SkillExtractor) -> Result<ParsedResume> {
        Ok(ParsedResume {
            name: self.guess_name(text),
            email: self
                .email_regex
                .find(text)
                .map(|m| m.as_str().to_string()),
            phone: self
                .phone_regex
                .find(text)
                .map(|m| m.as_str().trim().to_string()),
            skills: extractor.extract(text),
        })
    }

    /// First non-empty line, if it looks like a person's name rather than a
    /// heading or contact line.
    fn guess_name(&self, text: &str) -> Option<String> {
        let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;

        if line.len() > 60
            || self.email_regex.is_match(line)
            || line.chars().any(|c| c.is_ascii_digit())
        {
            return None;
        }

        Some(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::SkillCatalog;

    const SAMPLE: &str = "\
John Smith
Senior Software Engineer

Email: john.smith@email.com
Phone: (555) 123-4567

Technical Skills:
- Python, JavaScript, React, Node.js
- AWS, Docker, Kubernetes
- PostgreSQL, MongoDB
- Machine Learning, Data Science
";

    fn parse(text: &str) -> ParsedResume {
        let extractor = SkillExtractor::new(&SkillCatalog::builtin()).unwrap();
        ResumeParser::new().parse(text, &extractor).unwrap()
    }

    #[test]
    fn parses_contact_details() {
        let parsed = parse(SAMPLE);
        assert_eq!(parsed.name.as_deref(), Some("John Smith"));
        assert_eq!(parsed.email.as_deref(), Some("john.smith@email.com"));
        assert_eq!(parsed.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn extracts_skills_from_resume_body() {
        let parsed = parse(SAMPLE);
        for skill in [
            "Python",
            "JavaScript",
            "React",
            "Node.js",
            "AWS",
            "Docker",
            "Kubernetes",
            "PostgreSQL",
            "MongoDB",
            "Machine Learning",
            "Data Science",
        ] {
            assert!(parsed.skills.contains(skill), "missing {}", skill);
        }
    }

    #[test]
    fn missing_fields_are_none_not_errors() {
        let parsed = parse("Just some text about Docker with no contact info 42");
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.email, None);
        assert_eq!(parsed.phone, None);
        assert!(parsed.skills.contains("Docker"));
    }

    #[test]
    fn empty_text_parses_to_empty_profile() {
        let parsed = parse("");
        assert_eq!(parsed.name, None);
        assert!(parsed.skills.is_empty());
    }
}
