//! Configuration management for the job matcher

use crate::error::{MatcherError, Result};
use crate::matching::catalog::SkillEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Cap on reported matching/missing skill lists per job.
    pub skill_list_cap: usize,
    /// Default number of ranked jobs to return when the caller gives none.
    pub default_top_n: usize,
    /// Jaro-Winkler threshold for typo suggestions (0.0 to 1.0).
    pub fuzzy_threshold: f32,
    /// Extra catalog entries appended to the builtin skill catalog.
    #[serde(default)]
    pub extra_skills: Vec<SkillEntry>,
    /// Extra synonym collapses layered over the builtin table.
    #[serde(default)]
    pub synonym_overrides: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig {
                skill_list_cap: 10,
                default_top_n: 5,
                fuzzy_threshold: 0.88,
                extra_skills: Vec::new(),
                synonym_overrides: HashMap::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MatcherError::Configuration(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-matcher")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.matching.skill_list_cap, 10);
        assert!(config.matching.default_top_n > 0);
        assert!(config.matching.fuzzy_threshold > 0.0 && config.matching.fuzzy_threshold <= 1.0);
        assert!(config.matching.extra_skills.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.matching.skill_list_cap = 7;
        config
            .matching
            .synonym_overrides
            .insert("tf".to_string(), "tensorflow".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.matching.skill_list_cap, 7);
        assert_eq!(
            loaded.matching.synonym_overrides.get("tf").map(String::as_str),
            Some("tensorflow")
        );
    }
}
