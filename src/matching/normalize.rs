//! Skill-name normalization for set comparisons
//!
//! Produces comparison keys so that superficially different spellings of the
//! same skill compare equal, while the original display string is kept for
//! output. The synonym table is a small explicit lookup, not a fuzzy match:
//! unknown spellings simply pass through lowercased and trimmed.

use std::collections::{BTreeMap, HashMap};

/// Baseline synonym collapses applied after lowercasing and trimming.
fn collapse_builtin(key: &str) -> &str {
    match key {
        "node.js" | "node js" => "nodejs",
        "next.js" | "next js" => "nextjs",
        "vue.js" => "vuejs",
        "react.js" => "reactjs",
        "c++" => "cpp",
        "c#" => "csharp",
        "golang" => "go",
        "machine learning" => "ml",
        "deep learning" => "dl",
        "data science" => "ds",
        "postgres" => "postgresql",
        "k8s" => "kubernetes",
        "ci/cd" => "cicd",
        "scikit-learn" => "sklearn",
        "react-native" => "react native",
        _ => key,
    }
}

/// Maps skill display strings to normalization keys.
///
/// Holds optional caller-supplied overrides on top of the builtin table;
/// overrides win when both define a collapse for the same key.
#[derive(Debug, Clone, Default)]
pub struct SkillNormalizer {
    overrides: HashMap<String, String>,
}

impl SkillNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer with extra synonym collapses, e.g. `{"tf": "tensorflow"}`.
    /// Both sides of each pair are lowercased before use.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_lowercase()))
            .collect();
        Self { overrides }
    }

    /// Comparison key for a skill display string. Never used for display.
    pub fn normalize(&self, display: &str) -> String {
        let key = display.trim().to_lowercase();
        if let Some(collapsed) = self.overrides.get(&key) {
            return collapsed.clone();
        }
        collapse_builtin(&key).to_string()
    }

    /// Build a key -> display map from an iterator of display strings.
    /// The first display string seen for a key wins.
    pub fn normalize_set<'a, I>(&self, skills: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = BTreeMap::new();
        for display in skills {
            let key = self.normalize(display);
            map.entry(key).or_insert_with(|| display.to_string());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let n = SkillNormalizer::new();
        assert_eq!(n.normalize("  Python  "), "python");
        assert_eq!(n.normalize("DOCKER"), "docker");
    }

    #[test]
    fn collapses_known_synonyms() {
        let n = SkillNormalizer::new();
        assert_eq!(n.normalize("Node.js"), "nodejs");
        assert_eq!(n.normalize("nodejs"), "nodejs");
        assert_eq!(n.normalize("Next.js"), "nextjs");
        assert_eq!(n.normalize("C++"), "cpp");
        assert_eq!(n.normalize("C#"), "csharp");
        assert_eq!(n.normalize("Machine Learning"), "ml");
        assert_eq!(n.normalize("Data Science"), "ds");
        assert_eq!(n.normalize("Postgres"), "postgresql");
    }

    #[test]
    fn unknown_spellings_pass_through() {
        let n = SkillNormalizer::new();
        // Acceptable false negative: unlisted synonyms are not merged
        assert_eq!(n.normalize("ReScript"), "rescript");
    }

    #[test]
    fn overrides_extend_and_win() {
        let mut table = HashMap::new();
        table.insert("TF".to_string(), "TensorFlow".to_string());
        table.insert("c++".to_string(), "c-plus-plus".to_string());
        let n = SkillNormalizer::with_overrides(table);

        assert_eq!(n.normalize("tf"), "tensorflow");
        assert_eq!(n.normalize("C++"), "c-plus-plus");
        // Builtin table still applies where not overridden
        assert_eq!(n.normalize("Node.js"), "nodejs");
    }

    #[test]
    fn normalize_set_keeps_first_display() {
        let n = SkillNormalizer::new();
        let map = n.normalize_set(["Node.js", "nodejs", "Python"]);
        assert_eq!(map.get("nodejs").map(String::as_str), Some("Node.js"));
        assert_eq!(map.get("python").map(String::as_str), Some("Python"));
        assert_eq!(map.len(), 2);
    }
}
