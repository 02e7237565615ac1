//! Skill catalog: the fixed set of recognizable technology and skill terms

use serde::{Deserialize, Serialize};

/// One recognizable skill: a canonical display name plus every surface
/// spelling that should collapse to it during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub canonical: String,
    pub surface_forms: Vec<String>,
}

impl SkillEntry {
    /// Entry whose only surface spelling is the canonical name itself.
    pub fn simple(canonical: &str) -> Self {
        Self {
            canonical: canonical.to_string(),
            surface_forms: vec![canonical.to_string()],
        }
    }

    pub fn with_forms(canonical: &str, forms: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            surface_forms: forms.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// A named group of related skill entries (e.g. "Cloud & DevOps").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub entries: Vec<SkillEntry>,
}

/// Immutable, ordered collection of skill pattern groups.
///
/// Built once at construction and shared read-only afterwards; extraction
/// never mutates it. Surface forms match whole-word and case-insensitively,
/// and longer forms win over shorter ones at the same position, so
/// "React Native" is never reported as "React".
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    groups: Vec<SkillGroup>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SkillCatalog {
    /// The hand-curated baseline catalog.
    pub fn builtin() -> Self {
        Self {
            groups: vec![
                SkillGroup {
                    name: "Programming Languages".to_string(),
                    entries: vec![
                        SkillEntry::simple("Python"),
                        SkillEntry::simple("JavaScript"),
                        SkillEntry::simple("TypeScript"),
                        SkillEntry::simple("Java"),
                        SkillEntry::with_forms("C++", &["c++", "cpp"]),
                        SkillEntry::with_forms("C#", &["c#", "csharp"]),
                        // Bare "go" collides with the English verb, so only
                        // the unambiguous spelling is matched.
                        SkillEntry::with_forms("Go", &["golang"]),
                        SkillEntry::simple("Rust"),
                        SkillEntry::simple("Ruby"),
                        SkillEntry::simple("PHP"),
                        SkillEntry::simple("Swift"),
                        SkillEntry::simple("Kotlin"),
                        SkillEntry::simple("Scala"),
                        SkillEntry::simple("MATLAB"),
                    ],
                },
                SkillGroup {
                    name: "Frontend".to_string(),
                    entries: vec![
                        SkillEntry::with_forms("React", &["react", "reactjs", "react.js"]),
                        SkillEntry::with_forms("Vue", &["vue", "vuejs", "vue.js"]),
                        SkillEntry::simple("Angular"),
                        SkillEntry::simple("Svelte"),
                        SkillEntry::with_forms("Next.js", &["next.js", "nextjs", "next js"]),
                        SkillEntry::simple("HTML"),
                        SkillEntry::simple("CSS"),
                        SkillEntry::with_forms("Sass", &["sass", "scss"]),
                        SkillEntry::with_forms("Tailwind CSS", &["tailwind css", "tailwindcss", "tailwind"]),
                        SkillEntry::simple("Bootstrap"),
                        SkillEntry::simple("Redux"),
                        SkillEntry::simple("Webpack"),
                        SkillEntry::simple("Vite"),
                    ],
                },
                SkillGroup {
                    name: "Backend & Frameworks".to_string(),
                    entries: vec![
                        SkillEntry::with_forms("Node.js", &["node.js", "node js", "nodejs"]),
                        SkillEntry::with_forms("Express", &["express", "express.js", "expressjs"]),
                        SkillEntry::simple("Django"),
                        SkillEntry::simple("Flask"),
                        SkillEntry::simple("FastAPI"),
                        SkillEntry::with_forms("Spring Boot", &["spring boot", "springboot"]),
                        SkillEntry::with_forms("Rails", &["rails", "ruby on rails"]),
                        SkillEntry::simple("Laravel"),
                        SkillEntry::simple("GraphQL"),
                        // Bare "rest" is an ordinary English word.
                        SkillEntry::with_forms("REST", &["rest api", "rest apis", "restful"]),
                        SkillEntry::simple("gRPC"),
                    ],
                },
                SkillGroup {
                    name: "Cloud & DevOps".to_string(),
                    entries: vec![
                        SkillEntry::simple("AWS"),
                        SkillEntry::simple("Azure"),
                        SkillEntry::with_forms("GCP", &["gcp", "google cloud"]),
                        SkillEntry::simple("Docker"),
                        SkillEntry::with_forms("Kubernetes", &["kubernetes", "k8s"]),
                        SkillEntry::simple("Terraform"),
                        SkillEntry::simple("Ansible"),
                        SkillEntry::simple("Jenkins"),
                        SkillEntry::with_forms("CI/CD", &["ci/cd", "cicd"]),
                        SkillEntry::with_forms("GitHub Actions", &["github actions"]),
                        SkillEntry::simple("GitLab"),
                    ],
                },
                SkillGroup {
                    name: "Databases".to_string(),
                    entries: vec![
                        SkillEntry::with_forms("PostgreSQL", &["postgresql", "postgres"]),
                        SkillEntry::simple("MySQL"),
                        SkillEntry::simple("MongoDB"),
                        SkillEntry::simple("Redis"),
                        SkillEntry::simple("SQLite"),
                        SkillEntry::simple("Elasticsearch"),
                        SkillEntry::simple("DynamoDB"),
                        SkillEntry::simple("Cassandra"),
                        SkillEntry::simple("SQL"),
                    ],
                },
                SkillGroup {
                    name: "AI & Machine Learning".to_string(),
                    entries: vec![
                        SkillEntry::simple("Machine Learning"),
                        SkillEntry::simple("Deep Learning"),
                        SkillEntry::simple("Data Science"),
                        SkillEntry::simple("TensorFlow"),
                        SkillEntry::simple("PyTorch"),
                        SkillEntry::with_forms("scikit-learn", &["scikit-learn", "sklearn"]),
                        SkillEntry::simple("Pandas"),
                        SkillEntry::simple("NumPy"),
                        SkillEntry::with_forms("NLP", &["nlp", "natural language processing"]),
                        SkillEntry::simple("Computer Vision"),
                    ],
                },
                SkillGroup {
                    name: "Methodologies".to_string(),
                    entries: vec![
                        SkillEntry::simple("Agile"),
                        SkillEntry::simple("Scrum"),
                        SkillEntry::simple("Kanban"),
                        SkillEntry::simple("TDD"),
                        SkillEntry::simple("DevOps"),
                        SkillEntry::simple("Microservices"),
                    ],
                },
                SkillGroup {
                    name: "Collaboration Tools".to_string(),
                    entries: vec![
                        SkillEntry::simple("Git"),
                        SkillEntry::simple("Jira"),
                        SkillEntry::simple("Confluence"),
                        SkillEntry::simple("Slack"),
                        SkillEntry::simple("Figma"),
                    ],
                },
                SkillGroup {
                    name: "Mobile & Cross-Platform".to_string(),
                    entries: vec![
                        SkillEntry::with_forms("React Native", &["react native", "react-native"]),
                        SkillEntry::simple("Flutter"),
                        SkillEntry::simple("iOS"),
                        SkillEntry::simple("Android"),
                        SkillEntry::simple("Xamarin"),
                    ],
                },
                SkillGroup {
                    name: "Infrastructure & Networking".to_string(),
                    entries: vec![
                        SkillEntry::simple("Linux"),
                        SkillEntry::simple("Unix"),
                        SkillEntry::simple("Nginx"),
                        SkillEntry::simple("Bash"),
                        SkillEntry::simple("PowerShell"),
                        SkillEntry::with_forms("TCP/IP", &["tcp/ip"]),
                    ],
                },
            ],
        }
    }

    /// Baseline catalog extended with caller-supplied entries, appended as a
    /// trailing "Custom" group.
    pub fn with_custom_entries(extra: Vec<SkillEntry>) -> Self {
        let mut catalog = Self::builtin();
        if !extra.is_empty() {
            catalog.groups.push(SkillGroup {
                name: "Custom".to_string(),
                entries: extra,
            });
        }
        catalog
    }

    pub fn groups(&self) -> &[SkillGroup] {
        &self.groups
    }

    /// Iterate every entry across all groups, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = &SkillEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_nonempty() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.entry_count() > 50);
        assert!(catalog.groups().len() >= 10);
    }

    #[test]
    fn every_entry_has_at_least_one_surface_form() {
        let catalog = SkillCatalog::builtin();
        for entry in catalog.entries() {
            assert!(
                !entry.surface_forms.is_empty(),
                "entry {} has no surface forms",
                entry.canonical
            );
        }
    }

    #[test]
    fn canonical_names_are_unique() {
        let catalog = SkillCatalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for entry in catalog.entries() {
            assert!(
                seen.insert(entry.canonical.to_lowercase()),
                "duplicate canonical name: {}",
                entry.canonical
            );
        }
    }

    #[test]
    fn custom_entries_are_appended() {
        let catalog = SkillCatalog::with_custom_entries(vec![SkillEntry::with_forms(
            "Supabase",
            &["supabase"],
        )]);
        assert_eq!(catalog.groups().last().map(|g| g.name.as_str()), Some("Custom"));
        assert!(catalog.entries().any(|e| e.canonical == "Supabase"));
    }
}
