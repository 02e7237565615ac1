//! Job store files and embedding vector formats
//!
//! Jobs are consumed from JSON files already holding text and, where
//! available, pre-computed embedding vectors. Embeddings may also arrive in
//! the job store's text format ("[0.1,0.2,...]"), so both representations
//! are supported when loading a candidate vector.

use crate::error::{MatcherError, Result};
use crate::matching::scorer::JobRecord;
use log::info;
use std::path::Path;

/// Load job records from a JSON array file.
pub fn load_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    let content = std::fs::read_to_string(path)?;
    let jobs: Vec<JobRecord> = serde_json::from_str(&content)?;
    info!("loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}

/// Load a candidate embedding from a file holding either a JSON float array
/// or a vector string ("[0.1,0.2,...]").
pub fn load_embedding(path: &Path) -> Result<Vec<f32>> {
    let content = std::fs::read_to_string(path)?;
    let trimmed = content.trim();

    if let Ok(vector) = serde_json::from_str::<Vec<f32>>(trimmed) {
        return Ok(vector);
    }

    parse_vector_string(trimmed)?.ok_or_else(|| {
        MatcherError::InvalidInput(format!("no embedding vector found in {}", path.display()))
    })
}

/// Parse the job store's vector text format ("[0.1,0.2,0.3]") into floats.
///
/// Empty input is `None`; malformed numbers are a typed error.
pub fn parse_vector_string(vector_str: &str) -> Result<Option<Vec<f32>>> {
    let inner = vector_str.trim().trim_start_matches('[').trim_end_matches(']');
    if inner.trim().is_empty() {
        return Ok(None);
    }

    let values = inner
        .split(',')
        .map(|v| {
            v.trim().parse::<f32>().map_err(|e| {
                MatcherError::InvalidInput(format!("bad vector component '{}': {}", v.trim(), e))
            })
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok(Some(values))
}

/// Format floats into the job store's vector text format.
pub fn format_vector_string(embedding: &[f32]) -> String {
    let values: Vec<String> = embedding.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_vector_strings() {
        let parsed = parse_vector_string("[0.1,0.2,0.3]").unwrap().unwrap();
        assert_eq!(parsed, vec![0.1, 0.2, 0.3]);

        let parsed = parse_vector_string(" [ 1.5 , -2.0 ] ").unwrap().unwrap();
        assert_eq!(parsed, vec![1.5, -2.0]);
    }

    #[test]
    fn empty_vector_string_is_none() {
        assert_eq!(parse_vector_string("").unwrap(), None);
        assert_eq!(parse_vector_string("[]").unwrap(), None);
    }

    #[test]
    fn malformed_vector_string_is_an_error() {
        assert!(parse_vector_string("[0.1,abc]").is_err());
    }

    #[test]
    fn vector_string_round_trip() {
        let original = vec![0.25, -1.5, 3.0];
        let parsed = parse_vector_string(&format_vector_string(&original))
            .unwrap()
            .unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn loads_jobs_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "j1", "title": "Engineer", "company": "Acme",
                 "description": "Python work", "requirements": ["Docker"],
                 "embedding": [0.1, 0.2]}},
                {{"id": "j2"}}]"#
        )
        .unwrap();

        let jobs = load_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, "j1");
        assert_eq!(jobs[0].embedding.as_deref(), Some(&[0.1, 0.2][..]));
        // Absent fields are typed defaults, not missing-key lookups
        assert_eq!(jobs[1].title, "");
        assert_eq!(jobs[1].embedding, None);
    }

    #[test]
    fn loads_embedding_in_both_formats() {
        let mut json_file = tempfile::NamedTempFile::new().unwrap();
        write!(json_file, "[0.5, 0.25]").unwrap();
        assert_eq!(load_embedding(json_file.path()).unwrap(), vec![0.5, 0.25]);

        // Vector text that is not valid JSON (bare leading-dot floats)
        let mut text_file = tempfile::NamedTempFile::new().unwrap();
        write!(text_file, "[.5,.25]").unwrap();
        assert_eq!(load_embedding(text_file.path()).unwrap(), vec![0.5, 0.25]);
    }
}
