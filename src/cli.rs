//! CLI interface for the job matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Skill extraction and job match scoring for resumes and job descriptions")]
#[command(
    long_about = "Extract skills from resume text and rank job postings by embedding similarity and keyword overlap"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank jobs against a resume
    Match {
        /// Path to resume text file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to jobs JSON file
        #[arg(short, long)]
        jobs: PathBuf,

        /// Path to the candidate embedding (JSON float array or vector text)
        #[arg(short, long)]
        embedding: PathBuf,

        /// Number of top matches to return
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Output detailed results
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract skills from a text file
    Extract {
        /// Path to text file (TXT, MD)
        #[arg(short, long)]
        file: PathBuf,

        /// Also list near-miss words that look like misspelled skills
        #[arg(short, long)]
        suggest: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn parses_output_formats() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn validates_file_extensions() {
        assert!(validate_file_extension(Path::new("resume.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.TXT"), &["txt"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["txt"]).is_err());
    }
}
