//! Job matcher: skill extraction and job match scoring CLI

use clap::Parser;
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::{Config, OutputFormat};
use job_matcher::error::{MatcherError, Result};
use job_matcher::input::jobs::{load_embedding, load_jobs};
use job_matcher::input::resume::ResumeParser;
use job_matcher::matching::catalog::SkillCatalog;
use job_matcher::matching::extractor::SkillExtractor;
use job_matcher::matching::normalize::SkillNormalizer;
use job_matcher::matching::scorer::MatchScorer;
use job_matcher::output::report::MatchReport;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn build_scorer(config: &Config) -> Result<MatchScorer> {
    let catalog = SkillCatalog::with_custom_entries(config.matching.extra_skills.clone());
    let mut extractor = SkillExtractor::new(&catalog)?;
    extractor.set_fuzzy_threshold(config.matching.fuzzy_threshold);

    let normalizer = SkillNormalizer::with_overrides(config.matching.synonym_overrides.clone());

    let mut scorer = MatchScorer::with_parts(extractor, normalizer);
    scorer.set_skill_list_cap(config.matching.skill_list_cap);
    Ok(scorer)
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            jobs,
            embedding,
            top_n,
            output,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| MatcherError::InvalidInput(format!("Jobs file: {}", e)))?;

            let output_format = cli::parse_output_format(&output).map_err(MatcherError::InvalidInput)?;
            let top_n = top_n.unwrap_or(config.matching.default_top_n);

            info!("starting job matching run");

            let scorer = build_scorer(&config)?;

            let resume_text = std::fs::read_to_string(&resume)?;
            let parsed = ResumeParser::new().parse(&resume_text, scorer.extractor())?;
            info!(
                "parsed resume: {} skills detected",
                parsed.skills.len()
            );

            let job_records = load_jobs(&jobs)?;
            let candidate_embedding = load_embedding(&embedding)?;

            let ranked = scorer.rank_jobs(&candidate_embedding, &parsed.skills, &job_records, top_n)?;
            let report = MatchReport::new(&parsed.skills, ranked);

            match output_format {
                OutputFormat::Json => println!("{}", report.to_json()?),
                OutputFormat::Console => print!(
                    "{}",
                    report.render_console(
                        detailed || config.output.detailed,
                        config.output.color_output
                    )
                ),
            }
        }

        Commands::Extract { file, suggest } => {
            cli::validate_file_extension(&file, &["txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Input file: {}", e)))?;

            let scorer = build_scorer(&config)?;
            let text = std::fs::read_to_string(&file)?;
            let skills = scorer.extractor().extract(&text);

            if skills.is_empty() {
                println!("No catalog skills detected in {}", file.display());
            } else {
                println!("Detected skills ({}):", skills.len());
                for skill in &skills {
                    println!("  - {}", skill);
                }
            }

            if suggest {
                let candidates = scorer.extractor().fuzzy_candidates(&text);
                if !candidates.is_empty() {
                    println!("\nPossible misspellings:");
                    for c in candidates {
                        println!(
                            "  - '{}' looks like {} ({:.0}% similar)",
                            c.word,
                            c.canonical,
                            c.similarity * 100.0
                        );
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Skill list cap: {}", config.matching.skill_list_cap);
                println!("Default top N: {}", config.matching.default_top_n);
                println!("Fuzzy threshold: {:.2}", config.matching.fuzzy_threshold);
                println!("Extra skills: {}", config.matching.extra_skills.len());
                println!(
                    "Synonym overrides: {}",
                    config.matching.synonym_overrides.len()
                );
                println!("Output format: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
