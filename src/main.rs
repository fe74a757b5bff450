//! Jobmatch: score a stored profile against a pasted job description

use clap::Parser;
use jobmatch::cli::{self, Cli, Commands, ConfigAction};
use jobmatch::config::{Config, OutputFormat};
use jobmatch::error::{MatcherError, Result};
use jobmatch::output::{ConsoleFormatter, JsonFormatter, OutputFormatter};
use jobmatch::processing::matcher::MatchEngine;
use jobmatch::profile::ProfileSnapshot;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
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

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            profile,
            job,
            top_k,
            output,
            detailed,
        } => {
            cli::validate_file_extension(&profile, &["json"])
                .map_err(|e| MatcherError::InvalidInput(format!("Profile file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = cli::parse_output_format(&output).map_err(MatcherError::InvalidInput)?;

            let snapshot: ProfileSnapshot =
                serde_json::from_str(&std::fs::read_to_string(&profile)?)?;
            let jd_text = std::fs::read_to_string(&job)?;

            info!(
                "Scoring profile {} against {} ({} characters)",
                profile.display(),
                job.display(),
                jd_text.len()
            );

            let engine = MatchEngine::new(&config)?;
            let top_k = top_k.unwrap_or(config.keywords.top_k);
            let report = engine.compute_match(&snapshot, &jd_text, top_k);

            let rendered = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(config.output.color_output, detailed || config.output.detailed)
                        .format_report(&report)?
                }
                OutputFormat::Json => JsonFormatter::new(true).format_report(&report)?,
            };
            println!("{}", rendered);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}", Config::config_path().display());
                println!("\nScoring:");
                println!("  tfidf_floor: {}", config.scoring.tfidf_floor);
                println!("  coverage_gate: {}", config.scoring.coverage_gate);
                println!("  coverage_weight: {}", config.scoring.coverage_weight);
                println!("  tfidf_weight: {}", config.scoring.tfidf_weight);
                println!("  bonus_threshold: {}", config.scoring.bonus_threshold);
                println!("  coverage_bonus: {}", config.scoring.coverage_bonus);
                println!("\nKeywords:");
                println!("  top_k: {}", config.keywords.top_k);
                println!("  max_features: {}", config.keywords.max_features);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults.");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
