//! CLI interface for the match scorer

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "jobmatch")]
#[command(about = "Score a stored profile against a pasted job description")]
#[command(
    long_about = "Compare a profile snapshot (JSON export of the job tracker's resume data) \
                  with a job description and report a match score, missing keywords, and a \
                  skills-coverage breakdown"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile against a job description
    Score {
        /// Path to the profile snapshot (JSON)
        #[arg(short, long)]
        profile: PathBuf,

        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Number of missing keywords to report (defaults to the configured value)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include the full skills breakdown in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or reset configuration
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

    /// Print the configuration file path
    Path,
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!(
            "Unknown output format '{}' (expected: console, json)",
            other
        )),
    }
}

pub fn validate_file_extension(path: &Path, allowed: &[&str]) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(()),
        Some(ext) => Err(format!(
            "Unsupported file extension '.{}' for {} (expected: {})",
            ext,
            path.display(),
            allowed.join(", ")
        )),
        None => Err(format!(
            "File {} has no extension (expected: {})",
            path.display(),
            allowed.join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("profile.json"), &["json"]).is_ok());
        assert!(validate_file_extension(Path::new("jd.TXT"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("jd.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("noext"), &["json"]).is_err());
    }

    #[test]
    fn test_cli_parses_score_command() {
        let cli = Cli::try_parse_from([
            "jobmatch", "score", "--profile", "p.json", "--job", "jd.txt", "-k", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Score { top_k, output, .. } => {
                assert_eq!(top_k, Some(5));
                assert_eq!(output, "console");
            }
            _ => panic!("expected score command"),
        }
    }
}
