//! Output formatters for match reports

use colored::Colorize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::matcher::MatchReport;

/// Trait for rendering a match report to a string.
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a qualitative score band.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn score_line(&self, score: f64) -> String {
        let pct = format!("{:.1}%", score * 100.0);
        let (band, colored_pct) = if score >= 0.8 {
            ("excellent", pct.green().bold())
        } else if score >= 0.6 {
            ("good", pct.cyan().bold())
        } else if score >= 0.4 {
            ("fair", pct.yellow().bold())
        } else {
            ("poor", pct.red().bold())
        };
        let rendered = if self.use_colors {
            colored_pct.to_string()
        } else {
            pct
        };
        format!("Match score: {} ({})", rendered, band)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(self.score_line(report.score));

        let analysis = &report.skills_analysis;
        lines.push(format!(
            "Skills coverage: {:.1}% ({}/{} skills mentioned in the posting)",
            analysis.skills_coverage * 100.0,
            analysis.skills_found.len(),
            analysis.total_skills_mentioned,
        ));

        if report.missing_keywords.is_empty() {
            lines.push("No missing keywords detected.".to_string());
        } else {
            lines.push("Missing keywords:".to_string());
            for (i, keyword) in report.missing_keywords.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, keyword));
            }
        }

        if self.detailed {
            if !analysis.skills_found.is_empty() {
                lines.push(format!(
                    "Skills found: {}",
                    analysis.skills_found.join(", ")
                ));
            }
            if !analysis.skills_missing.is_empty() {
                lines.push(format!(
                    "Skills missing: {}",
                    analysis.skills_missing.join(", ")
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::coverage::SkillsAnalysis;

    fn sample_report() -> MatchReport {
        MatchReport {
            score: 0.6234,
            missing_keywords: vec!["kubernetes".to_string(), "terraform".to_string()],
            skills_analysis: SkillsAnalysis {
                skills_found: vec!["python".to_string(), "django".to_string()],
                skills_missing: vec!["postgresql".to_string()],
                skills_coverage: 0.6667,
                total_skills_mentioned: 3,
            },
        }
    }

    #[test]
    fn test_console_format_includes_core_fields() {
        let formatter = ConsoleFormatter::new(false, true);
        let rendered = formatter.format_report(&sample_report()).unwrap();
        assert!(rendered.contains("62.3%"));
        assert!(rendered.contains("good"));
        assert!(rendered.contains("kubernetes"));
        assert!(rendered.contains("Skills missing: postgresql"));
    }

    #[test]
    fn test_console_format_without_detail() {
        let formatter = ConsoleFormatter::new(false, false);
        let rendered = formatter.format_report(&sample_report()).unwrap();
        assert!(!rendered.contains("Skills missing:"));
        assert!(rendered.contains("Missing keywords:"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = JsonFormatter::new(true);
        let rendered = formatter.format_report(&sample_report()).unwrap();
        let parsed: MatchReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, sample_report());
    }

    #[test]
    fn test_empty_report_renders() {
        let formatter = ConsoleFormatter::new(false, true);
        let rendered = formatter.format_report(&MatchReport::default()).unwrap();
        assert!(rendered.contains("0.0%"));
        assert!(rendered.contains("No missing keywords detected."));
    }
}
