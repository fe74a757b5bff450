//! Match orchestration: corpus, similarity, coverage, and keyword gaps
//! combined into one report.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ScoringConfig};
use crate::error::Result;
use crate::processing::corpus::build_corpus;
use crate::processing::coverage::{analyze_skills, round4, SkillsAnalysis};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::normalizer::TextNormalizer;
use crate::processing::similarity::tfidf_cosine;
use crate::profile::ProfileSnapshot;

/// The scoring result relayed verbatim to the API layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Blended match score in [0, 1], 4 decimal places.
    pub score: f64,
    /// Relevance-ordered, at most `top_k` entries.
    pub missing_keywords: Vec<String>,
    pub skills_analysis: SkillsAnalysis,
}

pub struct MatchEngine {
    normalizer: TextNormalizer,
    extractor: KeywordExtractor,
    scoring: ScoringConfig,
}

impl MatchEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(),
            extractor: KeywordExtractor::new(config.keywords.max_features)?,
            scoring: config.scoring.clone(),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&Config::default())
    }

    /// Score a profile snapshot against a job description. Pure and
    /// side-effect free: identical inputs produce identical reports.
    pub fn compute_match(
        &self,
        snapshot: &ProfileSnapshot,
        jd_text: &str,
        top_k: usize,
    ) -> MatchReport {
        let corpus = build_corpus(snapshot, &self.normalizer);
        if corpus.is_empty() {
            debug!("profile corpus is empty, returning zero report");
            return MatchReport::default();
        }

        let tfidf_score = tfidf_cosine(&self.normalizer, &corpus.text, jd_text);
        let skills_analysis =
            analyze_skills(&self.normalizer, snapshot.profile.as_ref(), jd_text);

        let score = self.blend(tfidf_score, skills_analysis.skills_coverage);
        let missing_keywords =
            self.extractor
                .top_missing(&self.normalizer, &corpus.tokens, jd_text, top_k);

        MatchReport {
            score: round4(score),
            missing_keywords,
            skills_analysis,
        }
    }

    /// Blend the textual similarity with skills coverage.
    ///
    /// When the posting's prose diverges lexically from the profile but the
    /// required skills are well covered, coverage dominates; otherwise the
    /// TF-IDF score leads, with a flat bonus for strong coverage.
    fn blend(&self, tfidf_score: f64, coverage: f64) -> f64 {
        let s = &self.scoring;
        if tfidf_score < s.tfidf_floor && coverage > s.coverage_gate {
            coverage * s.coverage_weight + tfidf_score * s.tfidf_weight
        } else if coverage > s.bonus_threshold {
            (tfidf_score + s.coverage_bonus).min(1.0)
        } else {
            tfidf_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    fn engine() -> MatchEngine {
        MatchEngine::with_defaults().unwrap()
    }

    fn snapshot(skills: &str, summary: &str) -> ProfileSnapshot {
        ProfileSnapshot {
            profile: Some(Profile {
                name: "Ada Lovelace".to_string(),
                summary: summary.to_string(),
                skills: skills.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_profile_yields_zero_report() {
        let report = engine().compute_match(
            &ProfileSnapshot::default(),
            "Senior Rust engineer wanted for systems work",
            10,
        );
        assert_eq!(report, MatchReport::default());
        assert_eq!(report.score, 0.0);
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.skills_analysis.skills_coverage, 0.0);
    }

    #[test]
    fn test_empty_job_description_yields_zero_score() {
        let report = engine().compute_match(
            &snapshot("Python, Django", "Backend engineer with five years of experience"),
            "",
            10,
        );
        assert_eq!(report.score, 0.0);
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.skills_analysis.total_skills_mentioned, 0);
    }

    #[test]
    fn test_blend_skills_dominant_fallback() {
        let e = engine();
        // Low prose similarity but strong coverage: 0.8 * coverage + 0.2 * tfidf.
        let blended = e.blend(0.05, 0.8);
        assert!((blended - (0.8 * 0.8 + 0.05 * 0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_blend_coverage_bonus() {
        let e = engine();
        let blended = e.blend(0.5, 0.8);
        assert!((blended - 0.6).abs() < 1e-9);
        // Bonus never pushes past 1.0.
        assert_eq!(e.blend(0.95, 0.9), 1.0);
    }

    #[test]
    fn test_blend_plain_tfidf() {
        let e = engine();
        assert_eq!(e.blend(0.42, 0.3), 0.42);
        // Coverage at the gate (not above) does not trigger the fallback.
        assert_eq!(e.blend(0.05, 0.5), 0.05);
    }

    #[test]
    fn test_score_is_bounded_and_rounded() {
        let report = engine().compute_match(
            &snapshot(
                "Python, Django, React, PostgreSQL, Docker",
                "Full stack developer building web applications with Python and React",
            ),
            "We are hiring a full stack developer experienced with Python, Django, \
             React and PostgreSQL to build web applications with Docker deployments.",
            10,
        );
        assert!(report.score >= 0.0 && report.score <= 1.0);
        assert_eq!(report.score, round4(report.score));
        assert!(report.skills_analysis.skills_coverage >= 0.0);
        assert!(report.skills_analysis.skills_coverage <= 1.0);
    }

    #[test]
    fn test_identical_inputs_are_deterministic() {
        let e = engine();
        let snap = snapshot(
            "Python, Django",
            "Backend engineer who enjoys building data heavy services",
        );
        let jd = "Backend role using Python, Django, PostgreSQL, Redis and Kubernetes \
                  to run scalable ingestion pipelines for analytics dashboards";
        let first = e.compute_match(&snap, jd, 10);
        let second = e.compute_match(&snap, jd, 10);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_keywords_respect_top_k() {
        let report = engine().compute_match(
            &snapshot("Python", "Backend engineer focused on python services"),
            "Needs kubernetes docker terraform ansible jenkins redis elasticsearch \
             mongodb graphql typescript experience",
            4,
        );
        assert!(report.missing_keywords.len() <= 4);
    }
}
