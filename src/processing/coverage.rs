//! Skills-coverage analysis: which posting-mentioned technical skills the
//! profile already has.

use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::processing::normalizer::TextNormalizer;
use crate::processing::skills;
use crate::profile::Profile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub skills_found: Vec<String>,
    pub skills_missing: Vec<String>,
    /// found / mentioned, rounded to 4 decimal places; 0.0 when the posting
    /// mentions no known skills.
    pub skills_coverage: f64,
    pub total_skills_mentioned: usize,
}

/// Scan the fixed technical-skill vocabulary against the job description's
/// tokens and split the mentions into found/missing relative to the
/// profile's parsed skills (with synonym expansion and substring matching
/// in both directions).
pub fn analyze_skills(
    normalizer: &TextNormalizer,
    profile: Option<&Profile>,
    jd_text: &str,
) -> SkillsAnalysis {
    let Some(profile) = profile else {
        return SkillsAnalysis::default();
    };
    if profile.skills.trim().is_empty() {
        return SkillsAnalysis::default();
    }

    let resume_skills = skills::parse_skills(&profile.skills);
    let resume_skills_lower: Vec<String> = resume_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let jd_tokens = normalizer.tokenize(jd_text);

    let mentioned: Vec<&str> = lexicon::SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|skill| jd_tokens.iter().any(|t| t == skill))
        .collect();

    let mut skills_found = Vec::new();
    let mut skills_missing = Vec::new();

    for jd_skill in &mentioned {
        if covers(jd_skill, &resume_skills_lower) {
            skills_found.push((*jd_skill).to_string());
        } else {
            skills_missing.push((*jd_skill).to_string());
        }
    }

    let total = mentioned.len();
    let coverage = if total > 0 {
        skills_found.len() as f64 / total as f64
    } else {
        0.0
    };

    SkillsAnalysis {
        skills_found,
        skills_missing,
        skills_coverage: round4(coverage),
        total_skills_mentioned: total,
    }
}

/// A posting skill counts as covered on a direct match, a synonym-expansion
/// match, or case-insensitive substring containment in either direction.
fn covers(jd_skill: &str, resume_skills_lower: &[String]) -> bool {
    if resume_skills_lower.iter().any(|s| s == jd_skill) {
        return true;
    }

    for resume_skill in resume_skills_lower {
        let expanded = skills::expand_skill(resume_skill);

        if expanded.iter().any(|term| term == jd_skill) {
            return true;
        }
        if resume_skill.contains(jd_skill) || jd_skill.contains(resume_skill.as_str()) {
            return true;
        }
        if expanded
            .iter()
            .any(|term| term.contains(jd_skill) || jd_skill.contains(term.as_str()))
        {
            return true;
        }
    }
    false
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
