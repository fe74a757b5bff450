//! Builds the profile-side text corpus for similarity comparison.

use crate::processing::normalizer::TextNormalizer;
use crate::processing::skills;
use crate::profile::{display_order, ProfileSnapshot};

/// Concatenated profile text plus the flat token list used for
/// keyword-presence checks.
#[derive(Debug, Clone, Default)]
pub struct ProfileCorpus {
    pub text: String,
    pub tokens: Vec<String>,
}

impl ProfileCorpus {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenate every profile section into one blob, in display order:
/// contact fields and summary, parsed skills with their synonym expansions,
/// then experiences, projects, and education (each sorted by descending
/// `order`, then descending start date).
pub fn build_corpus(snapshot: &ProfileSnapshot, normalizer: &TextNormalizer) -> ProfileCorpus {
    let Some(profile) = &snapshot.profile else {
        return ProfileCorpus::default();
    };

    let mut parts: Vec<String> = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut push_part = |part: String, tokens: &mut Vec<String>| {
        tokens.extend(normalizer.tokenize(&part));
        parts.push(part);
    };

    for field in [
        &profile.name,
        &profile.city,
        &profile.email,
        &profile.phone,
        &profile.summary,
        &profile.links,
    ] {
        push_part(field.clone(), &mut tokens);
    }

    // Skills enter the corpus both verbatim and expanded, so a resume
    // listing "js" still matches a posting asking for "JavaScript".
    let parsed_skills = skills::parse_skills(&profile.skills);
    if !parsed_skills.is_empty() {
        let mut skill_terms: Vec<String> = Vec::new();
        for skill in &parsed_skills {
            skill_terms.push(skill.clone());
            skill_terms.extend(skills::expand_skill(skill));
        }
        push_part(skill_terms.join(" "), &mut tokens);
    }

    for exp in display_order(&snapshot.experiences, |e| (e.order, e.start_date)) {
        let seg = join_fields(&[
            Some(exp.company.as_str()),
            Some(exp.position.as_str()),
            exp.location.as_deref(),
            exp.description.as_deref(),
        ]);
        push_part(seg, &mut tokens);
    }

    for proj in display_order(&snapshot.projects, |p| (p.order, p.start_date)) {
        let seg = join_fields(&[
            Some(proj.name.as_str()),
            proj.description.as_deref(),
            proj.technologies.as_deref(),
        ]);
        push_part(seg, &mut tokens);
    }

    for edu in display_order(&snapshot.education, |e| (e.order, e.start_date)) {
        let seg = join_fields(&[
            Some(edu.institution.as_str()),
            Some(edu.degree.as_str()),
            edu.field_of_study.as_deref(),
            edu.location.as_deref(),
        ]);
        push_part(seg, &mut tokens);
    }

    ProfileCorpus {
        text: parts.join("\n"),
        tokens,
    }
}

fn join_fields(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .filter_map(|f| *f)
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ExperienceEntry, Profile, ProjectEntry};

    fn snapshot_with_skills(skills: &str) -> ProfileSnapshot {
        ProfileSnapshot {
            profile: Some(Profile {
                name: "Ada Lovelace".to_string(),
                city: "London".to_string(),
                summary: "Backend engineer focused on data pipelines".to_string(),
                skills: skills.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_snapshot_yields_empty_corpus() {
        let corpus = build_corpus(&ProfileSnapshot::default(), &TextNormalizer::new());
        assert!(corpus.is_empty());
        assert!(corpus.tokens.is_empty());
    }

    #[test]
    fn test_corpus_contains_profile_fields() {
        let corpus = build_corpus(&snapshot_with_skills(""), &TextNormalizer::new());
        assert!(corpus.text.contains("Ada Lovelace"));
        assert!(corpus.text.contains("London"));
        assert!(corpus.tokens.contains(&"backend".to_string()));
        assert!(corpus.tokens.contains(&"pipelines".to_string()));
    }

    #[test]
    fn test_corpus_expands_skills() {
        // Lowercase "js" survives parsing; only the bare uppercase "JS"
        // token is treated as noise.
        let corpus = build_corpus(&snapshot_with_skills("js, React"), &TextNormalizer::new());
        assert!(corpus.tokens.contains(&"js".to_string()));
        assert!(corpus.tokens.contains(&"javascript".to_string()));
        assert!(corpus.tokens.contains(&"react".to_string()));
        assert!(corpus.tokens.contains(&"reactjs".to_string()));
    }

    #[test]
    fn test_corpus_includes_entries_in_display_order() {
        let mut snapshot = snapshot_with_skills("");
        snapshot.experiences = vec![
            ExperienceEntry {
                company: "FirstCorp".to_string(),
                position: "Junior Developer".to_string(),
                order: 0,
                ..Default::default()
            },
            ExperienceEntry {
                company: "LatestCorp".to_string(),
                position: "Staff Engineer".to_string(),
                order: 1,
                ..Default::default()
            },
        ];
        snapshot.projects = vec![ProjectEntry {
            name: "Tracker".to_string(),
            technologies: Some("Django, PostgreSQL".to_string()),
            ..Default::default()
        }];

        let corpus = build_corpus(&snapshot, &TextNormalizer::new());
        let latest = corpus.text.find("LatestCorp").unwrap();
        let first = corpus.text.find("FirstCorp").unwrap();
        assert!(latest < first, "higher order entries come first");
        assert!(corpus.tokens.contains(&"django".to_string()));
        assert!(corpus.tokens.contains(&"postgresql".to_string()));
    }
}
