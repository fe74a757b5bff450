//! Skill parsing and synonym expansion.
//!
//! Real-world resumes mix comma-, colon-, and line-delimited skill lists,
//! sometimes under category headers ("Languages: Python, Java"). The parser
//! tolerates all of these without a schema.

use crate::lexicon;

/// Parse a freeform skills field into a flat, de-duplicated list.
///
/// De-duplication is case-insensitive; the casing of the first occurrence
/// wins and first-seen order is preserved.
pub fn parse_skills(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut all_skills = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // "<category>: <skills>" lines contribute only the part after the
        // colon, and only when the prefix looks like a skills category.
        if let Some((category, rest)) = line.split_once(':') {
            let category = category.trim().to_lowercase();
            if lexicon::SKILL_CATEGORY_PREFIXES
                .iter()
                .any(|k| category.contains(k))
            {
                all_skills.extend(parse_skills_list(rest.trim()));
                continue;
            }
        }

        all_skills.extend(parse_skills_list(line));
    }

    let mut unique = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for skill in all_skills {
        if seen.insert(skill.to_lowercase()) {
            unique.push(skill);
        }
    }
    unique
}

/// Parse one skill-list fragment; any of `:`, `,`, `;` delimits.
fn parse_skills_list(fragment: &str) -> Vec<String> {
    if fragment.trim().is_empty() {
        return Vec::new();
    }

    let mut skills: Vec<String> = Vec::new();
    for part in fragment.split([':', ',', ';']) {
        let cleaned = part.trim();
        if cleaned.chars().count() < 2 {
            continue;
        }
        if lexicon::SKILL_FILLER_WORDS.contains(&cleaned.to_lowercase().as_str()) {
            continue;
        }
        // Standalone "JS" is noise; compounds like ReactJS stay.
        if cleaned == "JS" {
            continue;
        }
        if !skills.iter().any(|s| s == cleaned) {
            skills.push(cleaned.to_string());
        }
    }
    skills
}

/// Expand a skill into its known lexical variants (always includes the
/// lowercased skill itself). Unknown skills expand to themselves only.
pub fn expand_skill(skill: &str) -> Vec<String> {
    let skill_lower = skill.trim().to_lowercase();
    let mut expansions = vec![skill_lower.clone()];
    if let Some(variants) = lexicon::synonym_variants(&skill_lower) {
        for variant in variants {
            if !expansions.iter().any(|e| e == variant) {
                expansions.push((*variant).to_string());
            }
        }
    }
    expansions
}
