//! Missing-keyword extraction: salient job-description terms absent from
//! the profile.
//!
//! Deliberately lexicon-driven rather than a generic TF-IDF top-N; the
//! stopword, filler, and boost tables are what make the suggestions
//! actionable on technical postings.

use std::collections::HashSet;

use aho_corasick::AhoCorasick;

use crate::error::{MatcherError, Result};
use crate::lexicon;
use crate::processing::normalizer::{is_numeric, TextNormalizer};
use crate::processing::skills;
use crate::processing::tfidf::TfidfVectorizer;

const MIN_TERM_CHARS: usize = 3;
/// Below this many suggestions the relaxed backfill pass runs.
const BACKFILL_THRESHOLD: usize = 3;

pub struct KeywordExtractor {
    technical: AhoCorasick,
    domain: AhoCorasick,
    filler: AhoCorasick,
    backfill_filler: AhoCorasick,
    max_features: usize,
}

impl KeywordExtractor {
    pub fn new(max_features: usize) -> Result<Self> {
        let build = |patterns: &[&str]| {
            AhoCorasick::new(patterns).map_err(|e| {
                MatcherError::Processing(format!("Failed to build keyword matcher: {}", e))
            })
        };

        Ok(Self {
            technical: build(lexicon::TECHNICAL_KEYWORDS)?,
            domain: build(lexicon::DOMAIN_TERMS)?,
            filler: build(lexicon::KEYWORD_FILLER_SUBSTRINGS)?,
            backfill_filler: build(lexicon::BACKFILL_FILLER_SUBSTRINGS)?,
            max_features,
        })
    }

    /// Top `top_k` job-description unigrams missing from the profile,
    /// ordered by boosted TF-IDF weight (ties broken alphabetically).
    pub fn top_missing(
        &self,
        normalizer: &TextNormalizer,
        profile_tokens: &[String],
        jd_text: &str,
        top_k: usize,
    ) -> Vec<String> {
        let jd_tokens = normalizer.tokenize(jd_text);
        if jd_tokens.is_empty() {
            return Vec::new();
        }

        // Profile vocabulary including synonym expansions, so "javascript"
        // in the posting is covered by "js" on the resume.
        let mut covered: HashSet<String> = profile_tokens.iter().cloned().collect();
        for token in profile_tokens {
            covered.extend(skills::expand_skill(token));
        }

        let doc = jd_tokens.join(" ");
        let matrix = TfidfVectorizer::new()
            .max_features(self.max_features)
            .fit_transform(&[&doc]);

        let mut scored: Vec<(String, f64)> = Vec::new();
        for (term, weight) in matrix.term_weights(0) {
            if self.is_disqualified(term) {
                continue;
            }
            if covered.contains(term) {
                continue;
            }
            scored.push((term.to_string(), weight * self.relevance_boost(term)));
        }

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let mut out: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for (term, _) in &scored {
            if out.len() >= top_k {
                break;
            }
            // Defensive re-check mirroring the scoring-stage filters.
            if !seen.contains(term.as_str()) && !self.is_disqualified(term) {
                out.push(term.clone());
                seen.insert(term);
            }
        }

        // Relaxed second pass: keep only the hard disqualifiers.
        if out.len() < BACKFILL_THRESHOLD {
            for (term, _) in &scored {
                if out.len() >= top_k {
                    break;
                }
                if !seen.contains(term.as_str())
                    && term.chars().count() >= MIN_TERM_CHARS
                    && !is_numeric(term)
                    && !lexicon::is_extended_stopword(term)
                    && !self.backfill_filler.is_match(term)
                {
                    out.push(term.clone());
                    seen.insert(term);
                }
            }
        }

        out
    }

    fn is_disqualified(&self, term: &str) -> bool {
        lexicon::is_extended_stopword(term)
            || is_numeric(term)
            || term.chars().count() < MIN_TERM_CHARS
            || self.filler.is_match(term)
    }

    fn relevance_boost(&self, term: &str) -> f64 {
        if self.technical.is_match(term) {
            3.0
        } else if self.domain.is_match(term) {
            2.0
        } else {
            1.0
        }
    }
}
