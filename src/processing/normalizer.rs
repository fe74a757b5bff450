//! Text normalization and tokenization

use crate::lexicon;
use regex::Regex;

/// Normalizer shared by every pipeline stage. Holds the compiled regexes so
/// per-call work is just the replacements.
pub struct TextNormalizer {
    punct_regex: Regex,
    ws_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        // Keep word chars, whitespace, and the symbols that carry meaning in
        // tech terms (c++, ci/cd, full-stack, d&d).
        let punct_regex = Regex::new(r"[^\w\s\-+/&]").expect("Invalid punctuation regex");
        let ws_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            punct_regex,
            ws_regex,
        }
    }

    /// Lowercase, strip punctuation outside the keep-set, collapse whitespace.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let lowered = text.to_lowercase();
        let stripped = self.punct_regex.replace_all(&lowered, " ");
        self.ws_regex.replace_all(&stripped, " ").trim().to_string()
    }

    /// Normalize and split on whitespace, dropping stopwords and purely
    /// numeric tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .filter(|t| !lexicon::is_stopword(t))
            .filter(|t| !is_numeric(t))
            .map(str::to_string)
            .collect()
    }
}

pub(crate) fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_numeric())
}
