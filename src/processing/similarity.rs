//! Profile-to-posting textual similarity.

use log::debug;

use crate::processing::normalizer::TextNormalizer;
use crate::processing::tfidf::TfidfVectorizer;

/// Words below which a text is too short to vectorize meaningfully.
const MIN_WORDS: usize = 5;

/// TF-IDF cosine similarity between two texts over unigrams and bigrams,
/// in [0, 1].
///
/// Degenerate inputs (either side blank or under five words, or a
/// vocabulary that prunes to nothing) yield 0.0 rather than an error.
pub fn tfidf_cosine(normalizer: &TextNormalizer, a: &str, b: &str) -> f64 {
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }

    let text_a = normalizer.normalize(a);
    let text_b = normalizer.normalize(b);

    if text_a.split_whitespace().count() < MIN_WORDS
        || text_b.split_whitespace().count() < MIN_WORDS
    {
        return 0.0;
    }

    // Inputs are pre-cleaned, so no stopword removal here: stripping them
    // again would drop technical terms the tuning relies on.
    let matrix = TfidfVectorizer::new()
        .ngram_range(1, 2)
        .min_df(1)
        .max_df(0.95)
        .sublinear_tf(true)
        .fit_transform(&[&text_a, &text_b]);

    if matrix.is_empty() {
        debug!("tfidf vocabulary is empty, treating similarity as 0");
        return 0.0;
    }

    matrix.cosine_similarity(0, 1)
}
