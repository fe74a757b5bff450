//! The match-scoring pipeline: normalization, skill parsing, corpus
//! building, similarity, keyword gaps, coverage, and orchestration.

pub mod corpus;
pub mod coverage;
pub mod keywords;
pub mod matcher;
pub mod normalizer;
pub mod similarity;
pub mod skills;
pub mod tfidf;
