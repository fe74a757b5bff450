//! Jobmatch library: resume/job-description match scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod output;
pub mod processing;
pub mod profile;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use processing::matcher::{MatchEngine, MatchReport};
pub use profile::ProfileSnapshot;
