//! Corpus-driven conformance checks.
//!
//! A corpus is a JSON file of accept/reject vectors. Running it against the
//! validator gives a pass/fail summary that the test suite and the
//! `jsonvet corpus` command both use.

pub mod corpus;

pub use corpus::{
    Corpus, CorpusManifest, CorpusResults, CorpusRunner, Expectation, TestResult, TestVector,
};

use thiserror::Error;

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// The corpus file could not be read.
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    /// The corpus file is not a well-formed corpus document.
    #[error("failed to parse corpus JSON: {0}")]
    Format(#[from] serde_json::Error),

    /// The corpus declares a format this crate does not understand.
    #[error("unsupported corpus format version {0:?}")]
    UnsupportedFormat(String),
}
