//! Corpus-based conformance testing.
//!
//! Loads test vectors from a corpus file and runs each one through the
//! validator, comparing the accept/reject decision and, when the vector names
//! one, the error kind.

use super::{ConformanceError, ConformanceResult};
use crate::json::{validate_with_limits, Limits};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Corpus format this runner understands.
pub const FORMAT_VERSION: &str = "corpus-v1";

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// What a vector expects the validator to decide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// The input must be accepted.
    Accept,
    /// The input must be rejected, optionally with a specific error kind.
    Reject {
        /// Error kind name such as `"TrailingContent"`.
        #[serde(default)]
        kind: Option<String>,
    },
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Raw text handed to the validator.
    pub input: String,
    /// Validate with [`Limits::strict`] instead of [`Limits::standard`].
    #[serde(default)]
    pub strict: bool,
    /// Expected decision.
    pub expected: Expectation,
}

/// Result of running a single test vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the validator.
        actual: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        if result.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Returns true if no vector failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed (total: {})",
            self.passed,
            self.failed,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details.iter().filter(|(_, r)| r.is_fail()).collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load corpus from its JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)?;
        if corpus.manifest.format_version != FORMAT_VERSION {
            return Err(ConformanceError::UnsupportedFormat(
                corpus.manifest.format_version,
            ));
        }
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = run_vector(vector);
            if let TestResult::Fail { expected, actual } = &result {
                tracing::warn!(id = %vector.id, %expected, %actual, "corpus vector failed");
            } else {
                tracing::trace!(id = %vector.id, "corpus vector passed");
            }
            results.record(&vector.id, result);
        }

        tracing::debug!(summary = %results.summary(), "corpus run finished");
        results
    }
}

/// Run a single test vector.
fn run_vector(vector: &TestVector) -> TestResult {
    let limits = if vector.strict {
        Limits::strict()
    } else {
        Limits::standard()
    };
    let result = validate_with_limits(&vector.input, limits);

    match (&vector.expected, result) {
        (Expectation::Accept, Ok(())) => TestResult::Pass,
        (Expectation::Accept, Err(e)) => TestResult::Fail {
            expected: "accept".to_string(),
            actual: format!("reject: {} at {}", e.name(), e.position()),
        },
        (Expectation::Reject { kind }, Ok(())) => TestResult::Fail {
            expected: format!("reject: {}", kind.as_deref().unwrap_or("any")),
            actual: "accept".to_string(),
        },
        (Expectation::Reject { kind: None }, Err(_)) => TestResult::Pass,
        (Expectation::Reject { kind: Some(kind) }, Err(e)) => {
            if e.name() == kind {
                TestResult::Pass
            } else {
                TestResult::Fail {
                    expected: format!("reject: {}", kind),
                    actual: format!("reject: {}", e.name()),
                }
            }
        }
    }
}
