//! jsonvet - strict RFC 8259 JSON grammar validation.
//!
//! Answers one question about a text: is it exactly one JSON value with
//! optional surrounding whitespace? No value tree is materialized.
//!
//! # Architecture
//!
//! - [`json`] - Cursor, character classes, grammar rules and limits
//! - [`error`] - Error kinds with stable codes and detection offsets
//! - [`conformance`] - Accept/reject corpus runner
//! - [`cli`] - Command-line adapter used by the `jsonvet` binary
//!
//! # Example
//!
//! ```
//! assert!(jsonvet::validate(" [1, 2.5e3, \"x\", {\"k\": null}] ").is_ok());
//! assert!(jsonvet::validate("[1, 2,]").is_err());
//! ```

// Library code reports malformed input through Result, never by aborting.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod cli;
pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use json::{is_valid, validate, validate_with_limits, Limits};
