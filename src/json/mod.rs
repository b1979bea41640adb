//! RFC 8259 JSON grammar validation.
//!
//! Decides whether a text is exactly one JSON value surrounded by optional
//! whitespace. No value tree is built and no state survives a call, so
//! validations may run concurrently on independent threads.
//!
//! # Architecture
//!
//! - [`cursor`] - Forward-only scan position with lookahead, consume and
//!   whitespace skipping
//! - [`chars`] - Character classes (whitespace, digits, hex, string chars)
//! - [`grammar`] - One recursive descent rule per production
//! - [`limits`] - Nesting/input bounds and surrogate policy
//!
//! # Example
//!
//! ```
//! use jsonvet::json::{validate, validate_with_limits, Limits};
//! use jsonvet::ErrorKind;
//!
//! assert!(validate(r#"{"a":1,"b":[1,2,3]}"#).is_ok());
//!
//! let err = validate(r#"{"a":01}"#).unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::InvalidNumberFormat);
//!
//! let err = validate_with_limits(r#""\uD800""#, Limits::strict()).unwrap_err();
//! assert_eq!(err.name(), "LoneSurrogate");
//! ```

pub mod chars;
pub mod cursor;
pub mod grammar;
pub mod limits;

pub use cursor::Cursor;
pub use grammar::Validator;
pub use limits::Limits;

use crate::error::ValidationResult;

/// Validate `text` with [`Limits::standard`].
pub fn validate(text: &str) -> ValidationResult {
    validate_with_limits(text, Limits::standard())
}

/// Validate `text` with custom limits.
pub fn validate_with_limits(text: &str, limits: Limits) -> ValidationResult {
    Validator::new(text, limits).validate_document()
}

/// True if `text` is a single valid JSON value.
pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}
