//! Forward-only scan position and the lexical primitives built on it.
//!
//! Offsets are byte offsets into the `&str` and always sit on a character
//! boundary. The cursor never moves backwards.

use super::chars::is_whitespace;
use crate::error::{ErrorKind, ValidationError};

/// Scan position over an input text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True once every character has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or("")
    }

    /// Peek at the current character without consuming it.
    ///
    /// `None` means end of input.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume the current character, if any, and return it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `expected` if the input continues with it.
    ///
    /// On mismatch the cursor does not move and the error reports the first
    /// character found in place of `expected`.
    pub fn consume(&mut self, expected: &'static str) -> Result<(), ValidationError> {
        if self.remaining().starts_with(expected) {
            self.pos += expected.len();
            return Ok(());
        }
        match self.peek() {
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
            Some(found) => Err(self.error(ErrorKind::UnexpectedToken { expected, found })),
        }
    }

    /// Consume `literal` only if the input continues with it.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.remaining().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace characters.
    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let trimmed = rest.trim_start_matches(is_whitespace);
        self.pos += rest.len() - trimmed.len();
    }

    /// Build an error located at the current position.
    pub fn error(&self, kind: ErrorKind) -> ValidationError {
        ValidationError::new(kind, self.pos)
    }
}
