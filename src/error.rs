//! Error types for JSON validation.
//!
//! Every rejection carries an [`ErrorKind`] and the byte offset at which it was
//! detected. Kinds have stable numeric codes so that reports and corpus files
//! can refer to them independently of their display text.

use thiserror::Error;

/// The reason a text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// UnexpectedEndOfInput (code 100)
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// UnexpectedToken (code 101)
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken {
        /// Literal or delimiter set the grammar required.
        expected: &'static str,
        /// Character actually present at the offset.
        found: char,
    },

    /// InvalidToken (code 102)
    #[error("invalid token")]
    InvalidToken,

    /// InvalidNumberFormat (code 103)
    #[error("invalid number format")]
    InvalidNumberFormat,

    /// InvalidEscapeSequence (code 104)
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,

    /// TrailingContent (code 105)
    #[error("trailing content after top-level value")]
    TrailingContent,

    /// ControlCharacterInString (code 106)
    #[error("unescaped control character U+{codepoint:04X} in string")]
    ControlCharacterInString {
        /// The offending codepoint, always below 0x20.
        codepoint: u32,
    },

    /// LoneSurrogate (code 107)
    #[error("unpaired surrogate \\u{codepoint:04X}")]
    LoneSurrogate {
        /// The surrogate code unit from the escape.
        codepoint: u16,
    },

    /// InputTooLarge (code 110)
    #[error("input of {size} bytes exceeds limit of {max}")]
    InputTooLarge {
        /// Input size in bytes.
        size: u64,
        /// Configured maximum.
        max: u64,
    },

    /// NestingTooDeep (code 111)
    #[error("nesting depth {depth} exceeds limit of {max}")]
    NestingTooDeep {
        /// Depth reached by the offending bracket.
        depth: u64,
        /// Configured maximum.
        max: u64,
    },
}

impl ErrorKind {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorKind::UnexpectedEndOfInput => 100,
            ErrorKind::UnexpectedToken { .. } => 101,
            ErrorKind::InvalidToken => 102,
            ErrorKind::InvalidNumberFormat => 103,
            ErrorKind::InvalidEscapeSequence => 104,
            ErrorKind::TrailingContent => 105,
            ErrorKind::ControlCharacterInString { .. } => 106,
            ErrorKind::LoneSurrogate { .. } => 107,
            ErrorKind::InputTooLarge { .. } => 110,
            ErrorKind::NestingTooDeep { .. } => 111,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorKind::InvalidToken => "InvalidToken",
            ErrorKind::InvalidNumberFormat => "InvalidNumberFormat",
            ErrorKind::InvalidEscapeSequence => "InvalidEscapeSequence",
            ErrorKind::TrailingContent => "TrailingContent",
            ErrorKind::ControlCharacterInString { .. } => "ControlCharacterInString",
            ErrorKind::LoneSurrogate { .. } => "LoneSurrogate",
            ErrorKind::InputTooLarge { .. } => "InputTooLarge",
            ErrorKind::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }
}

/// A rejection: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{kind} at offset {position}")]
pub struct ValidationError {
    kind: ErrorKind,
    position: usize,
}

impl ValidationError {
    /// Create an error of `kind` detected at byte offset `position`.
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The kind of failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the input at which the failure was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    /// Shorthand for `self.kind().name()`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Resolve the offset to a 1-based `(line, column)` pair in `text`.
    ///
    /// Columns count characters, not bytes. `text` must be the input the
    /// error was produced from; an out-of-range offset clamps to the end.
    pub fn line_col(&self, text: &str) -> (usize, usize) {
        let prefix = text.get(..self.position).unwrap_or(text);
        let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix
            .get(line_start..)
            .map_or(0, |rest| rest.chars().count())
            + 1;
        (line, column)
    }
}

/// Result type for validation.
pub type ValidationResult = Result<(), ValidationError>;
