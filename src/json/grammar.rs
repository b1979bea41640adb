//! Recursive descent grammar rules.
//!
//! One method per RFC 8259 production. Each rule consumes the characters of
//! its production or returns the first violation it finds; nothing is built.
//!
//! Only `value -> array/object -> element -> value` recurses, and that path is
//! bounded by [`Limits::max_nesting_depth`]. Member lists, element lists and
//! digit runs are loops.

use super::chars::{
    hex_value, is_digit, is_high_surrogate, is_low_surrogate, is_onenine, is_raw_string_char,
    is_simple_escape, starts_number,
};
use super::cursor::Cursor;
use super::limits::Limits;
use crate::error::{ErrorKind, ValidationError};

type RuleResult = Result<(), ValidationError>;

/// Grammar state for one validation run.
pub struct Validator<'a> {
    cursor: Cursor<'a>,
    limits: Limits,
    depth: u64,
}

impl<'a> Validator<'a> {
    /// Create a validator over `input`.
    pub fn new(input: &'a str, limits: Limits) -> Self {
        Self {
            cursor: Cursor::new(input),
            limits,
            depth: 0,
        }
    }

    /// json = ws value ws, followed by end of input.
    pub fn validate_document(&mut self) -> RuleResult {
        let size = self.cursor.remaining().len() as u64;
        if size > self.limits.max_input_size {
            return Err(ValidationError::new(
                ErrorKind::InputTooLarge {
                    size,
                    max: self.limits.max_input_size,
                },
                0,
            ));
        }

        self.parse_element()?;

        if !self.cursor.at_end() {
            return Err(self.cursor.error(ErrorKind::TrailingContent));
        }
        Ok(())
    }

    /// element = ws value ws
    fn parse_element(&mut self) -> RuleResult {
        self.cursor.skip_whitespace();
        self.parse_value()?;
        self.cursor.skip_whitespace();
        Ok(())
    }

    /// value = object / array / string / number / true / false / null
    fn parse_value(&mut self) -> RuleResult {
        match self.cursor.peek() {
            Some('"') => self.parse_string(),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some(c) if starts_number(c) => self.parse_number(),
            Some(_) => {
                if self.cursor.eat("true") || self.cursor.eat("false") || self.cursor.eat("null") {
                    Ok(())
                } else {
                    Err(self.cursor.error(ErrorKind::InvalidToken))
                }
            }
            None => Err(self.cursor.error(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    /// Enter an array or object, enforcing the nesting bound.
    fn enter(&mut self) -> RuleResult {
        self.depth += 1;
        let max = self.limits.effective_nesting_depth();
        if self.depth > max {
            return Err(self.cursor.error(ErrorKind::NestingTooDeep {
                depth: self.depth,
                max,
            }));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// object = '{' ws '}' / '{' members '}'
    fn parse_object(&mut self) -> RuleResult {
        self.enter()?;
        self.cursor.consume("{")?;
        self.cursor.skip_whitespace();

        if self.cursor.eat("}") {
            self.leave();
            return Ok(());
        }

        loop {
            self.parse_member()?;

            match self.cursor.peek() {
                Some(',') => {
                    self.cursor.bump();
                }
                Some('}') => {
                    self.cursor.bump();
                    break;
                }
                Some(found) => {
                    return Err(self.cursor.error(ErrorKind::UnexpectedToken {
                        expected: "',' or '}'",
                        found,
                    }))
                }
                None => return Err(self.cursor.error(ErrorKind::UnexpectedEndOfInput)),
            }
        }

        self.leave();
        Ok(())
    }

    /// member = ws string ws ':' element
    fn parse_member(&mut self) -> RuleResult {
        self.cursor.skip_whitespace();
        self.parse_string()?;
        self.cursor.skip_whitespace();
        self.cursor.consume(":")?;
        self.parse_element()
    }

    /// array = '[' ws ']' / '[' elements ']'
    fn parse_array(&mut self) -> RuleResult {
        self.enter()?;
        self.cursor.consume("[")?;
        self.cursor.skip_whitespace();

        if self.cursor.eat("]") {
            self.leave();
            return Ok(());
        }

        loop {
            self.parse_element()?;

            match self.cursor.peek() {
                Some(',') => {
                    self.cursor.bump();
                }
                Some(']') => {
                    self.cursor.bump();
                    break;
                }
                Some(found) => {
                    return Err(self.cursor.error(ErrorKind::UnexpectedToken {
                        expected: "',' or ']'",
                        found,
                    }))
                }
                None => return Err(self.cursor.error(ErrorKind::UnexpectedEndOfInput)),
            }
        }

        self.leave();
        Ok(())
    }

    /// string = '"' characters '"'
    fn parse_string(&mut self) -> RuleResult {
        self.cursor.consume("\"")?;

        loop {
            match self.cursor.peek() {
                None => return Err(self.cursor.error(ErrorKind::UnexpectedEndOfInput)),
                Some('"') => {
                    self.cursor.bump();
                    return Ok(());
                }
                Some('\\') => self.parse_escape()?,
                Some(c) if is_raw_string_char(c) => {
                    self.cursor.bump();
                }
                Some(c) => {
                    return Err(self.cursor.error(ErrorKind::ControlCharacterInString {
                        codepoint: c as u32,
                    }))
                }
            }
        }
    }

    /// escape = '\' ( '"' / '\' / '/' / 'b' / 'f' / 'n' / 'r' / 't' / 'u' hex hex hex hex )
    fn parse_escape(&mut self) -> RuleResult {
        let start = self.cursor.position();
        self.cursor.consume("\\")?;

        match self.cursor.peek() {
            None => Err(self.cursor.error(ErrorKind::UnexpectedEndOfInput)),
            Some('u') => {
                self.cursor.bump();
                let unit = self.parse_hex4(start)?;
                if self.limits.reject_lone_surrogates {
                    self.check_surrogate(unit, start)?;
                }
                Ok(())
            }
            Some(c) if is_simple_escape(c) => {
                self.cursor.bump();
                Ok(())
            }
            Some(_) => Err(ValidationError::new(ErrorKind::InvalidEscapeSequence, start)),
        }
    }

    /// Four hex digits of a `\u` escape; `start` locates the backslash.
    fn parse_hex4(&mut self, start: usize) -> Result<u16, ValidationError> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let c = self
                .cursor
                .peek()
                .ok_or_else(|| self.cursor.error(ErrorKind::UnexpectedEndOfInput))?;
            let digit = hex_value(c)
                .ok_or_else(|| ValidationError::new(ErrorKind::InvalidEscapeSequence, start))?;
            self.cursor.bump();
            value = (value << 4) | digit;
        }
        Ok(value)
    }

    /// A high surrogate must be followed by a low one; a low one never
    /// stands alone.
    fn check_surrogate(&mut self, unit: u16, start: usize) -> RuleResult {
        if is_low_surrogate(unit) {
            return Err(ValidationError::new(
                ErrorKind::LoneSurrogate { codepoint: unit },
                start,
            ));
        }
        if !is_high_surrogate(unit) {
            return Ok(());
        }

        let low_start = self.cursor.position();
        if !self.cursor.eat("\\u") {
            return Err(ValidationError::new(
                ErrorKind::LoneSurrogate { codepoint: unit },
                start,
            ));
        }
        let low = self.parse_hex4(low_start)?;
        if !is_low_surrogate(low) {
            return Err(ValidationError::new(
                ErrorKind::LoneSurrogate { codepoint: unit },
                start,
            ));
        }
        Ok(())
    }

    /// number = [ '-' ] int [ frac ] [ exp ]
    fn parse_number(&mut self) -> RuleResult {
        self.cursor.eat("-");
        self.parse_integer()?;
        self.parse_fraction()?;
        self.parse_exponent()
    }

    /// int = '0' / onenine *digit
    fn parse_integer(&mut self) -> RuleResult {
        match self.cursor.peek() {
            Some('0') => {
                self.cursor.bump();
                // A leading zero stands alone
                if self.cursor.peek().is_some_and(is_digit) {
                    return Err(self.cursor.error(ErrorKind::InvalidNumberFormat));
                }
                Ok(())
            }
            Some(c) if is_onenine(c) => {
                self.cursor.bump();
                self.skip_digits();
                Ok(())
            }
            _ => Err(self.cursor.error(ErrorKind::InvalidNumberFormat)),
        }
    }

    /// frac = [ '.' 1*digit ]
    fn parse_fraction(&mut self) -> RuleResult {
        if self.cursor.eat(".") {
            self.parse_digits()?;
        }
        Ok(())
    }

    /// exp = [ ( 'e' / 'E' ) [ '+' / '-' ] 1*digit ]
    fn parse_exponent(&mut self) -> RuleResult {
        if self.cursor.eat("e") || self.cursor.eat("E") {
            if !self.cursor.eat("+") {
                self.cursor.eat("-");
            }
            self.parse_digits()?;
        }
        Ok(())
    }

    /// 1*digit
    fn parse_digits(&mut self) -> RuleResult {
        if self.skip_digits() == 0 {
            return Err(self.cursor.error(ErrorKind::InvalidNumberFormat));
        }
        Ok(())
    }

    /// *digit, returning how many were consumed.
    fn skip_digits(&mut self) -> usize {
        let rest = self.cursor.remaining();
        let count = rest.bytes().take_while(u8::is_ascii_digit).count();
        for _ in 0..count {
            self.cursor.bump();
        }
        count
    }
}
