//! Character classes used by the grammar rules.

/// JSON insignificant whitespace: space, tab, line feed, carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// `0` through `9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `1` through `9`, the digits allowed to lead a multi-digit integer.
pub fn is_onenine(c: char) -> bool {
    matches!(c, '1'..='9')
}

/// Characters that may start a number.
pub fn starts_number(c: char) -> bool {
    c == '-' || is_digit(c)
}

/// Value of a hexadecimal digit, either case.
pub fn hex_value(c: char) -> Option<u16> {
    c.to_digit(16).map(|d| d as u16)
}

/// A character allowed unescaped inside a string.
///
/// Any codepoint from U+0020 up, except the quote and the backslash. `char`
/// can never hold a surrogate or exceed U+10FFFF, so the upper half of the
/// range needs no check.
pub fn is_raw_string_char(c: char) -> bool {
    c >= '\u{20}' && c != '"' && c != '\\'
}

/// Characters that may follow a backslash, other than `u`.
pub fn is_simple_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}

/// UTF-16 high (leading) surrogate.
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// UTF-16 low (trailing) surrogate.
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}
