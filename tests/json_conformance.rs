//! Grammar conformance tests.
//!
//! These tests exercise the public `validate` entry point against the
//! RFC 8259 grammar: accepted documents, rejected documents and the error
//! kind reported for each class of violation.

use jsonvet::json::limits::{DEFAULT_MAX_NESTING_DEPTH, MAX_NESTING_DEPTH_CEILING};
use jsonvet::{is_valid, validate, validate_with_limits, ErrorKind, Limits};

fn rejected_with(input: &str) -> ErrorKind {
    match validate(input) {
        Ok(()) => panic!("{:?} should be rejected", input),
        Err(e) => e.kind().clone(),
    }
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn literals_accepted() {
    for input in ["true", "false", "null"] {
        assert!(validate(input).is_ok(), "{} should be accepted", input);
    }
}

#[test]
fn literals_are_case_sensitive() {
    for input in ["True", "FALSE", "Null", "nULL"] {
        assert_eq!(rejected_with(input), ErrorKind::InvalidToken, "{}", input);
    }
}

#[test]
fn truncated_literals_rejected() {
    assert_eq!(rejected_with("tru"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("fals"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("n"), ErrorKind::InvalidToken);
}

#[test]
fn extended_literals_rejected() {
    assert_eq!(rejected_with("falsee"), ErrorKind::TrailingContent);
    assert_eq!(rejected_with("nullish"), ErrorKind::TrailingContent);
    assert_eq!(rejected_with("true1"), ErrorKind::TrailingContent);
}

#[test]
fn non_json_literals_rejected() {
    for input in ["invalid", "undefined", "NaN", "Infinity", "None", "'a'"] {
        assert_eq!(rejected_with(input), ErrorKind::InvalidToken, "{}", input);
    }
    assert_eq!(rejected_with("-Infinity"), ErrorKind::InvalidNumberFormat);
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn scenario_true() {
    assert!(validate("true").is_ok());
}

#[test]
fn scenario_padded_false() {
    assert!(validate(" false ").is_ok());
}

#[test]
fn scenario_null() {
    assert!(validate("null").is_ok());
}

#[test]
fn scenario_invalid() {
    assert!(validate("invalid").is_err());
}

#[test]
fn scenario_nested_object() {
    assert!(validate(r#"{"a":1,"b":[1,2,3]}"#).is_ok());
}

#[test]
fn scenario_leading_zero_member() {
    let err = validate(r#"{"a":01}"#).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidNumberFormat);
    assert_eq!(err.position(), 6);
}

// ============================================================================
// Boundary cases
// ============================================================================

#[test]
fn empty_input_rejected() {
    let err = validate("").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.position(), 0);
}

#[test]
fn whitespace_only_rejected() {
    assert_eq!(rejected_with(" \t\r\n"), ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn empty_containers_accepted() {
    assert!(validate("{}").is_ok());
    assert!(validate("[]").is_ok());
}

#[test]
fn lone_comma_object_rejected() {
    assert!(matches!(
        rejected_with("{,}"),
        ErrorKind::UnexpectedToken { found: ',', .. }
    ));
}

#[test]
fn leading_zero_rejected() {
    assert_eq!(rejected_with("01"), ErrorKind::InvalidNumberFormat);
}

#[test]
fn short_unicode_escape_rejected() {
    assert_eq!(rejected_with(r#""\u12""#), ErrorKind::InvalidEscapeSequence);
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn all_four_whitespace_characters_accepted() {
    assert!(validate("\n\ttrue\r").is_ok());
    assert!(validate(" \t\r\n[ \t\r\n1 \t\r\n, \t\r\n2 \t\r\n] \t\r\n").is_ok());
    assert!(validate("{ \"a\" \n:\r\n 1 }").is_ok());
}

#[test]
fn other_whitespace_rejected() {
    // Form feed, vertical tab, NBSP and BOM are not JSON whitespace
    assert_eq!(rejected_with("\x0C1"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("\x0B1"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("\u{A0}1"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("\u{FEFF}1"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("[1,\u{A0}2]"), ErrorKind::InvalidToken);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn valid_numbers_accepted() {
    let inputs = [
        "0",
        "-0",
        "1",
        "-1",
        "1234567890",
        "0.0",
        "3.14159",
        "-0.5",
        "1e10",
        "1E10",
        "1e+10",
        "1e-10",
        "2.5E-3",
        "0e0",
        "123456789012345678901234567890",
        "1e999999",
    ];
    for input in inputs {
        assert!(validate(input).is_ok(), "{} should be accepted", input);
    }
}

#[test]
fn malformed_numbers_rejected() {
    let inputs = ["-", "--1", "-a", "00", "012", "-012", "1.", "1.e1", "1e", "1e+", "1e-", "1E+a"];
    for input in inputs {
        assert_eq!(
            rejected_with(input),
            ErrorKind::InvalidNumberFormat,
            "{} should be an invalid number",
            input
        );
    }
}

#[test]
fn number_forms_outside_grammar_rejected() {
    assert_eq!(rejected_with("+1"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with(".1"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("1.2.3"), ErrorKind::TrailingContent);
    assert_eq!(rejected_with("1e5e5"), ErrorKind::TrailingContent);
    assert_eq!(rejected_with("0x1F"), ErrorKind::TrailingContent);
    assert_eq!(rejected_with("1 2"), ErrorKind::TrailingContent);
}

#[test]
fn leading_zero_inside_containers_rejected() {
    assert_eq!(rejected_with("[00]"), ErrorKind::InvalidNumberFormat);
    assert_eq!(rejected_with(r#"{"n":-01}"#), ErrorKind::InvalidNumberFormat);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn valid_strings_accepted() {
    let inputs = [
        r#""""#,
        r#""abc""#,
        r#"" ""#,
        r#""\"""#,
        r#""\\""#,
        r#""\/""#,
        r#""\b\f\n\r\t""#,
        r#""\u0000""#,
        r#""\u00e9\u00C9""#,
        r#""\uD83D\uDE00""#,
        "\"caf\u{e9}\"",
        "\"\u{1F600}\"",
        "\"\u{10FFFF}\"",
        "\"\u{7F}\"",
    ];
    for input in inputs {
        assert!(validate(input).is_ok(), "{} should be accepted", input);
    }
}

#[test]
fn unterminated_string_rejected() {
    assert_eq!(rejected_with(r#"""#), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(rejected_with(r#""abc"#), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(rejected_with(r#"["abc]"#), ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn unescaped_control_characters_rejected() {
    for code in 0u32..0x20 {
        let c = char::from_u32(code).unwrap();
        let input = format!("\"a{}b\"", c);
        let err = validate(&input).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::ControlCharacterInString { codepoint: code },
            "U+{:04X}",
            code
        );
        assert_eq!(err.position(), 2);
    }
}

#[test]
fn single_quoted_strings_rejected() {
    assert_eq!(rejected_with("'abc'"), ErrorKind::InvalidToken);
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn unknown_escapes_rejected() {
    for esc in ["\\a", "\\x41", "\\U0041", "\\'", "\\0", "\\e", "\\ "] {
        let input = format!("\"{}\"", esc);
        let err = validate(&input).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidEscapeSequence, "{}", input);
        assert_eq!(err.position(), 1, "{}", input);
    }
}

#[test]
fn malformed_unicode_escapes_rejected() {
    for esc in ["\\u", "\\u1", "\\u12", "\\u123", "\\u12G4", "\\uXYZW", "\\u-123"] {
        let input = format!("\"{}\"", esc);
        assert_eq!(
            rejected_with(&input),
            ErrorKind::InvalidEscapeSequence,
            "{}",
            input
        );
    }
}

#[test]
fn truncated_escapes_rejected() {
    assert_eq!(rejected_with("\"\\"), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(rejected_with("\"\\u00"), ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn lone_surrogates_follow_limits() {
    let lone = [r#""\uD800""#, r#""\uDBFF""#, r#""\uDC00""#, r#""\uDFFF\uD800""#];
    for input in lone {
        assert!(validate(input).is_ok(), "{} is grammatical", input);

        let err = validate_with_limits(input, Limits::strict()).unwrap_err();
        assert_eq!(err.name(), "LoneSurrogate", "{}", input);
    }
    assert!(validate_with_limits(r#""\uD800\uDC00""#, Limits::strict()).is_ok());
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn valid_arrays_accepted() {
    let inputs = [
        "[]",
        "[ ]",
        "[1]",
        "[1,2,3]",
        "[[], [[]], {}]",
        r#"["a", 1, true, false, null, {"k": [0.5]}]"#,
    ];
    for input in inputs {
        assert!(validate(input).is_ok(), "{} should be accepted", input);
    }
}

#[test]
fn trailing_comma_in_array_rejected() {
    assert_eq!(rejected_with("[1,]"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("[1,,2]"), ErrorKind::InvalidToken);
    assert_eq!(rejected_with("[,]"), ErrorKind::InvalidToken);
}

#[test]
fn missing_array_delimiters_rejected() {
    assert!(matches!(
        rejected_with("[1 2]"),
        ErrorKind::UnexpectedToken { found: '2', .. }
    ));
    assert!(matches!(
        rejected_with("[1}"),
        ErrorKind::UnexpectedToken { found: '}', .. }
    ));
    assert_eq!(rejected_with("[1"), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(rejected_with("[1,"), ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn long_array_accepted() {
    let input = format!("[{}0]", "0,".repeat(100_000));
    assert!(validate(&input).is_ok());
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn valid_objects_accepted() {
    let inputs = [
        "{}",
        r#"{"":0}"#,
        r#"{"a":1}"#,
        r#"{"a":1,"b":2}"#,
        r#"{"a":{"b":{"c":[{"d":null}]}}}"#,
        r#"{"\u0041\n":"v"}"#,
        r#"{"dup":1,"dup":2}"#,
    ];
    for input in inputs {
        assert!(validate(input).is_ok(), "{} should be accepted", input);
    }
}

#[test]
fn trailing_comma_in_object_rejected() {
    assert!(matches!(
        rejected_with(r#"{"a":1,}"#),
        ErrorKind::UnexpectedToken { found: '}', .. }
    ));
}

#[test]
fn non_string_keys_rejected() {
    for input in ["{a:1}", "{1:1}", "{null:1}", "{'a':1}", "{[]:1}"] {
        assert!(
            matches!(rejected_with(input), ErrorKind::UnexpectedToken { .. }),
            "{}",
            input
        );
    }
}

#[test]
fn malformed_keys_rejected() {
    assert_eq!(rejected_with(r#"{"a\x":1}"#), ErrorKind::InvalidEscapeSequence);
    assert_eq!(
        rejected_with("{\"a\tb\":1}"),
        ErrorKind::ControlCharacterInString { codepoint: 9 }
    );
}

#[test]
fn missing_colon_or_value_rejected() {
    assert!(matches!(
        rejected_with(r#"{"a" 1}"#),
        ErrorKind::UnexpectedToken { found: '1', .. }
    ));
    assert!(matches!(
        rejected_with(r#"{"a"=1}"#),
        ErrorKind::UnexpectedToken { found: '=', .. }
    ));
    assert_eq!(rejected_with(r#"{"a":}"#), ErrorKind::InvalidToken);
    assert_eq!(rejected_with(r#"{"a"}"#).name(), "UnexpectedToken");
}

#[test]
fn missing_object_delimiters_rejected() {
    assert!(matches!(
        rejected_with(r#"{"a":1 "b":2}"#),
        ErrorKind::UnexpectedToken { found: '"', .. }
    ));
    assert!(matches!(
        rejected_with(r#"{"a":1]"#),
        ErrorKind::UnexpectedToken { found: ']', .. }
    ));
    assert_eq!(rejected_with(r#"{"a":1"#), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(rejected_with("{"), ErrorKind::UnexpectedEndOfInput);
}

// ============================================================================
// Trailing content
// ============================================================================

#[test]
fn trailing_content_rejected() {
    let inputs = ["[] []", "{}x", "1,", "\"a\"\"b\"", "null null", "[1]]"];
    for input in inputs {
        assert_eq!(
            rejected_with(input),
            ErrorKind::TrailingContent,
            "{} has trailing content",
            input
        );
    }
}

#[test]
fn trailing_content_position_skips_whitespace() {
    let err = validate("[1]  \n x").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TrailingContent);
    assert_eq!(err.position(), 7);
    assert_eq!(err.line_col("[1]  \n x"), (2, 2));
}

// ============================================================================
// Limits
// ============================================================================

#[test]
fn default_depth_accepted() {
    let depth = DEFAULT_MAX_NESTING_DEPTH as usize;
    let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(validate(&input).is_ok());
}

#[test]
fn adversarial_nesting_rejected_without_overflow() {
    let input = "[".repeat(1_000_000);
    let err = validate(&input).unwrap_err();
    assert_eq!(err.name(), "NestingTooDeep");
    assert_eq!(err.position(), DEFAULT_MAX_NESTING_DEPTH as usize);

    let input = r#"{"a":"#.repeat(1_000_000);
    assert_eq!(validate(&input).unwrap_err().name(), "NestingTooDeep");
}

#[test]
fn unbounded_depth_request_is_capped() {
    let input = "[".repeat(1_000_000);
    let expected = ErrorKind::NestingTooDeep {
        depth: MAX_NESTING_DEPTH_CEILING + 1,
        max: MAX_NESTING_DEPTH_CEILING,
    };

    let limits = Limits::standard().with_max_nesting_depth(u64::MAX);
    let err = validate_with_limits(&input, limits).unwrap_err();
    assert_eq!(err.kind(), &expected);

    let limits = Limits {
        max_nesting_depth: u64::MAX,
        ..Limits::standard()
    };
    let err = validate_with_limits(&input, limits).unwrap_err();
    assert_eq!(err.kind(), &expected);
    assert_eq!(err.position(), MAX_NESTING_DEPTH_CEILING as usize);
}

#[test]
fn nesting_at_ceiling_accepted() {
    let depth = MAX_NESTING_DEPTH_CEILING as usize;
    let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let limits = Limits::standard().with_max_nesting_depth(u64::MAX);
    assert!(validate_with_limits(&input, limits).is_ok());
}

#[test]
fn custom_depth_limit() {
    let limits = Limits::standard().with_max_nesting_depth(1);
    assert!(validate_with_limits("[1,2]", limits).is_ok());
    assert!(validate_with_limits("1", Limits::standard().with_max_nesting_depth(0)).is_ok());

    let err = validate_with_limits("[[]]", limits).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NestingTooDeep { depth: 2, max: 1 });
}

#[test]
fn input_size_limit() {
    let limits = Limits::standard().with_max_input_size(8);
    assert!(validate_with_limits("[1,2,3]", limits).is_ok());
    let err = validate_with_limits("[1,2,3,4]", limits).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InputTooLarge { size: 9, max: 8 });
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn repeated_calls_agree() {
    for input in ["[1,2]", "[1,", "{\"a\":01}", "  null  "] {
        assert_eq!(validate(input), validate(input), "{}", input);
        assert_eq!(is_valid(input), validate(input).is_ok());
    }
}
