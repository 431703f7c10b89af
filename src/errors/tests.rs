//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidLexeme {
            lexeme: "9x".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "InvalidLexeme");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnterminatedString {
            literal: "\"abc".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_text() {
    let error = Error::new(
        ErrorImpl::NumericOutOfRange {
            literal: "99999999999999999999".to_string(),
        },
        Position(0),
    );
    assert_eq!(error.get_text(), "99999999999999999999");

    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, Position(3));
    assert_eq!(error.get_text(), "@");
}

#[test]
fn test_numeric_out_of_range_is_not_fatal() {
    let error = Error::new(
        ErrorImpl::NumericOutOfRange {
            literal: "99999999999999999999".to_string(),
        },
        Position(0),
    );

    assert!(!error.is_fatal());
    assert_eq!(error.get_error_name(), "NumericOutOfRange");
}

#[test]
fn test_fatal_errors() {
    let errors = [
        ErrorImpl::InvalidLexeme {
            lexeme: "3.1.4".to_string(),
        },
        ErrorImpl::UnterminatedString {
            literal: "\"oops".to_string(),
        },
        ErrorImpl::UnexpectedCharacter { character: '$' },
    ];

    for kind in errors {
        assert!(Error::new(kind, Position(0)).is_fatal());
    }
}

#[test]
fn test_unexpected_character_error() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '$' }, Position(7));

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_digit_led_lexeme() {
    let error = Error::new(
        ErrorImpl::InvalidLexeme {
            lexeme: "9x".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("cannot start with a digit")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidLexeme {
            lexeme: "9x".to_string(),
        },
        Position(5),
    );

    assert_eq!(error.to_string(), "invalid lexeme: \"9x\" at offset 5");
}
