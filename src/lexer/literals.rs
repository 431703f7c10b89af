//! Numeric and string literal scanners.
//!
//! Both scanners only measure and classify; the lexer owns the cursor and
//! builds the tokens.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

use super::{
    chars::{DECIMAL_POINT, ESCAPE, QUOTE},
    tokens::TokenKind,
};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
}

/// Classifies a delimiter-bounded lexeme as a numeric literal.
///
/// Returns `None` when the text is not a number at all, so the caller can try
/// the next classifier. A well-formed literal whose magnitude does not fit
/// yields `NumericOutOfRange`.
pub fn scan_number(candidate: &str) -> Option<Result<TokenKind, ErrorImpl>> {
    if !NUMBER_PATTERN.is_match(candidate) {
        return None;
    }

    let out_of_range = || ErrorImpl::NumericOutOfRange {
        literal: candidate.to_string(),
    };

    if candidate.contains(DECIMAL_POINT) {
        match candidate.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Ok(TokenKind::ConstFloat)),
            _ => Some(Err(out_of_range())),
        }
    } else {
        match candidate.parse::<i64>() {
            Ok(_) => Some(Ok(TokenKind::ConstInt)),
            Err(_) => Some(Err(out_of_range())),
        }
    }
}

/// Finds the closing quote of a string literal.
///
/// `input` starts just after the opening quote. Returns the byte length of
/// the literal's contents, or `None` if the source ends first. A backslash
/// escapes exactly one following character, so `\\"` still closes.
pub fn scan_string(input: &str) -> Option<usize> {
    let mut escaped = false;

    for (idx, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            ESCAPE => escaped = true,
            QUOTE => return Some(idx),
            _ => {}
        }
    }

    None
}
