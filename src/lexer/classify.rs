//! Maps a completed lexeme to its token kind.

use tracing::trace;

use crate::errors::errors::ErrorImpl;

use super::{
    chars::{is_identifier_continue, is_identifier_start},
    literals::scan_number,
    tokens::{TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP},
};

/// Classifies a delimiter-bounded lexeme.
///
/// Order: reserved words, operators and punctuation, numbers, identifiers.
/// Anything left over is an `InvalidLexeme`. A `NumericOutOfRange` error is
/// returned as-is; the caller decides it is only a warning.
pub fn classify(lexeme: &str) -> Result<TokenKind, ErrorImpl> {
    if let Some(kind) = RESERVED_LOOKUP.get(lexeme) {
        return Ok(*kind);
    }

    if let Some((_, kind)) = OPERATOR_LOOKUP.iter().find(|(op, _)| *op == lexeme) {
        return Ok(*kind);
    }

    if let Some(number) = scan_number(lexeme) {
        return number;
    }

    if is_identifier(lexeme) {
        return Ok(TokenKind::Identifier);
    }

    trace!(lexeme, "lexeme matches no token class");
    Err(ErrorImpl::InvalidLexeme {
        lexeme: lexeme.to_string(),
    })
}

pub fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();

    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_continue),
        _ => false,
    }
}
