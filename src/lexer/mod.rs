//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source text into a flat
//! sequence of tokens. It handles:
//!
//! - Character classes that decide where a lexeme ends
//! - Numeric and string literal scanning
//! - Classification of keywords, operators, punctuation and identifiers,
//!   with maximal munch for multi-character operators
//! - Comments and whitespace handling

pub mod chars;
pub mod classify;
pub mod lexer;
pub mod literals;
pub mod tokens;
