use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at offset {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The source text the error is about.
    pub fn get_text(&self) -> String {
        match &self.internal_error {
            ErrorImpl::InvalidLexeme { lexeme } => lexeme.clone(),
            ErrorImpl::NumericOutOfRange { literal } => literal.clone(),
            ErrorImpl::UnterminatedString { literal } => literal.clone(),
            ErrorImpl::UnexpectedCharacter { character } => character.to_string(),
        }
    }

    /// Fatal errors abort a tokenizer run; the rest are collected as warnings.
    pub fn is_fatal(&self) -> bool {
        !matches!(self.internal_error, ErrorImpl::NumericOutOfRange { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidLexeme { .. } => "InvalidLexeme",
            ErrorImpl::NumericOutOfRange { .. } => "NumericOutOfRange",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidLexeme { lexeme } => {
                if lexeme.starts_with(|c: char| c.is_ascii_digit()) {
                    ErrorTip::Suggestion(format!(
                        "Invalid lexeme: `{}`, identifiers cannot start with a digit",
                        lexeme
                    ))
                } else {
                    ErrorTip::Suggestion(format!("Invalid lexeme: `{}`", lexeme))
                }
            }
            ErrorImpl::NumericOutOfRange { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid lexeme: {lexeme:?}")]
    InvalidLexeme { lexeme: String },
    #[error("numeric literal out of range: {literal:?}")]
    NumericOutOfRange { literal: String },
    #[error("unterminated string literal: {literal:?}")]
    UnterminatedString { literal: String },
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
}
