#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::Token,
};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{tokenize, TokenStream};

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub usize);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line itself (with its newline) and
/// the byte column of `position` within it. An offset equal to the source
/// length points at the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if position < end || end == source.len() {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    Some((1, String::new(), 0))
}

/// Renders tokens as `[T_FUNCTION, T_IDENTIFIER("main"), ...]`.
pub fn render_tokens(tokens: &[Token]) -> String {
    let rendered = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{}]", rendered)
}

/// Renders one `KIND (value)` line per token.
pub fn render_token_lines(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        let _ = writeln!(result, "{}", token.describe());
    }
    result
}

pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> code.txt
           |
        20 | int a = 9x;
           | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_text[removed_whitespace..line_pos.max(removed_whitespace)]
        .chars()
        .count()
        + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
