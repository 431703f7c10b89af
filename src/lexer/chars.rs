//! Character classes used to find lexeme boundaries.

pub const COMMENT_MARKER: char = '#';
pub const QUOTE: char = '"';
pub const ESCAPE: char = '\\';
pub const DECIMAL_POINT: char = '.';

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>' | '&' | '|' | '+' | '-' | '*' | '/')
}

pub fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ',' | ';')
}

/// A delimiter always ends the current lexeme. `.` is deliberately absent,
/// since a float literal contains one.
pub fn is_delimiter(c: char) -> bool {
    is_whitespace(c)
        || is_operator_char(c)
        || is_punctuation(c)
        || c == QUOTE
        || c == COMMENT_MARKER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_classes() {
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('Z'));
        assert!(!is_identifier_start('9'));
        assert!(is_identifier_continue('9'));
        assert!(!is_identifier_continue('-'));
        assert!(!is_identifier_start('é'));
    }

    #[test]
    fn test_delimiters() {
        for c in " \t\n\r()[]{},;\"#=!<>&|+-*/".chars() {
            assert!(is_delimiter(c), "{:?} should be a delimiter", c);
        }
        for c in "a_9.@$".chars() {
            assert!(!is_delimiter(c), "{:?} should not be a delimiter", c);
        }
    }

    #[test]
    fn test_operator_chars() {
        assert!(is_operator_char('&'));
        assert!(is_operator_char('|'));
        assert!(!is_operator_char('('));
        assert!(!is_operator_char('.'));
    }
}
