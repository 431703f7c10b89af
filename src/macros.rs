//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// The value may be anything `String::from` accepts.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::ConstInt, "42");
/// let semi = MK_TOKEN!(TokenKind::Semicolon, ";");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: String::from($value),
        }
    };
}
