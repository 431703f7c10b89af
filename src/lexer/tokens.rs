use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("elif", TokenKind::Elif);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("print", TokenKind::Print);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("bool", TokenKind::Bool);
        map.insert("string", TokenKind::StringType);
        map.insert("true", TokenKind::ConstBool);
        map.insert("false", TokenKind::ConstBool);
        map
    };

    /// Operators and punctuation, longest lexeme first so the first prefix
    /// hit is the maximal munch.
    pub static ref OPERATOR_LOOKUP: Vec<(&'static str, TokenKind)> = {
        let mut table = vec![
            ("=", TokenKind::Assignment),
            ("==", TokenKind::Equals),
            ("!=", TokenKind::NotEquals),
            ("<", TokenKind::Less),
            (">", TokenKind::Greater),
            ("<=", TokenKind::LessEquals),
            (">=", TokenKind::GreaterEquals),
            ("&&", TokenKind::And),
            ("||", TokenKind::Or),
            ("&", TokenKind::BitAnd),
            ("|", TokenKind::BitOr),
            ("+", TokenKind::Plus),
            ("-", TokenKind::Dash),
            ("*", TokenKind::Star),
            ("/", TokenKind::Slash),
            ("!", TokenKind::Not),
            ("<<", TokenKind::ShiftLeft),
            (">>", TokenKind::ShiftRight),
            ("++", TokenKind::PlusPlus),
            ("--", TokenKind::MinusMinus),
            ("(", TokenKind::OpenParen),
            (")", TokenKind::CloseParen),
            ("[", TokenKind::OpenBracket),
            ("]", TokenKind::CloseBracket),
            ("{", TokenKind::OpenCurly),
            ("}", TokenKind::CloseCurly),
            (";", TokenKind::Semicolon),
            (",", TokenKind::Comma),
            (".", TokenKind::Dot),
        ];
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        table
    };
}

/// Returns the longest operator or punctuation lexeme that prefixes `input`.
pub fn longest_operator(input: &str) -> Option<(&'static str, TokenKind)> {
    OPERATOR_LOOKUP
        .iter()
        .find(|(lexeme, _)| input.starts_with(lexeme))
        .copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    StringLit,
    ConstInt,
    ConstFloat,
    ConstBool,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,

    Or,
    And,
    BitOr,
    BitAnd,

    Dot,
    Semicolon,
    Comma,

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Fn,
    If,
    Else,
    Elif,
    While,
    For,
    Return,
    Print,
    Int,
    Float,
    Bool,
    StringType,
}

impl TokenKind {
    /// Display name used when rendering token sequences.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "T_IDENTIFIER",
            TokenKind::StringLit => "T_STRINGLIT",
            TokenKind::ConstInt => "T_CONST_INT",
            TokenKind::ConstFloat => "T_CONST_FLOAT",
            TokenKind::ConstBool => "T_CONST_BOOL",

            TokenKind::OpenBracket => "T_SQUARE_BRACKET_OPEN",
            TokenKind::CloseBracket => "T_SQUARE_BRACKET_CLOSE",
            TokenKind::OpenCurly => "T_CURLY_BRACKET_OPEN",
            TokenKind::CloseCurly => "T_CURLY_BRACKET_CLOSE",
            TokenKind::OpenParen => "T_ROUND_BRACKET_OPEN",
            TokenKind::CloseParen => "T_ROUND_BRACKET_CLOSE",

            TokenKind::Assignment => "T_ASSIGNMENT_OPR",
            TokenKind::Equals => "T_EQUALS_OPR",
            TokenKind::Not => "T_NOT",
            TokenKind::NotEquals => "T_NOT_EQUALS_OPR",

            TokenKind::Less => "T_LESS_THAN_OPR",
            TokenKind::LessEquals => "T_LESS_THAN_EQUAL_TO_OPR",
            TokenKind::Greater => "T_GREATER_THAN_OPR",
            TokenKind::GreaterEquals => "T_GREATER_THAN_EQUAL_TO_OPR",
            TokenKind::ShiftLeft => "T_LEFT_SHIFT_OPR",
            TokenKind::ShiftRight => "T_RIGHT_SHIFT_OPR",

            TokenKind::Or => "T_OR_OPR",
            TokenKind::And => "T_AND_OPR",
            TokenKind::BitOr => "T_BIT_OR_OPR",
            TokenKind::BitAnd => "T_BIT_AND_OPR",

            TokenKind::Dot => "T_DOT",
            TokenKind::Semicolon => "T_SEMICOLON",
            TokenKind::Comma => "T_COMMA",

            TokenKind::PlusPlus => "T_INCREMENT",
            TokenKind::MinusMinus => "T_DECREMENT",

            TokenKind::Plus => "T_PLUS_OPR",
            TokenKind::Dash => "T_MINUS_OPR",
            TokenKind::Slash => "T_DIVIDE_OPR",
            TokenKind::Star => "T_MULTIPLY_OPR",

            TokenKind::Fn => "T_FUNCTION",
            TokenKind::If => "T_IF",
            TokenKind::Else => "T_ELSE",
            TokenKind::Elif => "T_ELSE_IF",
            TokenKind::While => "T_WHILE",
            TokenKind::For => "T_FOR",
            TokenKind::Return => "T_RETURN",
            TokenKind::Print => "T_PRINT",
            TokenKind::Int => "T_INT",
            TokenKind::Float => "T_FLOAT",
            TokenKind::Bool => "T_BOOL",
            TokenKind::StringType => "T_STRING",
        }
    }

    /// Kinds whose text is not fixed by the kind itself.
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::StringLit
                | TokenKind::ConstInt
                | TokenKind::ConstFloat
                | TokenKind::ConstBool
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::StringLit => {
                write!(f, "{}(\"{}\")", self.kind, self.value)
            }
            TokenKind::ConstInt | TokenKind::ConstFloat | TokenKind::ConstBool => {
                write!(f, "{}({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    /// One-line `KIND (value)` description, value left empty for fixed kinds.
    pub fn describe(&self) -> String {
        if self.kind.has_payload() {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
