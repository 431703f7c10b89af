use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    chars::{is_delimiter, is_digit, is_whitespace, COMMENT_MARKER, DECIMAL_POINT, QUOTE},
    classify::classify,
    literals::scan_string,
    tokens::{longest_operator, Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    InString,
}

/// The outcome of a successful run: the tokens in source order plus any
/// recoverable errors met along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub warnings: Vec<Error>,
}

impl TokenStream {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    state: ScanState,
    string_start: usize,
    tokens: Vec<Token>,
    warnings: Vec<Error>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            state: ScanState::Normal,
            string_start: 0,
            tokens: vec![],
            warnings: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, "token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn is_done(&self) -> bool {
        self.at_eof() && self.state == ScanState::Normal
    }

    fn step(&mut self) -> Result<(), Error> {
        match self.state {
            ScanState::Normal => self.step_normal(),
            ScanState::InString => self.step_string(),
        }
    }

    fn step_normal(&mut self) -> Result<(), Error> {
        let Some(c) = self.at() else {
            return Ok(());
        };

        if is_whitespace(c) {
            self.skip_whitespace();
            return Ok(());
        }

        if c == COMMENT_MARKER {
            self.skip_comment();
            return Ok(());
        }

        if c == QUOTE {
            self.string_start = self.pos;
            self.state = ScanState::InString;
            self.advance_n(c.len_utf8());
            return Ok(());
        }

        match self.lexeme_len() {
            0 => self.lex_operator(c),
            len => {
                let lexeme = &self.remainder()[..len];
                self.lex_word(lexeme)
            }
        }
    }

    fn step_string(&mut self) -> Result<(), Error> {
        match scan_string(self.remainder()) {
            Some(len) => {
                let contents = &self.remainder()[..len];
                self.push(MK_TOKEN!(TokenKind::StringLit, contents));
                self.advance_n(len + QUOTE.len_utf8());
                self.state = ScanState::Normal;
                Ok(())
            }
            None => Err(Error::new(
                ErrorImpl::UnterminatedString {
                    literal: self.source[self.string_start..].to_string(),
                },
                Position(self.string_start),
            )),
        }
    }

    fn skip_whitespace(&mut self) {
        let len = self
            .remainder()
            .find(|c: char| !is_whitespace(c))
            .unwrap_or(self.remainder().len());
        self.advance_n(len);
    }

    fn skip_comment(&mut self) {
        let len = match self.remainder().find('\n') {
            Some(newline) => newline + 1,
            None => self.remainder().len(),
        };
        self.advance_n(len);
    }

    /// Byte length of the lexeme at the cursor, up to the next delimiter.
    /// A lexeme led by a digit keeps its `.` so floats stay whole.
    fn lexeme_len(&self) -> usize {
        let rest = self.remainder();
        let numeric = rest.starts_with(is_digit);

        rest.char_indices()
            .find(|&(_, c)| is_delimiter(c) || (c == DECIMAL_POINT && !numeric))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len())
    }

    fn lex_operator(&mut self, c: char) -> Result<(), Error> {
        match longest_operator(self.remainder()) {
            Some((lexeme, kind)) => {
                self.push(MK_TOKEN!(kind, lexeme));
                self.advance_n(lexeme.len());
                Ok(())
            }
            None => Err(Error::new(
                ErrorImpl::UnexpectedCharacter { character: c },
                Position(self.pos),
            )),
        }
    }

    fn lex_word(&mut self, lexeme: &'a str) -> Result<(), Error> {
        let start = self.pos;
        self.advance_n(lexeme.len());

        match classify(lexeme) {
            Ok(kind) => {
                self.push(MK_TOKEN!(kind, lexeme));
                Ok(())
            }
            Err(error_impl) => {
                let error = Error::new(error_impl, Position(start));
                if error.is_fatal() {
                    return Err(error);
                }

                debug!(lexeme, offset = start, "skipping out of range literal");
                self.warnings.push(error);
                Ok(())
            }
        }
    }
}

/// Splits `source` into tokens.
///
/// Fatal errors abort the run and no tokens are returned with them.
/// Out of range numeric literals are dropped and reported in
/// [`TokenStream::warnings`] instead.
pub fn tokenize(source: &str) -> Result<TokenStream, Error> {
    let mut lex = Lexer::new(source);

    while !lex.is_done() {
        lex.step()?;
    }

    debug!(
        tokens = lex.tokens.len(),
        warnings = lex.warnings.len(),
        "tokenized source"
    );

    Ok(TokenStream {
        tokens: lex.tokens,
        warnings: lex.warnings,
    })
}
