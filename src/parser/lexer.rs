//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Lexing is all-or-nothing: the first character outside the language's
//! alphabet aborts the pass and no tokens are returned.

use super::position::{Position, Source};
use crate::diagnostics::Error;
use std::fmt;
use tracing::{debug, trace};

/// Token classes produced by the lexer.
///
/// Literal variants carry their parsed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),

    // Operators
    Plus,  // +
    Minus, // -
    Mul,   // *
    Div,   // /

    // Punctuation
    LParen, // (
    RParen, // )

    // End of input
    Eof,
}

impl TokenKind {
    /// Upper-case tag naming the class, without any literal value.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "INT",
            TokenKind::Float(_) => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Eof => "EOF",
        }
    }

    /// True when both kinds are the same class, ignoring literal values.
    pub fn same_class(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.same_class(kind))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A classified lexeme and the half-open span `[start, end)` it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Int(n) => write!(f, "{}:{}", self.kind, n),
            TokenKind::Float(x) => write!(f, "{}:{:?}", self.kind, x),
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Lexer for one source unit
pub struct Lexer {
    input: Vec<char>,
    pos: Position,
}

impl Lexer {
    /// Create a lexer over `text`, labelled `source_name` in diagnostics.
    pub fn new(source_name: &str, text: &str) -> Self {
        Self {
            input: text.chars().collect(),
            pos: Position::start(Source::new(source_name, text)),
        }
    }

    /// Tokenize the entire input.
    ///
    /// On success the last token is always [`TokenKind::Eof`], a zero-width
    /// span at the end of the input.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current() {
            let kind = match ch {
                ' ' | '\t' => {
                    self.advance();
                    continue;
                }
                '0'..='9' => {
                    tokens.push(self.number_literal()?);
                    continue;
                }
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Mul,
                '/' => TokenKind::Div,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                _ => {
                    let start = self.pos.clone();
                    self.advance();
                    debug!(index = start.index, "illegal character {:?}", ch);
                    return Err(Error::illegal_char(
                        start,
                        self.pos.clone(),
                        format!("'{}'", ch),
                    ));
                }
            };

            let start = self.pos.clone();
            self.advance();
            let token = Token::new(kind, start, self.pos.clone());
            trace!("token {}", token);
            tokens.push(token);
        }

        tokens.push(Token::new(
            TokenKind::Eof,
            self.pos.clone(),
            self.pos.clone(),
        ));

        debug!(
            source = self.pos.source_name(),
            count = tokens.len(),
            "tokenized input"
        );
        Ok(tokens)
    }

    /// Scan digits with at most one decimal point.
    ///
    /// A second `.` ends the literal and is left unconsumed.
    fn number_literal(&mut self) -> Result<Token, Error> {
        let start = self.pos.clone();
        let mut literal = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => literal.push(ch),
                '.' if !seen_dot => {
                    seen_dot = true;
                    literal.push(ch);
                }
                _ => break,
            }
            self.advance();
        }

        let end = self.pos.clone();
        let kind = if seen_dot {
            literal.parse::<f64>().map(TokenKind::Float).map_err(|_| {
                Error::invalid_syntax(
                    start.clone(),
                    end.clone(),
                    format!("Invalid float literal: {}", literal),
                )
            })?
        } else {
            literal.parse::<i64>().map(TokenKind::Int).map_err(|_| {
                Error::invalid_syntax(
                    start.clone(),
                    end.clone(),
                    format!("Integer literal out of range: {}", literal),
                )
            })?
        };

        let token = Token::new(kind, start, end);
        trace!("token {}", token);
        Ok(token)
    }

    /// Character under the cursor, `None` past the end of input
    fn current(&self) -> Option<char> {
        self.input.get(self.pos.index).copied()
    }

    fn advance(&mut self) {
        let ch = self.current();
        self.pos.advance(ch);
    }
}
