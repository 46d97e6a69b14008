//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its token cursor helpers, and
//! the [`Parser::parse`] entry point. The grammar productions themselves live
//! in `expressions` as a second `impl Parser` block.
//!
//! Errors are returned, never recovered from: the first syntax error ends the
//! parse and travels unchanged up through every enclosing production.

use crate::diagnostics::Error;
use crate::parser::ast::AstNode;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::parser::position::{Position, Source};
use tracing::debug;

/// Recursive descent parser over one token stream
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over `tokens`.
    ///
    /// A stream that does not already end in [`TokenKind::Eof`] gets one
    /// appended at the end of its last token. An empty stream has no source
    /// to point into, so its EOF is labelled `<empty>`; use
    /// [`Parser::from_source`] to keep the real source name for empty input.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = !matches!(
            tokens.last(),
            Some(Token {
                kind: TokenKind::Eof,
                ..
            })
        );
        if needs_eof {
            let end = match tokens.last() {
                Some(last) => last.end.clone(),
                None => Position::start(Source::new("<empty>", "")),
            };
            tokens.push(Token::new(TokenKind::Eof, end.clone(), end));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    /// Lex `text` and create a parser over the result.
    pub fn from_source(source_name: &str, text: &str) -> Result<Self, Error> {
        let tokens = Lexer::new(source_name, text).tokenize()?;
        Ok(Self::new(tokens))
    }

    /// Parse the whole token stream as a single expression.
    pub fn parse(mut self) -> Result<AstNode, Error> {
        let node = self.parse_expr()?;

        if !self.check(&TokenKind::Eof) {
            let token = self.peek();
            return Err(Error::invalid_syntax(
                token.start.clone(),
                token.end.clone(),
                "Expected '+', '-', '*' or '/'",
            ));
        }

        debug!("parsed {}", node);
        Ok(node)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek().kind.same_class(kind)
    }

    /// Consume the current token and return it.
    ///
    /// The cursor never moves past the trailing EOF.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: &TokenKind,
        message: &str,
    ) -> Result<Token, Error> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(Error::invalid_syntax(
                token.start.clone(),
                token.end.clone(),
                message,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;

    #[test]
    fn test_parse_single_number() {
        let node = Parser::from_source("<test>", "42").unwrap().parse().unwrap();

        match node {
            AstNode::Number(token) => assert_eq!(token.kind, TokenKind::Int(42)),
            _ => panic!("Expected number node"),
        }
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = Parser::from_source("<test>", "1 2")
            .unwrap()
            .parse()
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidSyntax);
        assert_eq!(err.details, "Expected '+', '-', '*' or '/'");
        assert_eq!((err.start.index, err.end.index), (2, 3));
    }

    #[test]
    fn test_stray_close_paren_rejected() {
        let err = Parser::from_source("<test>", "(1))")
            .unwrap()
            .parse()
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidSyntax);
        assert_eq!(err.start.index, 3);
    }

    #[test]
    fn test_lex_error_surfaces_from_source() {
        let err = Parser::from_source("<test>", "1 # 2").err().unwrap();

        assert_eq!(err.kind, ErrorKind::IllegalCharacter);
    }

    #[test]
    fn test_missing_eof_is_appended() {
        let mut tokens = Lexer::new("<test>", "1+2").tokenize().unwrap();
        tokens.pop();

        let node = Parser::new(tokens).parse().unwrap();
        assert_eq!(node.to_string(), "(INT:1, PLUS, INT:2)");
    }

    #[test]
    fn test_empty_token_stream() {
        let err = Parser::new(Vec::new()).parse().unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidSyntax);
        assert_eq!(err.details, "Expected Int or Float");
        assert_eq!(err.start.source_name(), "<empty>");
    }

    #[test]
    fn test_empty_source_keeps_its_name() {
        let err = Parser::from_source("calc.txt", "")
            .unwrap()
            .parse()
            .unwrap_err();

        assert_eq!(err.start.source_name(), "calc.txt");
        assert_eq!(err.origin(), "File calc.txt, line 1");
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let mut parser = Parser::from_source("<test>", "7").unwrap();
        parser.advance();
        parser.advance();
        parser.advance();

        assert!(parser.check(&TokenKind::Eof));
    }
}
