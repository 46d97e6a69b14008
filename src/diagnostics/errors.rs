//! Front-end error types
//!
//! This module defines [`Error`], the single diagnostic produced by either
//! pass. Lexing and parsing both stop at the first problem, so a pass yields
//! either its full output or exactly one [`Error`], never both.

use super::arrows::string_with_arrows;
use crate::parser::position::Position;
use std::fmt;
use thiserror::Error;

/// Which pass rejected the input, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lexer met a character outside the language's alphabet
    IllegalCharacter,

    /// The token stream does not match the grammar
    InvalidSyntax,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::IllegalCharacter => "Illegal character",
            ErrorKind::InvalidSyntax => "Invalid Syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A diagnostic attached to the half-open span `[start, end)`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {details}")]
pub struct Error {
    pub kind: ErrorKind,
    pub details: String,
    pub start: Position,
    pub end: Position,
}

impl Error {
    pub fn illegal_char(
        start: Position,
        end: Position,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::IllegalCharacter,
            details: details.into(),
            start,
            end,
        }
    }

    pub fn invalid_syntax(
        start: Position,
        end: Position,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::InvalidSyntax,
            details: details.into(),
            start,
            end,
        }
    }

    /// Header line, e.g. `Invalid Syntax: Expected ')'`.
    pub fn headline(&self) -> String {
        self.to_string()
    }

    /// Origin line, e.g. `File <stdin>, line 1`.
    pub fn origin(&self) -> String {
        format!(
            "File {}, line {}",
            self.start.source_name(),
            self.start.line + 1
        )
    }

    /// Source excerpt with the offending span underlined.
    pub fn excerpt(&self) -> String {
        string_with_arrows(self.start.source_text(), &self.start, &self.end)
    }

    /// Full plain-text report: headline, origin, blank line, excerpt.
    pub fn render(&self) -> String {
        format!("{}\n{}\n\n{}", self.headline(), self.origin(), self.excerpt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::position::Source;

    fn span(text: &str, from: usize, to: usize) -> (Position, Position) {
        let chars: Vec<char> = text.chars().collect();
        let mut pos = Position::start(Source::new("<test>", text));
        for i in 0..from {
            pos.advance(chars.get(i).copied());
        }
        let start = pos.clone();
        for i in from..to {
            pos.advance(chars.get(i).copied());
        }
        (start, pos)
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::IllegalCharacter.to_string(), "Illegal character");
        assert_eq!(ErrorKind::InvalidSyntax.to_string(), "Invalid Syntax");
    }

    #[test]
    fn test_display_is_kind_and_details() {
        let (start, end) = span("1 $", 2, 3);
        let err = Error::illegal_char(start, end, "'$'");

        assert_eq!(err.to_string(), "Illegal character: '$'");
    }

    #[test]
    fn test_render_full_report() {
        let (start, end) = span("(1+2", 4, 4);
        let err = Error::invalid_syntax(start, end, "Expected ')'");

        assert_eq!(
            err.render(),
            "Invalid Syntax: Expected ')'\nFile <test>, line 1\n\n(1+2\n    ^"
        );
    }
}
