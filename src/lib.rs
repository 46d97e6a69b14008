//! # Introduction
//!
//! Arithmos is the front end of a small arithmetic expression language. It
//! turns source text into a token stream and then into an abstract syntax
//! tree, keeping exact source positions so that failures can be reported with
//! a caret pointing into the original text.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//!            ↘                ↘
//!             Error            Error
//! ```
//!
//! 1. [`parser`]: positions, tokens, the lexer, the AST, and the
//!    recursive-descent parser.
//! 2. [`diagnostics`]: the [`Error`] value either pass returns, and
//!    plain-text caret rendering of its span.
//!
//! Both passes are fail-fast. The first illegal character or syntax error
//! ends the run, and no partial token list or tree is returned with it.
//!
//! ## Example
//!
//! ```
//! let ast = arithmos::run("<doc>", "2 + 3 * 4").unwrap();
//! assert_eq!(ast.to_string(), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
//!
//! let err = arithmos::run("<doc>", "(1 + 2").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid Syntax: Expected ')'");
//! ```

pub mod diagnostics;
pub mod parser;

pub use diagnostics::{Error, ErrorKind};
pub use parser::ast::AstNode;
pub use parser::lexer::{Lexer, Token, TokenKind};
pub use parser::parse::Parser;
pub use parser::position::{Position, Source};

/// Lex `text`, labelled `source_name` in diagnostics.
pub fn tokenize(source_name: &str, text: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source_name, text).tokenize()
}

/// Lex and parse `text` into a single expression tree.
pub fn run(source_name: &str, text: &str) -> Result<AstNode, Error> {
    let tokens = tokenize(source_name, text)?;
    tracing::debug!(source = source_name, tokens = tokens.len(), "parsing");
    Parser::new(tokens).parse()
}
