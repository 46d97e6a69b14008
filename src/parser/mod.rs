//! Arithmetic expression front end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`position`]: Source cursor used to stamp token spans
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct and entry point (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! Integer and float literals, binary `+ - * /`, prefix `+`/`-`, and
//! parentheses. Spaces and tabs separate tokens; any other character is
//! illegal.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per grammar production.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod position;
