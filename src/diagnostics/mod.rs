//! Diagnostics shared by the lexer and parser
//!
//! - [`errors`]: the [`Error`] value both passes return on failure
//! - [`arrows`]: plain-text caret rendering of an error span
//!
//! Coloring is left to the caller; everything here produces plain strings.

pub mod arrows;
pub mod errors;

pub use errors::{Error, ErrorKind};
