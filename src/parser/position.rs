//! Source positions
//!
//! A [`Position`] is the lexer's cursor into the source text. It is advanced
//! one character at a time and cloned whenever a token needs to remember
//! where it started or ended; clones never share mutation with the live
//! cursor.

use std::fmt;
use std::sync::Arc;

/// A named piece of source text.
///
/// Shared by every [`Position`] that points into it, so cloning a position
/// never copies the text.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            text: text.into(),
        })
    }
}

/// Cursor into a [`Source`].
///
/// `index` and `column` count characters, not bytes. `line` and `column` are
/// zero-based; add one when showing them to a person.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
    source: Arc<Source>,
}

impl Position {
    /// Position of the first character of `source`.
    pub fn start(source: Arc<Source>) -> Self {
        Self {
            index: 0,
            line: 0,
            column: 0,
            source,
        }
    }

    /// Step past `current`, the character under the cursor.
    ///
    /// `index` and `column` always move forward by one. Consuming a newline
    /// moves to column 0 of the next line.
    pub fn advance(&mut self, current: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    pub fn source_text(&self) -> &str {
        &self.source.text
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}@{}",
            self.source.name,
            self.line + 1,
            self.column + 1,
            self.index
        )
    }
}
