//! Terminal formatting of parse results and diagnostics

use crate::ui::theme::DEFAULT_THEME;
use arithmos::{Error, Token};
use crossterm::style::Stylize;

/// Formats output for the terminal, optionally with color.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Full diagnostic report for `err`.
    ///
    /// Without color this is exactly [`Error::render`].
    pub fn diagnostic(&self, err: &Error) -> String {
        if !self.color {
            return err.render();
        }

        let excerpt = err
            .excerpt()
            .lines()
            .enumerate()
            .map(|(i, row)| {
                // Excerpt rows alternate: source line, then its carets
                if i % 2 == 1 {
                    row.with(DEFAULT_THEME.caret).bold().to_string()
                } else {
                    row.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n{}\n\n{}",
            err.headline().with(DEFAULT_THEME.error).bold(),
            err.origin().with(DEFAULT_THEME.location),
            excerpt
        )
    }

    /// Token stream as `[INT:1, PLUS, INT:2, EOF]`.
    pub fn tokens(&self, tokens: &[Token]) -> String {
        let body = tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", body)
    }

    pub fn prompt(&self) -> String {
        if self.color {
            "arithmos > ".with(DEFAULT_THEME.prompt).to_string()
        } else {
            "arithmos > ".to_string()
        }
    }

    pub fn banner(&self) -> String {
        let text = "Enter an expression per line; Ctrl-D to exit.";
        if self.color {
            text.with(DEFAULT_THEME.comment).to_string()
        } else {
            text.to_string()
        }
    }
}
