//! Caret underlining of source spans

use crate::parser::position::Position;

/// Render the lines covered by `[start, end)` with a row of `^` under each.
///
/// Tabs are shown as single spaces so carets stay aligned with the
/// character columns the lexer counts. An empty span still gets one caret.
pub fn string_with_arrows(text: &str, start: &Position, end: &Position) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    // A span that ends by consuming a newline stops on the line it started on.
    let (last_line, ends_with_newline) = if end.line > start.line && end.column == 0 {
        (end.line - 1, true)
    } else {
        (end.line.max(start.line), false)
    };

    let mut rows = Vec::new();
    for line_no in start.line..=last_line {
        let line = lines.get(line_no).copied().unwrap_or("");
        let width = line.chars().count();

        let from = if line_no == start.line { start.column } else { 0 };
        let to = if line_no < last_line {
            width
        } else if ends_with_newline {
            width + 1
        } else {
            end.column
        };

        rows.push(line.replace('\t', " "));
        rows.push(format!(
            "{}{}",
            " ".repeat(from),
            "^".repeat(to.saturating_sub(from).max(1))
        ));
    }

    rows.join("\n")
}
