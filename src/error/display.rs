use std::{fmt, path::Path};

use owo_colors::OwoColorize;

/// A problem with a template file, located by byte offset into its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
    pub source: &'i str,
    pub offset: usize,
}

impl<'i> TemplateError<'i> {
    /// Line and column of the problem, both one-origin, for display.
    pub fn position(&self) -> (usize, usize) {
        let offset = clamp_offset(self.source, self.offset);
        let i = calculate_line_number(self.source, offset);
        let j = calculate_column_number(self.source, offset);
        (i + 1, j + 1)
    }

    /// Verbose explanation showing the offending line with a caret under
    /// the problem.
    pub fn full_details(&self) -> String {
        let (line, column) = self.position();

        let code = self
            .source
            .lines()
            .nth(line - 1)
            .unwrap_or("");

        let width = 3.max(
            line.to_string()
                .len(),
        );

        let mut result = format!(
            r#"
{}: {}
{}:{}:{}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}
            "#,
            "error".bright_red(),
            self.problem
                .bold(),
            self.filename
                .to_string_lossy(),
            line,
            column,
            ' ',
            '|'.bright_blue(),
            line.bright_blue(),
            '|'.bright_blue(),
            code,
            ' ',
            '|'.bright_blue(),
            '^'.bright_red(),
        )
        .trim_ascii()
        .to_string();

        if !self
            .details
            .is_empty()
        {
            result.push_str("\n\n");
            result.push_str(&self.details);
        }

        result
    }
}

impl<'i> fmt::Display for TemplateError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.position();

        write!(
            f,
            "error: {}:{}:{} {}",
            self.filename
                .to_string_lossy(),
            line,
            column,
            self.problem
        )
    }
}

impl<'i> std::error::Error for TemplateError<'i> {}

// Offsets come from the parser and so should always be in range and on a
// character boundary, but never slice outside the source.
fn clamp_offset(content: &str, offset: usize) -> usize {
    let mut offset = offset.min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number in characters, also zero-origin.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => before[start + 1..]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
