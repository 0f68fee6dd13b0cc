use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use phrasing::{
    error::TemplateError, formatting::Render, language::LoadingError, parsing::CompileError,
};
use std::path::Path;

/// Format a compile error with full details including source code context
pub fn full_compile_error<'i>(
    error: &CompileError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    located(error, filename, source, renderer).full_details()
}

/// Format a compile error with concise single-line output
pub fn concise_compile_error<'i>(
    error: &CompileError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let located = located(error, filename, source, renderer);
    let (line, column) = located.position();

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        located
            .problem
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

fn located<'i>(
    error: &CompileError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> TemplateError<'i> {
    let (problem, details) = generate_error_message(error, renderer);

    TemplateError {
        problem,
        details,
        filename,
        source,
        offset: error
            .offset()
            .unwrap_or(0),
    }
}
