//! Error rendering using ariadne
//!
//! Renders an [`Error`] together with the expression it came from, pointing
//! at the offending location when the error has one.

use crate::Error;
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error with formatting to stderr
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let message = error.to_string();

    // Evaluation errors are not tied to a node; point at the whole expression.
    let (span, label) = match error.span() {
        Some(span) => (span.0.clone(), "here"),
        None => (0..source.len(), "while evaluating this expression"),
    };

    let kind = match error {
        Error::Parse(_) => "syntax error",
        Error::Eval(_) => "evaluation error",
    };

    let report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&message)
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        )
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(label)
                .with_color(colors.next()),
        )
        .with_note(kind);

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, EngineOptions, Variables};

    #[test]
    fn test_render_parse_error() {
        let source = "1 + + )";
        let err = Engine::default()
            .check(source, &Variables::new())
            .unwrap_err();

        let output = render_error_to_string_no_color(source, &err);

        assert!(output.contains("Error"));
        assert!(output.contains("1 + + )"));
        assert!(output.contains("syntax error"));
    }

    #[test]
    fn test_render_eval_error() {
        let source = "1 + \"hello\"";
        let err = Engine::default()
            .check(source, &Variables::new())
            .unwrap_err();

        let output = render_error_to_string_no_color(source, &err);

        assert!(output.contains("The operator + cannot be used with number,string"));
        assert!(output.contains("evaluation error"));
    }

    #[test]
    fn test_render_depth_error() {
        let source = "((((1))))";
        let engine = Engine::new(EngineOptions { max_depth: 2 });
        let err = engine.check(source, &Variables::new()).unwrap_err();

        let output = render_error_to_string_no_color(source, &err);
        assert!(output.contains("Expression nesting depth exceeds maximum of 2 levels"));
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let source = "bad syntax {";
        let err = Engine::default()
            .check(source, &Variables::new())
            .unwrap_err();

        let output = render_error_to_string_no_color(source, &err);

        assert!(!output.is_empty());
        // ariadne draws the source on its own line below the header.
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_render_non_ascii_source() {
        let source = "\"héllo\" +";
        let err = Engine::default()
            .check(source, &Variables::new())
            .unwrap_err();

        let output = render_error_to_string_no_color(source, &err);
        assert!(output.contains("héllo"));
    }
}
