use crate::EngineError;
use ariadne::{Label, Report, ReportKind, Source};
use std::ops::Range;

/// Renders an engine error as a source-annotated report.
///
/// Lexical errors carry an exact byte span; parse and runtime errors only
/// know their source line, so the whole line is highlighted.
pub fn render(source: &str, name: &str, error: &EngineError) -> String {
    let span = error_span(source, error);
    let message = match error {
        EngineError::Lex(e) => e.kind.to_string(),
        EngineError::Parse(e) => e.kind.to_string(),
        EngineError::Runtime(e) => e.kind.to_string(),
    };

    let mut buffer = Vec::new();
    let result = Report::build(ReportKind::Error, (name, span.clone()))
        .with_message(format!("{} error", error.stage()))
        .with_label(Label::new((name, span)).with_message(message))
        .finish()
        .write((name, Source::from(source)), &mut buffer);

    match result {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => error.to_string(),
    }
}

fn error_span(source: &str, error: &EngineError) -> Range<usize> {
    match error {
        EngineError::Lex(e) => e.span.range(),
        EngineError::Parse(e) => line_range(source, e.line),
        EngineError::Runtime(e) => line_range(source, e.line),
    }
}

/// Byte range of a 1-based source line, without its newline.
fn line_range(source: &str, line: u32) -> Range<usize> {
    let mut start = 0;
    let mut current = 1;
    for (offset, byte) in source.bytes().enumerate() {
        if current == line && byte == b'\n' {
            return start..offset;
        }
        if byte == b'\n' {
            current += 1;
            start = offset + 1;
        }
    }
    start..source.len()
}
