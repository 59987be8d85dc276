//! Diagnostic formatting for the Kiln compiler.
//!
//! Formatting is pure: [`Pretty::format`] turns a diagnostics collection into
//! a string, and the caller decides where that string is written.

use std::ops::Range;
use std::path::Path;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use kiln_core::{Diagnostic, DiagnosticLevel, Diagnostics, Span};

/// Access to the source text of files diagnostics point into.
pub trait SourceLookup {
    fn source_text(&self, path: &Path) -> Option<&str>;
}

impl SourceLookup for std::collections::HashMap<std::path::PathBuf, String> {
    fn source_text(&self, path: &Path) -> Option<&str> {
        self.get(path).map(String::as_str)
    }
}

/// Fits `span` into non-empty `text` so ariadne can label it.
///
/// Spans past the end point at the last character, empty spans cover one
/// character, and both ends are moved outwards onto character boundaries.
fn label_range(span: Span, text: &str) -> Range<usize> {
    let len = text.len();
    let mut start = span.start.min(len.saturating_sub(1));
    while !text.is_char_boundary(start) {
        start -= 1;
    }

    let mut end = span.end.max(start + 1).min(len);
    while !text.is_char_boundary(end) {
        end += 1;
    }

    start..end
}

fn report_kind(level: DiagnosticLevel) -> ReportKind<'static> {
    match level {
        DiagnosticLevel::Error => ReportKind::Error,
        DiagnosticLevel::Warning => ReportKind::Warning,
    }
}

/// Renders diagnostics as annotated source snippets.
///
/// Diagnostics whose file has no known source text are rendered as a header
/// line followed by the location.
#[derive(Clone, Debug, Default)]
pub struct Pretty {
    color: bool,
}

impl Pretty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self, diagnostics: &Diagnostics, sources: &dyn SourceLookup) -> String {
        let mut output = String::new();

        for diag in diagnostics {
            let rendered = sources
                .source_text(&diag.location.file)
                .filter(|text| !text.is_empty())
                .and_then(|text| self.format_snippet(diag, text));

            match rendered {
                Some(snippet) => output.push_str(&snippet),
                None => output.push_str(&format_plain(diag)),
            }
        }

        output
    }

    fn format_snippet(&self, diag: &Diagnostic, text: &str) -> Option<String> {
        let file = diag.location.file.display().to_string();
        let range = label_range(diag.location.span, text);
        let config = Config::default()
            .with_color(self.color)
            .with_index_type(IndexType::Byte);

        let mut buffer = Vec::new();

        Report::build(report_kind(diag.level), (file.clone(), range.clone()))
            .with_config(config)
            .with_message(&diag.message)
            .with_label(Label::new((file.clone(), range)).with_message(&diag.message))
            .finish()
            .write((file, Source::from(text.to_owned())), &mut buffer)
            .ok()?;

        String::from_utf8(buffer).ok()
    }
}

fn format_plain(diag: &Diagnostic) -> String {
    format!("{}: {}\n  --> {}\n", diag.level, diag.message, diag.location)
}
