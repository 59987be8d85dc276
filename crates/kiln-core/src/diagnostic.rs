//! Diagnostic messages emitted during compilation.
//!
//! Producers (the parser, the type checker, the module resolver) push
//! diagnostics into a [`Diagnostics`] collector. The collector is append-only:
//! diagnostics are never removed during a compilation run, so once
//! [`Diagnostics::is_empty`] returns `false` it stays that way.

use derive_more::Display;

use crate::location::SourceLocation;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

/// A diagnostic message (error or warning) with source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
            location,
        }
    }

    pub fn warning(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
            location,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}

/// An ordered, append-only collection of diagnostics.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, location: SourceLocation) {
        self.push(Diagnostic::error(message, location));
    }

    pub fn warning(&mut self, message: impl Into<String>, location: SourceLocation) {
        self.push(Diagnostic::warning(message, location));
    }

    pub fn module_not_found_error(&mut self, name: &str, location: SourceLocation) {
        self.error(format!("The module {name} could not be found"), location);
    }

    pub fn undefined_constant_error(&mut self, name: &str, location: SourceLocation) {
        self.error(format!("The constant {name} is undefined"), location);
    }

    pub fn undefined_attribute_error(
        &mut self,
        receiver: &str,
        name: &str,
        location: SourceLocation,
    ) {
        self.error(
            format!("The type {receiver} does not define the attribute {name}"),
            location,
        );
    }

    pub fn undefined_method_error(&mut self, receiver: &str, name: &str, location: SourceLocation) {
        self.error(
            format!("The type {receiver} does not respond to the message {name}"),
            location,
        );
    }

    pub fn type_error(&mut self, expected: &str, found: &str, location: SourceLocation) {
        self.error(
            format!("Expected a value of type {expected} instead of {found}"),
            location,
        );
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn errors(&self) -> usize {
        self.entries.iter().filter(|diag| diag.is_error()).count()
    }

    pub fn warnings(&self) -> usize {
        self.len() - self.errors()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
