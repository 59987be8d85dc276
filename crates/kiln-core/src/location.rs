//! Source location types for tracking positions in source files.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A span of source code, represented as byte offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A location in a source file.
///
/// Locations only attribute diagnostics to source code; they never take part
/// in execution semantics. The file path is shared so instructions and
/// diagnostics can copy locations around without reallocating it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: Arc<Path>,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    pub span: Span,
}

impl SourceLocation {
    pub fn new(file: impl AsRef<Path>, line: u32, column: u32, span: Span) -> Self {
        Self {
            file: Arc::from(file.as_ref()),
            line,
            column,
            span,
        }
    }

    /// A location pointing at the first character of `file`.
    pub fn start_of(file: impl AsRef<Path>) -> Self {
        Self::new(file, 1, 1, Span::default())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        // Inverted spans are treated as empty instead of underflowing.
        assert_eq!(Span::new(7, 3).len(), 0);
    }

    #[test]
    fn test_location_display() {
        let location = SourceLocation::new("std/string.kiln", 12, 5, Span::new(40, 52));
        assert_eq!(location.to_string(), "std/string.kiln:12:5");
    }

    #[test]
    fn test_locations_share_file() {
        let a = SourceLocation::start_of("main.kiln");
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.file, &b.file));
        assert_eq!(a, b);
    }
}
