//! Kiln compiler utilities shared by every compilation phase.
pub mod config;
pub mod diagnostic;
pub mod location;

pub use config::Config;
pub use diagnostic::{Diagnostic, DiagnosticLevel, Diagnostics};
pub use location::{SourceLocation, Span};
