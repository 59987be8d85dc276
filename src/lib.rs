//! Compilation state for the Kiln compiler.
//!
//! A [`CompilationState`] owns everything a compilation run accumulates: the
//! compiled modules, the type database, the diagnostics and the module path
//! cache. Phases receive it by reference; there is no global state.

pub mod diagnostics;
pub mod errors;
pub mod module;
pub mod module_paths;
pub mod state;

pub use diagnostics::{Pretty, SourceLookup};
pub use errors::{KilnError, KilnResult, ModuleNotFound};
pub use module::{Module, ModuleName};
pub use module_paths::{ModulePathsCache, ModuleResolver, SourceDirectories};
pub use state::CompilationState;

pub use kiln_core::{Config, Diagnostic, DiagnosticLevel, Diagnostics, SourceLocation, Span};
