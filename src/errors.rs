//! Error types for the compilation state and the driver.

use std::path::PathBuf;

use derive_more::{Display, Error, From};

/// No module resolves for a relative path.
///
/// This is recoverable: callers turn it into a diagnostic instead of aborting
/// the compilation.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq, Hash)]
#[display("module not found: {}", path.display())]
pub struct ModuleNotFound {
    pub path: PathBuf,
}

impl ModuleNotFound {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub type KilnResult<T> = Result<T, KilnError>;

#[derive(Debug, Display, Error, From)]
pub enum KilnError {
    #[display("{_0}")]
    ModuleNotFound(ModuleNotFound),

    #[display("I/O error: {_0}")]
    Io(std::io::Error),
}
