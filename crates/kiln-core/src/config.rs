//! Compiler configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for a single compilation run.
///
/// The configuration is built by the driver (from command-line flags or any
/// serde-compatible source) and handed to the compilation state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories searched, in order, when resolving imported modules.
    pub source_directories: Vec<PathBuf>,
    /// File extension of source files, without the leading dot.
    pub source_extension: String,
    /// Whether rendered diagnostics use ANSI colors.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_directories: vec![PathBuf::from(".")],
            source_extension: "kiln".to_owned(),
            color: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source directory, searched after the existing ones.
    pub fn add_source_directory(&mut self, directory: impl Into<PathBuf>) {
        self.source_directories.push(directory.into());
    }

    /// Maps a module name such as `std::io` to the relative path `std/io.kiln`.
    pub fn relative_path_for(&self, module: &str) -> PathBuf {
        let mut path: PathBuf = module.split("::").collect();
        path.set_extension(&self.source_extension);
        path
    }
}
