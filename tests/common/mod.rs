//! Common test utilities for compilation state tests.

use std::fs;
use std::path::Path;

use kiln::Config;
use tempfile::TempDir;

/// Creates a source directory containing the given `(relative path, text)` files.
#[allow(dead_code)]
pub fn source_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (relative, text) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, text).expect("Failed to write source file");
    }
    dir
}

/// A configuration that only searches `dirs`.
#[allow(dead_code)]
pub fn config_for(dirs: &[&Path]) -> Config {
    Config {
        source_directories: dirs.iter().map(|dir| dir.to_path_buf()).collect(),
        ..Config::default()
    }
}
