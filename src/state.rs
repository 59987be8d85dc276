//! State shared by every phase of a single compilation run.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use kiln_core::{Config, Diagnostics};
use kiln_types::TypeDatabase;

use crate::diagnostics::{Pretty, SourceLookup};
use crate::errors::ModuleNotFound;
use crate::module::Module;
use crate::module_paths::{ModulePathsCache, ModuleResolver};

/// The compiled modules, the type database, the diagnostics and the module
/// path cache of one compilation run.
///
/// The state is created once per run and passed by reference into every
/// phase. Registering modules and recording diagnostics need exclusive
/// access; resolving module paths does not.
#[derive(Debug)]
pub struct CompilationState {
    config: Config,
    diagnostics: Diagnostics,
    modules: BTreeMap<String, Module>,
    typedb: TypeDatabase,
    module_paths_cache: ModulePathsCache,
    formatter: Pretty,
}

impl CompilationState {
    pub fn new(config: Config) -> Self {
        let module_paths_cache = ModulePathsCache::new(&config);
        Self::with_module_paths_cache(config, module_paths_cache)
    }

    /// Creates a state resolving module paths through `resolver` instead of
    /// the configured source directories.
    pub fn with_resolver(config: Config, resolver: impl ModuleResolver + 'static) -> Self {
        Self::with_module_paths_cache(config, ModulePathsCache::with_resolver(resolver))
    }

    fn with_module_paths_cache(config: Config, module_paths_cache: ModulePathsCache) -> Self {
        Self {
            formatter: Pretty::new().with_color(config.color),
            config,
            diagnostics: Diagnostics::new(),
            modules: BTreeMap::new(),
            typedb: TypeDatabase::new(),
            module_paths_cache,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Modules
    // =========================================================================

    pub fn module_exists(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Stores a module under its name, replacing any module stored earlier
    /// under the same name.
    pub fn store_module(&mut self, module: Module) {
        let name = module.name.as_str().to_owned();
        tracing::trace!(module = %name, "storing module");

        if let Some(previous) = self.modules.insert(name, module) {
            tracing::debug!(module = %previous.name, "replaced module");
        }
    }

    /// All stored modules, ordered by name.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub fn typedb(&self) -> &TypeDatabase {
        &self.typedb
    }

    pub fn typedb_mut(&mut self) -> &mut TypeDatabase {
        &mut self.typedb
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Renders every diagnostic recorded so far.
    pub fn render_diagnostics(&self) -> String {
        self.formatter.format(&self.diagnostics, self)
    }

    /// Writes the rendered diagnostics to `sink`.
    pub fn emit_diagnostics(&self, mut sink: impl Write) -> io::Result<()> {
        sink.write_all(self.render_diagnostics().as_bytes())?;
        sink.flush()
    }

    /// Writes the rendered diagnostics to standard error.
    pub fn display_diagnostics(&self) {
        if let Err(error) = self.emit_diagnostics(io::stderr().lock()) {
            tracing::error!(%error, "failed to write diagnostics");
        }
    }

    // =========================================================================
    // Module paths
    // =========================================================================

    /// Resolves a relative module path to an absolute one.
    ///
    /// Results are cached, so asking for the same relative path again returns
    /// the same answer without resolving it a second time.
    pub fn find_module_path(&self, relative: impl AsRef<Path>) -> Result<PathBuf, ModuleNotFound> {
        self.module_paths_cache.absolute_path_for(relative)
    }
}

impl SourceLookup for CompilationState {
    fn source_text(&self, path: &Path) -> Option<&str> {
        self.modules
            .values()
            .find(|module| module.is_defined_in(path))
            .and_then(|module| module.source.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use kiln_core::SourceLocation;

    use super::*;

    struct NoModules;

    impl ModuleResolver for NoModules {
        fn resolve(&self, _: &Path) -> Option<PathBuf> {
            None
        }
    }

    fn state() -> CompilationState {
        CompilationState::with_resolver(Config::default(), NoModules)
    }

    #[test]
    fn test_store_then_exists() {
        let mut state = state();
        assert!(!state.module_exists("core"));
        assert!(state.module("core").is_none());

        state.store_module(Module::new("core", "core.kiln"));

        assert!(state.module_exists("core"));
        assert_eq!(state.module("core").unwrap().name.as_str(), "core");
        assert!(!state.has_diagnostics());
    }

    #[test]
    fn test_last_store_wins() {
        let mut state = state();
        state.store_module(Module::new("core", "old/core.kiln"));
        state.store_module(Module::new("core", "new/core.kiln"));

        assert_eq!(state.modules().count(), 1);
        assert_eq!(state.module("core").unwrap().path, PathBuf::from("new/core.kiln"));
    }

    #[test]
    fn test_modules_ordered_by_name() {
        let mut state = state();
        for name in ["std::io", "core", "main"] {
            state.store_module(Module::new(name, format!("{name}.kiln")));
        }

        let names: Vec<_> = state.modules().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["core", "main", "std::io"]);
    }

    #[test]
    fn test_has_diagnostics_is_monotonic() {
        let mut state = state();
        assert!(!state.has_diagnostics());

        state
            .diagnostics_mut()
            .warning("unused import", SourceLocation::start_of("main.kiln"));
        assert!(state.has_diagnostics());

        let _ = state.render_diagnostics();
        assert!(state.has_diagnostics());
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let mut state = state();
        state
            .diagnostics_mut()
            .error("broken", SourceLocation::start_of("main.kiln"));

        let mut first = Vec::new();
        let mut second = Vec::new();
        state.emit_diagnostics(&mut first).unwrap();
        state.emit_diagnostics(&mut second).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_module_path_failure_is_stable() {
        let state = state();
        let first = state.find_module_path("std/io.kiln");
        let second = state.find_module_path("std/io.kiln");

        assert_eq!(first, Err(ModuleNotFound::new("std/io.kiln")));
        assert_eq!(first, second);
    }

    #[test]
    fn test_source_lookup_uses_stored_modules() {
        let mut state = state();
        state.store_module(Module::new("main", "main.kiln").with_source("let x = 1\n"));

        assert_eq!(state.source_text(Path::new("main.kiln")), Some("let x = 1\n"));
        assert_eq!(state.source_text(Path::new("other.kiln")), None);
    }
}
