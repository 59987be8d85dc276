//! Resolution of relative module paths to absolute paths.

use std::path::{Path, PathBuf};

use dashmap::DashMap;
use kiln_core::Config;

use crate::errors::ModuleNotFound;

/// A strategy for turning a relative module path into an absolute one.
///
/// Resolvers are only called on cache misses and never while the cache is
/// locked.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, relative: &Path) -> Option<PathBuf>;
}

/// Searches a list of source directories, in order, for the first existing file.
#[derive(Clone, Debug)]
pub struct SourceDirectories {
    directories: Vec<PathBuf>,
}

impl SourceDirectories {
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }
}

impl ModuleResolver for SourceDirectories {
    fn resolve(&self, relative: &Path) -> Option<PathBuf> {
        self.directories.iter().find_map(|directory| {
            let candidate = directory.join(relative);
            if !candidate.is_file() {
                return None;
            }
            Some(candidate.canonicalize().unwrap_or(candidate))
        })
    }
}

/// A memoized mapping from relative module paths to absolute paths.
///
/// Every outcome is cached, including failures, so looking up the same
/// relative path twice yields the same result for the lifetime of the cache.
/// Lookups only need `&self` and may run concurrently.
pub struct ModulePathsCache {
    resolver: Box<dyn ModuleResolver>,
    cache: DashMap<PathBuf, Option<PathBuf>>,
}

impl ModulePathsCache {
    /// Creates a cache resolving against the configured source directories.
    pub fn new(config: &Config) -> Self {
        Self::with_resolver(SourceDirectories::new(config.source_directories.clone()))
    }

    pub fn with_resolver(resolver: impl ModuleResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            cache: DashMap::new(),
        }
    }

    /// Resolves `relative`, consulting the resolver only on a cache miss.
    ///
    /// The resolver runs without holding any lock on the cache, so it may do
    /// slow file-system work or look up other paths in this same cache. When
    /// two threads miss on the same path at once, the first answer stored
    /// wins and both callers return it.
    pub fn absolute_path_for(&self, relative: impl AsRef<Path>) -> Result<PathBuf, ModuleNotFound> {
        let relative = relative.as_ref();

        let cached = self.cache.get(relative).map(|entry| entry.value().clone());
        let resolved = match cached {
            Some(resolved) => {
                tracing::trace!(path = %relative.display(), "module path cache hit");
                resolved
            }
            None => {
                let resolved = self.resolver.resolve(relative);
                tracing::debug!(
                    path = %relative.display(),
                    resolved = ?resolved,
                    "resolved module path"
                );
                self.cache
                    .entry(relative.to_path_buf())
                    .or_insert(resolved)
                    .clone()
            }
        };

        resolved.ok_or_else(|| ModuleNotFound::new(relative))
    }

    /// The number of relative paths looked up so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl std::fmt::Debug for ModulePathsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModulePathsCache")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
