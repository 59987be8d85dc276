//! Modules registered with the compilation state.

use std::fmt;
use std::path::{Path, PathBuf};

use kiln_core::SourceLocation;
use kiln_tir::CodeObject;
use kiln_types::TypeId;

/// A fully qualified module name such as `std::io`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    pub const SEPARATOR: &'static str = "::";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::SEPARATOR)
    }

    /// The last segment: `io` for `std::io`.
    pub fn tail(&self) -> &str {
        self.0.rsplit(Self::SEPARATOR).next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A compiled module.
///
/// The compilation state only relies on the name; the remaining fields are
/// filled in by the phases that produce them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub name: ModuleName,
    pub path: PathBuf,
    /// Source text, kept so diagnostics can quote it.
    pub source: Option<String>,
    pub imports: Vec<ModuleName>,
    /// The object type representing the module at runtime.
    pub type_id: Option<TypeId>,
    pub body: CodeObject,
}

impl Module {
    pub fn new(name: impl Into<ModuleName>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let path = path.into();
        let body = CodeObject::new(name.tail(), SourceLocation::start_of(&path));

        Self {
            name,
            path,
            source: None,
            imports: Vec::new(),
            type_id: None,
            body,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_type(mut self, type_id: TypeId) -> Self {
        self.type_id = Some(type_id);
        self
    }

    pub fn with_body(mut self, body: CodeObject) -> Self {
        self.body = body;
        self
    }

    pub fn add_import(&mut self, name: impl Into<ModuleName>) {
        let name = name.into();
        if !self.imports.contains(&name) {
            self.imports.push(name);
        }
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::start_of(&self.path)
    }

    pub fn is_defined_in(&self, path: &Path) -> bool {
        self.path == path
    }
}
