//! Named members (attributes, methods, type parameters) of a type.

use std::collections::HashMap;

use crate::database::TypeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    Immutable,
    Mutable,
}

/// A named, typed member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub name: String,
    pub ty: TypeId,
    /// Position of the symbol in definition order.
    pub index: usize,
    pub mutability: Mutability,
}

impl Symbol {
    pub fn is_mutable(&self) -> bool {
        self.mutability == Mutability::Mutable
    }
}

/// Symbols in definition order, with lookup by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_name: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a symbol, replacing the type and mutability of an existing
    /// symbol with the same name. A redefined symbol keeps its index.
    pub fn define(&mut self, name: impl Into<String>, ty: TypeId, mutability: Mutability) -> &Symbol {
        let name = name.into();

        let index = match self.by_name.get(&name) {
            Some(&index) => {
                let symbol = &mut self.symbols[index];
                symbol.ty = ty;
                symbol.mutability = mutability;
                index
            }
            None => {
                let index = self.symbols.len();
                self.by_name.insert(name.clone(), index);
                self.symbols.push(Symbol {
                    name,
                    ty,
                    index,
                    mutability,
                });
                index
            }
        };

        &self.symbols[index]
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.by_name.get(name).map(|&index| &self.symbols[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut table = SymbolTable::new();
        table.define("name", TypeId::STRING, Mutability::Immutable);
        table.define("age", TypeId::INTEGER, Mutability::Mutable);

        let age = table.lookup("age").unwrap();
        assert_eq!(age.index, 1);
        assert_eq!(age.ty, TypeId::INTEGER);
        assert!(age.is_mutable());
        assert!(table.lookup("missing").is_none());
    }

    #[test]
    fn test_redefine_keeps_index() {
        let mut table = SymbolTable::new();
        table.define("a", TypeId::STRING, Mutability::Immutable);
        table.define("b", TypeId::STRING, Mutability::Immutable);
        let redefined = table.define("a", TypeId::FLOAT, Mutability::Mutable).clone();

        assert_eq!(table.len(), 2);
        assert_eq!(redefined.index, 0);
        assert_eq!(redefined.ty, TypeId::FLOAT);
    }

    #[test]
    fn test_iter_in_definition_order() {
        let mut table = SymbolTable::new();
        for name in ["z", "a", "m"] {
            table.define(name, TypeId::NIL, Mutability::Immutable);
        }
        let names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }
}
