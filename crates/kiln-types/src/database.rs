//! Arena storage for all types of a compilation run.

use std::collections::HashMap;

use derive_more::Display;

use crate::capabilities::TypePredicates;
use crate::symbol_table::Symbol;
use crate::types::{
    DynamicType, GeneratedTraitType, GenericTraitType, NeverType, ObjectType, OptionalType,
    SelfType, TraitType, Type,
};

/// Handle to a type stored in a [`TypeDatabase`].
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("#{_0}")]
pub struct TypeId(u32);

impl TypeId {
    // Reserved ids for the built-in types, allocated in this order by
    // `TypeDatabase::new()`.
    pub const OBJECT: TypeId = TypeId(0);
    pub const TRAIT: TypeId = TypeId(1);
    pub const STRING: TypeId = TypeId(2);
    pub const INTEGER: TypeId = TypeId(3);
    pub const FLOAT: TypeId = TypeId(4);
    pub const BOOLEAN: TypeId = TypeId(5);
    pub const NIL: TypeId = TypeId(6);
    pub const ARRAY: TypeId = TypeId(7);
    pub const BLOCK: TypeId = TypeId(8);
    pub const DYNAMIC: TypeId = TypeId(9);
    pub const SELF_TYPE: TypeId = TypeId(10);
    pub const NEVER: TypeId = TypeId(11);

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Every type created during a compilation run.
///
/// Types are never removed; a [`TypeId`] handed out by a database stays valid
/// for that database's lifetime.
#[derive(Clone, Debug)]
pub struct TypeDatabase {
    types: Vec<Type>,
    /// Generated traits keyed by the generic trait and its type arguments.
    generated: HashMap<(TypeId, Vec<TypeId>), TypeId>,
}

impl Default for TypeDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDatabase {
    pub fn new() -> Self {
        let mut db = Self {
            types: Vec::new(),
            generated: HashMap::new(),
        };

        db.add(ObjectType::with_name("Object"));
        for name in [
            "Trait", "String", "Integer", "Float", "Boolean", "Nil", "Array", "Block",
        ] {
            db.add(ObjectType::with_name(name).with_prototype(TypeId::OBJECT));
        }
        db.add(DynamicType);
        db.add(SelfType);
        db.add(NeverType);

        db
    }

    /// Stores `ty` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the database already holds `u32::MAX` types.
    pub fn add(&mut self, ty: impl Into<Type>) -> TypeId {
        let id = TypeId(u32::try_from(self.types.len()).expect("type id overflow"));
        self.types.push(ty.into());
        id
    }

    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    pub fn get_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id.index()]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn object_type(&self) -> TypeId {
        TypeId::OBJECT
    }

    pub fn trait_type(&self) -> TypeId {
        TypeId::TRAIT
    }

    pub fn string_type(&self) -> TypeId {
        TypeId::STRING
    }

    pub fn integer_type(&self) -> TypeId {
        TypeId::INTEGER
    }

    pub fn float_type(&self) -> TypeId {
        TypeId::FLOAT
    }

    pub fn boolean_type(&self) -> TypeId {
        TypeId::BOOLEAN
    }

    pub fn nil_type(&self) -> TypeId {
        TypeId::NIL
    }

    pub fn array_type(&self) -> TypeId {
        TypeId::ARRAY
    }

    pub fn block_type(&self) -> TypeId {
        TypeId::BLOCK
    }

    pub fn dynamic_type(&self) -> TypeId {
        TypeId::DYNAMIC
    }

    pub fn self_type(&self) -> TypeId {
        TypeId::SELF_TYPE
    }

    pub fn never_type(&self) -> TypeId {
        TypeId::NEVER
    }

    /// Creates a named object inheriting from `Object`.
    pub fn new_object(&mut self, name: impl Into<String>) -> TypeId {
        self.add(ObjectType::with_name(name).with_prototype(TypeId::OBJECT))
    }

    pub fn new_trait(&mut self, name: impl Into<String>) -> TypeId {
        self.add(TraitType::new(name))
    }

    pub fn new_generic_trait(
        &mut self,
        name: impl Into<String>,
        type_parameters: Vec<String>,
    ) -> TypeId {
        self.add(GenericTraitType::new(name, type_parameters))
    }

    /// Wraps `inner` in an optional type. Optional types are not nested, so
    /// wrapping an optional type returns it unchanged.
    pub fn optional(&mut self, inner: TypeId) -> TypeId {
        if self.get(inner).is_optional() {
            return inner;
        }

        self.add(OptionalType { inner })
    }

    /// Binds the type parameters of a generic trait.
    ///
    /// Specializing the same generic trait with the same arguments twice
    /// returns the same type. Returns `None` when `generic` is not a generic
    /// trait or the number of arguments does not match its type parameters.
    pub fn specialize_trait(&mut self, generic: TypeId, type_arguments: Vec<TypeId>) -> Option<TypeId> {
        let key = (generic, type_arguments);

        if let Some(&id) = self.generated.get(&key) {
            return Some(id);
        }

        let Type::GenericTrait(source) = self.get(generic) else {
            return None;
        };

        if source.type_parameters.len() != key.1.len() {
            return None;
        }

        let generated = GeneratedTraitType {
            name: source.name.clone(),
            generic,
            type_arguments: key.1.clone(),
            required_methods: source.required_methods.clone(),
        };

        let id = self.add(generated);
        tracing::trace!(%generic, %id, "generated trait");
        self.generated.insert(key, id);
        Some(id)
    }

    /// Looks up an attribute on an object, walking its prototype chain.
    pub fn lookup_attribute(&self, receiver: TypeId, name: &str) -> Option<&Symbol> {
        self.prototype_chain(receiver)
            .filter_map(|id| match self.get(id) {
                Type::Object(object) => object.attributes.lookup(name),
                _ => None,
            })
            .next()
    }

    /// Looks up a method a value of `receiver` responds to.
    ///
    /// Objects search their prototype chain, optional types search the wrapped
    /// type, and generated traits fall back to their generic trait.
    pub fn lookup_method(&self, receiver: TypeId, name: &str) -> Option<&Symbol> {
        match self.get(receiver) {
            Type::Optional(optional) => self.lookup_method(optional.inner, name),
            Type::GeneratedTrait(tr) => tr
                .required_methods
                .lookup(name)
                .or_else(|| self.lookup_method(tr.generic, name)),
            Type::Object(_) => self
                .prototype_chain(receiver)
                .filter_map(|id| self.get(id).own_methods())
                .find_map(|methods| methods.lookup(name)),
            ty => ty.own_methods().and_then(|methods| methods.lookup(name)),
        }
    }

    /// Returns `true` if `object` or one of its prototypes implements
    /// `trait_type`.
    pub fn implements_trait(&self, object: TypeId, trait_type: TypeId) -> bool {
        self.prototype_chain(object).any(|id| match self.get(id) {
            Type::Object(object) => object.implemented_traits.contains(&trait_type),
            _ => false,
        })
    }

    /// Iterates `start` followed by its prototypes.
    ///
    /// The walk stops after visiting as many types as the database holds, so a
    /// cyclic prototype chain cannot loop forever.
    pub fn prototype_chain(&self, start: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        std::iter::successors(Some(start), move |&id| match self.get(id) {
            Type::Object(object) => object.prototype,
            _ => None,
        })
        .take(self.types.len())
    }

    /// A human-readable name of a type, for diagnostics.
    pub fn type_name(&self, id: TypeId) -> String {
        match self.get(id) {
            Type::Optional(optional) => format!("?{}", self.type_name(optional.inner)),
            Type::Block(block) => {
                let arguments: Vec<_> = block.arguments.iter().map(|&arg| self.type_name(arg)).collect();
                let mut name = format!(
                    "{} ({}) -> {}",
                    block.kind,
                    arguments.join(", "),
                    self.type_name(block.return_type)
                );
                if let Some(throw_type) = block.throw_type {
                    name.push_str(&format!(" !! {}", self.type_name(throw_type)));
                }
                name
            }
            Type::GeneratedTrait(tr) => {
                let arguments: Vec<_> =
                    tr.type_arguments.iter().map(|&arg| self.type_name(arg)).collect();
                format!("{}!({})", tr.name, arguments.join(", "))
            }
            Type::GenericTrait(tr) => format!("{}!({})", tr.name, tr.type_parameters.join(", ")),
            Type::Dynamic(_) => "Dynamic".to_owned(),
            Type::SelfType(_) => "Self".to_owned(),
            Type::Never(_) => "Never".to_owned(),
            ty => ty.name().unwrap_or("Object").to_owned(),
        }
    }
}
