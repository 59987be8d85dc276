//! Type variants.

use derive_more::{Display, From};

use crate::capabilities::{Capabilities, Capability, TypeCapabilities, TypePredicates};
use crate::database::TypeId;
use crate::symbol_table::{Mutability, Symbol, SymbolTable};

/// A type known to the type checker.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub enum Type {
    Optional(OptionalType),
    Block(BlockType),
    Object(ObjectType),
    Trait(TraitType),
    GenericTrait(GenericTraitType),
    GeneratedTrait(GeneratedTraitType),
    Dynamic(DynamicType),
    SelfType(SelfType),
    Never(NeverType),
}

impl TypePredicates for Type {
    fn capabilities(&self) -> Capabilities {
        match self {
            Type::Optional(_) => OptionalType::CAPABILITIES,
            Type::Block(_) => BlockType::CAPABILITIES,
            Type::Object(_) => ObjectType::CAPABILITIES,
            Type::Trait(_) => TraitType::CAPABILITIES,
            Type::GenericTrait(_) => GenericTraitType::CAPABILITIES,
            Type::GeneratedTrait(_) => GeneratedTraitType::CAPABILITIES,
            Type::Dynamic(_) => DynamicType::CAPABILITIES,
            Type::SelfType(_) => SelfType::CAPABILITIES,
            Type::Never(_) => NeverType::CAPABILITIES,
        }
    }
}

impl Type {
    /// The methods a value of this type is required or known to respond to,
    /// not counting any prototype.
    pub fn own_methods(&self) -> Option<&SymbolTable> {
        match self {
            Type::Object(object) => Some(&object.methods),
            Type::Trait(tr) => Some(&tr.required_methods),
            Type::GenericTrait(tr) => Some(&tr.required_methods),
            Type::GeneratedTrait(tr) => Some(&tr.required_methods),
            _ => None,
        }
    }

    /// The declared name of the type, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Object(object) => object.name.as_deref(),
            Type::Trait(tr) => Some(&tr.name),
            Type::GenericTrait(tr) => Some(&tr.name),
            Type::GeneratedTrait(tr) => Some(&tr.name),
            _ => None,
        }
    }
}

/// A type that may also be `Nil`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OptionalType {
    pub inner: TypeId,
}

impl TypeCapabilities for OptionalType {
    const CAPABILITIES: Capabilities = Capabilities::NONE.with(Capability::Optional);
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum BlockKind {
    #[display("do")]
    Closure,
    #[display("lambda")]
    Lambda,
    #[display("def")]
    Method,
}

/// A callable type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockType {
    pub kind: BlockKind,
    pub arguments: Vec<TypeId>,
    pub return_type: TypeId,
    pub throw_type: Option<TypeId>,
}

impl TypeCapabilities for BlockType {
    const CAPABILITIES: Capabilities = Capabilities::NONE.with(Capability::Block);
}

impl BlockType {
    pub fn new(kind: BlockKind, arguments: Vec<TypeId>, return_type: TypeId) -> Self {
        Self {
            kind,
            arguments,
            return_type,
            throw_type: None,
        }
    }

    pub fn with_throw_type(mut self, throw_type: TypeId) -> Self {
        self.throw_type = Some(throw_type);
        self
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

/// A concrete object, optionally inheriting from a prototype.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectType {
    /// The name of the object, if any.
    pub name: Option<String>,
    pub attributes: SymbolTable,
    pub methods: SymbolTable,
    /// The traits this object implements.
    pub implemented_traits: Vec<TypeId>,
    pub type_arguments: SymbolTable,
    pub prototype: Option<TypeId>,
}

impl TypeCapabilities for ObjectType {
    const CAPABILITIES: Capabilities = Capabilities::NONE.with(Capability::RegularObject);
}

impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_prototype(mut self, prototype: TypeId) -> Self {
        self.prototype = Some(prototype);
        self
    }

    pub fn define_immutable_attribute(&mut self, name: impl Into<String>, ty: TypeId) -> &Symbol {
        self.attributes.define(name, ty, Mutability::Immutable)
    }

    pub fn define_mutable_attribute(&mut self, name: impl Into<String>, ty: TypeId) -> &Symbol {
        self.attributes.define(name, ty, Mutability::Mutable)
    }

    pub fn define_method(&mut self, name: impl Into<String>, ty: TypeId) -> &Symbol {
        self.methods.define(name, ty, Mutability::Immutable)
    }

    pub fn implement_trait(&mut self, trait_type: TypeId) {
        if !self.implemented_traits.contains(&trait_type) {
            self.implemented_traits.push(trait_type);
        }
    }
}

/// A non-generic trait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitType {
    pub name: String,
    pub required_methods: SymbolTable,
}

impl TypeCapabilities for TraitType {
    const CAPABILITIES: Capabilities = Capabilities::NONE.with(Capability::Trait);
}

impl TraitType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_methods: SymbolTable::new(),
        }
    }

    pub fn define_required_method(&mut self, name: impl Into<String>, ty: TypeId) -> &Symbol {
        self.required_methods.define(name, ty, Mutability::Immutable)
    }
}

/// A trait declaration whose type parameters are not yet bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericTraitType {
    pub name: String,
    pub type_parameters: Vec<String>,
    pub required_methods: SymbolTable,
}

impl TypeCapabilities for GenericTraitType {
    const CAPABILITIES: Capabilities = Capabilities::NONE.with(Capability::GenericTrait);
}

impl GenericTraitType {
    pub fn new(name: impl Into<String>, type_parameters: Vec<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters,
            required_methods: SymbolTable::new(),
        }
    }

    pub fn define_required_method(&mut self, name: impl Into<String>, ty: TypeId) -> &Symbol {
        self.required_methods.define(name, ty, Mutability::Immutable)
    }
}

/// A trait produced by binding the type parameters of a generic trait.
///
/// A generated trait is usable anywhere a plain trait is, so it answers both
/// the trait and the generated trait queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedTraitType {
    pub name: String,
    pub generic: TypeId,
    pub type_arguments: Vec<TypeId>,
    pub required_methods: SymbolTable,
}

impl TypeCapabilities for GeneratedTraitType {
    const CAPABILITIES: Capabilities = Capabilities::NONE
        .with(Capability::Trait)
        .with(Capability::GeneratedTrait);
}

/// A type that is not checked statically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DynamicType;

impl TypeCapabilities for DynamicType {
    const CAPABILITIES: Capabilities = Capabilities::NONE.with(Capability::Dynamic);
}

/// The `Self` placeholder, resolved to the enclosing type at each use site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelfType;

impl TypeCapabilities for SelfType {
    const CAPABILITIES: Capabilities = Capabilities::NONE.with(Capability::SelfType);
}

/// The type of expressions that never produce a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeverType;

impl TypeCapabilities for NeverType {}
