//! Type variants and structural capability queries for the Kiln type checker.
//!
//! The type checker never matches on concrete type variants to decide how to
//! treat a value. Instead it asks a [`Type`] what it is through the
//! [`TypePredicates`] queries, each backed by a per-variant [`Capabilities`]
//! table.

pub mod capabilities;
pub mod database;
pub mod symbol_table;
pub mod types;

pub use capabilities::{Capabilities, Capability, TypeCapabilities, TypePredicates};
pub use database::{TypeDatabase, TypeId};
pub use symbol_table::{Mutability, Symbol, SymbolTable};
pub use types::{
    BlockKind, BlockType, DynamicType, GeneratedTraitType, GenericTraitType, NeverType,
    ObjectType, OptionalType, SelfType, TraitType, Type,
};
