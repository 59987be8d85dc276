//! Capability tables backing the type predicates.
//!
//! Every type variant declares the set of structural categories it belongs to
//! as an associated constant. A variant that does not declare anything belongs
//! to no category, so every predicate answers `false` for it.

use derive_more::Display;

/// A structural category a type can belong to.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The type may represent the absence of a value.
    #[display("optional")]
    Optional,
    /// The type can be called (closures, lambdas and methods).
    #[display("block")]
    Block,
    /// The type is a concrete, instantiated object.
    #[display("regular object")]
    RegularObject,
    /// The type is a plain structural interface.
    #[display("trait")]
    Trait,
    /// The type is a trait declaration with unbound type parameters.
    #[display("generic trait")]
    GenericTrait,
    /// The type is a trait specialized from a generic trait.
    #[display("generated trait")]
    GeneratedTrait,
    /// The type escapes static verification.
    #[display("dynamic")]
    Dynamic,
    /// The type is the `Self` placeholder, resolved per use site.
    #[display("self type")]
    SelfType,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::Optional,
        Capability::Block,
        Capability::RegularObject,
        Capability::Trait,
        Capability::GenericTrait,
        Capability::GeneratedTrait,
        Capability::Dynamic,
        Capability::SelfType,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A fixed set of capabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);

    pub const fn with(self, capability: Capability) -> Self {
        Capabilities(self.0 | capability.bit())
    }

    pub const fn has(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.has(*capability))
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Capabilities::NONE, |caps, capability| caps.with(capability))
    }
}

/// The capability table of a single type variant.
pub trait TypeCapabilities {
    const CAPABILITIES: Capabilities = Capabilities::NONE;
}

/// The structural queries the type checker asks of a type.
///
/// All queries are pure: they only read the capability table, which never
/// changes for a given type.
pub trait TypePredicates {
    fn capabilities(&self) -> Capabilities;

    fn is_optional(&self) -> bool {
        self.capabilities().has(Capability::Optional)
    }

    fn is_block(&self) -> bool {
        self.capabilities().has(Capability::Block)
    }

    fn is_regular_object(&self) -> bool {
        self.capabilities().has(Capability::RegularObject)
    }

    fn is_trait(&self) -> bool {
        self.capabilities().has(Capability::Trait)
    }

    fn is_generic_trait(&self) -> bool {
        self.capabilities().has(Capability::GenericTrait)
    }

    fn is_generated_trait(&self) -> bool {
        self.capabilities().has(Capability::GeneratedTrait)
    }

    fn is_dynamic(&self) -> bool {
        self.capabilities().has(Capability::Dynamic)
    }

    fn is_self_type(&self) -> bool {
        self.capabilities().has(Capability::SelfType)
    }
}

impl<T: TypeCapabilities> TypePredicates for T {
    fn capabilities(&self) -> Capabilities {
        T::CAPABILITIES
    }
}
