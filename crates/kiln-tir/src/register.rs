//! Typed virtual registers.

use derive_more::Display;
use kiln_types::TypeId;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("r{_0}")]
pub struct RegisterId(pub u32);

/// A virtual register and the type of the value it holds.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("{id}")]
pub struct Register {
    pub id: RegisterId,
    pub ty: TypeId,
}

impl Register {
    pub const fn new(id: u32, ty: TypeId) -> Self {
        Self {
            id: RegisterId(id),
            ty,
        }
    }
}

/// Allocates the registers of a single code object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    types: Vec<TypeId>,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next register, holding values of type `ty`.
    ///
    /// # Panics
    ///
    /// Panics if `u32::MAX` registers were already allocated.
    pub fn allocate(&mut self, ty: TypeId) -> Register {
        let id = u32::try_from(self.types.len()).expect("register id overflow");
        self.types.push(ty);
        Register::new(id, ty)
    }

    pub fn get(&self, id: RegisterId) -> Option<Register> {
        self.types
            .get(id.0 as usize)
            .map(|&ty| Register { id, ty })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Register> + '_ {
        // `allocate` keeps every index within `u32`.
        self.types
            .iter()
            .enumerate()
            .map(|(index, &ty)| Register::new(index as u32, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_sequential_ids() {
        let mut registers = Registers::new();
        let a = registers.allocate(TypeId::STRING);
        let b = registers.allocate(TypeId::INTEGER);

        assert_eq!(a, Register::new(0, TypeId::STRING));
        assert_eq!(b.id, RegisterId(1));
        assert_eq!(registers.len(), 2);
        assert_eq!(registers.get(RegisterId(1)), Some(b));
        assert_eq!(registers.get(RegisterId(2)), None);
    }

    #[test]
    fn test_register_display() {
        assert_eq!(Register::new(7, TypeId::NIL).to_string(), "r7");
    }
}
