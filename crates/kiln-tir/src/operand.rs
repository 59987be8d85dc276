//! Operand values and how they are printed in instruction listings.

use std::fmt;

use derive_more::Display;

use crate::register::Register;

/// A jump target within a code object.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("L{_0}")]
pub struct Label(pub u32);

/// A float literal stored by its bit pattern, so instructions holding one stay
/// comparable and hashable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FloatLiteral(u64);

impl FloatLiteral {
    pub fn new(value: f64) -> Self {
        Self(value.to_bits())
    }

    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl From<f64> for FloatLiteral {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value())
    }
}

/// Formatting of a single instruction operand.
pub trait Operand {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Operand for Register {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Operand for Label {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Operand for FloatLiteral {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Operand for i64 {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Operand for String {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Operand for Vec<Register> {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, register) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{register}")?;
        }
        f.write_str("]")
    }
}
