//! Kiln typed intermediate representation (TIR).
//!
//! TIR is produced once type checking succeeds and consumed by the optimizer
//! and the code generator. Every instruction is an immutable value carrying an
//! optional destination [`Register`], a source location, and a fixed
//! [`InstructionKind`]. Passes walk instructions by implementing
//! [`InstructionVisitor`], which has one required method per kind.

pub mod code_object;
pub mod instruction;
pub mod operand;
pub mod register;
pub mod uses;

pub use code_object::CodeObject;
pub use instruction::*;
pub use operand::{FloatLiteral, Label, Operand};
pub use register::{Register, RegisterId, Registers};
pub use uses::{UsedRegisters, used_registers};
