//! TIR instructions.
//!
//! Each instruction kind is a plain struct holding its operands, its
//! destination register (for kinds that produce a value) and its source
//! location. [`Instruction`] wraps every kind in a closed enum, and
//! [`InstructionKind`] is the fieldless discriminator of that enum.
//!
//! All of these, together with [`InstructionVisitor`], are generated from the
//! single table at the bottom of this file, so a kind, its discriminator and
//! its visitor method can never get out of sync. Adding a row to the table
//! adds a required visitor method, which every visitor then has to implement.
//!
//! Construction never validates operands: the IR builder is trusted to pass
//! registers of the right type.

use std::fmt;

use kiln_core::SourceLocation;

use crate::operand::{FloatLiteral, Label, Operand};
use crate::register::Register;

macro_rules! instructions {
    (@register $this:ident) => {
        None
    };
    (@register $this:ident $dest:ident) => {
        Some($this.$dest)
    };
    (
        $(
            $(#[$meta:meta])*
            $name:ident => $handler:ident($label:literal) $([$dest:ident])? {
                $($field:ident: $ty:ty),* $(,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq, Eq, Hash)]
            pub struct $name {
                $(pub $dest: Register,)?
                $(pub $field: $ty,)*
                pub location: SourceLocation,
            }

            impl $name {
                pub const KIND: InstructionKind = InstructionKind::$name;

                pub fn new($($dest: Register,)? $($field: $ty,)* location: SourceLocation) -> Self {
                    Self {
                        $($dest,)?
                        $($field,)*
                        location,
                    }
                }

                /// The register this instruction writes, if any.
                pub fn register(&self) -> Option<Register> {
                    instructions!(@register self $($dest)?)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    $(write!(f, "{} = ", self.$dest)?;)?
                    f.write_str($label)?;

                    let operands: &[&dyn Operand] = &[$(&self.$field as &dyn Operand),*];
                    for (index, operand) in operands.iter().enumerate() {
                        f.write_str(if index == 0 { " " } else { ", " })?;
                        operand.fmt_operand(f)?;
                    }

                    Ok(())
                }
            }

            impl From<$name> for Instruction {
                fn from(instruction: $name) -> Self {
                    Instruction::$name(instruction)
                }
            }
        )*

        /// The discriminator of an [`Instruction`].
        ///
        /// The order of the variants is the order of the instruction table and
        /// is stable for a given compiler version.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum InstructionKind {
            $($name,)*
        }

        impl InstructionKind {
            /// Every kind, in table order.
            pub const ALL: &'static [InstructionKind] = &[$(InstructionKind::$name,)*];

            /// The mnemonic used in instruction listings.
            pub fn name(self) -> &'static str {
                match self {
                    $(InstructionKind::$name => $label,)*
                }
            }

            /// The [`InstructionVisitor`] method handling this kind.
            pub fn handler_name(self) -> &'static str {
                match self {
                    $(InstructionKind::$name => stringify!($handler),)*
                }
            }
        }

        impl fmt::Display for InstructionKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        /// A single TIR instruction.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Instruction {
            $($name($name),)*
        }

        impl Instruction {
            pub fn kind(&self) -> InstructionKind {
                match self {
                    $(Instruction::$name(_) => InstructionKind::$name,)*
                }
            }

            /// The register this instruction writes, if any.
            pub fn register(&self) -> Option<Register> {
                match self {
                    $(Instruction::$name(instruction) => instruction.register(),)*
                }
            }

            pub fn location(&self) -> &SourceLocation {
                match self {
                    $(Instruction::$name(instruction) => &instruction.location,)*
                }
            }

            /// Routes this instruction to the visitor method of its kind.
            pub fn accept<V: InstructionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                match self {
                    $(Instruction::$name(instruction) => visitor.$handler(instruction),)*
                }
            }
        }

        impl fmt::Display for Instruction {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Instruction::$name(instruction) => fmt::Display::fmt(instruction, f),)*
                }
            }
        }

        /// A pass over TIR instructions, with one handler per instruction kind.
        pub trait InstructionVisitor {
            type Output;

            $(fn $handler(&mut self, instruction: &$name) -> Self::Output;)*
        }
    };
}

instructions! {
    /// Loads the runtime prototype of `Object`.
    GetObjectPrototype => on_get_object_prototype("get_object_prototype") [register] {}

    /// Loads the runtime prototype of `Integer`.
    GetIntegerPrototype => on_get_integer_prototype("get_integer_prototype") [register] {}

    /// Loads the runtime prototype of `Float`.
    GetFloatPrototype => on_get_float_prototype("get_float_prototype") [register] {}

    /// Loads the runtime prototype of the built-in string type.
    GetStringPrototype => on_get_string_prototype("get_string_prototype") [register] {}

    /// Loads the runtime prototype of `Array`.
    GetArrayPrototype => on_get_array_prototype("get_array_prototype") [register] {}

    /// Loads the runtime prototype of `Block`.
    GetBlockPrototype => on_get_block_prototype("get_block_prototype") [register] {}

    /// Loads the runtime prototype of `Boolean`.
    GetBooleanPrototype => on_get_boolean_prototype("get_boolean_prototype") [register] {}

    /// Loads the runtime prototype of `Nil`.
    GetNilPrototype => on_get_nil_prototype("get_nil_prototype") [register] {}

    GetTrue => on_get_true("get_true") [register] {}

    GetFalse => on_get_false("get_false") [register] {}

    GetNil => on_get_nil("get_nil") [register] {}

    /// Loads the top-level object.
    GetToplevel => on_get_toplevel("get_toplevel") [register] {}

    SetInteger => on_set_integer("set_integer") [register] {
        value: i64,
    }

    SetFloat => on_set_float("set_float") [register] {
        value: FloatLiteral,
    }

    SetString => on_set_string("set_string") [register] {
        value: String,
    }

    SetArray => on_set_array("set_array") [register] {
        values: Vec<Register>,
    }

    /// Allocates a new object with the given prototype.
    SetObject => on_set_object("set_object") [register] {
        prototype: Register,
    }

    SetAttribute => on_set_attribute("set_attribute") [register] {
        receiver: Register,
        name: String,
        value: Register,
    }

    GetAttribute => on_get_attribute("get_attribute") [register] {
        receiver: Register,
        name: String,
    }

    SetLocal => on_set_local("set_local") {
        local: String,
        value: Register,
    }

    GetLocal => on_get_local("get_local") [register] {
        local: String,
    }

    SetGlobal => on_set_global("set_global") {
        global: String,
        value: Register,
    }

    GetGlobal => on_get_global("get_global") [register] {
        global: String,
    }

    /// Sends `message` to `receiver` and stores the result.
    SendObjectMessage => on_send_object_message("send_object_message") [register] {
        receiver: Register,
        message: String,
        arguments: Vec<Register>,
    }

    /// Runs a block directly, without a message send.
    RunBlock => on_run_block("run_block") [register] {
        block: Register,
        arguments: Vec<Register>,
    }

    Return => on_return("return") {
        value: Register,
    }

    Throw => on_throw("throw") {
        value: Register,
    }

    Goto => on_goto("goto") {
        target: Label,
    }

    GotoIfTrue => on_goto_if_true("goto_if_true") {
        target: Label,
        condition: Register,
    }

    GotoIfFalse => on_goto_if_false("goto_if_false") {
        target: Label,
        condition: Register,
    }

    /// Loads and runs a module, storing the module object.
    LoadModule => on_load_module("load_module") [register] {
        module: String,
    }
}
