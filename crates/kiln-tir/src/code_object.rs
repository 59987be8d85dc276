//! Compiled bodies of modules, methods and blocks.

use std::fmt;

use kiln_core::SourceLocation;
use kiln_types::TypeId;

use crate::instruction::{Instruction, InstructionVisitor};
use crate::register::{Register, Registers};

/// An ordered sequence of instructions and the registers they use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeObject {
    pub name: String,
    pub location: SourceLocation,
    registers: Registers,
    instructions: Vec<Instruction>,
}

impl CodeObject {
    pub fn new(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            location,
            registers: Registers::new(),
            instructions: Vec::new(),
        }
    }

    pub fn allocate_register(&mut self, ty: TypeId) -> Register {
        self.registers.allocate(ty)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Appends an instruction and returns the register it writes, if any.
    pub fn push(&mut self, instruction: impl Into<Instruction>) -> Option<Register> {
        let instruction = instruction.into();
        let register = instruction.register();
        self.instructions.push(instruction);
        register
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Runs `visitor` over every instruction in order.
    pub fn accept_all<V: InstructionVisitor + ?Sized>(&self, visitor: &mut V) -> Vec<V::Output> {
        self.instructions
            .iter()
            .map(|instruction| instruction.accept(visitor))
            .collect()
    }
}

impl fmt::Display for CodeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}):", self.name, self.location)?;
        for instruction in &self.instructions {
            writeln!(f, "  {instruction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::instruction::*;
    use crate::operand::Label;

    fn location(line: u32) -> SourceLocation {
        SourceLocation::new("main.kiln", line, 1, Default::default())
    }

    /// Builds the body of `if flag { "yes" } else { nil }`.
    fn branch_body() -> CodeObject {
        let mut code = CodeObject::new("main", location(1));

        let flag = code.allocate_register(TypeId::BOOLEAN);
        code.push(GetTrue::new(flag, location(1)));
        code.push(GotoIfFalse::new(Label(1), flag, location(1)));

        let string = code.allocate_register(TypeId::STRING);
        code.push(SetString::new(string, "yes".to_owned(), location(2)));
        code.push(Return::new(string, location(2)));

        let nil = code.allocate_register(TypeId::NIL);
        code.push(GetNil::new(nil, location(4)));
        code.push(Return::new(nil, location(4)));
        code
    }

    struct KindCounter {
        returns: usize,
        branches: usize,
    }

    impl InstructionVisitor for KindCounter {
        type Output = ();

        fn on_get_object_prototype(&mut self, _: &GetObjectPrototype) {}
        fn on_get_integer_prototype(&mut self, _: &GetIntegerPrototype) {}
        fn on_get_float_prototype(&mut self, _: &GetFloatPrototype) {}
        fn on_get_string_prototype(&mut self, _: &GetStringPrototype) {}
        fn on_get_array_prototype(&mut self, _: &GetArrayPrototype) {}
        fn on_get_block_prototype(&mut self, _: &GetBlockPrototype) {}
        fn on_get_boolean_prototype(&mut self, _: &GetBooleanPrototype) {}
        fn on_get_nil_prototype(&mut self, _: &GetNilPrototype) {}
        fn on_get_true(&mut self, _: &GetTrue) {}
        fn on_get_false(&mut self, _: &GetFalse) {}
        fn on_get_nil(&mut self, _: &GetNil) {}
        fn on_get_toplevel(&mut self, _: &GetToplevel) {}
        fn on_set_integer(&mut self, _: &SetInteger) {}
        fn on_set_float(&mut self, _: &SetFloat) {}
        fn on_set_string(&mut self, _: &SetString) {}
        fn on_set_array(&mut self, _: &SetArray) {}
        fn on_set_object(&mut self, _: &SetObject) {}
        fn on_set_attribute(&mut self, _: &SetAttribute) {}
        fn on_get_attribute(&mut self, _: &GetAttribute) {}
        fn on_set_local(&mut self, _: &SetLocal) {}
        fn on_get_local(&mut self, _: &GetLocal) {}
        fn on_set_global(&mut self, _: &SetGlobal) {}
        fn on_get_global(&mut self, _: &GetGlobal) {}
        fn on_send_object_message(&mut self, _: &SendObjectMessage) {}
        fn on_run_block(&mut self, _: &RunBlock) {}

        fn on_return(&mut self, _: &Return) {
            self.returns += 1;
        }

        fn on_throw(&mut self, _: &Throw) {}

        fn on_goto(&mut self, _: &Goto) {
            self.branches += 1;
        }

        fn on_goto_if_true(&mut self, _: &GotoIfTrue) {
            self.branches += 1;
        }

        fn on_goto_if_false(&mut self, _: &GotoIfFalse) {
            self.branches += 1;
        }

        fn on_load_module(&mut self, _: &LoadModule) {}
    }

    #[test]
    fn test_push_returns_destination() {
        let mut code = CodeObject::new("main", location(1));
        let register = code.allocate_register(TypeId::STRING);

        assert_eq!(
            code.push(GetStringPrototype::new(register, location(1))),
            Some(register)
        );
        assert_eq!(code.push(Throw::new(register, location(2))), None);
        assert_eq!(code.len(), 2);
    }

    #[test]
    fn test_visitor_dispatch() {
        let code = branch_body();
        let mut counter = KindCounter {
            returns: 0,
            branches: 0,
        };

        let outputs = code.accept_all(&mut counter);

        assert_eq!(outputs.len(), code.len());
        assert_eq!(counter.returns, 2);
        assert_eq!(counter.branches, 1);
    }

    #[test]
    fn test_listing() {
        assert_snapshot!(branch_body().to_string(), @r#"
        main (main.kiln:1:1):
          r0 = get_true
          goto_if_false L1, r0
          r1 = set_string "yes"
          return r1
          r2 = get_nil
          return r2
        "#);
    }
}
