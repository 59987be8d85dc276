//! Registers read by an instruction.
//!
//! Liveness analysis and dead-code elimination need to know which registers an
//! instruction reads, as opposed to the one it writes.

use crate::instruction::*;
use crate::register::Register;

/// Returns the registers `instruction` reads, in operand order.
pub fn used_registers(instruction: &Instruction) -> Vec<Register> {
    instruction.accept(&mut UsedRegisters)
}

/// Visitor collecting the source registers of an instruction.
pub struct UsedRegisters;

impl InstructionVisitor for UsedRegisters {
    type Output = Vec<Register>;

    fn on_get_object_prototype(&mut self, _: &GetObjectPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_integer_prototype(&mut self, _: &GetIntegerPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_float_prototype(&mut self, _: &GetFloatPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_string_prototype(&mut self, _: &GetStringPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_array_prototype(&mut self, _: &GetArrayPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_block_prototype(&mut self, _: &GetBlockPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_boolean_prototype(&mut self, _: &GetBooleanPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_nil_prototype(&mut self, _: &GetNilPrototype) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_true(&mut self, _: &GetTrue) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_false(&mut self, _: &GetFalse) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_nil(&mut self, _: &GetNil) -> Vec<Register> {
        Vec::new()
    }

    fn on_get_toplevel(&mut self, _: &GetToplevel) -> Vec<Register> {
        Vec::new()
    }

    fn on_set_integer(&mut self, _: &SetInteger) -> Vec<Register> {
        Vec::new()
    }

    fn on_set_float(&mut self, _: &SetFloat) -> Vec<Register> {
        Vec::new()
    }

    fn on_set_string(&mut self, _: &SetString) -> Vec<Register> {
        Vec::new()
    }

    fn on_set_array(&mut self, instruction: &SetArray) -> Vec<Register> {
        instruction.values.clone()
    }

    fn on_set_object(&mut self, instruction: &SetObject) -> Vec<Register> {
        vec![instruction.prototype]
    }

    fn on_set_attribute(&mut self, instruction: &SetAttribute) -> Vec<Register> {
        vec![instruction.receiver, instruction.value]
    }

    fn on_get_attribute(&mut self, instruction: &GetAttribute) -> Vec<Register> {
        vec![instruction.receiver]
    }

    fn on_set_local(&mut self, instruction: &SetLocal) -> Vec<Register> {
        vec![instruction.value]
    }

    fn on_get_local(&mut self, _: &GetLocal) -> Vec<Register> {
        Vec::new()
    }

    fn on_set_global(&mut self, instruction: &SetGlobal) -> Vec<Register> {
        vec![instruction.value]
    }

    fn on_get_global(&mut self, _: &GetGlobal) -> Vec<Register> {
        Vec::new()
    }

    fn on_send_object_message(&mut self, instruction: &SendObjectMessage) -> Vec<Register> {
        let mut used = vec![instruction.receiver];
        used.extend_from_slice(&instruction.arguments);
        used
    }

    fn on_run_block(&mut self, instruction: &RunBlock) -> Vec<Register> {
        let mut used = vec![instruction.block];
        used.extend_from_slice(&instruction.arguments);
        used
    }

    fn on_return(&mut self, instruction: &Return) -> Vec<Register> {
        vec![instruction.value]
    }

    fn on_throw(&mut self, instruction: &Throw) -> Vec<Register> {
        vec![instruction.value]
    }

    fn on_goto(&mut self, _: &Goto) -> Vec<Register> {
        Vec::new()
    }

    fn on_goto_if_true(&mut self, instruction: &GotoIfTrue) -> Vec<Register> {
        vec![instruction.condition]
    }

    fn on_goto_if_false(&mut self, instruction: &GotoIfFalse) -> Vec<Register> {
        vec![instruction.condition]
    }

    fn on_load_module(&mut self, _: &LoadModule) -> Vec<Register> {
        Vec::new()
    }
}
