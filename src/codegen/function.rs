//! Per-function prologue, body, and epilogue emission.

use super::{Codegen, CodegenError};
use crate::ast::Function;

const ARG_REGS: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

impl Codegen {
    pub(super) fn emit_function(&mut self, function: &Function) -> Result<(), CodegenError> {
        self.current_function = function.name.clone();

        self.raw(&format!(".globl {}", function.name));
        self.raw(&format!("{}:", function.name));

        self.instr("push rbp");
        self.instr("mov rbp, rsp");
        self.instr(format!("sub rsp, {}", function.stack_size));

        for (reg, param) in ARG_REGS.iter().zip(function.params.iter()) {
            self.instr(format!("mov [rbp-{}], {reg}", param.offset));
        }

        for stmt in &function.body {
            self.emit_stmt(stmt)?;
        }

        self.raw(&format!(".L.return.{}:", function.name));
        self.instr("mov rsp, rbp");
        self.instr("pop rbp");
        self.instr("ret");

        Ok(())
    }
}
