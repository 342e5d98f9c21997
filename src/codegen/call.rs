//! Function-call code generation: argument marshaling and stack alignment.
//!
//! Arguments are evaluated and pushed in true left-to-right (source) order;
//! once every argument is on the stack, they are popped into the
//! calling-convention register sequence in reverse index order. Because the
//! last argument pushed is the first one popped, this lands argument 0 in
//! `rdi`, argument 1 in `rsi`, and so on, while still evaluating left to
//! right — the reference this was grounded on instead evaluates arguments
//! right to left so that a single forward pop lines them up; evaluating
//! left to right and popping in reverse gets the same registers with
//! source-order evaluation.
//!
//! Every call site, including zero-argument ones, is wrapped in a runtime
//! 16-byte stack alignment check: `rsp` may be misaligned by the `push`es
//! above, and the System V calling convention requires 16-byte alignment
//! immediately before `call`.

use super::{Codegen, CodegenError};
use crate::ast::Expr;

const ARG_REGS: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

impl Codegen {
    pub(super) fn emit_call(&mut self, name: &str, args: &[Expr]) -> Result<(), CodegenError> {
        for arg in args {
            self.emit_expr(arg)?;
            self.instr("push rax");
        }

        let n = args.len().min(ARG_REGS.len());
        for reg in ARG_REGS[..n].iter().rev() {
            self.instr(format!("pop {reg}"));
        }

        let seq = self.next_label();

        self.instr("mov rax, rsp");
        self.instr("and rax, 15");
        self.instr(format!("jnz .L.call.{seq}"));
        self.instr("mov rax, 0");
        self.instr(format!("call {name}"));
        self.instr(format!("jmp .L.end.{seq}"));
        self.raw(&format!(".L.call.{seq}:"));
        self.instr("sub rsp, 8");
        self.instr("mov rax, 0");
        self.instr(format!("call {name}"));
        self.instr("add rsp, 8");
        self.raw(&format!(".L.end.{seq}:"));

        Ok(())
    }
}
