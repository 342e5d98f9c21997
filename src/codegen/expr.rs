//! Expression code generation.
//!
//! Every expression leaves its result in `rax`. Binary operators evaluate
//! the left operand first and push it, then evaluate the right operand and
//! pop the left operand back into `rdi`, so `rdi` holds the left operand
//! and `rax` the right one going into the operator itself.

use super::{Codegen, CodegenError};
use crate::ast::{Expr, ExprKind};

impl Codegen {
    pub(super) fn emit_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::Num(n) => self.instr(format!("mov rax, {n}")),
            ExprKind::Sizeof(n) => self.instr(format!("mov rax, {n}")),

            ExprKind::StringLiteral { label, .. } => {
                self.instr(format!("lea rax, [rip + .LC{label}]"));
            }

            ExprKind::LVar { .. } => {
                self.emit_lvalue_addr(expr)?;
                self.instr("pop rax");
                self.instr("mov rax, [rax]");
            }

            ExprKind::Assign(lhs, rhs) => {
                self.emit_lvalue_addr(lhs)?;
                self.emit_expr(rhs)?;
                self.instr("pop rdi");
                self.instr("mov [rdi], rax");
            }

            ExprKind::Addr(inner) => {
                if !matches!(inner.kind, ExprKind::LVar { .. }) {
                    return Err(CodegenError::not_an_lvalue(inner.span));
                }
                self.emit_lvalue_addr(inner)?;
                self.instr("pop rax");
            }

            ExprKind::Deref(inner) => {
                self.emit_expr(inner)?;
                self.instr("mov rax, [rax]");
            }

            ExprKind::Add(lhs, rhs) => {
                self.emit_binary_operands(lhs, rhs)?;
                self.instr("add rax, rdi");
            }
            ExprKind::Sub(lhs, rhs) => {
                self.emit_binary_operands(lhs, rhs)?;
                self.instr("sub rdi, rax");
                self.instr("mov rax, rdi");
            }
            ExprKind::Mul(lhs, rhs) => {
                self.emit_binary_operands(lhs, rhs)?;
                self.instr("imul rax, rdi");
            }
            ExprKind::Div(lhs, rhs) => {
                self.emit_binary_operands(lhs, rhs)?;
                self.instr("mov rcx, rax");
                self.instr("mov rax, rdi");
                self.instr("cqo");
                self.instr("idiv rcx");
            }
            ExprKind::Mod(lhs, rhs) => {
                self.emit_binary_operands(lhs, rhs)?;
                self.instr("mov rcx, rax");
                self.instr("mov rax, rdi");
                self.instr("cqo");
                self.instr("idiv rcx");
                self.instr("mov rax, rdx");
            }

            ExprKind::Eq(lhs, rhs) => self.emit_compare(lhs, rhs, "sete")?,
            ExprKind::Ne(lhs, rhs) => self.emit_compare(lhs, rhs, "setne")?,
            ExprKind::Lt(lhs, rhs) => self.emit_compare(lhs, rhs, "setl")?,
            ExprKind::Le(lhs, rhs) => self.emit_compare(lhs, rhs, "setle")?,

            ExprKind::FunCall { name, args } => self.emit_call(name, args)?,
        }
        Ok(())
    }

    /// Computes the address of an lvalue and pushes it. Exactly `LVar` and
    /// `Deref` nodes are lvalues; anything else reaching here means the
    /// parser produced a malformed AST.
    pub(super) fn emit_lvalue_addr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::LVar { offset } => {
                self.instr("mov rax, rbp");
                self.instr(format!("sub rax, {offset}"));
                self.instr("push rax");
                Ok(())
            }
            ExprKind::Deref(inner) => {
                self.emit_expr(inner)?;
                self.instr("push rax");
                Ok(())
            }
            _ => Err(CodegenError::not_an_lvalue(expr.span)),
        }
    }

    fn emit_binary_operands(&mut self, lhs: &Expr, rhs: &Expr) -> Result<(), CodegenError> {
        self.emit_expr(lhs)?;
        self.instr("push rax");
        self.emit_expr(rhs)?;
        self.instr("pop rdi");
        Ok(())
    }

    fn emit_compare(&mut self, lhs: &Expr, rhs: &Expr, set_op: &str) -> Result<(), CodegenError> {
        self.emit_binary_operands(lhs, rhs)?;
        self.instr("cmp rdi, rax");
        self.instr(format!("{set_op} al"));
        self.instr("movzb rax, al");
        Ok(())
    }
}
