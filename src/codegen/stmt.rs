//! Statement code generation.
//!
//! `If`/`While`/`For` each allocate a fresh sequence number from the
//! shared, program-wide label counter and use it to build their
//! `.L.begin.<n>`, `.L.else.<n>`, and `.L.end.<n>` labels.

use super::{Codegen, CodegenError};
use crate::ast::{Stmt, StmtKind};

impl Codegen {
    pub(super) fn emit_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::ExprStmt(expr) => {
                self.emit_expr(expr)?;
            }

            StmtKind::Return(expr) => {
                self.emit_expr(expr)?;
                self.instr(format!("jmp .L.return.{}", self.current_function));
            }

            StmtKind::If { cond, then_branch, else_branch } => {
                let seq = self.next_label();
                self.emit_expr(cond)?;
                self.instr("cmp rax, 0");
                match else_branch {
                    Some(else_branch) => {
                        self.instr(format!("je .L.else.{seq}"));
                        self.emit_stmt(then_branch)?;
                        self.instr(format!("jmp .L.end.{seq}"));
                        self.raw(&format!(".L.else.{seq}:"));
                        self.emit_stmt(else_branch)?;
                        self.raw(&format!(".L.end.{seq}:"));
                    }
                    None => {
                        self.instr(format!("je .L.end.{seq}"));
                        self.emit_stmt(then_branch)?;
                        self.raw(&format!(".L.end.{seq}:"));
                    }
                }
            }

            StmtKind::While { cond, body } => {
                let seq = self.next_label();
                self.raw(&format!(".L.begin.{seq}:"));
                self.emit_expr(cond)?;
                self.instr("cmp rax, 0");
                self.instr(format!("je .L.end.{seq}"));
                self.emit_stmt(body)?;
                self.instr(format!("jmp .L.begin.{seq}"));
                self.raw(&format!(".L.end.{seq}:"));
            }

            StmtKind::For { init, cond, inc, body } => {
                let seq = self.next_label();
                if let Some(init) = init {
                    self.emit_expr(init)?;
                }
                self.raw(&format!(".L.begin.{seq}:"));
                if let Some(cond) = cond {
                    self.emit_expr(cond)?;
                    self.instr("cmp rax, 0");
                    self.instr(format!("je .L.end.{seq}"));
                }
                self.emit_stmt(body)?;
                if let Some(inc) = inc {
                    self.emit_expr(inc)?;
                }
                self.instr(format!("jmp .L.begin.{seq}"));
                self.raw(&format!(".L.end.{seq}:"));
            }

            StmtKind::Block(stmts) => {
                for stmt in stmts {
                    self.emit_stmt(stmt)?;
                }
            }
        }
        Ok(())
    }
}
