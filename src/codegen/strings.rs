//! String literal collection and `.data` section emission.
//!
//! Literals are emitted in the order the parser first encountered them
//! (their `label` field), which requires a depth-first walk of every
//! function body mirroring the node's children exactly.

use super::Codegen;
use crate::ast::{Expr, ExprKind, Program, Stmt, StmtKind};

impl Codegen {
    pub(super) fn emit_strings(&mut self, program: &Program) {
        self.raw(".data");
        for function in &program.functions {
            for stmt in &function.body {
                self.emit_strings_stmt(stmt);
            }
        }
    }

    fn emit_strings_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::ExprStmt(e) | StmtKind::Return(e) => self.emit_strings_expr(e),
            StmtKind::If { cond, then_branch, else_branch } => {
                self.emit_strings_expr(cond);
                self.emit_strings_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.emit_strings_stmt(else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.emit_strings_expr(cond);
                self.emit_strings_stmt(body);
            }
            StmtKind::For { init, cond, inc, body } => {
                if let Some(e) = init {
                    self.emit_strings_expr(e);
                }
                if let Some(e) = cond {
                    self.emit_strings_expr(e);
                }
                if let Some(e) = inc {
                    self.emit_strings_expr(e);
                }
                self.emit_strings_stmt(body);
            }
            StmtKind::Block(stmts) => {
                for s in stmts {
                    self.emit_strings_stmt(s);
                }
            }
        }
    }

    fn emit_strings_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::StringLiteral { bytes, label } => {
                self.raw(&format!(".LC{label}:"));
                self.instr(format!(".string \"{}\"", escape(bytes)));
            }
            ExprKind::Num(_) | ExprKind::LVar { .. } | ExprKind::Sizeof(_) => {}
            ExprKind::Assign(lhs, rhs)
            | ExprKind::Add(lhs, rhs)
            | ExprKind::Sub(lhs, rhs)
            | ExprKind::Mul(lhs, rhs)
            | ExprKind::Div(lhs, rhs)
            | ExprKind::Mod(lhs, rhs)
            | ExprKind::Eq(lhs, rhs)
            | ExprKind::Ne(lhs, rhs)
            | ExprKind::Lt(lhs, rhs)
            | ExprKind::Le(lhs, rhs) => {
                self.emit_strings_expr(lhs);
                self.emit_strings_expr(rhs);
            }
            ExprKind::Addr(inner) | ExprKind::Deref(inner) => self.emit_strings_expr(inner),
            ExprKind::FunCall { args, .. } => {
                for arg in args {
                    self.emit_strings_expr(arg);
                }
            }
        }
    }
}

/// Escapes a decoded string literal the way the assembler's `.string`
/// directive expects: `\n`, `\t`, `\\` and `"` are re-escaped; everything
/// else passes through verbatim.
fn escape(bytes: &[u8]) -> String {
    let text = std::str::from_utf8(bytes).unwrap_or_default();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_newline_tab_backslash_and_quote() {
        assert_eq!(escape(b"a\nb\tc\\d\"e"), "a\\nb\\tc\\\\d\\\"e");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape(b"hello"), "hello");
    }
}
