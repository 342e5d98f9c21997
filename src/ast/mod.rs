//! Abstract syntax tree produced by [`crate::parser`] and consumed by
//! [`crate::codegen`].
//!
//! Rather than the single tagged-union node the reference implementation
//! uses for every kind, this AST splits value-producing nodes ([`Expr`]) from
//! control-flow/statement nodes ([`Stmt`]), one shape per kind, so a given
//! variant only carries the fields it actually needs.
//!
//! - [`expr`] - expression nodes ([`Expr`], [`ExprKind`])
//! - [`stmt`] - statement nodes ([`Stmt`], [`StmtKind`])
//! - [`program`] - functions and the top-level program ([`Function`],
//!   [`Program`], [`Local`])

mod expr;
mod program;
mod stmt;


pub use expr::{Expr, ExprKind};
pub use program::{Function, Local, Program};
pub use stmt::{Stmt, StmtKind};
