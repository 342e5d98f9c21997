//! Top-level program structure.

use super::stmt::Stmt;

/// A local variable or parameter slot: a name (kept for diagnostics) and
/// its stack offset in bytes from the frame base pointer. All locals are
/// 8 bytes regardless of declared type.
#[derive(Debug, Clone)]
pub struct Local {
    pub name: String,
    pub offset: i64,
}

/// A function definition.
#[derive(Debug)]
pub struct Function {
    pub name: String,
    /// Parameters in declaration order, each already assigned a stack slot.
    pub params: Vec<Local>,
    pub body: Vec<Stmt>,
    /// The largest offset assigned to any local in this function (0 if
    /// none), i.e. the amount to subtract from `rsp` in the prologue.
    pub stack_size: i64,
}

/// The root of a compiled program: functions in source declaration order.
#[derive(Debug)]
pub struct Program {
    pub functions: Vec<Function>,
}
