//! Expression nodes.

use crate::token::Span;

/// The kind of an expression, one shape per [§3 Data Model][crate] node kind
/// that produces a value.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// An integer literal.
    Num(i64),

    /// A string literal. `label` is the `.LC<label>` index assigned the
    /// first time this literal's bytes were seen during parsing.
    StringLiteral { bytes: Vec<u8>, label: usize },

    /// A reference to a local variable or parameter, by its stack offset
    /// from the frame base pointer.
    LVar { offset: i64 },

    Assign(Box<Expr>, Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    Ne(Box<Expr>, Box<Expr>),
    Lt(Box<Expr>, Box<Expr>),
    Le(Box<Expr>, Box<Expr>),

    /// Address-of. Valid only when `inner` is an `LVar`; anything else is a
    /// codegen-time invariant violation, not a parse error.
    Addr(Box<Expr>),

    /// Pointer dereference.
    Deref(Box<Expr>),

    /// A function call with 0 to 6 arguments, evaluated left to right.
    FunCall { name: String, args: Vec<Expr> },

    /// `sizeof(...)`, already folded to its constant value by the parser.
    /// Kept as a distinct kind (rather than collapsed into `Num`) to mirror
    /// where it came from in source.
    Sizeof(i64),
}

/// An expression with its source location.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
