//! Expression parsing: recursive-descent, precedence-climbing.
//!
//! ```text
//! expr        = assign
//! assign      = equality ("=" assign)?              (right-associative)
//! equality    = relational (("==" | "!=") relational)*
//! relational  = add (("<" | "<=" | ">" | ">=") add)*
//! add         = mul (("+" | "-") mul)*
//! mul         = unary (("*" | "/" | "%") unary)*
//! unary       = ("+" | "-" | "*" | "&") unary | postfix
//! postfix     = primary ("[" expr "]")*
//! primary     = number | string
//!             | ident ("(" (expr ("," expr)*)? ")")?
//!             | "(" expr ")"
//!             | "sizeof" "(" type ")"
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind};
use crate::token::{Span, TokenKind};

/// Call sites beyond this many arguments are rejected at parse time rather
/// than silently truncated at codegen.
const MAX_CALL_ARGS: usize = 6;

fn span_over(start: Span, end: Span) -> Span {
    Span::new(start.start, end.end, start.line, start.column)
}

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_assign()
    }

    fn parse_assign(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_equality()?;
        if matches!(self.current_kind(), TokenKind::Equals) {
            self.advance();
            let rhs = self.parse_assign()?;
            let span = span_over(lhs.span, rhs.span);
            return Ok(Expr::new(ExprKind::Assign(Box::new(lhs), Box::new(rhs)), span));
        }
        Ok(lhs)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_relational()?;
        loop {
            node = match self.current_kind() {
                TokenKind::EqualEqual => {
                    self.advance();
                    let rhs = self.parse_relational()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Eq(Box::new(node), Box::new(rhs)), span)
                }
                TokenKind::BangEqual => {
                    self.advance();
                    let rhs = self.parse_relational()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Ne(Box::new(node), Box::new(rhs)), span)
                }
                _ => return Ok(node),
            };
        }
    }

    /// `a > b` becomes `Lt(b, a)` and `a >= b` becomes `Le(b, a)` — there is
    /// no `Gt`/`Ge` node kind.
    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_add()?;
        loop {
            node = match self.current_kind() {
                TokenKind::LessThan => {
                    self.advance();
                    let rhs = self.parse_add()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Lt(Box::new(node), Box::new(rhs)), span)
                }
                TokenKind::LessEqual => {
                    self.advance();
                    let rhs = self.parse_add()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Le(Box::new(node), Box::new(rhs)), span)
                }
                TokenKind::GreaterThan => {
                    self.advance();
                    let rhs = self.parse_add()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Lt(Box::new(rhs), Box::new(node)), span)
                }
                TokenKind::GreaterEqual => {
                    self.advance();
                    let rhs = self.parse_add()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Le(Box::new(rhs), Box::new(node)), span)
                }
                _ => return Ok(node),
            };
        }
    }

    fn parse_add(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_mul()?;
        loop {
            node = match self.current_kind() {
                TokenKind::Plus => {
                    self.advance();
                    let rhs = self.parse_mul()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Add(Box::new(node), Box::new(rhs)), span)
                }
                TokenKind::Minus => {
                    self.advance();
                    let rhs = self.parse_mul()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Sub(Box::new(node), Box::new(rhs)), span)
                }
                _ => return Ok(node),
            };
        }
    }

    fn parse_mul(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_unary()?;
        loop {
            node = match self.current_kind() {
                TokenKind::Star => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Mul(Box::new(node), Box::new(rhs)), span)
                }
                TokenKind::Slash => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Div(Box::new(node), Box::new(rhs)), span)
                }
                TokenKind::Percent => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    let span = span_over(node.span, rhs.span);
                    Expr::new(ExprKind::Mod(Box::new(node), Box::new(rhs)), span)
                }
                _ => return Ok(node),
            };
        }
    }

    /// Unary `-e` desugars to `0 - e`; unary `+e` is a no-op.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Plus => {
                self.advance();
                self.parse_unary()
            }
            TokenKind::Minus => {
                let start = self.current_span();
                self.advance();
                let operand = self.parse_unary()?;
                let span = span_over(start, operand.span);
                Ok(Expr::new(
                    ExprKind::Sub(
                        Box::new(Expr::new(ExprKind::Num(0), start)),
                        Box::new(operand),
                    ),
                    span,
                ))
            }
            TokenKind::Star => {
                let start = self.current_span();
                self.advance();
                let operand = self.parse_unary()?;
                let span = span_over(start, operand.span);
                Ok(Expr::new(ExprKind::Deref(Box::new(operand)), span))
            }
            TokenKind::Ampersand => {
                let start = self.current_span();
                self.advance();
                let operand = self.parse_unary()?;
                let span = span_over(start, operand.span);
                Ok(Expr::new(ExprKind::Addr(Box::new(operand)), span))
            }
            _ => self.parse_postfix(),
        }
    }

    /// `a[i]` desugars to `Deref(Add(a, i))`.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_primary()?;
        while matches!(self.current_kind(), TokenKind::LeftBracket) {
            self.advance();
            let index = self.parse_expr()?;
            let end = self.expect(&TokenKind::RightBracket)?;
            let span = span_over(node.span, end);
            node = Expr::new(
                ExprKind::Deref(Box::new(Expr::new(
                    ExprKind::Add(Box::new(node), Box::new(index)),
                    span,
                ))),
                span,
            );
        }
        Ok(node)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();

        match self.current_kind().clone() {
            TokenKind::Num(value) => {
                self.advance();
                Ok(Expr::new(ExprKind::Num(value), start))
            }
            TokenKind::StringLiteral(raw) => {
                self.advance();
                Ok(self.parse_string_literal(&raw, start))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let end = self.expect(&TokenKind::RightParen)?;
                Ok(Expr::new(inner.kind, span_over(start, end)))
            }
            TokenKind::Sizeof => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let size = self.parse_sizeof_type()?;
                let end = self.expect(&TokenKind::RightParen)?;
                Ok(Expr::new(ExprKind::Sizeof(size), span_over(start, end)))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                if matches!(self.current_kind(), TokenKind::LeftParen) {
                    self.parse_call(name, start)
                } else {
                    let offset = self.locals.find_or_declare(name);
                    Ok(Expr::new(ExprKind::LVar { offset }, start))
                }
            }
            other => Err(ParseError::new(
                format!("expected an expression, found {}", Self::token_kind_display(&other)),
                start,
            )),
        }
    }

    fn parse_call(&mut self, name: String, start: Span) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut args = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        let end = self.expect(&TokenKind::RightParen)?;

        if args.len() > MAX_CALL_ARGS {
            return Err(ParseError::new(
                format!(
                    "call to '{}' has {} arguments, but at most {} are supported",
                    name,
                    args.len(),
                    MAX_CALL_ARGS
                ),
                span_over(start, end),
            ));
        }

        Ok(Expr::new(
            ExprKind::FunCall { name, args },
            span_over(start, end),
        ))
    }
}
