//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::token::{Span, TokenKind};

fn span_over(start: Span, end: Span) -> Span {
    Span::new(start.start, end.end, start.line, start.column)
}

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt → "{" stmt* "}"
    ///      | "if" "(" expr ")" stmt ("else" stmt)?
    ///      | "while" "(" expr ")" stmt
    ///      | "for" "(" expr? ";" expr? ";" expr? ")" stmt
    ///      | "return" expr ";"
    ///      | type IDENTIFIER ";"
    ///      | expr ";"
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::LeftBrace => self.parse_block_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            _ if self.at_type_keyword() => self.parse_declaration_stmt(),
            _ => {
                let expr = self.parse_expr()?;
                let end = self.expect(&TokenKind::Semicolon)?;
                let span = span_over(expr.span, end);
                Ok(Stmt::new(StmtKind::ExprStmt(expr), span))
            }
        }
    }

    fn parse_block_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::LeftBrace)?;
        let mut body = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            body.push(self.parse_stmt()?);
        }
        let end = self.expect(&TokenKind::RightBrace)?;
        Ok(Stmt::new(StmtKind::Block(body), span_over(start, end)))
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::Return)?;
        let value = self.parse_expr()?;
        let end = self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Return(value), span_over(start, end)))
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LeftParen)?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        let then_branch = Box::new(self.parse_stmt()?);

        let (else_branch, end) = if matches!(self.current_kind(), TokenKind::Else) {
            self.advance();
            let branch = self.parse_stmt()?;
            let end = branch.span;
            (Some(Box::new(branch)), end)
        } else {
            let end = then_branch.span;
            (None, end)
        };

        Ok(Stmt::new(
            StmtKind::If { cond, then_branch, else_branch },
            span_over(start, end),
        ))
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LeftParen)?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        let body = Box::new(self.parse_stmt()?);
        let end = body.span;
        Ok(Stmt::new(StmtKind::While { cond, body }, span_over(start, end)))
    }

    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LeftParen)?;

        let init = if matches!(self.current_kind(), TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let cond = if matches!(self.current_kind(), TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let inc = if matches!(self.current_kind(), TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_stmt()?);
        let end = body.span;
        Ok(Stmt::new(
            StmtKind::For { init, cond, inc, body },
            span_over(start, end),
        ))
    }

    /// A bare declaration lowers to a no-op `ExprStmt(Num(0))`; declaring a
    /// local's stack slot is a side effect of parsing, not something the AST
    /// needs to represent as its own node.
    fn parse_declaration_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        self.parse_type()?;
        let name = self.expect_identifier()?;
        self.locals.find_or_declare(name);
        let end = self.expect(&TokenKind::Semicolon)?;
        let span = span_over(start, end);
        Ok(Stmt::new(
            StmtKind::ExprStmt(Expr::new(ExprKind::Num(0), start)),
            span,
        ))
    }
}
