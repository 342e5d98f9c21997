//! Function definition parsing.

use super::Parser;
use super::error::ParseError;
use super::locals::Locals;
use crate::ast::Function;
use crate::token::TokenKind;

impl Parser {
    /// Parses a function definition.
    ///
    /// # Grammar
    ///
    /// ```text
    /// function → type IDENTIFIER "(" params? ")" "{" stmt* "}"
    /// params   → param ("," param)*
    /// param    → type IDENTIFIER
    /// ```
    ///
    /// Unlike the source this grammar was distilled from, every parameter
    /// must carry its own type — there is no fallback to "same type as the
    /// previous parameter".
    pub(super) fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.parse_type()?;
        let name = self.expect_identifier()?;

        self.locals = Locals::new();

        self.expect(&TokenKind::LeftParen)?;
        let mut params = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                self.parse_type()?;
                let param_name = self.expect_identifier()?;
                let offset = self.locals.declare_new(param_name.clone());
                params.push(crate::ast::Local { name: param_name, offset });
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen)?;

        self.expect(&TokenKind::LeftBrace)?;
        let mut body = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            body.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::RightBrace)?;

        let stack_size = self.locals.stack_size();

        Ok(Function { name, params, body, stack_size })
    }
}
