//! Type-keyword parsing.
//!
//! All locals are 8 bytes regardless of declared type, so outside of
//! `sizeof` the parser only needs to recognize and skip a type — it never
//! needs to remember what it was.

use super::Parser;
use super::error::ParseError;
use crate::token::TokenKind;

impl Parser {
    pub(super) fn at_type_keyword(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Int | TokenKind::Char | TokenKind::Void
        )
    }

    /// Consumes `("int" | "char" | "void") "*"*`.
    pub(super) fn parse_type(&mut self) -> Result<(), ParseError> {
        match self.current_kind() {
            TokenKind::Int | TokenKind::Char | TokenKind::Void => {
                self.advance();
            }
            _ => {
                return Err(ParseError::new(
                    format!(
                        "expected a type, found {}",
                        Self::token_kind_display(self.current_kind())
                    ),
                    self.current_span(),
                ));
            }
        }
        while matches!(self.current_kind(), TokenKind::Star) {
            self.advance();
        }
        Ok(())
    }

    /// Parses the type inside `sizeof(...)` and returns its precomputed
    /// size: 8 for `int`, 1 for `char`, 8 for any pointer type regardless of
    /// its pointee (including `void*`, so the base `void` itself carries no
    /// meaningful size and is never observable once a `*` follows it).
    pub(super) fn parse_sizeof_type(&mut self) -> Result<i64, ParseError> {
        let mut size = match self.current_kind() {
            TokenKind::Int => {
                self.advance();
                8
            }
            TokenKind::Char => {
                self.advance();
                1
            }
            TokenKind::Void => {
                self.advance();
                0
            }
            _ => {
                return Err(ParseError::new(
                    format!(
                        "expected a type name, found {}",
                        Self::token_kind_display(self.current_kind())
                    ),
                    self.current_span(),
                ));
            }
        };
        while matches!(self.current_kind(), TokenKind::Star) {
            self.advance();
            size = 8;
        }
        Ok(size)
    }
}
