//! Lexical analyzer.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Scanning rules, applied in order at each position
//!
//! 1. Skip ASCII whitespace.
//! 2. Skip line comments (`//` through end of line) and block comments
//!    (`/* ... */`); an unterminated block comment is a fatal error.
//! 3. String literal: `"..."`. Escape interpretation is deferred to the
//!    parser; the lexer only consumes `\X` as a pair so an escaped quote
//!    doesn't end the literal early.
//! 4. Two-character operators before one-character: `==`, `!=`, `<=`, `>=`.
//! 5. One-character punctuators: `+ - * / % < > = ( ) { } [ ] ; , &`.
//! 6. Identifier, checked against the keyword table on exact match.
//! 7. Decimal integer literal.
//! 8. Anything else is an invalid-token error.
//!
//! # Examples
//!
//! ```
//! use subc::lexer::Lexer;
//! use subc::token::TokenKind;
//!
//! let mut lexer = Lexer::new("int main() { return 0; }");
//! let tokens = lexer.tokenize().unwrap();
//! assert!(matches!(tokens[0].kind, TokenKind::Int));
//! ```

mod cursor;
mod error;
mod skip;
mod tokens;


pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer over a single source buffer.
///
/// The `'a` lifetime ties the lexer to the input slice; string and
/// identifier tokens still copy their text out (see [`TokenKind`]) so the
/// token stream can outlive a borrow of the lexer itself.
pub struct Lexer<'a> {
    pub(super) input: &'a str,
    pub(super) pos: usize,
    pub(super) line: usize,
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input, returning a vector ending in
    /// [`TokenKind::Eof`].
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia()?;

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }
}
