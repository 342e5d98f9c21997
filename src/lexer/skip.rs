//! Whitespace and comment skipping for the lexer.

use super::Lexer;
use super::error::LexError;
use crate::token::Span;

impl<'a> Lexer<'a> {
    /// Skips whitespace, line comments and block comments in a loop, since
    /// any of them may be followed by another.
    pub(super) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            self.skip_whitespace();

            if self.starts_with("//") {
                self.skip_line_comment();
                continue;
            }

            if self.starts_with("/*") {
                self.skip_block_comment()?;
                continue;
            }

            break;
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_line_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '/'
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;
        self.advance(); // '/'
        self.advance(); // '*'
        loop {
            if self.starts_with("*/") {
                self.advance();
                self.advance();
                return Ok(());
            }
            if self.is_eof() {
                return Err(LexError::unclosed_block_comment(Span::new(
                    start_pos,
                    self.pos,
                    start_line,
                    start_column,
                )));
            }
            self.advance();
        }
    }
}
