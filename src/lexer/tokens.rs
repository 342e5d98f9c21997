//! Token reading and recognition for the lexer.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input. Assumes trivia has
    /// already been skipped.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;
        let c = self
            .current_char()
            .expect("next_token called at end of input");

        if c == '"' {
            return self.read_string(start_pos, start_line, start_column);
        }

        if c.is_ascii_digit() {
            return self.read_number(start_pos, start_line, start_column);
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.read_identifier(start_pos, start_line, start_column));
        }

        if let Some(kind) = self.read_two_char_operator() {
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return Ok(Token::new(kind, span));
        }

        if let Some(kind) = self.read_one_char_punctuator(c) {
            self.advance();
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            return Ok(Token::new(kind, span));
        }

        let span = Span::new(start_pos, self.pos + c.len_utf8(), start_line, start_column);
        Err(LexError::invalid_token(c, span))
    }

    /// Tries `==`, `!=`, `<=`, `>=`, consuming both characters on a match.
    fn read_two_char_operator(&mut self) -> Option<TokenKind> {
        let kind = match () {
            _ if self.starts_with("==") => TokenKind::EqualEqual,
            _ if self.starts_with("!=") => TokenKind::BangEqual,
            _ if self.starts_with("<=") => TokenKind::LessEqual,
            _ if self.starts_with(">=") => TokenKind::GreaterEqual,
            _ => return None,
        };
        self.advance();
        self.advance();
        Some(kind)
    }

    fn read_one_char_punctuator(&self, c: char) -> Option<TokenKind> {
        Some(match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '=' => TokenKind::Equals,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '&' => TokenKind::Ampersand,
            _ => return None,
        })
    }

    /// Reads a string literal. Escape interpretation is deferred to the
    /// parser — this just skips `\X` as a pair so an escaped quote doesn't
    /// terminate the literal early, and stores the raw text between the
    /// delimiters.
    fn read_string(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.advance(); // opening "
        let text_start = self.pos;

        loop {
            match self.current_char() {
                Some('"') => {
                    let raw = self.input[text_start..self.pos].to_string();
                    self.advance(); // closing "
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::StringLiteral(raw), span));
                }
                Some('\\') => {
                    self.advance();
                    if self.current_char().is_some() {
                        self.advance();
                    }
                }
                Some(_) => self.advance(),
                None => {
                    return Err(LexError::unterminated_string(Span::new(
                        start_pos,
                        self.pos,
                        start_line,
                        start_column,
                    )));
                }
            }
        }
    }

    /// Reads `[A-Za-z_][A-Za-z0-9_]*` and classifies it as a keyword or a
    /// plain identifier.
    fn read_identifier(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let kind = TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()));
        Token::new(kind, span)
    }

    /// Reads a base-10 digit sequence.
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let value: i64 = text
            .parse()
            .map_err(|_| LexError::integer_literal_out_of_range(span))?;
        Ok(Token::new(TokenKind::Num(value), span))
    }
}
