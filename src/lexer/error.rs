//! Lexical analysis error types.

use crate::token::Span;

/// An error that occurred during lexical analysis.
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub(super) fn new(message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
        }
    }

    pub(super) fn unclosed_block_comment(span: Span) -> Self {
        LexError::new("unclosed block comment", span)
    }

    pub(super) fn unterminated_string(span: Span) -> Self {
        LexError::new("unterminated string literal", span)
    }

    pub(super) fn invalid_token(c: char, span: Span) -> Self {
        LexError::new(format!("invalid token '{}'", c), span)
    }

    pub(super) fn integer_literal_out_of_range(span: Span) -> Self {
        LexError::new("integer literal out of range", span)
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
