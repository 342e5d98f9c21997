//! Source-location diagnostic rendering, matching spec §6's fixed format
//! exactly: the full source on one line, a caret positioned at the
//! offending byte via space padding, and a short message.
//!
//! This intentionally does not produce a multi-line, line-indexed report —
//! the format here is a specified, testable property (every lex/parse/
//! codegen error renders the same way), not a cosmetic choice, so it is
//! reproduced directly rather than delegated to a general-purpose
//! diagnostics crate.

use crate::CompileError;

/// Prints a single-line-source-plus-caret diagnostic to stderr for a
/// lex/parse/codegen error, then a single-line diagnostic for a plain
/// argument or I/O error.
pub fn report_compile_error(source: &str, error: &CompileError) {
    let pos = error.span().start.min(source.len());
    eprintln!("{source}");
    eprintln!("{}^ {}", " ".repeat(pos), error.message());
}

/// Prints a single-line diagnostic for an error with no source position
/// (argument parsing, file I/O) — spec §6: "Other errors print a single
/// line."
pub fn report_plain_error(message: impl std::fmt::Display) {
    eprintln!("Error: {message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn lex_error_carries_the_offending_byte_offset() {
        let source = "int main() { return @; }";
        let mut lexer = Lexer::new(source);
        let err = lexer.tokenize().unwrap_err();
        assert_eq!(err.span.start, 20);
    }

    #[test]
    fn report_compile_error_clamps_position_within_source_bounds() {
        let source = "int main() { return \"unterminated";
        let mut lexer = Lexer::new(source);
        let err = CompileError::Lex(lexer.tokenize().unwrap_err());
        // Must not panic slicing/repeating past the source length.
        report_compile_error(source, &err);
    }
}
