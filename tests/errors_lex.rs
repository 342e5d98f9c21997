//! Lexer error tests.

use subc::CompileError;

#[test]
fn unterminated_string_literal_is_fatal() {
    let err = subc::compile(r#"int main() { return "oops; }"#).unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
    assert!(err.message().contains("string"));
}

#[test]
fn unterminated_block_comment_is_fatal() {
    let err = subc::compile("int main() { /* never closes return 0; }").unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
    assert!(err.message().contains("comment"));
}

#[test]
fn invalid_byte_is_fatal() {
    let err = subc::compile("int main() { return 1 @ 2; }").unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
}

#[test]
fn line_comments_are_skipped_not_errors() {
    let source = "int main() { // a trailing comment\n return 1; }";
    assert!(subc::compile(source).is_ok());
}

#[test]
fn block_comments_are_skipped_not_errors() {
    let source = "int main() { /* a comment */ return 1; }";
    assert!(subc::compile(source).is_ok());
}

#[test]
fn error_span_points_at_the_offending_byte() {
    let source = "int main() { return @; }";
    let err = subc::compile(source).unwrap_err();
    assert_eq!(err.span().start, source.find('@').unwrap());
}

#[test]
fn an_integer_literal_too_large_for_i64_is_a_lex_error_not_a_panic() {
    let err = subc::compile("int main() { return 99999999999999999999; }").unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
    assert!(err.message().contains("range"));
}
