//! End-to-end tests for string literals and escape decoding.
//!
//! The language has no built-in string operations, so these tests call
//! into libc (`strlen`, `puts`) — linked automatically by the system `cc`
//! used in `common::compile_and_run` — to observe that string literals are
//! correctly emitted and addressed from `.text`.

mod common;

use common::compile_and_run;

#[test]
fn string_literal_address_is_usable_by_an_external_call() {
    let source = r#"int main() { return strlen("hello"); }"#;
    assert_eq!(compile_and_run(source), 5);
}

#[test]
fn decoded_newline_escape_is_a_single_byte() {
    let source = r#"int main() { return strlen("a\nb"); }"#;
    assert_eq!(compile_and_run(source), 3);
}

#[test]
fn decoded_tab_and_backslash_escapes() {
    let source = r#"int main() { return strlen("a\tb\\c"); }"#;
    assert_eq!(compile_and_run(source), 5);
}

#[test]
fn decoded_escaped_quote() {
    let source = r#"int main() { return strlen("a\"b"); }"#;
    assert_eq!(compile_and_run(source), 3);
}

#[test]
fn unknown_escape_keeps_the_literal_character() {
    // `\q` decodes to just `q`, so the literal is 2 bytes long, not 3.
    let source = r#"int main() { return strlen("a\qb"); }"#;
    assert_eq!(compile_and_run(source), 3);
}

#[test]
fn puts_can_be_called_with_a_string_literal_argument() {
    let source = r#"int main() { puts("hi"); return 0; }"#;
    assert_eq!(compile_and_run(source), 0);
}

#[test]
fn two_distinct_string_literals_get_distinct_labels() {
    let source = r#"int main() { return strlen("ab") + strlen("cde"); }"#;
    assert_eq!(compile_and_run(source), 5);
}

#[test]
fn empty_string_literal() {
    let source = r#"int main() { return strlen(""); }"#;
    assert_eq!(compile_and_run(source), 0);
}
