//! End-to-end tests for `while` and `for` loops.

mod common;

use common::compile_and_run;

#[test]
fn while_loop_counts_up() {
    let source = "int main() { int i; i = 0; while (i < 5) i = i + 1; return i; }";
    assert_eq!(compile_and_run(source), 5);
}

#[test]
fn while_false_never_runs_the_body() {
    let source = "int main() { int i; i = 0; while (0) i = i + 1; return i; }";
    assert_eq!(compile_and_run(source), 0);
}

#[test]
fn while_body_can_be_a_block() {
    let source = "int main() { int i; int sum; i = 0; sum = 0; \
                  while (i < 4) { sum = sum + i; i = i + 1; } return sum; }";
    assert_eq!(compile_and_run(source), 6);
}

#[test]
fn for_loop_with_all_clauses() {
    let source = "int main() { int sum; int i; sum = 0; \
                  for (i = 0; i < 10; i = i + 1) sum = sum + i; return sum; }";
    assert_eq!(compile_and_run(source), 45);
}

#[test]
fn for_loop_with_omitted_init_and_inc() {
    let source = "int main() { int i; int sum; i = 0; sum = 0; \
                  for (; i < 3;) { sum = sum + 1; i = i + 1; } return sum; }";
    assert_eq!(compile_and_run(source), 3);
}

#[test]
fn for_with_all_three_clauses_omitted_is_an_infinite_loop_broken_only_by_return() {
    // There is no `break`, so the only way out of `for(;;)` is a `return`
    // reached through the body itself.
    let source = "int main() { int i; i = 0; for (;;) { i = i + 1; if (i == 3) return i; } }";
    assert_eq!(compile_and_run(source), 3);
}

#[test]
fn nested_loops() {
    let source = "int main() { int i; int j; int count; count = 0; \
                  for (i = 0; i < 3; i = i + 1) { for (j = 0; j < 3; j = j + 1) { count = count + 1; } } \
                  return count; }";
    assert_eq!(compile_and_run(source), 9);
}
