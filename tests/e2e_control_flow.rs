//! End-to-end tests for if/else statements.

mod common;

use common::compile_and_run;

#[test]
fn if_true_takes_the_then_branch() {
    assert_eq!(
        compile_and_run("int main() { if (1) return 1; return 0; }"),
        1
    );
}

#[test]
fn if_false_falls_through() {
    assert_eq!(
        compile_and_run("int main() { if (0) return 1; return 0; }"),
        0
    );
}

#[test]
fn if_with_no_else_omits_the_else_branch_entirely() {
    assert_eq!(
        compile_and_run("int main() { int x; x = 0; if (1) x = 1; return x; }"),
        1
    );
}

#[test]
fn if_else_true_branch() {
    assert_eq!(
        compile_and_run("int main() { if (1) return 10; else return 20; }"),
        10
    );
}

#[test]
fn if_else_false_branch() {
    assert_eq!(
        compile_and_run("int main() { if (0) return 10; else return 20; }"),
        20
    );
}

#[test]
fn nested_if_else_dangling_else_binds_to_the_nearest_if() {
    let source = "int main() { if (1) if (0) return 1; else return 2; return 3; }";
    assert_eq!(compile_and_run(source), 2);
}

#[test]
fn block_statement_groups_multiple_statements_under_one_branch() {
    let source = "int main() { int x; x = 0; if (1) { x = x + 1; x = x + 1; } return x; }";
    assert_eq!(compile_and_run(source), 2);
}

#[test]
fn comparison_scenario_from_the_spec() {
    // spec §8 scenario 6.
    let source = "int main() { int x; x = 5; if (x > 3) return 1; return 0; }";
    assert_eq!(compile_and_run(source), 1);
}

#[test]
fn function_calls_inside_a_condition() {
    let source = "int id(int n) { return n; } int main() { if (id(1)) return 7; return 8; }";
    assert_eq!(compile_and_run(source), 7);
}
