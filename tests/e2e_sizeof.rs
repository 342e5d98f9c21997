//! End-to-end tests for `sizeof`.
//!
//! `sizeof` is folded to a constant at parse time: 8 for `int` (not the
//! customary 4 — spec §9 flags this as a deliberately preserved quirk of
//! the source this was distilled from), 1 for `char`, and 8 for any
//! pointer type regardless of its pointee.

mod common;

use common::compile_and_run;

#[test]
fn sizeof_scenario_matches_spec() {
    // spec §8 scenario 4: 8 + 1 + 8 = 17.
    let source = "int main() { return sizeof(int) + sizeof(char) + sizeof(char*); }";
    assert_eq!(compile_and_run(source), 17);
}

#[test]
fn sizeof_int_is_eight() {
    assert_eq!(compile_and_run("int main() { return sizeof(int); }"), 8);
}

#[test]
fn sizeof_char_is_one() {
    assert_eq!(compile_and_run("int main() { return sizeof(char); }"), 1);
}

#[test]
fn sizeof_any_pointer_depth_is_eight() {
    assert_eq!(compile_and_run("int main() { return sizeof(int*); }"), 8);
    assert_eq!(compile_and_run("int main() { return sizeof(int**); }"), 8);
    assert_eq!(compile_and_run("int main() { return sizeof(void*); }"), 8);
}

#[test]
fn sizeof_participates_in_larger_expressions() {
    let source = "int main() { return sizeof(int) * 2 + sizeof(char); }";
    assert_eq!(compile_and_run(source), 17);
}
