//! Common test utilities for `subc` integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files: assembling and linking `subc`'s emitted
//! assembly with the system `cc` into a temporary binary, then running it
//! and inspecting its exit code — exactly the way the teacher's own
//! `build()` shells out to `cc`.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use subc::CompileError;
use tempfile::tempdir;

/// Compiles `source` with `subc::compile`, assembles and links the result
/// with the system `cc`, runs the resulting binary, and returns its exit
/// code. Panics (failing the test) if any stage before "run" fails.
pub fn compile_and_run(source: &str) -> i32 {
    let asm = subc::compile(source).unwrap_or_else(|e| panic!("compilation failed: {e}"));
    run_assembly(&asm)
}

/// Assembles and links `asm` with the system `cc`, runs the result, and
/// returns its exit code.
pub fn run_assembly(asm: &str) -> i32 {
    let dir = tempdir().expect("failed to create temp dir");
    let asm_path = dir.path().join("out.s");
    let exe_path = dir.path().join(executable_name("out"));

    std::fs::write(&asm_path, asm).expect("failed to write assembly file");
    assemble_and_link(&asm_path, &exe_path);

    let status = Command::new(&exe_path)
        .status()
        .unwrap_or_else(|e| panic!("failed to run compiled binary: {e}"));
    status.code().expect("process terminated by signal")
}

fn assemble_and_link(asm_path: &Path, exe_path: &Path) {
    let output = Command::new("cc")
        .arg(asm_path)
        .arg("-o")
        .arg(exe_path)
        .output()
        .unwrap_or_else(|e| panic!("failed to invoke cc: {e}"));

    if !output.status.success() {
        panic!(
            "cc failed (exit {:?}):\n[stdout] {}\n[stderr] {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

/// Returns an executable filename with the correct platform extension.
pub fn executable_name(name: &str) -> String {
    format!("{}{}", name, std::env::consts::EXE_SUFFIX)
}

/// Runs the full pipeline and returns `Err` with the stage name and message
/// if compilation fails, or `Ok(asm)` if it succeeds.
pub fn compile_result(source: &str) -> Result<String, CompileError> {
    subc::compile(source)
}

/// The path to the `subc` binary built by cargo, for tests that exercise
/// the CLI directly (argument handling, stdout/stderr, exit codes).
pub fn subc_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_subc"))
}
