//! The `subc` compiler CLI.
//!
//! This binary owns the one external responsibility spec §6 assigns to the
//! front end: argument parsing, reading the source file, writing the
//! emitted assembly to standard output, and exit codes. It contains no
//! compiler logic of its own — that all lives in `subc::compile`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// The `subc` compiler: translates a small C subset into x86-64 assembly
/// (Intel syntax) on standard output.
#[derive(Parser)]
#[command(name = "subc")]
#[command(about = "A single-pass compiler for a small C subset", long_about = None)]
struct Cli {
    /// The source file to compile.
    file: PathBuf,

    /// Increase log verbosity (repeatable: -v, -vv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            subc::diagnostics::report_plain_error(format!(
                "could not read '{}': {e}",
                cli.file.display()
            ));
            return ExitCode::FAILURE;
        }
    };

    match subc::compile(&source) {
        Ok(asm) => {
            print!("{asm}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            subc::diagnostics::report_compile_error(&source, &error);
            ExitCode::FAILURE
        }
    }
}

/// Initializes `env_logger` from `RUST_LOG`, defaulting to `warn`; each
/// repetition of `-v` raises the default level by one step.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
