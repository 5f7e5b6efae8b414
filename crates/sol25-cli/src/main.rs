// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! SOL25 command-line interface.
//!
//! This is the main entry point for the `sol25` command. It reads a program
//! from standard input, writes its XML representation to standard output,
//! and reports failures as a single diagnostic line and an exit code.

use std::ffi::OsString;
use std::io::{self, Read, Write};

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod diagnostic;
mod error;

use error::CliError;

/// Exit code for a successful run.
const EXIT_SUCCESS: i32 = 0;

/// Parse and validate a SOL25 program read from standard input
#[derive(Debug, Parser)]
#[command(name = "sol25")]
#[command(about, long_about = None, disable_version_flag = true)]
#[command(after_help = "Reads SOL25 source from standard input and writes the XML \
representation of the validated program to standard output.\n\
On failure prints one diagnostic line to standard error and exits with:\n  \
10 invalid arguments, 11 input error, 12 output error,\n  \
21 lexical error, 22 syntax error,\n  \
31 missing Main/run, 32 undefined name, 33 arity mismatch,\n  \
34 parameter collision, 35 duplicate class or cyclic inheritance")]
struct Cli {}

fn main() {
    init_logging();
    let args: Vec<OsString> = std::env::args_os().collect();
    std::process::exit(run(&args));
}

/// Installs a stderr logger filtered by `SOL25_LOG`; silent by default.
fn init_logging() {
    let filter = EnvFilter::try_from_env("SOL25_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();
}

/// Runs the command and returns its exit code.
fn run(args: &[OsString]) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(Cli {}) => match compile_stdin() {
            Ok(()) => EXIT_SUCCESS,
            Err((error, source)) => report(&error, source.as_deref()),
        },
        // Help is only honoured on its own.
        Err(help) if help.kind() == ErrorKind::DisplayHelp && args.len() == 2 => {
            match help.print() {
                Ok(()) => EXIT_SUCCESS,
                Err(error) => report(&CliError::Output(error), None),
            }
        }
        Err(error) => report(&CliError::usage(&error), None),
    }
}

/// Compiles standard input to standard output.
///
/// On failure also returns the decoded source, when there is one, so the
/// diagnostic can name a line and column.
fn compile_stdin() -> Result<(), (CliError, Option<String>)> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .map_err(|error| (CliError::Input(error), None))?;
    tracing::debug!(bytes = input.len(), "read standard input");

    let xml = sol25_core::compile::decode(&input)
        .and_then(sol25_core::compile)
        .map_err(|error| {
            let source = String::from_utf8_lossy(&input).into_owned();
            (CliError::from(error), Some(source))
        })?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(xml.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|error| (CliError::Output(error), None))
}

/// Prints the diagnostic line and returns the exit code.
fn report(error: &CliError, source: Option<&str>) -> i32 {
    tracing::debug!(?error, "run failed");
    eprintln!("{}", diagnostic::render(error, source));
    error.exit_code()
}
