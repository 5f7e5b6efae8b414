// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Errors that end a `sol25` run.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use sol25_core::CompileError;
use thiserror::Error;

/// Exit code for invalid command-line usage.
pub const EXIT_USAGE: i32 = 10;
/// Exit code when standard input cannot be read.
pub const EXIT_INPUT: i32 = 11;
/// Exit code when output cannot be written.
pub const EXIT_OUTPUT: i32 = 12;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Arguments other than a lone `--help`.
    #[error("{0}; run 'sol25 --help' for usage")]
    #[diagnostic(code(sol25::usage))]
    Usage(String),

    #[error("cannot read standard input: {0}")]
    #[diagnostic(code(sol25::input))]
    Input(std::io::Error),

    #[error("cannot write output: {0}")]
    #[diagnostic(code(sol25::output))]
    Output(std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Compile(#[from] CompileError),
}

impl CliError {
    /// A usage error describing what clap rejected.
    pub fn usage(error: &clap::Error) -> Self {
        Self::Usage(error.kind().to_string())
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::Input(_) => EXIT_INPUT,
            Self::Output(_) => EXIT_OUTPUT,
            Self::Compile(error) => error.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Usage("bad".into()).exit_code(), EXIT_USAGE);
        assert_eq!(
            CliError::Input(std::io::Error::other("closed")).exit_code(),
            EXIT_INPUT
        );
        assert_eq!(
            CliError::Output(std::io::Error::other("full")).exit_code(),
            EXIT_OUTPUT
        );
        let compile = sol25_core::compile("class A : Object { }").unwrap_err();
        assert_eq!(CliError::from(compile).exit_code(), 31);
    }
}
