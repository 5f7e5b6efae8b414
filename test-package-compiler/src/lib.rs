// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Snapshot tests for the SOL25 front end.
//!
//! Each subdirectory of `cases/` holds a `main.sol` program. The build
//! script generates one test per case, which snapshots either the XML
//! document or the diagnostic and exit code the program produces.
//!
//! ## Adding a case
//!
//! 1. Create `cases/<name>/main.sol`
//! 2. Run `cargo insta test -p sol25-test-package-compiler --review`

use miette::Diagnostic;

/// Compiles `source` and renders the outcome as snapshot text.
///
/// Success renders the XML document. Failure renders the diagnostic line
/// followed by the exit code.
#[must_use]
pub fn render_outcome(source: &str) -> String {
    match sol25_core::compile(source) {
        Ok(xml) => xml,
        Err(error) => {
            let code = error
                .code()
                .map_or_else(|| "sol25".to_string(), |code| code.to_string());
            let (line, column) = error.span().line_column(source);
            format!(
                "error[{code}]: {error} at {line}:{column}\nexit code: {}\n",
                error.exit_code()
            )
        }
    }
}
