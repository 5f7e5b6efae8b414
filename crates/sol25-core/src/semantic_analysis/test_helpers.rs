// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Shared test helpers for `semantic_analysis` tests.

use crate::ast::Program;
use crate::builder::build;
use crate::source_analysis::{lex_with_eof, parse};

use super::{SemanticError, SemanticErrorKind, analyse};

/// Parses and builds `source`, panicking on parse errors.
pub fn program(source: &str) -> Program {
    build(parse(lex_with_eof(source)).unwrap())
}

/// Analyses `source` and returns the error kind, if any.
pub fn analyse_source(source: &str) -> Result<(), SemanticErrorKind> {
    analyse(&program(source)).map_err(|SemanticError { kind, .. }| kind)
}

/// Wraps `body` as the `run` method of a minimal `Main` class.
pub fn main_with_run(body: &str) -> String {
    format!("class Main : Object {{ run {body} }}")
}
