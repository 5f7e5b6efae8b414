// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The full front-end pipeline: source text to XML.
//!
//! Each stage runs to completion or stops the pipeline with a single
//! [`CompileError`]:
//!
//! ```text
//! lex -> parse -> build -> analyse -> to_xml
//! ```

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Program;
use crate::builder::build;
use crate::semantic_analysis::{SemanticError, analyse};
use crate::source_analysis::{LexError, LexErrorKind, ParseError, Span, lex_with_eof, parse};
use crate::xml::to_xml;

/// Exit code for a lexical error.
pub const EXIT_LEXICAL: i32 = 21;
/// Exit code for a syntax error.
pub const EXIT_SYNTAX: i32 = 22;

/// The first problem found in a source text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Semantic(#[from] SemanticError),
}

impl CompileError {
    /// The process exit code reported for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(ParseError::Lexical(_)) => EXIT_LEXICAL,
            Self::Parse(ParseError::Syntax(_)) => EXIT_SYNTAX,
            Self::Semantic(error) => error.exit_code(),
        }
    }

    /// Source location of the error.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Parse(error) => error.span(),
            Self::Semantic(error) => error.span,
        }
    }
}

/// Decodes raw input, treating invalid UTF-8 as a lexical error at the
/// first offending byte.
pub fn decode(bytes: &[u8]) -> Result<&str, CompileError> {
    std::str::from_utf8(bytes).map_err(|error| {
        let offset = u32::try_from(error.valid_up_to()).unwrap_or(u32::MAX);
        ParseError::from(LexError::new(
            LexErrorKind::InvalidUtf8,
            Span::new(offset, offset.saturating_add(1)),
        ))
        .into()
    })
}

/// Parses and analyses `source`, returning the validated AST.
pub fn check(source: &str) -> Result<Program, CompileError> {
    let tokens = lex_with_eof(source);
    tracing::debug!(tokens = tokens.len(), "lexed source");

    let tree = parse(tokens)?;
    let program = build(tree);
    tracing::debug!(classes = program.classes.len(), "built program");

    analyse(&program)?;
    tracing::debug!("analysis passed");
    Ok(program)
}

/// Compiles `source` to its XML representation.
///
/// ```
/// let xml = sol25_core::compile("class Main : Object { run [ ] }").unwrap();
/// assert!(xml.contains(r#"<method selector="run">"#));
///
/// let error = sol25_core::compile("class Main : Object { }").unwrap_err();
/// assert_eq!(error.exit_code(), 31);
/// ```
pub fn compile(source: &str) -> Result<String, CompileError> {
    let program = check(source)?;
    let xml = to_xml(&program);
    tracing::debug!(bytes = xml.len(), "rendered XML");
    Ok(xml)
}
