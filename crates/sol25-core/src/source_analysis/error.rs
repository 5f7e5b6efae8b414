// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for lexing and parsing SOL25 source.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics and
//! integrate with [`miette`] for reporting. Both kinds are fatal: the parser
//! stops at the first one it meets.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// A lexical error: input that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(sol25::lexical))]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A string literal was not terminated.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A comment was not terminated.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// An escape sequence other than `\n`, `\'` or `\\`.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// The input was not valid UTF-8.
    #[error("source is not valid UTF-8")]
    InvalidUtf8,
}

/// A syntax error: a token sequence that matches no production.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(sol25::syntax))]
pub struct SyntaxError {
    /// Human-readable description of what was expected.
    pub message: EcoString,
    /// The offending token.
    #[label("here")]
    pub span: Span,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// The reason parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The parser reached input the lexer could not tokenize.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexError),

    /// The token stream does not match the grammar.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Returns the source location of the error.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Lexical(error) => error.span,
            Self::Syntax(error) => error.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = LexError::new(LexErrorKind::UnexpectedCharacter('#'), Span::new(0, 1));
        assert_eq!(err.to_string(), "unexpected character '#'");

        let err = LexError::new(LexErrorKind::UnterminatedString, Span::new(0, 10));
        assert_eq!(err.to_string(), "unterminated string literal");

        let err = LexError::new(LexErrorKind::InvalidEscape('t'), Span::new(0, 2));
        assert_eq!(err.to_string(), "invalid escape sequence '\\t'");
    }

    #[test]
    fn parse_error_span() {
        let err: ParseError = SyntaxError::new("expected ']'", Span::new(5, 6)).into();
        assert_eq!(err.span(), Span::new(5, 6));
        assert_eq!(err.to_string(), "expected ']'");

        let err: ParseError = LexError::new(LexErrorKind::UnexpectedCharacter('@'), Span::new(2, 3)).into();
        assert_eq!(err.span(), Span::new(2, 3));
    }
}
