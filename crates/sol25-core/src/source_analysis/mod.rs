// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for SOL25 source code.
//!
//! This module contains the lexer, the parser and the concrete syntax tree.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s. Each token
//! carries its source location via [`Span`] and keeps whitespace and comments
//! as [`Trivia`]; the first comment in a program becomes its description.
//!
//! ```
//! use sol25_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x at: 1").collect();
//! assert_eq!(tokens.len(), 3); // x, at:, 1
//! ```
//!
//! # Parsing
//!
//! The [`parse`] function converts tokens into a [`cst::Program`]. The
//! [`builder`](crate::builder) then maps it onto the typed AST.
//!
//! # Error Handling
//!
//! The lexer never fails: invalid input becomes a [`TokenKind::Error`] token.
//! The parser stops at the first error token or grammar mismatch it meets
//! and returns a [`ParseError`].

pub mod cst;
mod error;
mod lexer;
mod parser;
mod span;
mod token;


pub use error::{LexError, LexErrorKind, ParseError, SyntaxError};
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::{MAX_NESTING_DEPTH, parse};
pub use span::Span;
pub use token::{Token, TokenKind, Trivia};
