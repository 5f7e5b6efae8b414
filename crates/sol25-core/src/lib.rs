// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! SOL25 front end.
//!
//! This crate contains the front-end functionality:
//! - Lexical analysis and parsing into a concrete syntax tree
//! - AST construction
//! - Semantic analysis (class table, scopes, inheritance)
//! - XML output of the validated AST

#![doc = include_str!("../../../README.md")]

pub mod ast;
pub mod builder;
pub mod compile;
pub mod semantic_analysis;
pub mod source_analysis;
pub mod xml;

pub use compile::{CompileError, compile};
