// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis error types.

use ecow::EcoString;
use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::source_analysis::Span;

/// A semantic error discovered during analysis.
///
/// Analysis is fail-fast, so a run produces at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub span: Span,
}

impl SemanticError {
    /// Create a new semantic error.
    #[must_use]
    pub fn new(kind: SemanticErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The process exit code reported for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }
}

impl Diagnostic for SemanticError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!("sol25::semantic::{}", self.kind.code())))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::at(self.span, "here"))))
    }
}

/// Types of semantic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticErrorKind {
    /// Two classes share a name.
    #[error("class '{name}' is defined more than once")]
    DuplicateClass { name: EcoString },

    /// No `Main` class, or `Main` has no `run` method.
    #[error("missing entry point: class 'Main' with method 'run'")]
    MissingEntryPoint,

    /// A parent that is neither declared nor builtin.
    #[error("class '{class}' inherits from undefined class '{parent}'")]
    UnknownParent { class: EcoString, parent: EcoString },

    /// Selector colon count differs from the block parameter count.
    #[error("method '{selector}' expects {expected} parameter(s) but its block has {found}")]
    ArityMismatch {
        selector: EcoString,
        expected: usize,
        found: usize,
    },

    /// A block declares the same parameter twice.
    #[error("duplicate block parameter '{name}'")]
    DuplicateParameter { name: EcoString },

    /// A variable that is not visible at its use.
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: EcoString },

    /// Assignment to a parameter of this or an enclosing block.
    #[error("cannot assign to parameter '{name}'")]
    ReadOnlyParameterOrDuplicate { name: EcoString },

    /// A class literal naming no declared or builtin class.
    #[error("undefined class '{name}'")]
    UndefinedClass { name: EcoString },

    /// A class-side send the class and its ancestors do not understand.
    #[error("class '{class}' does not understand '{selector}'")]
    UnknownClassMethod { class: EcoString, selector: EcoString },

    /// The class is its own ancestor.
    #[error("cyclic inheritance involving class '{class}'")]
    CyclicInheritance { class: EcoString },
}

impl SemanticErrorKind {
    /// The process exit code reported for this kind.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingEntryPoint => 31,
            Self::UnknownParent { .. }
            | Self::UndefinedVariable { .. }
            | Self::UndefinedClass { .. }
            | Self::UnknownClassMethod { .. } => 32,
            Self::ArityMismatch { .. } => 33,
            Self::DuplicateParameter { .. } | Self::ReadOnlyParameterOrDuplicate { .. } => 34,
            Self::DuplicateClass { .. } | Self::CyclicInheritance { .. } => 35,
        }
    }

    /// Short machine-readable name, used in diagnostic codes.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateClass { .. } => "duplicate_class",
            Self::MissingEntryPoint => "missing_entry_point",
            Self::UnknownParent { .. } => "unknown_parent",
            Self::ArityMismatch { .. } => "arity_mismatch",
            Self::DuplicateParameter { .. } => "duplicate_parameter",
            Self::UndefinedVariable { .. } => "undefined_variable",
            Self::ReadOnlyParameterOrDuplicate { .. } => "assign_to_parameter",
            Self::UndefinedClass { .. } => "undefined_class",
            Self::UnknownClassMethod { .. } => "unknown_class_method",
            Self::CyclicInheritance { .. } => "cyclic_inheritance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let cases = [
            (SemanticErrorKind::MissingEntryPoint, 31),
            (SemanticErrorKind::UndefinedVariable { name: "y".into() }, 32),
            (
                SemanticErrorKind::ArityMismatch {
                    selector: "run".into(),
                    expected: 0,
                    found: 1,
                },
                33,
            ),
            (SemanticErrorKind::DuplicateParameter { name: "a".into() }, 34),
            (SemanticErrorKind::CyclicInheritance { class: "A".into() }, 35),
        ];
        for (kind, code) in cases {
            assert_eq!(SemanticError::new(kind, Span::default()).exit_code(), code);
        }
    }

    #[test]
    fn diagnostic_code_and_message() {
        let error = SemanticError::new(
            SemanticErrorKind::UnknownClassMethod {
                class: "Integer".into(),
                selector: "foo".into(),
            },
            Span::new(3, 6),
        );
        assert_eq!(error.to_string(), "class 'Integer' does not understand 'foo'");
        assert_eq!(
            error.code().map(|code| code.to_string()).as_deref(),
            Some("sol25::semantic::unknown_class_method")
        );
        assert_eq!(error.labels().map(Iterator::count), Some(1));
    }
}
