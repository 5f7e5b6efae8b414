// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Program-level validation passes.
//!
//! - Entry point: class `Main` must declare the unary selector `run`
//! - Structure: parents resolve, selector arity matches block arity, and
//!   method parameters are distinct

use crate::ast::{Block, Program};
use crate::source_analysis::Span;

use super::class_table::ClassTable;
use super::error::{SemanticError, SemanticErrorKind};

/// Requires class `Main` with a `run` method.
pub(super) fn check_entry_point(
    program: &Program,
    classes: &ClassTable<'_>,
) -> Result<(), SemanticError> {
    match classes.declared("Main") {
        Some(main) if main.declares("run") => Ok(()),
        Some(main) => Err(SemanticError::new(
            SemanticErrorKind::MissingEntryPoint,
            main.name.span,
        )),
        None => Err(SemanticError::new(
            SemanticErrorKind::MissingEntryPoint,
            Span::new(program.span.start(), program.span.start()),
        )),
    }
}

/// Checks parents, method arity and method parameters, class by class.
pub(super) fn check_structure(classes: &ClassTable<'_>) -> Result<(), SemanticError> {
    for class in classes.iter() {
        if !classes.is_known(&class.superclass.name) {
            return Err(SemanticError::new(
                SemanticErrorKind::UnknownParent {
                    class: class.name.name.clone(),
                    parent: class.superclass.name.clone(),
                },
                class.superclass.span,
            ));
        }

        for method in &class.methods {
            let expected = method.selector.arity();
            let found = method.body.arity();
            if expected != found {
                return Err(SemanticError::new(
                    SemanticErrorKind::ArityMismatch {
                        selector: method.selector.name.clone(),
                        expected,
                        found,
                    },
                    method.selector.span,
                ));
            }
            check_distinct_parameters(&method.body)?;
        }
    }
    Ok(())
}

/// Rejects a block that names the same parameter twice.
pub(super) fn check_distinct_parameters(block: &Block) -> Result<(), SemanticError> {
    match block.duplicate_parameter() {
        Some(parameter) => Err(SemanticError::new(
            SemanticErrorKind::DuplicateParameter {
                name: parameter.name.clone(),
            },
            parameter.span,
        )),
        None => Ok(()),
    }
}
