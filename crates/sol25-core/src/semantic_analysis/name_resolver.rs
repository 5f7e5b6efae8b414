// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Name resolution over method bodies.
//!
//! Walks every block in order with the set of visible names and checks:
//! - variable references are visible
//! - class literals name a declared or builtin class
//! - class-side sends resolve along the receiver's inheritance chain
//! - assignments never target a parameter
//! - nested block parameters are distinct
//!
//! Traversal is class by class, method by method, statement by statement,
//! left to right; the first violation stops the walk.

use crate::ast::{Block, Expression, Identifier, Statement};

use super::class_table::ClassTable;
use super::error::{SemanticError, SemanticErrorKind};
use super::scope::Scope;
use super::validators::check_distinct_parameters;

/// Resolves names in every method body of a program.
#[derive(Debug)]
pub(super) struct NameResolver<'t, 'a> {
    classes: &'t ClassTable<'a>,
}

impl<'t, 'a> NameResolver<'t, 'a> {
    pub(super) fn new(classes: &'t ClassTable<'a>) -> Self {
        Self { classes }
    }

    /// Walks every method body in declaration order.
    pub(super) fn resolve(&self) -> Result<(), SemanticError> {
        let root = Scope::root();
        for class in self.classes.iter() {
            for method in &class.methods {
                tracing::trace!(
                    class = %class.name.name,
                    selector = %method.selector.name,
                    "resolving names"
                );
                self.resolve_block(&method.body, &root)?;
            }
        }
        Ok(())
    }

    fn resolve_block(&self, block: &Block, enclosing: &Scope) -> Result<(), SemanticError> {
        let mut scope = enclosing.enter(block);
        for statement in &block.body {
            match statement {
                Statement::Assignment { target, value, .. } => {
                    self.resolve_expression(value, &scope)?;
                    if scope.is_parameter(&target.name) {
                        return Err(SemanticError::new(
                            SemanticErrorKind::ReadOnlyParameterOrDuplicate {
                                name: target.name.clone(),
                            },
                            target.span,
                        ));
                    }
                    scope.define(target.name.clone());
                }
                Statement::Expression(expression) => {
                    self.resolve_expression(expression, &scope)?;
                }
            }
        }
        Ok(())
    }

    fn resolve_expression(&self, expression: &Expression, scope: &Scope) -> Result<(), SemanticError> {
        stacker::maybe_grow(32 * 1024, 256 * 1024, || self.resolve_node(expression, scope))
    }

    fn resolve_node(&self, expression: &Expression, scope: &Scope) -> Result<(), SemanticError> {
        match expression {
            Expression::Literal(..) => Ok(()),
            Expression::Variable(identifier) => {
                if scope.is_visible(&identifier.name) {
                    Ok(())
                } else {
                    Err(SemanticError::new(
                        SemanticErrorKind::UndefinedVariable {
                            name: identifier.name.clone(),
                        },
                        identifier.span,
                    ))
                }
            }
            Expression::ClassReference(identifier) => self.resolve_class(identifier),
            Expression::Block(block) => {
                check_distinct_parameters(block)?;
                self.resolve_block(block, scope)
            }
            Expression::MessageSend {
                receiver,
                selector,
                arguments,
                ..
            } => {
                self.resolve_expression(receiver, scope)?;
                for argument in arguments {
                    self.resolve_expression(argument, scope)?;
                }
                match receiver.as_ref() {
                    Expression::ClassReference(class)
                        if !self.classes.understands(&class.name, &selector.name) =>
                    {
                        Err(SemanticError::new(
                            SemanticErrorKind::UnknownClassMethod {
                                class: class.name.clone(),
                                selector: selector.name.clone(),
                            },
                            selector.span,
                        ))
                    }
                    _ => Ok(()),
                }
            }
        }
    }

    fn resolve_class(&self, identifier: &Identifier) -> Result<(), SemanticError> {
        if self.classes.is_known(&identifier.name) {
            Ok(())
        } else {
            Err(SemanticError::new(
                SemanticErrorKind::UndefinedClass {
                    name: identifier.name.clone(),
                },
                identifier.span,
            ))
        }
    }
}
