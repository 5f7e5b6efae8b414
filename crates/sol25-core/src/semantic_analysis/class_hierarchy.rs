// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Inheritance cycle detection.
//!
//! The parent relation among declared classes is a graph in which every
//! node has at most one outgoing edge; builtin roots are sinks. Each class
//! is visited in declaration order, following parents until a visited class
//! or a sink is reached. Meeting a class that is still on the current path
//! is a cycle.

use std::collections::HashSet;

use super::class_table::ClassTable;
use super::error::{SemanticError, SemanticErrorKind};

/// Rejects any class that is its own ancestor, self-inheritance included.
pub(super) fn check_acyclic(classes: &ClassTable<'_>) -> Result<(), SemanticError> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut in_progress: HashSet<&str> = HashSet::new();

    for start in classes.iter() {
        let mut current = Some(start);
        while let Some(class) = current {
            let name = class.name.name.as_str();
            if in_progress.contains(name) {
                return Err(SemanticError::new(
                    SemanticErrorKind::CyclicInheritance {
                        class: class.name.name.clone(),
                    },
                    class.name.span,
                ));
            }
            if !visited.insert(name) {
                break;
            }
            in_progress.insert(name);
            current = classes.declared(&class.superclass.name);
        }
        in_progress.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic_analysis::test_helpers::program;

    fn check(source: &str) -> Result<(), SemanticErrorKind> {
        let program = program(source);
        let classes = ClassTable::collect(&program).unwrap();
        check_acyclic(&classes).map_err(|error| error.kind)
    }

    fn cycle(class: &str) -> Result<(), SemanticErrorKind> {
        Err(SemanticErrorKind::CyclicInheritance {
            class: class.into(),
        })
    }

    #[test]
    fn acyclic_chain() {
        assert_eq!(
            check("class A : B { } class B : C { } class C : Object { }"),
            Ok(())
        );
    }

    #[test]
    fn self_inheritance() {
        assert_eq!(check("class A : A { }"), cycle("A"));
    }

    #[test]
    fn two_class_cycle_reported_at_first_declared() {
        assert_eq!(check("class A : B { } class B : A { }"), cycle("A"));
    }

    #[test]
    fn cycle_reached_through_a_tail() {
        assert_eq!(
            check("class T : A { } class A : B { } class B : A { }"),
            cycle("A")
        );
    }

    #[test]
    fn shared_ancestors_are_not_cycles() {
        assert_eq!(
            check("class A : Base { } class B : Base { } class Base : Object { }"),
            Ok(())
        );
    }
}
