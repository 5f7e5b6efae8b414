// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The declared classes of a program, collected once and shared read-only
//! by the later analysis passes.

use std::collections::{HashMap, HashSet};

use ecow::EcoString;

use crate::ast::{Class, Program};

use super::builtins;
use super::error::{SemanticError, SemanticErrorKind};

/// Declared classes in declaration order, indexed by name.
#[derive(Debug, Clone)]
pub struct ClassTable<'a> {
    classes: Vec<&'a Class>,
    by_name: HashMap<&'a str, &'a Class>,
}

impl<'a> ClassTable<'a> {
    /// Registers every class of `program`, rejecting repeated names.
    pub fn collect(program: &'a Program) -> Result<Self, SemanticError> {
        let mut by_name = HashMap::with_capacity(program.classes.len());
        for class in &program.classes {
            if by_name.insert(class.name.name.as_str(), class).is_some() {
                return Err(SemanticError::new(
                    SemanticErrorKind::DuplicateClass {
                        name: class.name.name.clone(),
                    },
                    class.name.span,
                ));
            }
        }
        Ok(Self {
            classes: program.classes.iter().collect(),
            by_name,
        })
    }

    /// Number of declared classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the program declares no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Declared classes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Class> + '_ {
        self.classes.iter().copied()
    }

    /// Looks up a declared class.
    #[must_use]
    pub fn declared(&self, name: &str) -> Option<&'a Class> {
        self.by_name.get(name).copied()
    }

    /// Returns `true` if `name` is a declared class or a builtin root.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.by_name.contains_key(name) || builtins::is_root_class(name)
    }

    /// Returns `true` if a class-side send of `selector` to `class` resolves
    /// somewhere along its inheritance chain.
    ///
    /// Declared classes contribute their own selectors and defer to their
    /// parent; a builtin root answers from its fixed table. A declared class
    /// shadows a builtin of the same name.
    #[must_use]
    pub fn understands(&self, class: &str, selector: &str) -> bool {
        let mut visited: HashSet<EcoString> = HashSet::new();
        let mut current = EcoString::from(class);
        loop {
            if !visited.insert(current.clone()) {
                return false;
            }
            match self.declared(&current) {
                Some(declared) if declared.declares(selector) => return true,
                Some(declared) => current = declared.superclass.name.clone(),
                None => {
                    return builtins::class_methods(&current)
                        .is_some_and(|methods| methods.iter().any(|method| *method == selector));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic_analysis::test_helpers::program;

    #[test]
    fn collect_rejects_duplicate_names() {
        let program = program("class A : Object { } class A : Object { }");
        let error = ClassTable::collect(&program).unwrap_err();
        assert_eq!(
            error.kind,
            SemanticErrorKind::DuplicateClass { name: "A".into() }
        );
        assert_eq!(error.span, program.classes[1].name.span);
    }

    #[test]
    fn keeps_declaration_order() {
        let program = program("class B : Object { } class A : B { }");
        let table = ClassTable::collect(&program).unwrap();
        let names: Vec<_> = table.iter().map(|class| class.name.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn understands_walks_the_chain() {
        let program = program(
            "class Base : String { make [ ] } class Derived : Base { build: [ :x | ] }",
        );
        let table = ClassTable::collect(&program).unwrap();
        assert!(table.understands("Derived", "build:"));
        assert!(table.understands("Derived", "make"));
        assert!(table.understands("Derived", "read"));
        assert!(table.understands("Derived", "new"));
        assert!(!table.understands("Derived", "frobnicate"));
    }

    #[test]
    fn builtin_literals_use_their_own_table() {
        let program = program("");
        let table = ClassTable::collect(&program).unwrap();
        assert!(table.understands("Integer", "from:"));
        assert!(table.understands("String", "read"));
        assert!(!table.understands("Integer", "read"));
        assert!(!table.understands("Unknown", "new"));
    }

    #[test]
    fn understands_terminates_on_cycles() {
        let program = program("class A : B { } class B : A { }");
        let table = ClassTable::collect(&program).unwrap();
        assert!(!table.understands("A", "new"));
    }
}
