// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis for SOL25.
//!
//! Five ordered passes run over an immutable AST; the first violation stops
//! analysis and is returned:
//!
//! 1. **Collect**: declared class names, rejecting duplicates ([`ClassTable`])
//! 2. **Entry point**: class `Main` with method `run`
//! 3. **Structure**: parents resolve, arities match, method parameters are
//!    distinct
//! 4. **Names**: variables, class literals, class-side sends, assignments
//! 5. **Cycles**: no class is its own ancestor
//!
//! ```
//! use sol25_core::builder::build;
//! use sol25_core::semantic_analysis::{SemanticErrorKind, analyse};
//! use sol25_core::source_analysis::{lex_with_eof, parse};
//!
//! let program = build(parse(lex_with_eof("class Main : Object { run [ x := y. ] }")).unwrap());
//! let error = analyse(&program).unwrap_err();
//! assert_eq!(error.kind, SemanticErrorKind::UndefinedVariable { name: "y".into() });
//! assert_eq!(error.exit_code(), 32);
//! ```

use crate::ast::Program;

pub mod builtins;
mod class_hierarchy;
mod class_table;
pub mod error;
mod name_resolver;
mod scope;
mod validators;

#[cfg(test)]
mod test_helpers;

pub use class_table::ClassTable;
pub use error::{SemanticError, SemanticErrorKind};

/// Runs every analysis pass over `program`.
///
/// # Errors
///
/// Returns the first violation found, in pass order.
pub fn analyse(program: &Program) -> Result<(), SemanticError> {
    let classes = ClassTable::collect(program)?;
    tracing::trace!(classes = classes.len(), "collected classes");

    validators::check_entry_point(program, &classes)?;
    tracing::trace!("entry point found");

    validators::check_structure(&classes)?;
    tracing::trace!("class structure valid");

    name_resolver::NameResolver::new(&classes).resolve()?;
    tracing::trace!("names resolved");

    class_hierarchy::check_acyclic(&classes)?;
    tracing::trace!("hierarchy acyclic");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::test_helpers::{analyse_source, main_with_run};
    use super::*;

    #[test]
    fn minimal_program() {
        assert_eq!(analyse_source("class Main : Object { run [ ] }"), Ok(()));
    }

    #[test]
    fn locals_and_unknown_variable() {
        assert_eq!(
            analyse_source(&main_with_run("[ x := 1. x printString. ]")),
            Ok(())
        );
        assert_eq!(
            analyse_source(&main_with_run("[ x := 1. y printString. ]")),
            Err(SemanticErrorKind::UndefinedVariable { name: "y".into() })
        );
    }

    #[test]
    fn undefined_parent() {
        assert_eq!(
            analyse_source("class A : B { } class Main : Object { run [ ] }"),
            Err(SemanticErrorKind::UnknownParent {
                class: "A".into(),
                parent: "B".into(),
            })
        );
    }

    #[test]
    fn self_inheritance() {
        assert_eq!(
            analyse_source("class A : A { } class Main : Object { run [ ] }"),
            Err(SemanticErrorKind::CyclicInheritance { class: "A".into() })
        );
    }

    #[test]
    fn run_with_parameter_is_an_arity_error() {
        assert_eq!(
            analyse_source(&main_with_run("[ :x | x ]")),
            Err(SemanticErrorKind::ArityMismatch {
                selector: "run".into(),
                expected: 0,
                found: 1,
            })
        );
    }

    #[test]
    fn missing_main() {
        assert_eq!(
            analyse_source("class App : Object { run [ ] }"),
            Err(SemanticErrorKind::MissingEntryPoint)
        );
    }

    #[test]
    fn duplicate_class_beats_missing_main() {
        assert_eq!(
            analyse_source("class A : Object { } class A : Object { }"),
            Err(SemanticErrorKind::DuplicateClass { name: "A".into() })
        );
    }

    #[test]
    fn entry_point_beats_structure() {
        assert_eq!(
            analyse_source("class A : Nope { }"),
            Err(SemanticErrorKind::MissingEntryPoint)
        );
    }

    #[test]
    fn structure_beats_names_in_later_class() {
        let source = "class Main : Object { run [ x := y. ] } class B : Object { f: [ ] }";
        assert_eq!(
            analyse_source(source),
            Err(SemanticErrorKind::ArityMismatch {
                selector: "f:".into(),
                expected: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn names_beat_cycles() {
        let source = "class A : A { } class Main : Object { run [ x := y. ] }";
        assert_eq!(
            analyse_source(source),
            Err(SemanticErrorKind::UndefinedVariable { name: "y".into() })
        );
    }

    #[test]
    fn inherited_class_methods() {
        let source = "class Shape : Object { unit [ ] } \
                      class Square : Shape { } \
                      class Main : Object { run [ a := Square unit. b := Square new. c := Square from: 1. ] }";
        assert_eq!(analyse_source(source), Ok(()));
    }

    #[test]
    fn analysis_is_idempotent() {
        let program = test_helpers::program(&main_with_run("[ x := Foo new. ]"));
        let first = analyse(&program);
        let second = analyse(&program);
        assert_eq!(first, second);
        assert!(first.is_err());
    }
}
