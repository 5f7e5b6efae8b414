// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Visible names while walking nested blocks.
//!
//! A [`Scope`] is a value: entering a block clones the enclosing scope, so
//! locals defined in one block never leak into a sibling or back out to the
//! parent.

use std::collections::HashSet;

use ecow::EcoString;

use crate::ast::Block;

use super::builtins::PSEUDO_VARIABLES;

/// The names visible at a point in a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Every visible name: pseudo-variables, parameters and locals.
    visible: HashSet<EcoString>,
    /// Parameters of this block and every enclosing block.
    parameters: HashSet<EcoString>,
}

impl Scope {
    /// The scope outside every method body.
    #[must_use]
    pub fn root() -> Self {
        Self {
            visible: PSEUDO_VARIABLES.iter().copied().map(EcoString::from).collect(),
            parameters: HashSet::new(),
        }
    }

    /// The scope at the start of `block`, nested inside `self`.
    #[must_use]
    pub fn enter(&self, block: &Block) -> Self {
        let mut scope = self.clone();
        for parameter in &block.parameters {
            scope.visible.insert(parameter.name.clone());
            scope.parameters.insert(parameter.name.clone());
        }
        scope
    }

    #[must_use]
    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.contains(name)
    }

    /// Returns `true` if `name` is a parameter of this or an enclosing block.
    #[must_use]
    pub fn is_parameter(&self, name: &str) -> bool {
        self.parameters.contains(name)
    }

    /// Makes a local visible to the statements that follow.
    pub fn define(&mut self, name: EcoString) {
        self.visible.insert(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Identifier;
    use crate::source_analysis::Span;

    fn block(parameters: &[&str]) -> Block {
        Block {
            parameters: parameters
                .iter()
                .map(|name| Identifier::new(*name, Span::default()))
                .collect(),
            body: Vec::new(),
            span: Span::default(),
        }
    }

    #[test]
    fn root_has_pseudo_variables() {
        let scope = Scope::root();
        for name in ["self", "super", "nil", "true", "false"] {
            assert!(scope.is_visible(name), "{name}");
        }
        assert!(!scope.is_visible("x"));
    }

    #[test]
    fn entering_adds_parameters() {
        let outer = Scope::root().enter(&block(&["a"]));
        let inner = outer.enter(&block(&["b"]));
        assert!(inner.is_parameter("a"));
        assert!(inner.is_parameter("b"));
        assert!(!outer.is_visible("b"));
    }

    #[test]
    fn locals_do_not_leak_to_parent() {
        let outer = Scope::root();
        let mut inner = outer.enter(&block(&[]));
        inner.define("x".into());
        assert!(inner.is_visible("x"));
        assert!(!inner.is_parameter("x"));
        assert!(!outer.is_visible("x"));
    }
}
