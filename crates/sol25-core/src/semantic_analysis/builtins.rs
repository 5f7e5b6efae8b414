// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Builtin root classes and their class-side method tables.
//!
//! These are fixed tables consulted by the analyzer, never AST nodes.

/// The classes every program may inherit from or refer to.
pub const ROOT_CLASSES: &[&str] = &["Object", "Integer", "String", "Nil", "True", "False", "Block"];

/// Names visible in every method body before any parameter or local.
pub const PSEUDO_VARIABLES: &[&str] = &["self", "super", "true", "false", "nil"];

const CLASS_METHODS: &[&str] = &["new", "from:"];
const STRING_CLASS_METHODS: &[&str] = &["new", "from:", "read"];

/// Returns `true` if `name` is a builtin root class.
#[must_use]
pub fn is_root_class(name: &str) -> bool {
    ROOT_CLASSES.iter().any(|root| *root == name)
}

/// Class-side selectors understood by a builtin root class.
#[must_use]
pub fn class_methods(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "String" => Some(STRING_CLASS_METHODS),
        _ if is_root_class(name) => Some(CLASS_METHODS),
        _ => None,
    }
}
