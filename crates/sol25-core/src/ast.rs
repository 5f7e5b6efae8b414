// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for SOL25.
//!
//! The AST represents the structure of a SOL25 program after parsing and
//! building. Every node carries a [`Span`] for diagnostics. The tree is
//! built once and never mutated; the semantic analyzer and the XML
//! serializer only read it.
//!
//! # Message Sending
//!
//! All messages following a primary form one send. The selector is the
//! in-order concatenation of every fragment and the arguments are the
//! keyword arguments in order:
//!
//! ```text
//! x foo bar: 1 baz: 2   =>   receiver x, selector "foobar:baz:", arguments [1, 2]
//! ```
//!
//! # Example
//!
//! ```ignore
//! // Source: x := Object new
//! Statement::Assignment {
//!     target: Identifier { name: "x".into(), span: ... },
//!     value: Expression::MessageSend {
//!         receiver: Box::new(Expression::ClassReference(Identifier { name: "Object".into(), .. })),
//!         selector: "new".into(),
//!         arguments: vec![],
//!         span: ...
//!     },
//!     span: ...
//! }
//! ```

use ecow::EcoString;

use crate::source_analysis::Span;

/// Top-level container for a SOL25 program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Class definitions in declaration order.
    pub classes: Vec<Class>,
    /// Text of the first comment in the source, if any.
    pub description: Option<EcoString>,
    /// Source location spanning the entire program.
    pub span: Span,
}

impl Program {
    /// Finds a declared class by name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|class| class.name.name == name)
    }
}

/// A class definition: `class Name : Parent { methods }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    /// The class name.
    pub name: Identifier,
    /// The parent class name.
    pub superclass: Identifier,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
    /// Source location of the whole definition.
    pub span: Span,
}

impl Class {
    /// Returns `true` if this class declares a method with `selector`.
    #[must_use]
    pub fn declares(&self, selector: &str) -> bool {
        self.methods
            .iter()
            .any(|method| method.selector.name == selector)
    }
}

/// A method definition: a selector bound to a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub selector: Selector,
    pub body: Block,
    pub span: Span,
}

/// A method or message selector: `run`, `from:`, `compute:and:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub name: EcoString,
    pub span: Span,
}

impl Selector {
    /// Creates a new selector.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// The number of arguments the selector takes (its colon count).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.name.matches(':').count()
    }
}

/// A block: parameters and statements. Used both as a method body and as a
/// closure value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Parameter names in order.
    pub parameters: Vec<Identifier>,
    /// Statements in order.
    pub body: Vec<Statement>,
    /// Source location, brackets included.
    pub span: Span,
}

impl Block {
    /// The number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Returns the first parameter that repeats an earlier name.
    #[must_use]
    pub fn duplicate_parameter(&self) -> Option<&Identifier> {
        self.parameters.iter().enumerate().find_map(|(index, parameter)| {
            self.parameters[..index]
                .iter()
                .any(|earlier| earlier.name == parameter.name)
                .then_some(parameter)
        })
    }
}

/// A statement inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `target := value`
    Assignment {
        target: Identifier,
        value: Expression,
        span: Span,
    },
    /// An expression evaluated for effect.
    Expression(Expression),
}

impl Statement {
    /// Returns the span of this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Assignment { span, .. } => *span,
            Self::Expression(expression) => expression.span(),
        }
    }
}

/// A SOL25 expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A literal value.
    Literal(Literal, Span),

    /// A class name used as a value: `Object`, `Main`.
    ClassReference(Identifier),

    /// A variable reference, including `self` and `super`.
    Variable(Identifier),

    /// A block literal.
    Block(Block),

    /// A message send.
    MessageSend {
        /// The object receiving the message.
        receiver: Box<Expression>,
        /// The concatenated selector.
        selector: Selector,
        /// The keyword arguments in order.
        arguments: Vec<Expression>,
        /// Source location.
        span: Span,
    },
}

impl Expression {
    /// Returns the span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(_, span) | Self::MessageSend { span, .. } => *span,
            Self::ClassReference(identifier) | Self::Variable(identifier) => identifier.span,
            Self::Block(block) => block.span,
        }
    }
}

/// Literal values.
///
/// Integer and string literals keep their source text: integers with any
/// sign, strings without quotes and with escapes undecoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Integer(EcoString),
    String(EcoString),
    Nil,
    True,
    False,
}

impl Literal {
    /// The name of the builtin class this literal is an instance of.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::String(_) => "String",
            Self::Nil => "Nil",
            Self::True => "True",
            Self::False => "False",
        }
    }

    /// The literal's value as written in the XML output.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Integer(text) | Self::String(text) => text,
            Self::Nil => "nil",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

/// An identifier (variable, parameter or class name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The name of the identifier.
    pub name: EcoString,
    /// Source location.
    pub span: Span,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        Identifier::new(name, Span::default())
    }

    #[test]
    fn selector_arity_counts_colons() {
        assert_eq!(Selector::new("run", Span::default()).arity(), 0);
        assert_eq!(Selector::new("from:", Span::default()).arity(), 1);
        assert_eq!(Selector::new("compute:and:", Span::default()).arity(), 2);
    }

    #[test]
    fn duplicate_parameter_finds_second_occurrence() {
        let block = Block {
            parameters: vec![ident("a"), ident("b"), ident("a")],
            body: Vec::new(),
            span: Span::new(0, 10),
        };
        assert_eq!(block.arity(), 3);
        assert_eq!(block.duplicate_parameter(), Some(&block.parameters[2]));

        let distinct = Block {
            parameters: vec![ident("a"), ident("b")],
            ..block
        };
        assert_eq!(distinct.duplicate_parameter(), None);
    }

    #[test]
    fn literal_class_and_value() {
        assert_eq!(Literal::Integer("-3".into()).class_name(), "Integer");
        assert_eq!(Literal::Integer("-3".into()).value(), "-3");
        assert_eq!(Literal::Nil.value(), "nil");
        assert_eq!(Literal::True.class_name(), "True");
    }

    #[test]
    fn expression_span() {
        let expression = Expression::Variable(Identifier::new("x", Span::new(4, 5)));
        assert_eq!(expression.span(), Span::new(4, 5));
    }
}
