// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! XML serialization of a validated program.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <program language="SOL25">
//!   <class name="Main" parent="Object">
//!     <method selector="run">
//!       <block arity="0"/>
//!     </method>
//!   </class>
//! </program>
//! ```
//!
//! Elements without children are self-closing and nested elements are
//! indented by two spaces. Statements of a block share one `order`
//! sequence: assignments render as `<assign>`, expression statements as
//! `<eval>`.

pub mod document;

use crate::ast::{Block, Class, Expression, Method, Program, Statement};
use crate::docvec;

use self::document::{Document, INDENT, concat, line, nest};

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders `program` as an XML document, ending with a newline.
#[must_use]
pub fn to_xml(program: &Program) -> String {
    let mut attributes = vec![("language", "SOL25".to_string())];
    if let Some(description) = &program.description {
        attributes.push(("description", description.to_string()));
    }
    let root = element(
        "program",
        attributes,
        program.classes.iter().map(class).collect(),
    );
    docvec![XML_HEADER, line(), root, line()].to_pretty_string()
}

fn class(class: &Class) -> Document<'static> {
    element(
        "class",
        vec![
            ("name", class.name.name.to_string()),
            ("parent", class.superclass.name.to_string()),
        ],
        class.methods.iter().map(method).collect(),
    )
}

fn method(method: &Method) -> Document<'static> {
    element(
        "method",
        vec![("selector", method.selector.name.to_string())],
        vec![block(&method.body)],
    )
}

fn block(block: &Block) -> Document<'static> {
    let parameters = block.parameters.iter().enumerate().map(|(index, parameter)| {
        element(
            "parameter",
            vec![
                ("order", (index + 1).to_string()),
                ("name", parameter.name.to_string()),
            ],
            Vec::new(),
        )
    });
    let statements = block
        .body
        .iter()
        .enumerate()
        .map(|(index, statement)| self::statement(index + 1, statement));

    element(
        "block",
        vec![("arity", block.arity().to_string())],
        parameters.chain(statements).collect(),
    )
}

fn statement(order: usize, statement: &Statement) -> Document<'static> {
    let order = vec![("order", order.to_string())];
    match statement {
        Statement::Assignment { target, value, .. } => element(
            "assign",
            order,
            vec![
                element("var", vec![("name", target.name.to_string())], Vec::new()),
                expr(value),
            ],
        ),
        Statement::Expression(expression) => element("eval", order, vec![expr(expression)]),
    }
}

/// Wraps an expression in `<expr>`.
fn expr(expression: &Expression) -> Document<'static> {
    element("expr", Vec::new(), vec![self::expression(expression)])
}

fn expression(expression: &Expression) -> Document<'static> {
    stacker::maybe_grow(32 * 1024, 256 * 1024, || expression_element(expression))
}

fn expression_element(expression: &Expression) -> Document<'static> {
    match expression {
        Expression::Literal(literal, _) => element(
            "literal",
            vec![
                ("class", literal.class_name().to_string()),
                ("value", literal.value().to_string()),
            ],
            Vec::new(),
        ),
        Expression::ClassReference(identifier) => element(
            "literal",
            vec![
                ("class", "class".to_string()),
                ("value", identifier.name.to_string()),
            ],
            Vec::new(),
        ),
        Expression::Variable(identifier) => {
            element("var", vec![("name", identifier.name.to_string())], Vec::new())
        }
        Expression::Block(inner) => block(inner),
        Expression::MessageSend {
            receiver,
            selector,
            arguments,
            ..
        } => {
            let arguments = arguments.iter().enumerate().map(|(index, argument)| {
                element("arg", vec![("order", (index + 1).to_string())], vec![expr(argument)])
            });
            element(
                "send",
                vec![("selector", selector.name.to_string())],
                std::iter::once(expr(receiver)).chain(arguments).collect(),
            )
        }
    }
}

/// Builds an element, self-closing when it has no children.
fn element(
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Document<'static>>,
) -> Document<'static> {
    let mut open = format!("<{name}");
    for (key, value) in attributes {
        open.push_str(&format!(" {key}=\"{}\"", escape_attribute(&value)));
    }

    if children.is_empty() {
        open.push_str("/>");
        return Document::String(open);
    }

    open.push('>');
    let body = concat(children.into_iter().flat_map(|child| [line(), child]));
    docvec![open, nest(INDENT, body), line(), "</", name, ">"]
}

/// Escapes an attribute value for use between double quotes.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            c => escaped.push(c),
        }
    }
    escaped
}
