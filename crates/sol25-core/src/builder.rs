// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Concrete syntax tree to AST conversion.
//!
//! The builder is a bottom-up identity map: it performs no validation and
//! cannot fail. Tokens become names and literals, keyword fragments are
//! joined into selectors, and the messages after a primary collapse into
//! one [`MessageSend`](ast::Expression::MessageSend).

use ecow::EcoString;

use crate::ast;
use crate::source_analysis::{Span, Token, TokenKind, cst};

/// Builds the AST for a parsed program.
#[must_use]
pub fn build(program: cst::Program) -> ast::Program {
    let span = Span::new(0, program.eof.span().end());
    let classes: Vec<_> = program.classes.into_iter().map(build_class).collect();
    tracing::trace!(classes = classes.len(), "built AST");
    ast::Program {
        classes,
        description: program.first_comment,
        span,
    }
}

fn build_class(class: cst::Class) -> ast::Class {
    ast::Class {
        name: identifier(&class.name),
        superclass: identifier(&class.parent),
        methods: class.methods.into_iter().map(build_method).collect(),
        span: class.class_keyword.span().merge(class.close_brace.span()),
    }
}

fn build_method(method: cst::Method) -> ast::Method {
    let selector = build_selector(&method.selector);
    let body = build_block(method.body);
    let span = selector.span.merge(body.span);
    ast::Method {
        selector,
        body,
        span,
    }
}

fn build_selector(selector: &cst::Selector) -> ast::Selector {
    match selector {
        cst::Selector::Unary(token) => ast::Selector::new(text(token), token.span()),
        cst::Selector::Keyword(parts) => {
            let mut name = EcoString::new();
            let mut span = parts.first().map(cst::KeywordPart::span).unwrap_or_default();
            for part in parts {
                push_keyword(&mut name, part);
                span = span.merge(part.span());
            }
            ast::Selector::new(name, span)
        }
    }
}

/// Appends the `name:` text of a keyword fragment.
fn push_keyword(selector: &mut EcoString, part: &cst::KeywordPart) {
    match part {
        cst::KeywordPart::Glued(token) => selector.push_str(&text(token)),
        cst::KeywordPart::Spaced { name, .. } => {
            selector.push_str(&text(name));
            selector.push(':');
        }
    }
}

fn build_block(block: cst::Block) -> ast::Block {
    let span = block.span();
    ast::Block {
        parameters: block
            .parameters
            .iter()
            .map(|parameter| ast::Identifier::new(parameter.name(), parameter.span()))
            .collect(),
        body: block.statements.into_iter().map(build_statement).collect(),
        span,
    }
}

fn build_statement(statement: cst::Statement) -> ast::Statement {
    match statement {
        cst::Statement::Assign { target, value } => {
            let span = target.span().merge(value.span());
            ast::Statement::Assignment {
                target: identifier(&target),
                value: build_expression(value),
                span,
            }
        }
        cst::Statement::Expression(expression) => {
            ast::Statement::Expression(build_expression(expression))
        }
    }
}

/// Collapses `primary message*` into a single send.
///
/// The selector concatenates every fragment in order, unary names included,
/// and the arguments are the keyword arguments in order.
fn build_expression(expression: cst::Expression) -> ast::Expression {
    stacker::maybe_grow(32 * 1024, 256 * 1024, || collapse_messages(expression))
}

fn collapse_messages(expression: cst::Expression) -> ast::Expression {
    let span = expression.span();
    let receiver = build_primary(expression.primary);
    let Some(first) = expression.messages.first() else {
        return receiver;
    };

    let mut selector_span = first.span();
    let mut name = EcoString::new();
    let mut arguments = Vec::new();
    for message in expression.messages {
        selector_span = selector_span.merge(message.span());
        match message {
            cst::Message::Unary(token) => name.push_str(&text(&token)),
            cst::Message::Keyword(parts) => {
                for part in parts {
                    push_keyword(&mut name, &part.keyword);
                    arguments.push(build_primary(part.argument));
                }
            }
        }
    }

    ast::Expression::MessageSend {
        receiver: Box::new(receiver),
        selector: ast::Selector::new(name, selector_span),
        arguments,
        span,
    }
}

fn build_primary(primary: cst::Primary) -> ast::Expression {
    match primary {
        cst::Primary::Literal(token) => {
            let literal = match token.kind() {
                TokenKind::Integer(text) => ast::Literal::Integer(text.clone()),
                TokenKind::String(text) => ast::Literal::String(text.clone()),
                TokenKind::Nil => ast::Literal::Nil,
                TokenKind::True => ast::Literal::True,
                TokenKind::False => ast::Literal::False,
                _ => unreachable!("the parser only accepts literal tokens as literals"),
            };
            ast::Expression::Literal(literal, token.span())
        }
        cst::Primary::Pseudo(token) | cst::Primary::Identifier(token) => {
            ast::Expression::Variable(identifier(&token))
        }
        cst::Primary::ClassIdentifier(token) => {
            ast::Expression::ClassReference(identifier(&token))
        }
        cst::Primary::Block(block) => ast::Expression::Block(build_block(block)),
        cst::Primary::Parenthesized { expression, .. } => build_expression(*expression),
    }
}

fn identifier(token: &Token) -> ast::Identifier {
    ast::Identifier::new(text(token), token.span())
}

/// Source text of a name token; pseudo-variables use their keyword.
fn text(token: &Token) -> EcoString {
    match token.kind().as_str() {
        Some(text) => text.into(),
        None => token.kind().to_string().into(),
    }
}
