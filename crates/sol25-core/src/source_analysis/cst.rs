// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Concrete syntax tree produced by the parser.
//!
//! One node per grammar production, holding the tokens that carry names,
//! literals or the outer extent of a construct. Punctuation the builder
//! never reads (`:` in a class header, `{`, `|`, `.`) is checked by the
//! parser and dropped. Nothing here is validated beyond the grammar; the
//! [`builder`](crate::builder) maps this tree onto the typed AST.

use super::{Span, Token, TokenKind};

/// `program := class*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub classes: Vec<Class>,
    /// Text of the first comment in the source, without quotes.
    pub first_comment: Option<ecow::EcoString>,
    /// The end-of-file token.
    pub eof: Token,
}

/// `class := "class" Upper ":" Upper "{" method* "}"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub class_keyword: Token,
    pub name: Token,
    pub parent: Token,
    pub methods: Vec<Method>,
    pub close_brace: Token,
}

/// `method := selector block`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub selector: Selector,
    pub body: Block,
}

/// `selector := lower | (lower ":")+`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Unary(Token),
    Keyword(Vec<KeywordPart>),
}

/// A `name:` fragment, either glued (`at:`) or spaced (`at :`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordPart {
    Glued(Token),
    Spaced { name: Token, colon: Token },
}

impl KeywordPart {
    /// Source span of the whole fragment.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Glued(token) => token.span(),
            Self::Spaced { name, colon } => name.span().merge(colon.span()),
        }
    }
}

/// `block := "[" (":" lower)* "|"? (statement ("." statement)* "."?)? "]"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub open_bracket: Token,
    pub parameters: Vec<BlockParameter>,
    pub statements: Vec<Statement>,
    pub close_bracket: Token,
}

/// The name of a `":" lower` block parameter.
///
/// Whitespace between parameters is optional, so in `[:x:y | ]` the lexer
/// glues `x:` into one keyword token whose colon opens the next parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockParameter {
    /// An identifier, or a keyword token when the next colon is glued on.
    pub name: Token,
}

impl BlockParameter {
    /// The parameter name, without a glued colon.
    #[must_use]
    pub fn name(&self) -> &str {
        let text = self.name.kind().as_str().unwrap_or_default();
        text.strip_suffix(':').unwrap_or(text)
    }

    /// Source span of the name, without a glued colon.
    #[must_use]
    pub fn span(&self) -> Span {
        let span = self.name.span();
        match self.name.kind() {
            TokenKind::Keyword(_) => Span::new(span.start(), span.end() - 1),
            _ => span,
        }
    }
}

/// `statement := lower ":=" expr | expr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign { target: Token, value: Expression },
    Expression(Expression),
}

/// `expr := primary message*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub primary: Primary,
    pub messages: Vec<Message>,
}

/// `message := lower | (lower ":" argument)+`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Unary(Token),
    Keyword(Vec<KeywordArgument>),
}

/// One `name: argument` pair of a keyword message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordArgument {
    pub keyword: KeywordPart,
    pub argument: Primary,
}

/// `primary := literal | self | super | lower | Upper | block | "(" expr ")"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primary {
    /// Integer, string, `nil`, `true` or `false`.
    Literal(Token),
    /// `self` or `super`.
    Pseudo(Token),
    Identifier(Token),
    ClassIdentifier(Token),
    Block(Block),
    Parenthesized {
        open_paren: Token,
        expression: Box<Expression>,
        close_paren: Token,
    },
}

impl Block {
    #[must_use]
    pub fn span(&self) -> Span {
        self.open_bracket.span().merge(self.close_bracket.span())
    }
}

impl Primary {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(token)
            | Self::Pseudo(token)
            | Self::Identifier(token)
            | Self::ClassIdentifier(token) => token.span(),
            Self::Block(block) => block.span(),
            Self::Parenthesized {
                open_paren,
                close_paren,
                ..
            } => open_paren.span().merge(close_paren.span()),
        }
    }
}

impl Message {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Unary(token) => token.span(),
            Self::Keyword(parts) => parts.iter().fold(Span::default(), |span, part| {
                let part_span = part.keyword.span().merge(part.argument.span());
                if span.is_empty() {
                    part_span
                } else {
                    span.merge(part_span)
                }
            }),
        }
    }
}

impl Expression {
    #[must_use]
    pub fn span(&self) -> Span {
        let start = self.primary.span();
        self.messages
            .last()
            .map_or(start, |message| start.merge(message.span()))
    }
}
