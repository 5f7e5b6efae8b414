// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for SOL25 lexical analysis.
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the type of token
//! - A [`Span`] indicating its location in source
//! - Leading and trailing [`Trivia`] (whitespace and comments)
//!
//! # Syntax Coverage
//!
//! - Unary messages: `object message`
//! - Keyword messages: `object compute: 1 and: 2`
//! - Blocks: `[:x | y := x.]`
//! - Class definitions: `class Main : Object { ... }`

use ecow::EcoString;

use super::{LexErrorKind, Span};

/// The kind of token, not including source location or trivia.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Names ===
    /// A lowercase identifier: `foo`, `_tmp`, `x1`
    Identifier(EcoString),

    /// A capitalized identifier naming a class: `Main`, `Object`
    ClassIdentifier(EcoString),

    /// A keyword selector part (identifier glued to a colon): `from:`, `and:`
    Keyword(EcoString),

    // === Literals ===
    /// An integer literal, optionally signed: `42`, `-17`, `+3`
    Integer(EcoString),

    /// A single-quoted string; holds the raw text between the quotes with
    /// escape sequences left undecoded.
    String(EcoString),

    // === Reserved words ===
    /// `class`
    Class,
    /// `self`
    SelfKw,
    /// `super`
    Super,
    /// `nil`
    Nil,
    /// `true`
    True,
    /// `false`
    False,

    // === Delimiters ===
    /// Left parenthesis: `(`
    LeftParen,

    /// Right parenthesis: `)`
    RightParen,

    /// Left bracket (block start): `[`
    LeftBracket,

    /// Right bracket (block end): `]`
    RightBracket,

    /// Left brace (class body start): `{`
    LeftBrace,

    /// Right brace: `}`
    RightBrace,

    // === Punctuation ===
    /// Assignment operator: `:=`
    Assign,

    /// Statement separator: `.`
    Period,

    /// Block parameter separator: `|`
    Pipe,

    /// A colon that is not part of a glued keyword: block parameter marker,
    /// class header separator, or a spaced keyword part (`at :`).
    Colon,

    // === Special ===
    /// End of file
    Eof,

    /// Input that cannot start any token.
    Error(LexErrorKind),
}

impl TokenKind {
    /// Maps a reserved word to its token kind.
    #[must_use]
    pub fn reserved(word: &str) -> Option<Self> {
        Some(match word {
            "class" => Self::Class,
            "self" => Self::SelfKw,
            "super" => Self::Super,
            "nil" => Self::Nil,
            "true" => Self::True,
            "false" => Self::False,
            _ => return None,
        })
    }

    /// Returns `true` if this token is a literal value.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Integer(_) | Self::String(_) | Self::Nil | Self::True | Self::False
        )
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the string content if this token carries one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Identifier(s)
            | Self::ClassIdentifier(s)
            | Self::Keyword(s)
            | Self::Integer(s)
            | Self::String(s) => Some(s),
            Self::Class
            | Self::SelfKw
            | Self::Super
            | Self::Nil
            | Self::True
            | Self::False
            | Self::LeftParen
            | Self::RightParen
            | Self::LeftBracket
            | Self::RightBracket
            | Self::LeftBrace
            | Self::RightBrace
            | Self::Assign
            | Self::Period
            | Self::Pipe
            | Self::Colon
            | Self::Eof
            | Self::Error(_) => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(s) | Self::ClassIdentifier(s) | Self::Keyword(s) | Self::Integer(s) => {
                write!(f, "{s}")
            }
            Self::String(s) => write!(f, "'{s}'"),
            Self::Class => write!(f, "class"),
            Self::SelfKw => write!(f, "self"),
            Self::Super => write!(f, "super"),
            Self::Nil => write!(f, "nil"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::Assign => write!(f, ":="),
            Self::Period => write!(f, "."),
            Self::Pipe => write!(f, "|"),
            Self::Colon => write!(f, ":"),
            Self::Eof => write!(f, "<eof>"),
            Self::Error(kind) => write!(f, "<error: {kind}>"),
        }
    }
}

/// Non-semantic content: whitespace and comments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trivia {
    /// Whitespace (spaces, tabs, newlines)
    Whitespace(EcoString),

    /// A comment including its double quotes: `"comment text"`
    Comment(EcoString),
}

impl Trivia {
    /// Returns the text content of this trivia.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Whitespace(s) | Self::Comment(s) => s,
        }
    }

    /// Returns `true` if this is a comment.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns the comment text without its delimiting quotes.
    #[must_use]
    pub fn comment_text(&self) -> Option<&str> {
        match self {
            Self::Comment(s) => Some(
                s.strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(s),
            ),
            Self::Whitespace(_) => None,
        }
    }
}

/// A token with its source location and surrounding trivia.
///
/// # Examples
///
/// ```
/// use sol25_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier("foo".into()), Span::new(0, 3));
/// assert!(matches!(token.kind(), TokenKind::Identifier(_)));
/// assert_eq!(token.span().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    leading_trivia: Vec<Trivia>,
    trailing_trivia: Vec<Trivia>,
}

impl Token {
    /// Creates a new token with no trivia.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            leading_trivia: Vec::new(),
            trailing_trivia: Vec::new(),
        }
    }

    /// Creates a new token with trivia.
    #[must_use]
    pub fn with_trivia(
        kind: TokenKind,
        span: Span,
        leading_trivia: Vec<Trivia>,
        trailing_trivia: Vec<Trivia>,
    ) -> Self {
        Self {
            kind,
            span,
            leading_trivia,
            trailing_trivia,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token (excluding trivia).
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the trivia that precedes this token.
    #[must_use]
    pub fn leading_trivia(&self) -> &[Trivia] {
        &self.leading_trivia
    }

    /// Returns the trivia that follows this token on the same line.
    #[must_use]
    pub fn trailing_trivia(&self) -> &[Trivia] {
        &self.trailing_trivia
    }

    /// Iterates leading then trailing trivia, in source order.
    pub fn trivia(&self) -> impl Iterator<Item = &Trivia> {
        self.leading_trivia.iter().chain(&self.trailing_trivia)
    }
}
