// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for SOL25 source code.
//!
//! The parser consumes the token stream produced by the
//! [`Lexer`](super::Lexer) and builds a [`cst::Program`]. It is deterministic
//! with one token of lookahead and stops at the first problem:
//!
//! - an [`Error`](TokenKind::Error) token reached in the stream becomes a
//!   [`ParseError::Lexical`];
//! - a token that fits no production becomes a [`ParseError::Syntax`].
//!
//! There is no recovery and no partial tree. Blocks and parentheses may
//! nest at most [`MAX_NESTING_DEPTH`] levels deep; deeper input is a syntax
//! error, which keeps every later tree walk within a bounded stack.
//!
//! # Message Chaining
//!
//! Every message following a primary is collected into the same
//! [`cst::Expression`]. Keyword arguments are primaries, so a send used as
//! an argument has to be parenthesized:
//!
//! ```text
//! x compute: 1 and: (y foo)     "one expression, two keyword parts"
//! ```
//!
//! How those messages become a single send is decided by the
//! [`builder`](crate::builder).
//!
//! # Usage
//!
//! ```
//! use sol25_core::source_analysis::{lex_with_eof, parse};
//!
//! let tokens = lex_with_eof("class Main : Object { run [ ] }");
//! let program = parse(tokens).unwrap();
//! assert_eq!(program.classes.len(), 1);
//! ```

use crate::source_analysis::{
    LexError, ParseError, Span, SyntaxError, Token, TokenKind, Trivia, cst,
};

mod declarations;
mod expressions;

pub(super) type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of blocks and parenthesized expressions, method bodies
/// included.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse a token stream (ending with EOF) into a concrete syntax tree.
pub fn parse(tokens: Vec<Token>) -> Result<cst::Program, ParseError> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;
    tracing::trace!(classes = program.classes.len(), "parsed program");
    Ok(program)
}

/// The parser state.
pub(super) struct Parser {
    /// The tokens being parsed.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Blocks and parentheses currently open.
    depth: usize,
}

impl Parser {
    fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|token| token.kind().is_eof()) {
            let end = tokens.last().map_or(0, |token| token.span().end());
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token without checking for lexical errors.
    fn current_token(&self) -> &Token {
        // The constructor guarantees a trailing EOF that is never consumed.
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Returns the current token kind, failing if the lexer could not
    /// tokenize the input at this point.
    pub(super) fn current_kind(&self) -> ParseResult<&TokenKind> {
        Self::checked_kind(self.current_token())
    }

    /// Returns the kind of the token after the current one.
    pub(super) fn peek_kind(&self) -> ParseResult<&TokenKind> {
        let index = (self.current + 1).min(self.tokens.len() - 1);
        Self::checked_kind(&self.tokens[index])
    }

    fn checked_kind(token: &Token) -> ParseResult<&TokenKind> {
        match token.kind() {
            TokenKind::Error(kind) => Err(LexError::new(kind.clone(), token.span()).into()),
            kind => Ok(kind),
        }
    }

    /// Checks if the current token matches the given kind (ignoring payload).
    pub(super) fn check(&self, kind: &TokenKind) -> ParseResult<bool> {
        Ok(std::mem::discriminant(self.current_kind()?) == std::mem::discriminant(kind))
    }

    /// Advances to the next token and returns the consumed one.
    pub(super) fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if !token.kind().is_eof() {
            self.current += 1;
        }
        token
    }

    /// Consumes the current token if it matches the given kind.
    pub(super) fn match_token(&mut self, kind: &TokenKind) -> ParseResult<Option<Token>> {
        Ok(if self.check(kind)? {
            Some(self.advance())
        } else {
            None
        })
    }

    /// Expects the current token to match the given kind, advancing if it does.
    pub(super) fn expect(&mut self, kind: &TokenKind, message: &str) -> ParseResult<Token> {
        match self.match_token(kind)? {
            Some(token) => Ok(token),
            None => Err(self.error(message)),
        }
    }

    /// Builds a syntax error at the current token.
    pub(super) fn error(&self, message: &str) -> ParseError {
        let token = self.current_token();
        SyntaxError::new(format!("{message}, found '{}'", token.kind()), token.span()).into()
    }

    /// Runs `parse` one nesting level deeper, failing at the current token
    /// once [`MAX_NESTING_DEPTH`] levels are open.
    pub(super) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(&format!(
                "blocks and parentheses nest more than {MAX_NESTING_DEPTH} levels deep"
            )));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // ========================================================================
    // Program
    // ========================================================================

    fn parse_program(&mut self) -> ParseResult<cst::Program> {
        let first_comment = self
            .tokens
            .iter()
            .flat_map(Token::trivia)
            .find_map(Trivia::comment_text)
            .map(ecow::EcoString::from);

        let mut classes = Vec::new();
        while !self.current_kind()?.is_eof() {
            if !self.check(&TokenKind::Class)? {
                return Err(self.error("expected 'class' or end of input"));
            }
            classes.push(self.parse_class()?);
        }

        Ok(cst::Program {
            classes,
            first_comment,
            eof: self.advance(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::{LexErrorKind, lex_with_eof};

    fn parse_source(source: &str) -> ParseResult<cst::Program> {
        parse(lex_with_eof(source))
    }

    fn syntax_message(source: &str) -> String {
        match parse_source(source) {
            Err(ParseError::Syntax(error)) => error.message.to_string(),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_program() {
        let program = parse_source("").unwrap();
        assert!(program.classes.is_empty());
        assert!(program.first_comment.is_none());
    }

    #[test]
    fn parse_minimal_class() {
        let program = parse_source("class Main : Object { run [ ] }").unwrap();
        let class = &program.classes[0];
        assert_eq!(class.name.kind(), &TokenKind::ClassIdentifier("Main".into()));
        assert_eq!(class.parent.kind(), &TokenKind::ClassIdentifier("Object".into()));
        assert_eq!(class.methods.len(), 1);
        assert!(class.methods[0].body.statements.is_empty());
    }

    #[test]
    fn parse_records_first_comment() {
        let program =
            parse_source("\"Program header\" class Main : Object { \"later\" run [ ] }").unwrap();
        assert_eq!(program.first_comment.as_deref(), Some("Program header"));
    }

    #[test]
    fn parse_rejects_top_level_expression() {
        assert_eq!(
            syntax_message("x := 1"),
            "expected 'class' or end of input, found 'x'"
        );
    }

    #[test]
    fn parse_reports_missing_close_brace() {
        assert_eq!(
            syntax_message("class Main : Object { run [ ]"),
            "expected method selector, found '<eof>'"
        );
    }

    #[test]
    fn parse_reports_lexical_error_at_error_token() {
        let error = parse_source("class Main : Object { run [ x := # ] }").unwrap_err();
        match error {
            ParseError::Lexical(error) => {
                assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter('#'));
            }
            ParseError::Syntax(error) => panic!("expected lexical error, got {error:?}"),
        }
    }

    #[test]
    fn earlier_syntax_error_wins_over_later_lexical_error() {
        let error = parse_source("class Main Object { run [ x := # ] }").unwrap_err();
        assert!(matches!(error, ParseError::Syntax(_)), "{error:?}");
    }

    #[test]
    fn parse_without_eof_token_appends_one() {
        let tokens = crate::source_analysis::lex("class A : Object { }");
        let program = parse(tokens).unwrap();
        assert_eq!(program.classes.len(), 1);
        assert!(program.eof.kind().is_eof());
    }
}
