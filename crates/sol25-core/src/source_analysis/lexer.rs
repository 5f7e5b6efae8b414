// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for SOL25 source code.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written and never fails: input that cannot start a token becomes a
//! [`TokenKind::Error`] carrying the [`LexErrorKind`](super::LexErrorKind).
//! The parser turns the first error token it reaches into a fatal lexical
//! error, so a syntax error earlier in the source is still reported first.
//!
//! # Example
//!
//! ```
//! use sol25_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x := 1").collect();
//! assert_eq!(tokens.len(), 3); // x, :=, 1 (EOF excluded from iterator)
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{LexErrorKind, Span, Token, TokenKind, Trivia};

/// A lexer that tokenizes SOL25 source code.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// Pending trivia to attach to the next token.
    pending_trivia: Vec<Trivia>,
    /// An unterminated comment found while skipping trivia.
    pending_error: Option<(LexErrorKind, Span)>,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            pending_trivia: Vec::new(),
            pending_error: None,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Peeks `n+1` characters ahead without consuming (n=0 is same as `peek_char`).
    fn peek_char_n(&self, n: usize) -> Option<char> {
        let mut iter = self.chars.clone();
        for _ in 0..n {
            iter.next();
        }
        iter.next().map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Skips whitespace and comments, collecting them as trivia.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    let start = self.current_position();
                    self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
                    let text = self.text_for(self.span_from(start));
                    self.pending_trivia
                        .push(Trivia::Whitespace(EcoString::from(text)));
                }
                Some('"') => {
                    if !self.lex_comment() {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    /// Lexes a comment: `"..."`. Returns `false` if it is unterminated.
    fn lex_comment(&mut self) -> bool {
        let start = self.current_position();
        self.advance(); // opening "
        self.advance_while(|c| c != '"');
        if self.advance().is_none() {
            self.pending_error = Some((LexErrorKind::UnterminatedComment, self.span_from(start)));
            return false;
        }
        let text = self.text_for(self.span_from(start));
        self.pending_trivia.push(Trivia::Comment(EcoString::from(text)));
        true
    }

    /// Collects trailing trivia: same-line whitespace and at most one comment.
    fn collect_trailing_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t') => {
                    let start = self.current_position();
                    self.advance_while(|c| matches!(c, ' ' | '\t'));
                    let text = self.text_for(self.span_from(start));
                    self.pending_trivia
                        .push(Trivia::Whitespace(EcoString::from(text)));
                }
                Some('"') => {
                    self.lex_comment();
                    break;
                }
                _ => break,
            }
        }
    }

    /// Lexes the next token.
    fn lex_token(&mut self) -> Token {
        self.skip_trivia();
        let leading_trivia = std::mem::take(&mut self.pending_trivia);

        if let Some((kind, span)) = self.pending_error.take() {
            return Token::with_trivia(TokenKind::Error(kind), span, leading_trivia, Vec::new());
        }

        let start = self.current_position();
        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.lex_token_kind(c, start),
        };
        let span = self.span_from(start);

        // An unterminated trailing comment surfaces as the next token.
        self.collect_trailing_trivia();
        let trailing_trivia = std::mem::take(&mut self.pending_trivia);

        Token::with_trivia(kind, span, leading_trivia, trailing_trivia)
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char, start: u32) -> TokenKind {
        match c {
            'a'..='z' | '_' => self.lex_identifier_or_keyword(),
            'A'..='Z' => {
                self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::ClassIdentifier(EcoString::from(self.text_for(self.span_from(start))))
            }
            '0'..='9' => self.lex_integer(start),
            '+' | '-' if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.advance(); // sign
                self.lex_integer(start)
            }
            '\'' => self.lex_string(),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '.' => self.single(TokenKind::Period),
            '|' => self.single(TokenKind::Pipe),
            ':' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::Assign
                } else {
                    TokenKind::Colon
                }
            }
            _ => {
                self.advance();
                TokenKind::Error(LexErrorKind::UnexpectedCharacter(c))
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Lexes an identifier, reserved word, or glued keyword part (`from:`).
    fn lex_identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let text = self.text_for(self.span_from(start));

        if let Some(reserved) = TokenKind::reserved(text) {
            return reserved;
        }

        if self.peek_char() == Some(':') && self.peek_char_n(1) != Some('=') {
            self.advance(); // consume the colon
            let text = self.text_for(self.span_from(start));
            TokenKind::Keyword(EcoString::from(text))
        } else {
            TokenKind::Identifier(EcoString::from(text))
        }
    }

    /// Lexes the digits of an integer; any sign has already been consumed.
    fn lex_integer(&mut self, start: u32) -> TokenKind {
        self.advance_while(|c| c.is_ascii_digit());
        TokenKind::Integer(EcoString::from(self.text_for(self.span_from(start))))
    }

    /// Lexes a single-quoted string literal, keeping escapes undecoded.
    fn lex_string(&mut self) -> TokenKind {
        self.advance(); // opening quote
        let content_start = self.current_position();
        let mut invalid_escape = None;

        loop {
            match self.peek_char() {
                None => return TokenKind::Error(LexErrorKind::UnterminatedString),
                Some('\'') => break,
                Some('\\') => {
                    self.advance();
                    match self.advance() {
                        None => return TokenKind::Error(LexErrorKind::UnterminatedString),
                        Some('n' | '\'' | '\\') => {}
                        Some(other) => {
                            invalid_escape.get_or_insert(other);
                        }
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let content = self.text_for(self.span_from(content_start));
        self.advance(); // closing quote

        match invalid_escape {
            Some(c) => TokenKind::Error(LexErrorKind::InvalidEscape(c)),
            None => TokenKind::String(EcoString::from(content)),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lex_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience function to lex source into a vector of tokens (excluding EOF).
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lexes source into a vector of tokens ending with exactly one EOF token.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.lex_token();
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}
