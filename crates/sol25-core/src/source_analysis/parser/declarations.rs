// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Class and method declaration parsing.
//!
//! ```text
//! class Main : Object {
//!     run [ ]
//!     compute:and: [ :a :b | ]
//! }
//! ```

use crate::source_analysis::{TokenKind, cst};

use super::{ParseResult, Parser};

impl Parser {
    /// Parses `"class" Upper ":" Upper "{" method* "}"`.
    pub(super) fn parse_class(&mut self) -> ParseResult<cst::Class> {
        let class_keyword = self.expect(&TokenKind::Class, "expected 'class'")?;
        let name = self.expect(
            &TokenKind::ClassIdentifier("".into()),
            "expected class name after 'class'",
        )?;
        self.expect(&TokenKind::Colon, "expected ':' after class name")?;
        let parent = self.expect(
            &TokenKind::ClassIdentifier("".into()),
            "expected parent class name after ':'",
        )?;
        self.expect(&TokenKind::LeftBrace, "expected '{' to open class body")?;

        let mut methods = Vec::new();
        while !self.check(&TokenKind::RightBrace)? {
            methods.push(self.parse_method()?);
        }
        let close_brace = self.advance();

        Ok(cst::Class {
            class_keyword,
            name,
            parent,
            methods,
            close_brace,
        })
    }

    /// Parses `selector block`.
    fn parse_method(&mut self) -> ParseResult<cst::Method> {
        let selector = self.parse_selector()?;
        if !self.check(&TokenKind::LeftBracket)? {
            return Err(self.error("expected '[' to open method body"));
        }
        let body = self.parse_block()?;
        Ok(cst::Method { selector, body })
    }

    /// Parses `lower | (lower ":")+`.
    fn parse_selector(&mut self) -> ParseResult<cst::Selector> {
        let mut parts = Vec::new();
        while let Some(part) = self.parse_keyword_part()? {
            parts.push(part);
        }
        if !parts.is_empty() {
            return Ok(cst::Selector::Keyword(parts));
        }

        if self.check(&TokenKind::Identifier("".into()))? {
            return Ok(cst::Selector::Unary(self.advance()));
        }
        Err(self.error("expected method selector"))
    }

    /// Consumes a `name:` fragment if one starts at the current token.
    pub(super) fn parse_keyword_part(&mut self) -> ParseResult<Option<cst::KeywordPart>> {
        match self.current_kind()? {
            TokenKind::Keyword(_) => Ok(Some(cst::KeywordPart::Glued(self.advance()))),
            TokenKind::Identifier(_) if self.peek_kind()? == &TokenKind::Colon => {
                let name = self.advance();
                let colon = self.advance();
                Ok(Some(cst::KeywordPart::Spaced { name, colon }))
            }
            _ => Ok(None),
        }
    }
}
