// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Block, statement and expression parsing.
//!
//! Expression parsing handles:
//!
//! - Blocks with parameters (`[:x :y | ...]`)
//! - Assignment (`x := ...`) and expression statements
//! - Unary and keyword messages after a primary
//! - Literals, pseudo-variables and parenthesized expressions

use crate::source_analysis::{TokenKind, cst};

use super::{ParseResult, Parser};

impl Parser {
    // ========================================================================
    // Blocks and Statements
    // ========================================================================

    /// Parses `"[" (":" lower)* "|"? statements "]"`.
    pub(super) fn parse_block(&mut self) -> ParseResult<cst::Block> {
        self.nested(|parser| {
            let open_bracket = parser.expect(&TokenKind::LeftBracket, "expected '['")?;
            let parameters = parser.parse_block_parameters()?;

            let pipe = parser.match_token(&TokenKind::Pipe)?;
            if pipe.is_none() && !parameters.is_empty() && !parser.check(&TokenKind::RightBracket)? {
                return Err(parser.error("expected '|' after block parameters"));
            }

            let mut statements = Vec::new();
            while !parser.check(&TokenKind::RightBracket)? {
                statements.push(parser.parse_statement()?);
                let terminated = parser.match_token(&TokenKind::Period)?.is_some();
                if !terminated && !parser.check(&TokenKind::RightBracket)? {
                    return Err(parser.error("expected '.' or ']' after statement"));
                }
            }
            let close_bracket = parser.advance();

            Ok(cst::Block {
                open_bracket,
                parameters,
                statements,
                close_bracket,
            })
        })
    }

    /// Parses `(":" lower)*`.
    ///
    /// `:x:y` lexes as `:`, `x:`, `y`; the colon glued to `x:` opens the
    /// next parameter.
    fn parse_block_parameters(&mut self) -> ParseResult<Vec<cst::BlockParameter>> {
        let mut parameters = Vec::new();
        let mut colon = self.match_token(&TokenKind::Colon)?.is_some();
        while colon {
            let name = match self.current_kind()? {
                TokenKind::Identifier(_) => {
                    let name = self.advance();
                    colon = self.match_token(&TokenKind::Colon)?.is_some();
                    name
                }
                TokenKind::Keyword(_) => self.advance(),
                _ => return Err(self.error("expected parameter name after ':'")),
            };
            parameters.push(cst::BlockParameter { name });
        }
        Ok(parameters)
    }

    /// Parses `lower ":=" expr | expr`.
    fn parse_statement(&mut self) -> ParseResult<cst::Statement> {
        if self.check(&TokenKind::Identifier("".into()))?
            && self.peek_kind()? == &TokenKind::Assign
        {
            let target = self.advance();
            self.advance(); // :=
            let value = self.parse_expression()?;
            return Ok(cst::Statement::Assign { target, value });
        }

        Ok(cst::Statement::Expression(self.parse_expression()?))
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parses `primary message*`.
    ///
    /// Blocks and parenthesized expressions recurse through here, so the
    /// stack is extended on the heap when remaining space falls below
    /// 32 KiB.
    pub(super) fn parse_expression(&mut self) -> ParseResult<cst::Expression> {
        stacker::maybe_grow(32 * 1024, 256 * 1024, || {
            let primary = self.parse_primary()?;
            let mut messages = Vec::new();
            loop {
                if let Some(keyword) = self.parse_keyword_part()? {
                    messages.push(self.parse_keyword_message(keyword)?);
                } else if self.check(&TokenKind::Identifier("".into()))? {
                    messages.push(cst::Message::Unary(self.advance()));
                } else {
                    break;
                }
            }
            Ok(cst::Expression { primary, messages })
        })
    }

    /// Parses the rest of a keyword message whose first part is consumed.
    fn parse_keyword_message(&mut self, first: cst::KeywordPart) -> ParseResult<cst::Message> {
        let mut parts = vec![cst::KeywordArgument {
            keyword: first,
            argument: self.parse_primary()?,
        }];
        while let Some(keyword) = self.parse_keyword_part()? {
            let argument = self.parse_primary()?;
            parts.push(cst::KeywordArgument { keyword, argument });
        }
        Ok(cst::Message::Keyword(parts))
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> ParseResult<cst::Primary> {
        let kind = self.current_kind()?.clone();
        Ok(match kind {
            kind if kind.is_literal() => cst::Primary::Literal(self.advance()),
            TokenKind::SelfKw | TokenKind::Super => cst::Primary::Pseudo(self.advance()),
            TokenKind::Identifier(_) => cst::Primary::Identifier(self.advance()),
            TokenKind::ClassIdentifier(_) => cst::Primary::ClassIdentifier(self.advance()),
            TokenKind::LeftBracket => cst::Primary::Block(self.parse_block()?),
            TokenKind::LeftParen => self.nested(|parser| {
                let open_paren = parser.advance();
                let expression = Box::new(parser.parse_expression()?);
                let close_paren =
                    parser.expect(&TokenKind::RightParen, "expected ')' after expression")?;
                Ok(cst::Primary::Parenthesized {
                    open_paren,
                    expression,
                    close_paren,
                })
            })?,
            _ => return Err(self.error("expected expression")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::MAX_NESTING_DEPTH;
    use crate::source_analysis::{ParseError, TokenKind, cst, lex_with_eof, parse};

    /// Parses `source` as the body of `Main>>run` and returns the block.
    fn parse_body(body: &str) -> Result<cst::Block, ParseError> {
        let source = format!("class Main : Object {{ run {body} }}");
        let program = parse(lex_with_eof(&source))?;
        let mut methods = program.classes.into_iter().next().unwrap().methods;
        Ok(methods.remove(0).body)
    }

    fn syntax_message(body: &str) -> String {
        match parse_body(body) {
            Err(ParseError::Syntax(error)) => error.message.to_string(),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    fn only_expression(block: &cst::Block) -> &cst::Expression {
        match &block.statements[..] {
            [cst::Statement::Expression(expression)] => expression,
            other => panic!("expected one expression statement, got {other:?}"),
        }
    }

    #[test]
    fn block_pipe_forms() {
        for body in ["[ ]", "[ | ]", "[ :x ]", "[ :x | ]", "[ x := 1. ]", "[ :x | x ]"] {
            assert!(parse_body(body).is_ok(), "{body}");
        }
    }

    #[test]
    fn block_parameters_need_pipe_before_statements() {
        assert_eq!(
            syntax_message("[ :x x ]"),
            "expected '|' after block parameters, found 'x'"
        );
    }

    #[test]
    fn statements_need_separators() {
        assert_eq!(
            syntax_message("[ x := 1 y := 2 ]"),
            "expected '.' or ']' after statement, found ':='"
        );
    }

    #[test]
    fn trailing_period_is_optional() {
        let with = parse_body("[ x := 1. y := 2. ]").unwrap();
        let without = parse_body("[ x := 1. y := 2 ]").unwrap();
        assert_eq!(with.statements.len(), 2);
        assert_eq!(without.statements.len(), 2);
    }

    #[test]
    fn assignment_and_expression_statements() {
        let block = parse_body("[ x := 1. x printString. ]").unwrap();
        assert!(matches!(block.statements[0], cst::Statement::Assign { .. }));
        assert!(matches!(
            block.statements[1],
            cst::Statement::Expression(_)
        ));
    }

    #[test]
    fn all_messages_attach_to_the_primary() {
        let block = parse_body("[ x foo bar: 1 baz: y qux ]").unwrap();
        let expression = only_expression(&block);
        assert!(matches!(expression.primary, cst::Primary::Identifier(_)));
        assert_eq!(expression.messages.len(), 3);
        let cst::Message::Keyword(parts) = &expression.messages[1] else {
            panic!("expected keyword message");
        };
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn keyword_arguments_are_primaries() {
        let block = parse_body("[ x at: (y foo) put: [ :a | a ] ]").unwrap();
        let expression = only_expression(&block);
        let cst::Message::Keyword(parts) = &expression.messages[0] else {
            panic!("expected keyword message");
        };
        assert!(matches!(parts[0].argument, cst::Primary::Parenthesized { .. }));
        assert!(matches!(parts[1].argument, cst::Primary::Block(_)));
    }

    #[test]
    fn spaced_keyword_in_message() {
        let block = parse_body("[ Object from : 1 ]").unwrap();
        let expression = only_expression(&block);
        let cst::Message::Keyword(parts) = &expression.messages[0] else {
            panic!("expected keyword message");
        };
        assert!(matches!(parts[0].keyword, cst::KeywordPart::Spaced { .. }));
    }

    #[test]
    fn primaries() {
        let block =
            parse_body("[ a := 1. b := 'x'. c := nil. d := true. e := self. f := super. g := Foo. ]")
                .unwrap();
        let kinds: Vec<_> = block
            .statements
            .iter()
            .map(|statement| match statement {
                cst::Statement::Assign { value, .. } => match &value.primary {
                    cst::Primary::Literal(_) => "literal",
                    cst::Primary::Pseudo(_) => "pseudo",
                    cst::Primary::ClassIdentifier(_) => "class",
                    _ => "other",
                },
                cst::Statement::Expression(_) => "expression",
            })
            .collect();
        assert_eq!(
            kinds,
            ["literal", "literal", "literal", "literal", "pseudo", "pseudo", "class"]
        );
    }

    #[test]
    fn missing_argument_is_a_syntax_error() {
        assert_eq!(
            syntax_message("[ x at: ]"),
            "expected expression, found ']'"
        );
    }

    #[test]
    fn unclosed_parenthesis() {
        assert_eq!(
            syntax_message("[ (x foo ]"),
            "expected ')' after expression, found ']'"
        );
    }

    fn nested_blocks(depth: usize) -> String {
        format!("[ {}{} ]", "[ ".repeat(depth), " ]".repeat(depth))
    }

    #[test]
    fn blocks_nest_up_to_the_limit() {
        // The method body is the first level.
        assert!(parse_body(&nested_blocks(MAX_NESTING_DEPTH - 1)).is_ok());
        assert_eq!(
            syntax_message(&nested_blocks(MAX_NESTING_DEPTH)),
            "blocks and parentheses nest more than 256 levels deep, found '['"
        );
    }

    #[test]
    fn parentheses_count_towards_nesting() {
        let depth = MAX_NESTING_DEPTH;
        let body = format!("[ {}x{} ]", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(
            syntax_message(&body),
            "blocks and parentheses nest more than 256 levels deep, found '('"
        );
    }

    #[test]
    fn very_deep_nesting_is_a_syntax_error() {
        let error = parse_body(&nested_blocks(50_000)).unwrap_err();
        assert!(matches!(error, ParseError::Syntax(_)), "{error:?}");
    }

    #[test]
    fn glued_block_parameters() {
        for body in ["[:x:y| ]", "[ :x:y :z | ]", "[ :x :y | ]"] {
            let block = parse_body(body).unwrap();
            let names: Vec<_> = block.parameters.iter().map(cst::BlockParameter::name).collect();
            assert_eq!(names[..2], ["x", "y"], "{body}");
        }
        let block = parse_body("[ :x:y :z | ]").unwrap();
        assert_eq!(block.parameters.len(), 3);
    }

    #[test]
    fn glued_parameter_span_excludes_colon() {
        let block = parse_body("[:ab:c| ]").unwrap();
        let first = &block.parameters[0];
        assert_eq!(first.name.kind(), &TokenKind::Keyword("ab:".into()));
        assert_eq!(first.span().len(), 2);
        assert_eq!(block.parameters[1].span().len(), 1);
    }

    #[test]
    fn dangling_glued_parameter_colon() {
        assert_eq!(
            syntax_message("[ :x: ]"),
            "expected parameter name after ':', found ']'"
        );
    }

    #[test]
    fn assignment_to_class_name_is_rejected() {
        let error = parse_body("[ Foo := 1 ]").unwrap_err();
        let ParseError::Syntax(error) = error else {
            panic!("expected syntax error");
        };
        assert_eq!(error.message, "expected '.' or ']' after statement, found ':='");
    }

    #[test]
    fn string_primary_keeps_raw_text() {
        let block = parse_body(r"[ 'it\'s' ]").unwrap();
        let cst::Primary::Literal(token) = &only_expression(&block).primary else {
            panic!("expected literal");
        };
        assert_eq!(token.kind(), &TokenKind::String(r"it\'s".into()));
    }
}
