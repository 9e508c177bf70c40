//! Token stream with one token of look ahead.

use std::mem;
use crate::frontend::ast::Path;
use crate::frontend::parser::error::{ParseError, ParseErrorKind, ParseResult};
use crate::frontend::parser::lexer::{Lexer, Token, TokenKind, Keyword, Operator};

/// Lazily lexed tokens. Holds the current token and the one following it.
pub struct TokenStream<'a> {
    lexer   : Lexer<'a>,
    current : Token,
    next    : Token,
}

impl<'a> TokenStream<'a> {
    /// Creates a token stream over the given source, lexing the first two tokens.
    pub fn new(source: &'a str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let next = lexer.next_token()?;
        Ok(TokenStream { lexer, current, next })
    }

    /// The current token.
    pub fn current(self: &Self) -> &Token {
        &self.current
    }

    /// The token following the current token.
    pub fn peek(self: &Self) -> &Token {
        &self.next
    }

    /// Consumes the current token and returns it.
    pub fn advance(self: &mut Self) -> ParseResult<Token> {
        let following = self.lexer.next_token()?;
        let next = mem::replace(&mut self.next, following);
        Ok(mem::replace(&mut self.current, next))
    }

    pub fn is_end(self: &Self) -> bool {
        self.current.kind == TokenKind::EndOfFile
    }

    pub fn has_keyword(self: &Self, keyword: Keyword) -> bool {
        self.current.kind == TokenKind::Keyword(keyword)
    }

    pub fn has_operator(self: &Self, op: Operator) -> bool {
        self.current.kind == TokenKind::Operator(op)
    }

    pub fn has_identifier(self: &Self) -> bool {
        self.current.kind == TokenKind::Identifier
    }

    /// Consumes the current token if it is the given operator.
    pub fn accept_operator(self: &mut Self, op: Operator) -> ParseResult<bool> {
        if self.has_operator(op) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it is the given keyword.
    pub fn accept_keyword(self: &mut Self, keyword: Keyword) -> ParseResult<bool> {
        if self.has_keyword(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the given operator or fails.
    pub fn expect_operator(self: &mut Self, op: Operator) -> ParseResult {
        if self.has_operator(op) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", op.symbol())))
        }
    }

    /// Consumes the given keyword or fails.
    pub fn expect_keyword(self: &mut Self, keyword: Keyword) -> ParseResult {
        if self.has_keyword(keyword) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", keyword.name())))
        }
    }

    /// Consumes an identifier and returns its name or fails.
    pub fn expect_identifier(self: &mut Self) -> ParseResult<String> {
        if self.has_identifier() {
            Ok(self.advance()?.value)
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Reads a dotted name `a.b.c`.
    pub fn read_qualified_name(self: &mut Self) -> ParseResult<Path> {
        let mut segments = vec![ self.expect_identifier()? ];
        while self.has_operator(Operator::Dot) {
            self.advance()?;
            segments.push(self.expect_identifier()?);
        }
        Ok(Path(segments))
    }

    /// Creates an error for the current token given a description of what was expected instead.
    pub fn unexpected(self: &Self, expected: &str) -> ParseError {
        ParseError::new(ParseErrorKind::UnexpectedToken(expected.to_string(), self.current.to_string()))
    }
}
