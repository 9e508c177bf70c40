//! Recursive descent parser generating the Clover AST.

pub mod error;
pub mod lexer;
mod token_stream;
mod expression;

use crate::frontend::ast::*;
use error::{ParseResult, ParseError, ParseErrorKind};
use lexer::{TokenKind, Keyword, Operator};
use token_stream::TokenStream;

/// Parser state: the token stream being consumed.
struct Parser<'a> {
    tokens: TokenStream<'a>,
}

impl<'a> Parser<'a> {

    fn new(source: &'a str) -> ParseResult<Self> {
        Ok(Parser { tokens: TokenStream::new(source)? })
    }

    // module

    fn module(self: &mut Self) -> ParseResult<Module> {
        let mut declarations = Vec::new();
        while !self.tokens.is_end() {
            declarations.push(self.declaration()?);
        }
        Ok(Module { declarations })
    }

    fn declaration(self: &mut Self) -> ParseResult<Declaration> {
        let kind = self.tokens.current().kind;
        match kind {
            TokenKind::Keyword(Keyword::Fn) => Ok(Declaration::Function(self.function()?)),
            TokenKind::Keyword(Keyword::Struct) => Ok(Declaration::Struct(self.struct_def()?)),
            TokenKind::Keyword(Keyword::Enum) => Ok(Declaration::Enum(self.enum_def()?)),
            _ => Err(ParseError::new(ParseErrorKind::ExpectedDeclaration(self.tokens.current().to_string()))),
        }
    }

    /// Following an optional list item, expects either a separating comma or the closing operator.
    fn list_separator(self: &mut Self, close: Operator) -> ParseResult {
        if !self.tokens.accept_operator(Operator::Comma)? && !self.tokens.has_operator(close) {
            Err(self.tokens.unexpected(&format!("',' or '{}'", close.symbol())))
        } else {
            Ok(())
        }
    }

    // function definition

    fn function(self: &mut Self) -> ParseResult<Function> {
        self.tokens.expect_keyword(Keyword::Fn)?;
        let name = self.tokens.expect_identifier()?;
        self.tokens.expect_operator(Operator::LeftParen)?;
        let mut arguments = Vec::new();
        while !self.tokens.has_operator(Operator::RightParen) {
            let is_by_reference = self.tokens.accept_keyword(Keyword::Ref)?;
            let name = self.tokens.expect_identifier()?;
            self.tokens.expect_operator(Operator::Colon)?;
            let type_name = self.type_name()?;
            arguments.push(Argument { name, type_name, is_by_reference });
            self.list_separator(Operator::RightParen)?;
        }
        self.tokens.expect_operator(Operator::RightParen)?;
        let return_type = if self.tokens.accept_operator(Operator::Colon)? {
            Some(self.type_name()?)
        } else {
            None
        };
        let statements = self.block_statements()?;
        Ok(Function { name, arguments, return_type, statements })
    }

    // struct definition

    fn fields(self: &mut Self) -> ParseResult<Vec<Field>> {
        self.tokens.expect_operator(Operator::LeftBrace)?;
        let mut fields = Vec::new();
        while !self.tokens.has_operator(Operator::RightBrace) {
            let name = self.tokens.expect_identifier()?;
            self.tokens.expect_operator(Operator::Colon)?;
            let type_name = self.type_name()?;
            fields.push(Field { name, type_name });
            self.list_separator(Operator::RightBrace)?;
        }
        self.tokens.expect_operator(Operator::RightBrace)?;
        Ok(fields)
    }

    fn struct_def(self: &mut Self) -> ParseResult<Struct> {
        self.tokens.expect_keyword(Keyword::Struct)?;
        let name = self.tokens.expect_identifier()?;
        let fields = self.fields()?;
        Ok(Struct { name, fields })
    }

    // enum definition

    fn enum_def(self: &mut Self) -> ParseResult<Enum> {
        self.tokens.expect_keyword(Keyword::Enum)?;
        let name = self.tokens.expect_identifier()?;
        self.tokens.expect_operator(Operator::LeftBrace)?;
        let mut variants = Vec::new();
        while !self.tokens.has_operator(Operator::RightBrace) {
            let name = self.tokens.expect_identifier()?;
            let fields = if self.tokens.has_operator(Operator::LeftBrace) {
                self.fields()?
            } else {
                Vec::new()
            };
            variants.push(Variant { name, fields });
            self.list_separator(Operator::RightBrace)?;
        }
        self.tokens.expect_operator(Operator::RightBrace)?;
        Ok(Enum { name, variants })
    }

    // type name (vec<Point>)

    fn type_name(self: &mut Self) -> ParseResult<TypeName> {
        let kind = self.tokens.current().kind;
        let path = match kind {
            TokenKind::Keyword(keyword @ (Keyword::Vec | Keyword::Set | Keyword::Dict)) => {
                self.tokens.advance()?;
                Path::single(keyword.name())
            },
            TokenKind::Identifier => self.tokens.read_qualified_name()?,
            _ => return Err(self.tokens.unexpected("type name")),
        };
        let mut parameters = Vec::new();
        if self.tokens.accept_operator(Operator::Less)? {
            parameters.push(self.type_name()?);
            while self.tokens.accept_operator(Operator::Comma)? {
                parameters.push(self.type_name()?);
            }
            self.tokens.expect_operator(Operator::Greater)?;
        }
        Ok(TypeName { path, parameters })
    }

    // statements

    fn block_statements(self: &mut Self) -> ParseResult<Vec<Statement>> {
        self.tokens.expect_operator(Operator::LeftBrace)?;
        let mut statements = Vec::new();
        while !self.tokens.has_operator(Operator::RightBrace) {
            if self.tokens.is_end() {
                return Err(self.tokens.unexpected("'}'"));
            }
            statements.push(self.statement()?);
        }
        self.tokens.expect_operator(Operator::RightBrace)?;
        Ok(statements)
    }

    /// Parses `(` expression `)` as used by `if` and `while`.
    fn condition(self: &mut Self) -> ParseResult<Expression> {
        self.tokens.expect_operator(Operator::LeftParen)?;
        let condition = self.expression()?;
        self.tokens.expect_operator(Operator::RightParen)?;
        Ok(condition)
    }

    fn statement(self: &mut Self) -> ParseResult<Statement> {
        let kind = self.tokens.current().kind;
        Ok(match kind {
            TokenKind::Keyword(Keyword::Let) => {
                self.tokens.advance()?;
                let name = self.tokens.expect_identifier()?;
                self.tokens.expect_operator(Operator::Assign)?;
                let value = self.expression()?;
                self.tokens.expect_operator(Operator::Semicolon)?;
                Statement::Let(Let { name, value })
            },
            TokenKind::Keyword(Keyword::While) => {
                self.tokens.advance()?;
                let condition = self.condition()?;
                let body = Box::new(self.statement()?);
                Statement::While(While { condition, body })
            },
            TokenKind::Keyword(Keyword::If) => {
                self.tokens.advance()?;
                let condition = self.condition()?;
                let consequent = Box::new(self.statement()?);
                let alternate = if self.tokens.accept_keyword(Keyword::Else)? {
                    Some(Box::new(self.statement()?))
                } else {
                    None
                };
                Statement::If(If { condition, consequent, alternate })
            },
            TokenKind::Keyword(Keyword::Return) => {
                self.tokens.advance()?;
                let value = self.expression()?;
                self.tokens.expect_operator(Operator::Semicolon)?;
                Statement::Return(Return { value })
            },
            TokenKind::Operator(Operator::LeftBrace) => {
                Statement::Block(Block { statements: self.block_statements()? })
            },
            _ => {
                let expression = self.expression()?;
                self.tokens.expect_operator(Operator::Semicolon)?;
                Statement::Expression(expression)
            },
        })
    }
}

/// Parses Clover source code into a module AST.
///
/// ```
/// use clover::parser;
///
/// let module = parser::parse_module("struct Point { x: i32, y: i32 } fn origin(): Point { return Point { x: 0, y: 0 }; }").unwrap();
/// assert_eq!(module.declarations.len(), 2);
/// assert_eq!(module.declarations[1].name(), "origin");
/// ```
///
/// The returned [Module] is ready for checking by [resolve](crate::resolver::resolve).
pub fn parse_module(source: &str) -> ParseResult<Module> {
    let mut parser = Parser::new(source)?;
    let module = parser.module()?;
    log::debug!("parsed {} declarations", module.declarations.len());
    Ok(module)
}
