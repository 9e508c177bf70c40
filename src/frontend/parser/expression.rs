//! Expression parsing, lowest precedence first.

use crate::frontend::ast::*;
use super::Parser;
use super::error::{ParseResult, ParseError, ParseErrorKind};
use super::lexer::{TokenKind, Keyword, Operator};

/// Binary operator precedence levels, lowest first. All levels are left associative.
const BINARY_LEVELS: [ &[ (Operator, BinaryOperator) ]; 5 ] = [
    &[ (Operator::Or, BinaryOperator::Or) ],
    &[ (Operator::And, BinaryOperator::And) ],
    &[ (Operator::Equal, BinaryOperator::Equal), (Operator::NotEqual, BinaryOperator::NotEqual) ],
    &[
        (Operator::Less, BinaryOperator::Less), (Operator::LessOrEqual, BinaryOperator::LessOrEqual),
        (Operator::Greater, BinaryOperator::Greater), (Operator::GreaterOrEqual, BinaryOperator::GreaterOrEqual),
    ],
    &[ (Operator::Plus, BinaryOperator::Add), (Operator::Minus, BinaryOperator::Sub) ],
];

impl<'a> Parser<'a> {

    pub(super) fn expression(self: &mut Self) -> ParseResult<Expression> {
        self.assignment()
    }

    // assignment (right associative)

    fn assignment(self: &mut Self) -> ParseResult<Expression> {
        let left = self.binary(0)?;
        if self.tokens.accept_operator(Operator::Assign)? {
            let right = self.assignment()?;
            Ok(Expression::BinaryOp(Box::new(BinaryOp { op: BinaryOperator::Assign, left, right })))
        } else {
            Ok(left)
        }
    }

    // binary operations

    fn binary_operator(self: &Self, level: usize) -> Option<BinaryOperator> {
        BINARY_LEVELS[level].iter()
            .find(|(token, _)| self.tokens.has_operator(*token))
            .map(|&(_, op)| op)
    }

    fn binary(self: &mut Self, level: usize) -> ParseResult<Expression> {
        if level == BINARY_LEVELS.len() {
            return self.identity_test();
        }
        let mut left = self.binary(level + 1)?;
        while let Some(op) = self.binary_operator(level) {
            self.tokens.advance()?;
            let right = self.binary(level + 1)?;
            left = Expression::BinaryOp(Box::new(BinaryOp { op, left, right }));
        }
        Ok(left)
    }

    // identity test (shape is Shape.Circle)

    fn identity_test(self: &mut Self) -> ParseResult<Expression> {
        let operand = self.primary()?;
        let kind = self.tokens.current().kind;
        let is_negated = match kind {
            TokenKind::Keyword(Keyword::Is) => false,
            TokenKind::Keyword(Keyword::Isnt) => true,
            _ => return Ok(operand),
        };
        self.tokens.advance()?;
        let variant = self.tokens.read_qualified_name()?;
        Ok(Expression::IdentityTest(Box::new(IdentityTest { operand, variant, is_negated })))
    }

    // primary

    fn primary(self: &mut Self) -> ParseResult<Expression> {
        let kind = self.tokens.current().kind;
        match kind {
            TokenKind::Operator(Operator::Minus) => self.unary(UnaryOperator::Negate),
            TokenKind::Operator(Operator::Not) => self.unary(UnaryOperator::Not),
            TokenKind::Operator(Operator::Increment) => self.prefix(InPlaceOperator::Increment),
            TokenKind::Operator(Operator::Decrement) => self.prefix(InPlaceOperator::Decrement),
            TokenKind::String => {
                let token = self.tokens.advance()?;
                Ok(Expression::Literal(Literal::String(token.value)))
            },
            TokenKind::Character => {
                let token = self.tokens.advance()?;
                let mut chars = token.value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Expression::Literal(Literal::Char(c))),
                    _ => Err(ParseError::new(ParseErrorKind::InvalidCharacter(token.value))),
                }
            },
            TokenKind::Boolean => {
                let token = self.tokens.advance()?;
                Ok(Expression::Literal(Literal::Bool(token.value == "true")))
            },
            TokenKind::Number => {
                let token = self.tokens.advance()?;
                Ok(Expression::Literal(Literal::Number(token.value)))
            },
            TokenKind::Operator(Operator::LeftParen) => {
                self.tokens.advance()?;
                let expression = self.expression()?;
                self.tokens.expect_operator(Operator::RightParen)?;
                Ok(expression)
            },
            TokenKind::Keyword(Keyword::Vec) if self.tokens.peek().kind == TokenKind::Operator(Operator::LeftBracket) => {
                self.collection(CollectionKind::Vec)
            },
            TokenKind::Keyword(Keyword::Set) if self.tokens.peek().kind == TokenKind::Operator(Operator::LeftBracket) => {
                self.collection(CollectionKind::Set)
            },
            TokenKind::Operator(Operator::LeftBrace) => self.object(None),
            TokenKind::Identifier => self.named(),
            _ => Err(ParseError::new(ParseErrorKind::ExpectedExpression(self.tokens.current().to_string()))),
        }
    }

    fn unary(self: &mut Self, op: UnaryOperator) -> ParseResult<Expression> {
        self.tokens.advance()?;
        let operand = self.primary()?;
        Ok(Expression::UnaryOp(Box::new(UnaryOp { op, operand })))
    }

    fn prefix(self: &mut Self, op: InPlaceOperator) -> ParseResult<Expression> {
        self.tokens.advance()?;
        let target = self.primary()?;
        Ok(Expression::InPlace(Box::new(InPlace { op, target, is_prefix: true })))
    }

    /// Wraps the expression in a postfix mutation if one follows.
    fn postfix(self: &mut Self, target: Expression) -> ParseResult<Expression> {
        let kind = self.tokens.current().kind;
        let op = match kind {
            TokenKind::Operator(Operator::Increment) => InPlaceOperator::Increment,
            TokenKind::Operator(Operator::Decrement) => InPlaceOperator::Decrement,
            _ => return Ok(target),
        };
        self.tokens.advance()?;
        Ok(Expression::InPlace(Box::new(InPlace { op, target, is_prefix: false })))
    }

    // collection literal (vec[1, 2], set['a'])

    fn collection(self: &mut Self, kind: CollectionKind) -> ParseResult<Expression> {
        self.tokens.advance()?;
        self.tokens.expect_operator(Operator::LeftBracket)?;
        let mut elements = Vec::new();
        while !self.tokens.has_operator(Operator::RightBracket) {
            elements.push(self.expression()?);
            self.list_separator(Operator::RightBracket)?;
        }
        self.tokens.expect_operator(Operator::RightBracket)?;
        Ok(Expression::Collection(Collection { kind, elements }))
    }

    // object literal (Point { x: 1, y })

    fn object(self: &mut Self, type_name: Option<Path>) -> ParseResult<Expression> {
        self.tokens.expect_operator(Operator::LeftBrace)?;
        let mut fields = Vec::new();
        while !self.tokens.has_operator(Operator::RightBrace) {
            let name = self.tokens.expect_identifier()?;
            let value = if self.tokens.accept_operator(Operator::Colon)? {
                Some(self.expression()?)
            } else {
                None
            };
            fields.push(ObjectField { name, value });
            self.list_separator(Operator::RightBrace)?;
        }
        self.tokens.expect_operator(Operator::RightBrace)?;
        Ok(Expression::Object(Object { type_name, fields }))
    }

    // call, subscript, tagged object or plain name

    fn named(self: &mut Self) -> ParseResult<Expression> {
        let path = self.tokens.read_qualified_name()?;
        let kind = self.tokens.current().kind;
        match kind {
            TokenKind::Operator(Operator::LeftParen) => {
                self.tokens.advance()?;
                let mut arguments = Vec::new();
                while !self.tokens.has_operator(Operator::RightParen) {
                    let is_by_reference = self.tokens.accept_keyword(Keyword::Ref)?;
                    let value = self.expression()?;
                    arguments.push(CallArgument { value, is_by_reference });
                    self.list_separator(Operator::RightParen)?;
                }
                self.tokens.expect_operator(Operator::RightParen)?;
                Ok(Expression::Call(Call { path, arguments }))
            },
            TokenKind::Operator(Operator::LeftBracket) => {
                self.tokens.advance()?;
                let key = self.expression()?;
                self.tokens.expect_operator(Operator::RightBracket)?;
                self.postfix(Expression::Access(Box::new(Access { collection: path, key })))
            },
            TokenKind::Operator(Operator::LeftBrace) => self.object(Some(path)),
            _ => self.postfix(Expression::Name(path)),
        }
    }
}
