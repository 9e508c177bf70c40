use crate::prelude::*;

/// Represents the various possible parser error-kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that starts no token.
    UnknownCharacter(char),
    UnterminatedString,
    UnterminatedCharacter,
    UnterminatedComment,
    /// Character literal does not contain exactly one character.
    InvalidCharacter(String),
    /// Unsupported escape sequence in a string or character literal.
    InvalidEscape(char),
    /// An expected token was absent. Holds description of what was expected and the token found instead.
    UnexpectedToken(String, String),
    /// No declaration starts with the given token.
    ExpectedDeclaration(String),
    /// No expression starts with the given token.
    ExpectedExpression(String),
}

/// An error reported by the parser (e.g. syntax error).
#[derive(Clone, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind) -> ParseError {
        Self { kind }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &ParseErrorKind {
        &self.kind
    }
}

impl Display for ParseError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnknownCharacter(c) => write!(f, "Syntax error: unexpected character '{}'", c.escape_default()),
            ParseErrorKind::UnterminatedString => write!(f, "Syntax error: unterminated string literal"),
            ParseErrorKind::UnterminatedCharacter => write!(f, "Syntax error: unterminated character literal"),
            ParseErrorKind::UnterminatedComment => write!(f, "Syntax error: unterminated block comment"),
            ParseErrorKind::InvalidCharacter(c) => write!(f, "Syntax error: character literal '{}' must contain exactly one character", c),
            ParseErrorKind::InvalidEscape(c) => write!(f, "Syntax error: invalid escape sequence '\\{}'", c),
            ParseErrorKind::UnexpectedToken(expected, found) => write!(f, "Syntax error: expected {}, found {}", expected, found),
            ParseErrorKind::ExpectedDeclaration(found) => write!(f, "Syntax error: expected 'fn', 'enum' or 'struct', found {}", found),
            ParseErrorKind::ExpectedExpression(found) => write!(f, "Syntax error: expected expression, found {}", found),
        }
    }
}

pub type ParseResult<T = ()> = Result<T, ParseError>;
