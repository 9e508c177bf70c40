//! Tokenizer. Individual tokens are recognized by nom parsers, the lexer strings them together on demand.

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until, is_not, escaped_transform};
use nom::character::complete::{alpha1, alphanumeric1, anychar, char, digit1, multispace1, none_of};
use nom::combinator::{recognize, value, map, map_opt, opt};
use nom::multi::many0_count;
use nom::sequence::{pair, delimited, preceded};
use crate::prelude::*;
use crate::frontend::parser::error::{ParseError, ParseErrorKind, ParseResult};

type Output<'a, O> = IResult<&'a str, O>;

/// Reserved words.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Keyword {
    Fn, Enum, Struct, Ref, Let, While, If, Else, Return, Is, Isnt, Vec, Set, Dict,
}

impl Keyword {
    const ALL: [ Keyword; 14 ] = [
        Keyword::Fn, Keyword::Enum, Keyword::Struct, Keyword::Ref, Keyword::Let, Keyword::While, Keyword::If,
        Keyword::Else, Keyword::Return, Keyword::Is, Keyword::Isnt, Keyword::Vec, Keyword::Set, Keyword::Dict,
    ];
    /// The keyword as written in the source.
    pub const fn name(self: Self) -> &'static str {
        match self {
            Keyword::Fn     => "fn",
            Keyword::Enum   => "enum",
            Keyword::Struct => "struct",
            Keyword::Ref    => "ref",
            Keyword::Let    => "let",
            Keyword::While  => "while",
            Keyword::If     => "if",
            Keyword::Else   => "else",
            Keyword::Return => "return",
            Keyword::Is     => "is",
            Keyword::Isnt   => "isnt",
            Keyword::Vec    => "vec",
            Keyword::Set    => "set",
            Keyword::Dict   => "dict",
        }
    }
    /// Returns the keyword matching the given word, if any.
    pub fn from_name(word: &str) -> Option<Keyword> {
        Self::ALL.iter().copied().find(|keyword| keyword.name() == word)
    }
}

/// Operators and punctuation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    Increment, Decrement, Equal, NotEqual, LessOrEqual, GreaterOrEqual, And, Or,
    Plus, Minus, Less, Greater, Assign, Not,
    LeftParen, RightParen, LeftBrace, RightBrace, LeftBracket, RightBracket,
    Comma, Colon, Semicolon, Dot,
}

impl Operator {
    /// All operators, two character operators first so that matching is greedy.
    const ALL: [ Operator; 24 ] = [
        Operator::Increment, Operator::Decrement, Operator::Equal, Operator::NotEqual, Operator::LessOrEqual,
        Operator::GreaterOrEqual, Operator::And, Operator::Or, Operator::Plus, Operator::Minus, Operator::Less,
        Operator::Greater, Operator::Assign, Operator::Not, Operator::LeftParen, Operator::RightParen,
        Operator::LeftBrace, Operator::RightBrace, Operator::LeftBracket, Operator::RightBracket,
        Operator::Comma, Operator::Colon, Operator::Semicolon, Operator::Dot,
    ];
    /// The operator as written in the source.
    pub const fn symbol(self: Self) -> &'static str {
        match self {
            Operator::Increment         => "++",
            Operator::Decrement         => "--",
            Operator::Equal             => "==",
            Operator::NotEqual          => "!=",
            Operator::LessOrEqual       => "<=",
            Operator::GreaterOrEqual    => ">=",
            Operator::And               => "&&",
            Operator::Or                => "||",
            Operator::Plus              => "+",
            Operator::Minus             => "-",
            Operator::Less              => "<",
            Operator::Greater           => ">",
            Operator::Assign            => "=",
            Operator::Not               => "!",
            Operator::LeftParen         => "(",
            Operator::RightParen        => ")",
            Operator::LeftBrace         => "{",
            Operator::RightBrace        => "}",
            Operator::LeftBracket       => "[",
            Operator::RightBracket      => "]",
            Operator::Comma             => ",",
            Operator::Colon             => ":",
            Operator::Semicolon         => ";",
            Operator::Dot               => ".",
        }
    }
}

/// Token classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Operator(Operator),
    Identifier,
    String,
    Character,
    Boolean,
    Number,
    EndOfFile,
}

/// A classified token. `value` holds the identifier name, the decoded literal or the keyword/operator text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind    : TokenKind,
    pub value   : String,
}

impl Token {
    fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token { kind, value: value.into() }
    }
    /// The end-of-file token.
    pub fn end_of_file() -> Self {
        Token::new(TokenKind::EndOfFile, "")
    }
}

impl Display for Token {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Keyword(_) | TokenKind::Operator(_) => write!(f, "'{}'", self.value),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.value),
            TokenKind::String => write!(f, "string {:?}", self.value),
            TokenKind::Character => write!(f, "character {:?}", self.value),
            TokenKind::Boolean => write!(f, "boolean '{}'", self.value),
            TokenKind::Number => write!(f, "number '{}'", self.value),
            TokenKind::EndOfFile => write!(f, "end of file"),
        }
    }
}

// trivia (whitespace, // line and /* block */ comments)

fn line_comment(i: &str) -> Output<'_, &str> {
    recognize(pair(tag("//"), opt(is_not("\n"))))(i)
}

fn block_comment(i: &str) -> Output<'_, &str> {
    recognize(delimited(tag("/*"), take_until("*/"), tag("*/")))(i)
}

fn trivia(i: &str) -> Output<'_, ()> {
    value((), many0_count(alt((multispace1, line_comment, block_comment))))(i)
}

// identifier ([a-zA-Z_][a-zA-Z0-9_]*)

fn word(i: &str) -> Output<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_"))))
    ))(i)
}

// operator, longest match

fn operator(i: &str) -> Output<'_, Operator> {
    for &op in Operator::ALL.iter() {
        if let Ok((rest, _)) = tag::<_, _, nom::error::Error<&str>>(op.symbol())(i) {
            return Ok((rest, op));
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(i, nom::error::ErrorKind::Tag)))
}

// literals

/// Maps the character following a backslash to the escaped character.
fn unescape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '0' => Some('\0'),
        _ => None,
    }
}

fn escape_sequence(i: &str) -> Output<'_, char> {
    map_opt(anychar, unescape)(i)
}

fn string_literal(i: &str) -> Output<'_, String> {
    delimited(
        char('"'),
        map(opt(escaped_transform(is_not("\\\""), '\\', escape_sequence)), Option::unwrap_or_default),
        char('"')
    )(i)
}

fn character_literal(i: &str) -> Output<'_, char> {
    delimited(
        char('\''),
        alt((preceded(char('\\'), escape_sequence), none_of("\\'"))),
        char('\'')
    )(i)
}

/// Determines why a quoted literal starting at `i` could not be read.
fn diagnose_quoted(i: &str, quote: char) -> ParseErrorKind {
    let unterminated = if quote == '"' { ParseErrorKind::UnterminatedString } else { ParseErrorKind::UnterminatedCharacter };
    let mut chars = i.chars().skip(1);
    let mut content = String::new();
    while let Some(c) = chars.next() {
        if c == quote {
            return ParseErrorKind::InvalidCharacter(content);
        } else if c == '\\' {
            match chars.next().map(|escaped| (escaped, unescape(escaped))) {
                Some((_, Some(unescaped))) => content.push(unescaped),
                Some((escaped, None)) => return ParseErrorKind::InvalidEscape(escaped),
                None => return unterminated,
            }
        } else {
            content.push(c);
        }
    }
    unterminated
}

/// Lexical analyzer producing one token at a time.
pub struct Lexer<'a> {
    input: &'a str,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Lexer { input: source, done: false }
    }

    /// Reads the next token. Returns end-of-file tokens once the input is exhausted.
    pub fn next_token(self: &mut Self) -> ParseResult<Token> {
        let i = match trivia(self.input) {
            Ok((rest, _)) => rest,
            Err(_) => self.input,
        };
        self.input = i;

        if i.is_empty() {
            return Ok(Token::end_of_file());
        } else if i.starts_with("/*") {
            return Err(ParseError::new(ParseErrorKind::UnterminatedComment));
        }

        let (rest, token) = if i.starts_with('"') {
            match string_literal(i) {
                Ok((rest, value)) => (rest, Token::new(TokenKind::String, value)),
                Err(_) => return Err(ParseError::new(diagnose_quoted(i, '"'))),
            }
        } else if i.starts_with('\'') {
            match character_literal(i) {
                Ok((rest, value)) => (rest, Token::new(TokenKind::Character, value)),
                Err(_) => return Err(ParseError::new(diagnose_quoted(i, '\''))),
            }
        } else if let Ok((rest, digits)) = digit1::<_, nom::error::Error<&str>>(i) {
            (rest, Token::new(TokenKind::Number, digits))
        } else if let Ok((rest, word)) = word(i) {
            let kind = match word {
                "true" | "false" => TokenKind::Boolean,
                _ => Keyword::from_name(word).map_or(TokenKind::Identifier, TokenKind::Keyword),
            };
            (rest, Token::new(kind, word))
        } else if let Ok((rest, op)) = operator(i) {
            (rest, Token::new(TokenKind::Operator(op), op.symbol()))
        } else {
            let c = i.chars().next().unwrap_or('\0');
            return Err(ParseError::new(ParseErrorKind::UnknownCharacter(c)));
        };

        self.input = rest;
        Ok(token)
    }
}

/// Yields tokens up to and including the end-of-file token.
impl<'a> Iterator for Lexer<'a> {
    type Item = ParseResult<Token>;

    fn next(self: &mut Self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(Token { kind: TokenKind::EndOfFile, .. }) | Err(_) => self.done = true,
            _ => { },
        }
        Some(result)
    }
}
