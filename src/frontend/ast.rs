//! AST datastructures. Created once by the parser and never modified afterwards.

use crate::prelude::*;

/// A dotted name, e.g. `point.x` or `Shape.Circle`. Paths produced by the parser always have at least one segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(pub Vec<String>);

impl Path {
    /// Creates a single segment path.
    pub fn single(name: &str) -> Self {
        Path(vec![ name.to_string() ])
    }
    /// The first segment of the path.
    pub fn first(self: &Self) -> &str {
        &self.0[0]
    }
    /// Path segments following the first.
    pub fn rest(self: &Self) -> &[ String ] {
        &self.0[1..]
    }
    /// Number of segments.
    pub fn len(self: &Self) -> usize {
        self.0.len()
    }
}

impl Display for Path {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A type name as written in the source, e.g. `vec<Point>`. Generic arity is checked by the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeName {
    pub path        : Path,
    pub parameters  : Vec<TypeName>,
}

impl Display for TypeName {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if self.parameters.len() > 0 {
            let parameters: Vec<_> = self.parameters.iter().map(|p| p.to_string()).collect();
            write!(f, "<{}>", parameters.join(", "))?;
        }
        Ok(())
    }
}

/// A parsed source file: the ordered top-level declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub declarations: Vec<Declaration>,
}

impl Module {
    /// Returns an iterator over the function declarations of the module.
    pub fn functions(self: &Self) -> impl Iterator<Item = &Function> {
        self.declarations.iter().filter_map(|declaration| match declaration {
            Declaration::Function(function) => Some(function),
            _ => None,
        })
    }
}

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Function(Function),
    Struct(Struct),
    Enum(Enum),
}

impl Declaration {
    /// The declared name.
    pub fn name(self: &Self) -> &str {
        match self {
            Declaration::Function(function) => &function.name,
            Declaration::Struct(structure) => &structure.name,
            Declaration::Enum(enumeration) => &enumeration.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name        : String,
    pub arguments   : Vec<Argument>,
    pub return_type : Option<TypeName>,
    pub statements  : Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name            : String,
    pub type_name       : TypeName,
    /// Argument is passed without being cloned first.
    pub is_by_reference : bool,
}

/// A named, typed field of a struct or enum variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name        : String,
    pub type_name   : TypeName,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Struct {
    pub name    : String,
    pub fields  : Vec<Field>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enum {
    pub name    : String,
    pub variants: Vec<Variant>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub name    : String,
    pub fields  : Vec<Field>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Let(Let),
    If(If),
    While(While),
    Block(Block),
    Return(Return),
    Expression(Expression),
}

/// `let name = value;`
#[derive(Clone, Debug, PartialEq)]
pub struct Let {
    pub name    : String,
    pub value   : Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub condition   : Expression,
    pub consequent  : Box<Statement>,
    pub alternate   : Option<Box<Statement>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct While {
    pub condition   : Expression,
    pub body        : Box<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Return {
    pub value: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Literal(Literal),
    UnaryOp(Box<UnaryOp>),
    IdentityTest(Box<IdentityTest>),
    Name(Path),
    Call(Call),
    Collection(Collection),
    Object(Object),
    BinaryOp(Box<BinaryOp>),
    Access(Box<Access>),
    InPlace(Box<InPlace>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Bool(bool),
    Char(char),
    String(String),
    /// Integer literal, kept as written.
    Number(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl Display for UnaryOperator {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
            UnaryOperator::Not => write!(f, "!"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryOp {
    pub op      : UnaryOperator,
    pub operand : Expression,
}

/// `operand is Variant` or, when negated, `operand isnt Variant`.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityTest {
    pub operand     : Expression,
    pub variant     : Path,
    pub is_negated  : bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub path        : Path,
    pub arguments   : Vec<CallArgument>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallArgument {
    pub value           : Expression,
    /// Call site marked the argument `ref`.
    pub is_by_reference : bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    Vec,
    Set,
}

impl Display for CollectionKind {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Vec => write!(f, "vec"),
            CollectionKind::Set => write!(f, "set"),
        }
    }
}

/// `vec[a, b]` or `set[a, b]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    pub kind    : CollectionKind,
    pub elements: Vec<Expression>,
}

/// `Name { field: value, shorthand }` or an untagged `{ ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub type_name   : Option<Path>,
    pub fields      : Vec<ObjectField>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name    : String,
    /// `None` for shorthand fields, which take the value of the binding with the same name.
    pub value   : Option<Expression>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Assign,
    Or,
    And,
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Add,
    Sub,
}

impl Display for BinaryOperator {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator as B;
        let symbol = match self {
            B::Assign           => "=",
            B::Or               => "||",
            B::And              => "&&",
            B::Equal            => "==",
            B::NotEqual         => "!=",
            B::Less             => "<",
            B::LessOrEqual      => "<=",
            B::Greater          => ">",
            B::GreaterOrEqual   => ">=",
            B::Add              => "+",
            B::Sub              => "-",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOp {
    pub op      : BinaryOperator,
    pub left    : Expression,
    pub right   : Expression,
}

/// `collection[key]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Access {
    pub collection  : Path,
    pub key         : Expression,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InPlaceOperator {
    Increment,
    Decrement,
}

impl Display for InPlaceOperator {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InPlaceOperator::Increment => write!(f, "++"),
            InPlaceOperator::Decrement => write!(f, "--"),
        }
    }
}

/// `++target`, `target--` etc.
#[derive(Clone, Debug, PartialEq)]
pub struct InPlace {
    pub op          : InPlaceOperator,
    pub target      : Expression,
    pub is_prefix   : bool,
}
