use crate::prelude::*;

/// Represents the various possible resolver error-kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveErrorKind {
    /// A top-level name was declared more than once.
    DuplicateName(String),
    /// A declaration uses the name of a reserved pseudo-function.
    ReservedName(String),
    /// Field name, owning struct or variant.
    DuplicateField(String, String),
    UndefinedName(String),
    /// Name found but it does not denote a type. Holds name and the kind it does denote.
    NotAType(String, String),
    NotAFunction(String, String),
    NotAValue(String, String),
    /// Type names consist of exactly one segment.
    QualifiedTypeName(String),
    /// Field access on a value whose type is not a struct. Holds the accessed path and the value's type.
    NotAStruct(String, String),
    /// Member, struct.
    UndefinedMember(String, String),
    /// Identity test against something other than an enum variant.
    NotAVariant(String),
    /// Type name, expected parameter count, given parameter count.
    TypeParameterCount(String, usize, usize),
    /// Function name, expected argument count, given argument count.
    NumberOfArguments(String, usize, usize),
    /// Expected type, given type.
    TypeMismatch(String, String),
    /// Operator, operand type.
    InvalidOperand(String, String),
    Internal(String),
}

/// An error reported by the resolver (e.g. unknown/mismatching types).
#[derive(Clone, Debug)]
pub struct ResolveError {
    kind: ResolveErrorKind,
}

impl ResolveError {
    pub(crate) fn new(kind: ResolveErrorKind) -> ResolveError {
        Self { kind }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &ResolveErrorKind {
        &self.kind
    }
}

impl Display for ResolveError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ResolveErrorKind::DuplicateName(name) => write!(f, "Duplicate declaration of '{}'", name),
            ResolveErrorKind::ReservedName(name) => write!(f, "'{}' is a reserved builtin function name", name),
            ResolveErrorKind::DuplicateField(field, owner) => write!(f, "Duplicate field '{}' in '{}'", field, owner),
            ResolveErrorKind::UndefinedName(name) => write!(f, "Undefined name '{}'", name),
            ResolveErrorKind::NotAType(name, kind) => write!(f, "Expected type, '{}' is a {}", name, kind),
            ResolveErrorKind::NotAFunction(name, kind) => write!(f, "Expected function, '{}' is a {}", name, kind),
            ResolveErrorKind::NotAValue(name, kind) => write!(f, "Expected value, '{}' is a {}", name, kind),
            ResolveErrorKind::QualifiedTypeName(name) => write!(f, "Type name '{}' must consist of a single name", name),
            ResolveErrorKind::NotAStruct(path, ty) => write!(f, "Cannot access field '{}' of non-struct type {}", path, ty),
            ResolveErrorKind::UndefinedMember(member, ty) => write!(f, "Undefined member '{}' of struct '{}'", member, ty),
            ResolveErrorKind::NotAVariant(name) => write!(f, "'{}' is not an enum variant", name),
            ResolveErrorKind::TypeParameterCount(ty, e, g) => write!(f, "Type '{}' expects {} type parameters, got {}", ty, e, g),
            ResolveErrorKind::NumberOfArguments(func, e, g) => write!(f, "Invalid number of arguments. Function '{}' expects {} arguments, got {}", func, e, g),
            ResolveErrorKind::TypeMismatch(e, g) => write!(f, "Expected type {}, got {}", e, g),
            ResolveErrorKind::InvalidOperand(op, ty) => write!(f, "Operator '{}' cannot be applied to type {}", op, ty),
            ResolveErrorKind::Internal(msg) => write!(f, "Internal compiler error: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError { }

pub type ResolveResult<T = ()> = Result<T, ResolveError>;

/// Trait to convert an Option to a Result compatible with ResolveResult
pub(crate) trait SomeOrResolveError<T> {
    fn unwrap_or_err(self: Self, kind: ResolveErrorKind) -> ResolveResult<T>;
    fn unwrap_or_ice(self: Self, message: &str) -> ResolveResult<T>;
}

impl<T> SomeOrResolveError<T> for Option<T> {
    fn unwrap_or_err(self: Self, kind: ResolveErrorKind) -> ResolveResult<T> {
        self.ok_or_else(|| ResolveError::new(kind))
    }
    fn unwrap_or_ice(self: Self, message: &str) -> ResolveResult<T> {
        if let Some(result) = self {
            Ok(result)
        } else {
            ice(message)
        }
    }
}

/// Returns an internal compiler error.
pub(crate) fn ice<T>(message: &str) -> ResolveResult<T> {
    #[cfg(feature="ice_panics")]
    panic!("Internal compiler error: {}", message);
    #[cfg(not(feature="ice_panics"))]
    Err(ResolveError::new(ResolveErrorKind::Internal(message.to_string())))
}
