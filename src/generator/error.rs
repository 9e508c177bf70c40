use crate::prelude::*;

/// Represents the various possible generator error-kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateErrorKind {
    /// Writing to the output failed.
    Io(String),
    /// Intrinsic name, expected argument count, given argument count.
    IntrinsicArguments(String, usize, usize),
}

/// An error reported by the generator.
#[derive(Clone, Debug)]
pub struct GenerateError {
    kind: GenerateErrorKind,
}

impl GenerateError {
    pub(crate) fn new(kind: GenerateErrorKind) -> GenerateError {
        Self { kind }
    }
    /// Creates an output error from the given cause.
    pub(crate) fn io(cause: &impl Display) -> GenerateError {
        Self::new(GenerateErrorKind::Io(cause.to_string()))
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &GenerateErrorKind {
        &self.kind
    }
}

impl Display for GenerateError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            GenerateErrorKind::Io(cause) => write!(f, "Failed to write output: {}", cause),
            GenerateErrorKind::IntrinsicArguments(name, e, g) => write!(f, "Invalid number of arguments. Builtin function '{}' expects {} arguments, got {}", name, e, g),
        }
    }
}

impl std::error::Error for GenerateError { }

pub type GenerateResult<T = ()> = Result<T, GenerateError>;
