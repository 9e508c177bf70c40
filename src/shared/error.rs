use crate::prelude::*;
use crate::frontend::parser::error::ParseError;
use crate::frontend::resolver::error::ResolveError;
use crate::generator::error::GenerateError;

/// An error generated during program compilation.
#[derive(Clone, Debug)]
pub enum Error {
    ParseError(ParseError),
    ResolveError(ResolveError),
    GenerateError(GenerateError),
}

impl Display for Error {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(e) => write!(f, "{}", e),
            Self::ResolveError(e) => write!(f, "{}", e),
            Self::GenerateError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error { }

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Error {
        Error::ParseError(error)
    }
}

impl From<ResolveError> for Error {
    fn from(error: ResolveError) -> Error {
        Error::ResolveError(error)
    }
}

impl From<GenerateError> for Error {
    fn from(error: GenerateError) -> Error {
        Error::GenerateError(error)
    }
}
