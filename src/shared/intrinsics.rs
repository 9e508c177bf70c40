//! Reserved pseudo-functions that lower directly to host primitives.

use crate::prelude::*;

/// A reserved pseudo-function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `__has(collection, value)`, set membership test.
    Has,
    /// `__push(vec, value)`, appends to a sequence in place.
    Push,
    /// `__substring(string, start, end)`.
    Substring,
    /// `__read_file(path)`, reads a whole file as a string.
    ReadFile,
    /// `__write(string)`, writes to standard output.
    Write,
    /// `__die(message)`, aborts with the given message.
    Die,
}

impl Intrinsic {
    /// All intrinsics in registration order.
    pub const ALL: [ Intrinsic; 6 ] = [ Intrinsic::Has, Intrinsic::Push, Intrinsic::Substring, Intrinsic::ReadFile, Intrinsic::Write, Intrinsic::Die ];

    /// The reserved source name of the intrinsic.
    pub const fn name(self: Self) -> &'static str {
        match self {
            Intrinsic::Has => "__has",
            Intrinsic::Push => "__push",
            Intrinsic::Substring => "__substring",
            Intrinsic::ReadFile => "__read_file",
            Intrinsic::Write => "__write",
            Intrinsic::Die => "__die",
        }
    }

    /// Number of arguments the intrinsic takes.
    pub const fn arity(self: Self) -> usize {
        match self {
            Intrinsic::Has | Intrinsic::Push => 2,
            Intrinsic::Substring => 3,
            Intrinsic::ReadFile | Intrinsic::Write | Intrinsic::Die => 1,
        }
    }

    /// Name of the builtin type the intrinsic evaluates to. `None` means the result is not modeled.
    pub const fn result_type_name(self: Self) -> Option<&'static str> {
        match self {
            Intrinsic::Has => Some("bool"),
            Intrinsic::Substring | Intrinsic::ReadFile => Some("str"),
            Intrinsic::Push | Intrinsic::Write | Intrinsic::Die => None,
        }
    }

    /// Looks up an intrinsic by its reserved source name.
    pub fn from_name(name: &str) -> Option<Intrinsic> {
        Self::ALL.iter().copied().find(|intrinsic| intrinsic.name() == name)
    }
}

impl Display for Intrinsic {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
