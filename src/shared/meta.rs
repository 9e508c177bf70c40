//! Type table entries, type references and scope symbols produced by the resolver.

use crate::prelude::*;
use crate::shared::typed_ids::TypeId;
use crate::shared::intrinsics::Intrinsic;

/// A resolved reference to a type table entry together with its resolved generic parameters.
///
/// Instantiation is structural: `vec<i32>` and `vec<str>` share the id of `vec` and differ only in their parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub id          : TypeId,
    pub parameters  : Vec<TypeRef>,
}

impl TypeRef {
    /// Creates a reference without generic parameters.
    pub fn plain(id: TypeId) -> Self {
        Self { id, parameters: Vec::new() }
    }
}

/// Result of inferring the type of an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inferred {
    Known(TypeRef),
    /// The expression form has no inference rule. Unknown types pass every type equality check.
    Unknown,
}

impl Inferred {
    /// Returns the inferred type reference, if known.
    pub fn as_known(self: &Self) -> Option<&TypeRef> {
        match self {
            Inferred::Known(type_ref) => Some(type_ref),
            Inferred::Unknown => None,
        }
    }
}

impl From<TypeRef> for Inferred {
    fn from(type_ref: TypeRef) -> Self {
        Inferred::Known(type_ref)
    }
}

impl From<Option<TypeRef>> for Inferred {
    fn from(type_ref: Option<TypeRef>) -> Self {
        type_ref.map_or(Inferred::Unknown, Inferred::Known)
    }
}

/// A built-in type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Builtin {
    pub name            : &'static str,
    pub parameter_count : usize,
    pub is_number       : bool,
    pub is_signed       : bool,
}

/// The fixed set of built-in types, in registration order.
pub const BUILTINS: [ Builtin; 7 ] = [
    Builtin { name: "bool", parameter_count: 0, is_number: false, is_signed: false },
    Builtin { name: "vec",  parameter_count: 1, is_number: false, is_signed: false },
    Builtin { name: "set",  parameter_count: 0, is_number: false, is_signed: false },
    Builtin { name: "str",  parameter_count: 0, is_number: false, is_signed: false },
    Builtin { name: "char", parameter_count: 0, is_number: false, is_signed: false },
    Builtin { name: "i32",  parameter_count: 0, is_number: true,  is_signed: true  },
    Builtin { name: "u32",  parameter_count: 0, is_number: true,  is_signed: false },
];

/// Information about a struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Struct {
    pub fields: Map<String, TypeRef>,
}

/// Information about an enum. Variants are separate entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enum {
    pub variant_ids: Vec<TypeId>,
}

/// Information about one enum variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumVariant {
    pub fields  : Map<String, TypeRef>,
    /// Id of the enum owning this variant.
    pub enum_id : TypeId,
}

/// Function signature. Arguments are separate entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub argument_ids: Vec<TypeId>,
    pub return_type : Option<TypeRef>,
}

/// One argument of a function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionArgument {
    pub name            : String,
    pub type_ref        : TypeRef,
    pub is_by_reference : bool,
}

/// A local variable introduced by `let`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub inferred: Inferred,
}

/// A type table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Builtin(Builtin),
    Struct(Struct),
    Enum(Enum),
    EnumVariant(EnumVariant),
    Function(Function),
    FunctionArgument(FunctionArgument),
    Variable(Variable),
}

/// Generates `as_<variant>` accessors for each listed entry variant.
macro_rules! impl_entry_accessors {
    ($($variant:ident),+) => { paste::paste! {
        impl Entry {
            $(
                #[doc = "Returns the entry as " $variant " if it is one."]
                pub fn [<as_ $variant:snake>](self: &Self) -> Option<&$variant> {
                    match self {
                        Entry::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            )+
        }
    } };
}

impl_entry_accessors!(Builtin, Struct, Enum, EnumVariant, Function, FunctionArgument, Variable);

impl Entry {
    /// Human readable name of the entry kind, used in error messages.
    pub fn kind_name(self: &Self) -> &'static str {
        match self {
            Entry::Builtin(_) => "builtin type",
            Entry::Struct(_) => "struct",
            Entry::Enum(_) => "enum",
            Entry::EnumVariant(_) => "enum variant",
            Entry::Function(_) => "function",
            Entry::FunctionArgument(_) => "function argument",
            Entry::Variable(_) => "variable",
        }
    }
}

/// A named item within a scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// A type name: builtin, struct, enum or enum variant.
    Type { id: TypeId, parameter_count: usize },
    /// A declared function.
    Function { id: TypeId },
    /// A value: function argument or local variable.
    Value { id: TypeId, inferred: Inferred },
    /// A reserved pseudo-function lowered directly to a host primitive.
    Intrinsic(Intrinsic),
}

impl Symbol {
    /// Human readable name of the symbol kind, used in error messages.
    pub fn kind_name(self: &Self) -> &'static str {
        match self {
            Symbol::Type { .. } => "type",
            Symbol::Function { .. } => "function",
            Symbol::Value { .. } => "value",
            Symbol::Intrinsic(_) => "builtin function",
        }
    }
}
