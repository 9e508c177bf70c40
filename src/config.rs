/// Source file compiled by `cloverc` when no path is given.
pub const DEFAULT_SOURCE: &str = "./utils.clv";

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "// GENERATED, DO NOT EDIT";

/// Prefix applied to generated function names. Reserved pseudo-functions share it.
pub const FUNCTION_PREFIX: &str = "__";

/// Name of the discriminant field baked into tagged object literals.
pub const TYPE_TAG_FIELD: &str = "__type";

/// Indentation unit of the generated code.
pub const INDENT: &str = "  ";
