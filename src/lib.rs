//! Clover, a tiny statically typed language compiled ahead of time to JavaScript.
//!
//! Compilation runs in three stages: [parser] turns source text into a [Module](ast::Module),
//! [resolver] checks names and types across the whole module and [generator] emits the
//! JavaScript module together with the runtime helpers the emitted code relies on.
//!
//! ```
//! let js = clover::compile("
//!     struct Point { x: i32, y: i32 }
//!     fn sum(p: Point): i32 {
//!         return p.x;
//!     }
//! ").unwrap();
//! assert!(js.contains("function __sum(p) {"));
//! ```

pub(crate) mod prelude {
    //! Collection aliases and common imports used throughout the crate.
    pub use std::collections::{HashMap as UnorderedMap, BTreeMap as Map};
    pub use std::fmt::{self, Debug, Display};
    pub use std::hash::Hash;
}

pub mod config;
pub(crate) mod shared;
pub mod frontend;
pub mod generator;

pub use frontend::{ast, parser, resolver};
pub use shared::error::Error;
pub use shared::intrinsics::Intrinsic;
pub use shared::meta;
pub use shared::typed_ids::{TypeId, ScopeId, SymbolId};

/// One stop shop to `parse`, `resolve` and `generate` the given Clover source code.
///
/// The generated module is buffered and only returned if every stage succeeded, so a failing
/// compilation never yields partial output.
pub fn compile(source: &str) -> Result<String, Error> {
    let module = parser::parse_module(source)?;
    let resolved = resolver::resolve(&module)?;
    log::debug!("resolved {} type table entries", resolved.len());
    let mut output = Vec::new();
    generator::generate(&module, &mut output)?;
    String::from_utf8(output).map_err(|err| Error::GenerateError(generator::error::GenerateError::io(&err)))
}
