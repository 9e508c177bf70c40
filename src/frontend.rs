//! Compiler frontend. Parses source text into an AST and checks it.

pub mod ast;
pub mod parser;
pub mod resolver;
