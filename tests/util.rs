pub use clover::{meta, parser, resolver, compile};
pub use clover::ast::*;
pub use clover::meta::{Entry, Symbol};
pub use clover::parser::error::{ParseError, ParseErrorKind};
pub use clover::resolver::error::{ResolveError, ResolveErrorKind};
pub use clover::resolver::resolved::ResolvedModule;

/// Parses the given source.
#[allow(dead_code)]
pub fn parse(src: &str) -> Result<Module, ParseError> {
    parser::parse_module(src)
}

/// Parses the given source, expecting failure, and returns the error kind.
#[allow(dead_code)]
pub fn parse_err(src: &str) -> ParseErrorKind {
    parse(src).expect_err("Parsing should have failed").kind().clone()
}

/// Parses a single expression by wrapping it in a return statement.
#[allow(dead_code)]
pub fn parse_expr(expr: &str) -> Expression {
    let module = parse(&format!("fn test() {{ return {}; }}", expr)).unwrap();
    match &module.declarations[0] {
        Declaration::Function(function) => match &function.statements[0] {
            Statement::Return(ret) => ret.value.clone(),
            other => panic!("Unexpected statement {:?}", other),
        },
        other => panic!("Unexpected declaration {:?}", other),
    }
}

/// Parses the given source and returns the statements of its first function.
#[allow(dead_code)]
pub fn parse_body(src: &str) -> Vec<Statement> {
    let module = parse(src).unwrap();
    match module.declarations.into_iter().next() {
        Some(Declaration::Function(function)) => function.statements,
        other => panic!("Expected function, got {:?}", other),
    }
}

/// Parses and resolves the given source.
#[allow(dead_code)]
pub fn resolve(src: &str) -> Result<ResolvedModule, ResolveError> {
    resolver::resolve(&parse(src).unwrap())
}

/// Parses and resolves the given source, expecting resolution to fail, and returns the error kind.
#[allow(dead_code)]
pub fn resolve_err(src: &str) -> ResolveErrorKind {
    match resolve(src) {
        Ok(_) => panic!("Resolving should have failed"),
        Err(err) => err.kind().clone(),
    }
}

/// Returns the signature of the named function.
#[allow(dead_code)]
pub fn signature<'a>(resolved: &'a ResolvedModule, name: &str) -> &'a meta::Function {
    match resolved.lookup(name) {
        Some(Symbol::Function { id }) => resolved.entry(*id).and_then(Entry::as_function).unwrap(),
        other => panic!("'{}' is not a function: {:?}", name, other),
    }
}

/// Returns the types inferred for `let` bindings of the given name, in allocation order.
#[allow(dead_code)]
pub fn variable_types(resolved: &ResolvedModule, name: &str) -> Vec<Option<String>> {
    resolved.entries()
        .filter(|(id, _)| resolved.type_name(*id) == Some(name))
        .filter_map(|(_, entry)| entry.as_variable())
        .map(|variable| variable.inferred.as_known().map(|type_ref| resolved.describe(type_ref)))
        .collect()
}

/// Compiles the given source, panicking on failure.
#[allow(dead_code)]
pub fn generate(src: &str) -> String {
    compile(src).unwrap()
}

/// Returns the generated text of the named function, from its export line to its closing brace.
#[allow(dead_code)]
pub fn function_js(js: &str, name: &str) -> String {
    let start = js.find(&format!("module.exports.{} = ", name)).expect("function not exported");
    let end = start + js[start..].find("\n}\n").expect("function not closed") + 3;
    js[start..end].to_string()
}
