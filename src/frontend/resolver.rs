//! AST name and type checker.
//!
//! Resolution runs in three passes over the module: names are assigned ids first, then all
//! signatures (struct fields, variant fields, function arguments and return types) are resolved
//! and finally each function body is analyzed. Because every signature is known before any body
//! is looked at, declarations may reference each other in any order.

pub mod error;
pub mod resolved;
mod scopes;
mod type_table;

use crate::prelude::*;
use crate::frontend::ast;
use crate::shared::typed_ids::{TypeId, ScopeId};
use crate::shared::meta::{self, Entry, Inferred, Symbol, TypeRef, BUILTINS};
use crate::shared::intrinsics::Intrinsic;
use error::{SomeOrResolveError, ResolveResult, ResolveError, ResolveErrorKind, ice};
use resolved::ResolvedModule;
use scopes::Scopes;
use type_table::TypeTable;

/// Temporary internal state during module type/name resolution.
struct Resolver<'ctx> {
    /// Scope id this state operates in.
    scope_id        : ScopeId,
    /// Scope holding the top-level declarations.
    module_scope_id : ScopeId,
    /// Repository of all scopes.
    scopes          : &'ctx mut Scopes,
    /// Type table, also owns the id counter.
    types           : &'ctx mut TypeTable,
    /// Builtin type name to type id mapping.
    builtins        : &'ctx UnorderedMap<&'static str, TypeId>,
    /// Declared return type of the function currently being analyzed.
    return_type     : Option<TypeRef>,
}

/// Resolves names and types within the given module AST.
///
/// ```
/// use clover::{parser, resolver, meta::Symbol};
///
/// let module = parser::parse_module("
///     struct Point { x: i32, y: i32 }
///     fn x(p: Point): i32 { return p.x; }
/// ").unwrap();
/// let resolved = resolver::resolve(&module).unwrap();
/// assert!(matches!(resolved.lookup("x"), Some(Symbol::Function { .. })));
/// ```
///
/// The module is now ready for code generation by [generate](crate::generator::generate).
pub fn resolve(module: &ast::Module) -> ResolveResult<ResolvedModule> {

    // create root scope and insert builtin types and intrinsics
    let mut scopes = Scopes::new();
    let mut types = TypeTable::new();
    let mut builtins = UnorderedMap::new();
    for builtin in BUILTINS.iter() {
        let id = types.insert(builtin.name, Entry::Builtin(builtin.clone()));
        scopes.insert(ScopeId::ROOT, builtin.name, Symbol::Type { id, parameter_count: builtin.parameter_count });
        builtins.insert(builtin.name, id);
    }
    for intrinsic in Intrinsic::ALL {
        scopes.insert(ScopeId::ROOT, intrinsic.name(), Symbol::Intrinsic(intrinsic));
    }
    let module_scope_id = scopes.create_scope(ScopeId::ROOT);

    let mut resolver = Resolver {
        scope_id        : module_scope_id,
        module_scope_id,
        scopes          : &mut scopes,
        types           : &mut types,
        builtins        : &builtins,
        return_type     : None,
    };

    resolver.declare(module)?;
    log::trace!("declared {} top-level names", module.declarations.len());
    resolver.resolve_signatures(module)?;
    log::trace!("resolved signatures");
    for function in module.functions() {
        resolver.analyze_function(function)?;
    }
    log::debug!("resolved {} functions", module.functions().count());

    Ok(ResolvedModule::new(types, scopes, module_scope_id))
}

/// Support methods.
impl<'ctx> Resolver<'ctx> {

    /// Returns a plain reference to the named builtin type.
    fn builtin(self: &Self, name: &str) -> ResolveResult<TypeRef> {
        let id = self.builtins.get(name).unwrap_or_ice(&format!("Missing builtin type '{}'", name))?;
        Ok(TypeRef::plain(*id))
    }

    fn describe(self: &Self, type_ref: &TypeRef) -> String {
        self.types.describe(type_ref)
    }

    /// Fails with a type mismatch unless the inferred type is unknown or has the expected id.
    fn check_type(self: &Self, expected: &TypeRef, inferred: &Inferred) -> ResolveResult {
        match inferred {
            Inferred::Known(actual) if actual.id != expected.id => {
                Err(ResolveError::new(ResolveErrorKind::TypeMismatch(self.describe(expected), self.describe(actual))))
            },
            _ => Ok(()),
        }
    }

    /// Looks up a name through the scope chain, starting at the current scope.
    fn lookup(self: &Self, name: &str) -> ResolveResult<&Symbol> {
        self.scopes.lookup(self.scope_id, name).unwrap_or_err(ResolveErrorKind::UndefinedName(name.to_string()))
    }

    /// Returns the id assigned to a top-level type name in the first pass.
    fn declared_type_id(self: &Self, name: &str) -> ResolveResult<TypeId> {
        match self.scopes.local_symbol(self.module_scope_id, name) {
            Some(&Symbol::Type { id, .. }) => Ok(id),
            _ => ice(&format!("Type '{}' was not declared", name)),
        }
    }

    /// Returns the id assigned to a function name in the first pass.
    fn declared_function_id(self: &Self, name: &str) -> ResolveResult<TypeId> {
        match self.scopes.local_symbol(self.module_scope_id, name) {
            Some(&Symbol::Function { id }) => Ok(id),
            _ => ice(&format!("Function '{}' was not declared", name)),
        }
    }

    fn function_entry(self: &Self, id: TypeId) -> ResolveResult<&meta::Function> {
        self.types.entry(id).and_then(Entry::as_function).unwrap_or_ice("Function signature not resolved")
    }

    fn argument_entry(self: &Self, id: TypeId) -> ResolveResult<&meta::FunctionArgument> {
        self.types.entry(id).and_then(Entry::as_function_argument).unwrap_or_ice("Function argument not resolved")
    }
}

/// Pass one: name and id assignment.
impl<'ctx> Resolver<'ctx> {

    fn declare(self: &mut Self, module: &ast::Module) -> ResolveResult {
        for declaration in &module.declarations {
            match declaration {
                ast::Declaration::Struct(structure) => {
                    let id = self.types.reserve(&structure.name);
                    self.declare_name(&structure.name, Symbol::Type { id, parameter_count: 0 })?;
                },
                ast::Declaration::Enum(enumeration) => {
                    let id = self.types.reserve(&enumeration.name);
                    self.declare_name(&enumeration.name, Symbol::Type { id, parameter_count: 0 })?;
                    let mut variant_ids = Vec::with_capacity(enumeration.variants.len());
                    for variant in &enumeration.variants {
                        let variant_id = self.types.reserve(&variant.name);
                        self.declare_name(&variant.name, Symbol::Type { id: variant_id, parameter_count: 0 })?;
                        variant_ids.push(variant_id);
                    }
                    self.types.set(id, Entry::Enum(meta::Enum { variant_ids }));
                },
                ast::Declaration::Function(function) => {
                    let id = self.types.reserve(&function.name);
                    self.declare_name(&function.name, Symbol::Function { id })?;
                },
            }
        }
        Ok(())
    }

    /// Binds a top-level name in the module scope. All declaration kinds share one namespace, reserved
    /// pseudo-function names are unavailable.
    fn declare_name(self: &mut Self, name: &str, symbol: Symbol) -> ResolveResult {
        if Intrinsic::from_name(name).is_some() {
            return Err(ResolveError::new(ResolveErrorKind::ReservedName(name.to_string())));
        }
        if self.scopes.local_symbol(self.module_scope_id, name).is_some() {
            return Err(ResolveError::new(ResolveErrorKind::DuplicateName(name.to_string())));
        }
        self.scopes.insert(self.module_scope_id, name, symbol);
        Ok(())
    }
}

/// Pass two: signature resolution.
impl<'ctx> Resolver<'ctx> {

    fn resolve_signatures(self: &mut Self, module: &ast::Module) -> ResolveResult {
        for declaration in &module.declarations {
            match declaration {
                ast::Declaration::Struct(structure) => {
                    let id = self.declared_type_id(&structure.name)?;
                    let fields = self.resolve_fields(&structure.name, &structure.fields)?;
                    self.types.set(id, Entry::Struct(meta::Struct { fields }));
                },
                ast::Declaration::Enum(enumeration) => {
                    let enum_id = self.declared_type_id(&enumeration.name)?;
                    for variant in &enumeration.variants {
                        let variant_id = self.declared_type_id(&variant.name)?;
                        let fields = self.resolve_fields(&variant.name, &variant.fields)?;
                        self.types.set(variant_id, Entry::EnumVariant(meta::EnumVariant { fields, enum_id }));
                    }
                },
                ast::Declaration::Function(function) => {
                    let id = self.declared_function_id(&function.name)?;
                    let mut argument_ids = Vec::with_capacity(function.arguments.len());
                    for argument in &function.arguments {
                        let type_ref = self.resolve_type_name(&argument.type_name)?;
                        let argument_id = self.types.insert(&argument.name, Entry::FunctionArgument(meta::FunctionArgument {
                            name            : argument.name.clone(),
                            type_ref,
                            is_by_reference : argument.is_by_reference,
                        }));
                        argument_ids.push(argument_id);
                    }
                    let return_type = match &function.return_type {
                        Some(type_name) => Some(self.resolve_type_name(type_name)?),
                        None => None,
                    };
                    self.types.set(id, Entry::Function(meta::Function { argument_ids, return_type }));
                },
            }
        }
        Ok(())
    }

    /// Resolves the fields of a struct or enum variant. Field names must be unique within their owner.
    fn resolve_fields(self: &mut Self, owner: &str, fields: &[ ast::Field ]) -> ResolveResult<Map<String, TypeRef>> {
        let mut result = Map::new();
        for field in fields {
            let type_ref = self.resolve_type_name(&field.type_name)?;
            if result.insert(field.name.clone(), type_ref).is_some() {
                return Err(ResolveError::new(ResolveErrorKind::DuplicateField(field.name.clone(), owner.to_string())));
            }
        }
        Ok(result)
    }

    /// Resolves a type name such as `vec<Point>` to a type reference.
    fn resolve_type_name(self: &Self, type_name: &ast::TypeName) -> ResolveResult<TypeRef> {
        let name = type_name.path.first();
        let (id, parameter_count) = match self.lookup(name)? {
            &Symbol::Type { id, parameter_count } => (id, parameter_count),
            other => return Err(ResolveError::new(ResolveErrorKind::NotAType(name.to_string(), other.kind_name().to_string()))),
        };
        if type_name.path.len() != 1 {
            return Err(ResolveError::new(ResolveErrorKind::QualifiedTypeName(type_name.path.to_string())));
        }
        if type_name.parameters.len() != parameter_count {
            return Err(ResolveError::new(ResolveErrorKind::TypeParameterCount(name.to_string(), parameter_count, type_name.parameters.len())));
        }
        let parameters = type_name.parameters.iter()
            .map(|parameter| self.resolve_type_name(parameter))
            .collect::<ResolveResult<Vec<_>>>()?;
        Ok(TypeRef { id, parameters })
    }
}

/// Pass three: function body analysis.
impl<'ctx> Resolver<'ctx> {

    fn analyze_function(self: &mut Self, function: &ast::Function) -> ResolveResult {
        let function_id = self.declared_function_id(&function.name)?;
        let signature = self.function_entry(function_id)?.clone();
        let scope_id = self.scopes.create_scope(self.module_scope_id);
        for &argument_id in &signature.argument_ids {
            let argument = self.types.entry(argument_id).and_then(Entry::as_function_argument).unwrap_or_ice("Function argument not resolved")?;
            let symbol = Symbol::Value { id: argument_id, inferred: Inferred::Known(argument.type_ref.clone()) };
            self.scopes.insert(scope_id, &argument.name, symbol);
        }
        log::trace!("analyzing function {} in scope {}", function.name, scope_id);
        self.scope_id = scope_id;
        self.return_type = signature.return_type;
        for statement in &function.statements {
            self.analyze_statement(statement)?;
        }
        self.scope_id = self.module_scope_id;
        self.return_type = None;
        Ok(())
    }

    fn analyze_statement(self: &mut Self, statement: &ast::Statement) -> ResolveResult {
        match statement {
            ast::Statement::Let(binding) => {
                let inferred = self.infer(&binding.value)?;
                let id = self.types.insert(&binding.name, Entry::Variable(meta::Variable { inferred: inferred.clone() }));
                self.scopes.insert(self.scope_id, &binding.name, Symbol::Value { id, inferred });
            },
            ast::Statement::If(if_statement) => {
                self.check_condition(&if_statement.condition)?;
                self.analyze_statement(&if_statement.consequent)?;
                if let Some(alternate) = &if_statement.alternate {
                    self.analyze_statement(alternate)?;
                }
            },
            ast::Statement::While(while_loop) => {
                self.check_condition(&while_loop.condition)?;
                self.analyze_statement(&while_loop.body)?;
            },
            ast::Statement::Block(block) => {
                let parent_scope_id = self.scope_id;
                self.scope_id = self.scopes.create_scope(parent_scope_id);
                for statement in &block.statements {
                    self.analyze_statement(statement)?;
                }
                self.scope_id = parent_scope_id;
            },
            ast::Statement::Return(return_statement) => {
                let inferred = self.infer(&return_statement.value)?;
                if let Some(expected) = &self.return_type {
                    self.check_type(expected, &inferred)?;
                }
            },
            ast::Statement::Expression(expression) => {
                self.infer(expression)?;
            },
        }
        Ok(())
    }

    fn check_condition(self: &mut Self, condition: &ast::Expression) -> ResolveResult {
        let inferred = self.infer(condition)?;
        let expected = self.builtin("bool")?;
        self.check_type(&expected, &inferred)
    }
}

/// Expression inference.
impl<'ctx> Resolver<'ctx> {

    fn infer(self: &mut Self, expression: &ast::Expression) -> ResolveResult<Inferred> {
        use ast::Expression as E;
        match expression {
            E::Literal(literal) => self.infer_literal(literal),
            E::UnaryOp(unary_op) => self.infer_unary_op(unary_op),
            E::IdentityTest(identity_test) => self.infer_identity_test(identity_test),
            E::Name(path) => self.infer_name(path),
            E::Call(call) => self.infer_call(call),
            E::Collection(collection) => {
                for element in &collection.elements {
                    self.infer(element)?;
                }
                let name = match collection.kind {
                    ast::CollectionKind::Vec => "vec",
                    ast::CollectionKind::Set => "set",
                };
                Ok(self.builtin(name)?.into())
            },
            E::Object(object) => {
                for field in &object.fields {
                    match &field.value {
                        Some(value) => { self.infer(value)?; },
                        None => { self.infer_name(&ast::Path::single(&field.name))?; },
                    }
                }
                Ok(Inferred::Unknown)
            },
            E::BinaryOp(binary_op) => {
                self.infer(&binary_op.left)?;
                self.infer(&binary_op.right)?;
                Ok(Inferred::Unknown)
            },
            E::Access(access) => {
                self.infer_name(&access.collection)?;
                self.infer(&access.key)?;
                Ok(Inferred::Unknown)
            },
            E::InPlace(in_place) => {
                self.infer(&in_place.target)?;
                Ok(Inferred::Unknown)
            },
        }
    }

    fn infer_literal(self: &Self, literal: &ast::Literal) -> ResolveResult<Inferred> {
        Ok(match literal {
            ast::Literal::Bool(_) => self.builtin("bool")?.into(),
            ast::Literal::Char(_) => self.builtin("char")?.into(),
            ast::Literal::String(_) => self.builtin("str")?.into(),
            ast::Literal::Number(_) => Inferred::Unknown,
        })
    }

    fn infer_unary_op(self: &mut Self, unary_op: &ast::UnaryOp) -> ResolveResult<Inferred> {
        let operand = self.infer(&unary_op.operand)?;
        match unary_op.op {
            ast::UnaryOperator::Negate => {
                if let Some(operand_type) = operand.as_known() {
                    let is_signed_number = self.types.entry(operand_type.id)
                        .and_then(Entry::as_builtin)
                        .map_or(false, |builtin| builtin.is_number && builtin.is_signed);
                    if !is_signed_number {
                        return Err(ResolveError::new(ResolveErrorKind::InvalidOperand(unary_op.op.to_string(), self.describe(operand_type))));
                    }
                }
                Ok(operand)
            },
            ast::UnaryOperator::Not => {
                let bool_type = self.builtin("bool")?;
                if let Some(operand_type) = operand.as_known() {
                    if operand_type.id != bool_type.id {
                        return Err(ResolveError::new(ResolveErrorKind::InvalidOperand(unary_op.op.to_string(), self.describe(operand_type))));
                    }
                }
                Ok(bool_type.into())
            },
        }
    }

    fn infer_identity_test(self: &mut Self, identity_test: &ast::IdentityTest) -> ResolveResult<Inferred> {
        let operand = self.infer(&identity_test.operand)?;
        let variant_name = identity_test.variant.to_string();
        let variant_id = match self.lookup(identity_test.variant.first())? {
            &Symbol::Type { id, .. } if identity_test.variant.len() == 1 => id,
            _ => return Err(ResolveError::new(ResolveErrorKind::NotAVariant(variant_name))),
        };
        let enum_id = match self.types.entry(variant_id).and_then(Entry::as_enum_variant) {
            Some(variant) => variant.enum_id,
            None => return Err(ResolveError::new(ResolveErrorKind::NotAVariant(variant_name))),
        };
        if let Some(operand_type) = operand.as_known() {
            if operand_type.id != enum_id {
                return Err(ResolveError::new(ResolveErrorKind::TypeMismatch(self.describe(&TypeRef::plain(enum_id)), self.describe(operand_type))));
            }
        }
        Ok(self.builtin("bool")?.into())
    }

    /// Resolves a dotted value path, descending into struct fields for each segment after the first.
    fn infer_name(self: &Self, path: &ast::Path) -> ResolveResult<Inferred> {
        let name = path.first();
        let mut inferred = match self.lookup(name)? {
            Symbol::Value { inferred, .. } => inferred.clone(),
            other => return Err(ResolveError::new(ResolveErrorKind::NotAValue(name.to_string(), other.kind_name().to_string()))),
        };
        for segment in path.rest() {
            inferred = match &inferred {
                Inferred::Unknown => Inferred::Unknown,
                Inferred::Known(value_type) => {
                    let structure = match self.types.entry(value_type.id).and_then(Entry::as_struct) {
                        Some(structure) => structure,
                        None => return Err(ResolveError::new(ResolveErrorKind::NotAStruct(segment.clone(), self.describe(value_type)))),
                    };
                    match structure.fields.get(segment) {
                        Some(field_type) => Inferred::Known(field_type.clone()),
                        None => return Err(ResolveError::new(ResolveErrorKind::UndefinedMember(segment.clone(), self.describe(value_type)))),
                    }
                },
            };
        }
        Ok(inferred)
    }

    fn infer_call(self: &mut Self, call: &ast::Call) -> ResolveResult<Inferred> {
        let name = call.path.to_string();
        let symbol = match self.lookup(call.path.first())? {
            symbol @ (Symbol::Function { .. } | Symbol::Intrinsic(_)) if call.path.len() == 1 => symbol.clone(),
            other => return Err(ResolveError::new(ResolveErrorKind::NotAFunction(name, other.kind_name().to_string()))),
        };
        match symbol {
            Symbol::Intrinsic(intrinsic) => {
                if call.arguments.len() != intrinsic.arity() {
                    return Err(ResolveError::new(ResolveErrorKind::NumberOfArguments(name, intrinsic.arity(), call.arguments.len())));
                }
                for argument in &call.arguments {
                    self.infer(&argument.value)?;
                }
                match intrinsic.result_type_name() {
                    Some(type_name) => Ok(self.builtin(type_name)?.into()),
                    None => Ok(Inferred::Unknown),
                }
            },
            Symbol::Function { id } => {
                let signature = self.function_entry(id)?.clone();
                if call.arguments.len() != signature.argument_ids.len() {
                    return Err(ResolveError::new(ResolveErrorKind::NumberOfArguments(name, signature.argument_ids.len(), call.arguments.len())));
                }
                for (argument, &argument_id) in call.arguments.iter().zip(signature.argument_ids.iter()) {
                    let inferred = self.infer(&argument.value)?;
                    let expected = self.argument_entry(argument_id)?.type_ref.clone();
                    self.check_type(&expected, &inferred)?;
                }
                Ok(signature.return_type.into())
            },
            _ => ice("Unexpected callee symbol"),
        }
    }
}
