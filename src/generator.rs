//! JavaScript generator. Translates the module AST statement by statement.

pub mod error;
mod writer;
mod runtime;

use std::io::Write;
use crate::prelude::*;
use crate::config::{GENERATED_HEADER, FUNCTION_PREFIX, TYPE_TAG_FIELD};
use crate::frontend::ast;
use crate::shared::intrinsics::Intrinsic;
use error::{GenerateError, GenerateErrorKind, GenerateResult};
use writer::Writer;

/// Generator state while visiting the AST.
struct Generator<'a, W> where W: Write {
    writer      : Writer<W>,
    /// Declared arguments by function name, used to decide whether call arguments are cloned.
    signatures  : UnorderedMap<&'a str, &'a [ ast::Argument ]>,
}

/// Writes the JavaScript translation of the given module, followed by the runtime helpers.
///
/// The module is expected to have passed [resolve](crate::resolver::resolve); the generator itself
/// does not consult the type table. Emission order follows declaration order only, so the same module
/// always produces the same output.
///
/// ```
/// use clover::{parser, generator};
///
/// let module = parser::parse_module("fn id(ref v: str): str { return v; }").unwrap();
/// let mut output = Vec::new();
/// generator::generate(&module, &mut output).unwrap();
/// let js = String::from_utf8(output).unwrap();
/// assert!(js.starts_with("// GENERATED, DO NOT EDIT\n\nmodule.exports.id = __id;\nfunction __id(v) {\n  return v;\n}\n"));
/// ```
pub fn generate(module: &ast::Module, output: &mut impl Write) -> GenerateResult {
    let signatures = module.functions()
        .map(|function| (function.name.as_str(), function.arguments.as_slice()))
        .collect();
    let mut generator = Generator {
        writer: Writer::new(output),
        signatures,
    };
    generator.writer.write(GENERATED_HEADER)?;
    generator.writer.write("\n\n")?;
    for function in module.functions() {
        generator.write_function(function)?;
    }
    generator.writer.write(runtime::RUNTIME)?;
    generator.writer.into_inner()?;
    log::debug!("generated {} functions", module.functions().count());
    Ok(())
}

/// Formats a string as a double quoted JavaScript string literal.
fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if (c as u32) < 0x20 => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Function and statement emission.
impl<'a, W> Generator<'a, W> where W: Write {

    fn write_function(self: &mut Self, function: &ast::Function) -> GenerateResult {
        log::trace!("generating function {}", function.name);
        let arguments: Vec<_> = function.arguments.iter().map(|argument| argument.name.as_str()).collect();
        self.writer.write(&format!("module.exports.{name} = {prefix}{name};\n", name = function.name, prefix = FUNCTION_PREFIX))?;
        self.writer.write(&format!("function {}{}({}) ", FUNCTION_PREFIX, function.name, arguments.join(", ")))?;
        self.write_block(&function.statements)?;
        self.writer.write("\n\n")
    }

    /// Writes `{`, each statement on its own line one level deeper, and `}` at the current depth.
    fn write_block(self: &mut Self, statements: &[ ast::Statement ]) -> GenerateResult {
        self.writer.write("{\n")?;
        self.writer.indent();
        for statement in statements {
            self.writer.indentation()?;
            self.write_statement(statement)?;
            self.writer.write("\n")?;
        }
        self.writer.outdent();
        self.writer.indentation()?;
        self.writer.write("}")
    }

    /// Writes the body of a conditional or loop. A lone `let` is braced since it is not a valid body on its own.
    fn write_body(self: &mut Self, statement: &ast::Statement) -> GenerateResult {
        if let ast::Statement::Let(_) = statement {
            self.writer.write("{ ")?;
            self.write_statement(statement)?;
            self.writer.write(" }")
        } else {
            self.write_statement(statement)
        }
    }

    fn write_statement(self: &mut Self, statement: &ast::Statement) -> GenerateResult {
        use ast::Statement as S;
        match statement {
            S::Let(binding) => {
                self.writer.write(&format!("let {} = ", binding.name))?;
                self.write_expression(&binding.value)?;
                self.writer.write(";")
            },
            S::If(if_statement) => {
                self.writer.write("if (")?;
                self.write_expression(&if_statement.condition)?;
                self.writer.write(") ")?;
                self.write_body(&if_statement.consequent)?;
                if let Some(alternate) = &if_statement.alternate {
                    self.writer.write(" else ")?;
                    self.write_body(alternate)?;
                }
                Ok(())
            },
            S::While(while_loop) => {
                self.writer.write("while (")?;
                self.write_expression(&while_loop.condition)?;
                self.writer.write(") ")?;
                self.write_body(&while_loop.body)
            },
            S::Block(block) => self.write_block(&block.statements),
            S::Return(return_statement) => {
                self.writer.write("return ")?;
                self.write_expression(&return_statement.value)?;
                self.writer.write(";")
            },
            S::Expression(expression) => {
                self.write_expression(expression)?;
                self.writer.write(";")
            },
        }
    }
}

/// Expression emission.
impl<'a, W> Generator<'a, W> where W: Write {

    fn write_expression(self: &mut Self, expression: &ast::Expression) -> GenerateResult {
        use ast::Expression as E;
        match expression {
            E::Literal(literal) => self.write_literal(literal),
            E::UnaryOp(unary_op) => {
                self.writer.write(&unary_op.op.to_string())?;
                // keep `- -x` from turning into a decrement
                let needs_parens = match &unary_op.operand {
                    E::UnaryOp(_) => true,
                    E::InPlace(in_place) => in_place.is_prefix,
                    _ => false,
                };
                if needs_parens {
                    self.writer.write("(")?;
                    self.write_expression(&unary_op.operand)?;
                    self.writer.write(")")
                } else {
                    self.write_expression(&unary_op.operand)
                }
            },
            E::IdentityTest(identity_test) => {
                if identity_test.is_negated {
                    self.writer.write("!")?;
                }
                self.writer.write("identity_test(")?;
                self.write_expression(&identity_test.operand)?;
                self.writer.write(&format!(", {})", quote(&identity_test.variant.to_string())))
            },
            E::Name(path) => self.writer.write(&path.to_string()),
            E::Call(call) => self.write_call(call),
            E::Collection(collection) => {
                let (open, close) = match collection.kind {
                    ast::CollectionKind::Vec => ("[", "]"),
                    ast::CollectionKind::Set => ("new Set([", "])"),
                };
                self.writer.write(open)?;
                for (index, element) in collection.elements.iter().enumerate() {
                    if index > 0 {
                        self.writer.write(", ")?;
                    }
                    self.write_expression(element)?;
                }
                self.writer.write(close)
            },
            E::Object(object) => {
                self.writer.write("{")?;
                for (index, field) in object.fields.iter().enumerate() {
                    if index > 0 {
                        self.writer.write(", ")?;
                    }
                    self.writer.write(&format!("{}: ", field.name))?;
                    match &field.value {
                        Some(value) => self.write_expression(value)?,
                        None => self.writer.write(&field.name)?,
                    }
                }
                if let Some(type_name) = &object.type_name {
                    if !object.fields.is_empty() {
                        self.writer.write(", ")?;
                    }
                    self.writer.write(&format!("{}: {}", TYPE_TAG_FIELD, quote(&type_name.to_string())))?;
                }
                self.writer.write("}")
            },
            E::BinaryOp(binary_op) => {
                let op = match binary_op.op {
                    ast::BinaryOperator::Equal => "===".to_string(),
                    ast::BinaryOperator::NotEqual => "!==".to_string(),
                    other => other.to_string(),
                };
                self.writer.write("(")?;
                self.write_expression(&binary_op.left)?;
                self.writer.write(&format!(" {} ", op))?;
                self.write_expression(&binary_op.right)?;
                self.writer.write(")")
            },
            E::Access(access) => {
                self.writer.write(&format!("access({}, ", access.collection))?;
                self.write_expression(&access.key)?;
                self.writer.write(")")
            },
            E::InPlace(in_place) => {
                let op = in_place.op.to_string();
                if in_place.is_prefix {
                    self.writer.write(&op)?;
                }
                self.write_expression(&in_place.target)?;
                if !in_place.is_prefix {
                    self.writer.write(&op)?;
                }
                Ok(())
            },
        }
    }

    fn write_literal(self: &mut Self, literal: &ast::Literal) -> GenerateResult {
        match literal {
            ast::Literal::Bool(value) => self.writer.write(if *value { "true" } else { "false" }),
            ast::Literal::Char(value) => self.writer.write(&quote(&value.to_string())),
            ast::Literal::String(value) => self.writer.write(&quote(value)),
            ast::Literal::Number(value) => self.writer.write(value),
        }
    }

    fn write_call(self: &mut Self, call: &ast::Call) -> GenerateResult {
        if call.path.len() == 1 {
            if let Some(intrinsic) = Intrinsic::from_name(call.path.first()) {
                return self.write_intrinsic(intrinsic, &call.arguments);
            }
        }
        let declared = self.signatures.get(call.path.first()).copied().unwrap_or(&[]);
        self.writer.write(&format!("{}{}(", FUNCTION_PREFIX, call.path))?;
        for (index, argument) in call.arguments.iter().enumerate() {
            if index > 0 {
                self.writer.write(", ")?;
            }
            let is_by_reference = argument.is_by_reference || declared.get(index).map_or(false, |declared| declared.is_by_reference);
            if is_by_reference {
                self.write_expression(&argument.value)?;
            } else {
                self.writer.write("clone(")?;
                self.write_expression(&argument.value)?;
                self.writer.write(")")?;
            }
        }
        self.writer.write(")")
    }

    /// Lowers an intrinsic call directly to the corresponding host primitive.
    fn write_intrinsic(self: &mut Self, intrinsic: Intrinsic, arguments: &[ ast::CallArgument ]) -> GenerateResult {
        if arguments.len() != intrinsic.arity() {
            return Err(GenerateError::new(GenerateErrorKind::IntrinsicArguments(intrinsic.name().to_string(), intrinsic.arity(), arguments.len())));
        }
        match intrinsic {
            Intrinsic::Has | Intrinsic::Push => {
                let method = if intrinsic == Intrinsic::Has { ".has(" } else { ".push(" };
                self.writer.write("(")?;
                self.write_expression(&arguments[0].value)?;
                self.writer.write(method)?;
                self.write_expression(&arguments[1].value)?;
                self.writer.write("))")
            },
            Intrinsic::Substring => {
                self.writer.write("(")?;
                self.write_expression(&arguments[0].value)?;
                self.writer.write(".substring(")?;
                self.write_expression(&arguments[1].value)?;
                self.writer.write(", ")?;
                self.write_expression(&arguments[2].value)?;
                self.writer.write("))")
            },
            Intrinsic::ReadFile => {
                self.writer.write("require('fs').readFileSync(")?;
                self.write_expression(&arguments[0].value)?;
                self.writer.write(", 'utf8')")
            },
            Intrinsic::Write => {
                self.writer.write("process.stdout.write(")?;
                self.write_expression(&arguments[0].value)?;
                self.writer.write(")")
            },
            Intrinsic::Die => {
                self.writer.write("(() => { throw new Error(")?;
                self.write_expression(&arguments[0].value)?;
                self.writer.write("); })()")
            },
        }
    }
}
