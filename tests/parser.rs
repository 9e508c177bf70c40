mod util;
use util::*;

fn name(n: &str) -> Expression {
    Expression::Name(Path::single(n))
}

fn number(n: &str) -> Expression {
    Expression::Literal(Literal::Number(n.to_string()))
}

fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::BinaryOp(Box::new(BinaryOp { op, left, right }))
}

fn plain_type(n: &str) -> TypeName {
    TypeName { path: Path::single(n), parameters: Vec::new() }
}

#[test]
fn empty_module() {
    assert_eq!(parse("").unwrap().declarations.len(), 0);
    assert_eq!(parse("  \n\t ").unwrap().declarations.len(), 0);
}

#[test]
fn line_comment() {
    parse("// test\n").unwrap();
}

#[test]
fn unterminated_line_comment() {
    parse("// test").unwrap();
}

#[test]
fn unterminated_empty_line_comment() {
    parse("//").unwrap();
}

#[test]
fn block_comment() {
    parse("/* test */").unwrap();
}

#[test]
fn multi_line_block_comment() {
    parse("/*
    test
    */").unwrap();
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(parse_err("fn test() { } /* test"), ParseErrorKind::UnterminatedComment);
}

#[test]
fn comments_in_expression() {
    parse("
        fn test() {
            x + /* ml */ y; // sl
        }
    ").unwrap();
}

#[test]
fn comments_without_whitespace() {
    parse("
        fn/*ml*/test(){//sl
        }
    ").unwrap();
}

#[test]
fn declarations_in_order() {
    let module = parse("
        struct Point { x: i32, y: i32 }
        fn origin(): Point { return Point { x: 0, y: 0 }; }
        enum Shape { Circle, Square }
    ").unwrap();
    let names: Vec<_> = module.declarations.iter().map(|d| d.name()).collect();
    assert_eq!(names, [ "Point", "origin", "Shape" ]);
    assert_eq!(module.functions().count(), 1);
}

#[test]
fn function_signature() {
    let module = parse("fn f(ref a: vec<str>, b: i32,): str { }").unwrap();
    match &module.declarations[0] {
        Declaration::Function(function) => {
            assert_eq!(function.name, "f");
            assert_eq!(function.arguments.len(), 2);
            assert_eq!(function.arguments[0].name, "a");
            assert!(function.arguments[0].is_by_reference);
            assert_eq!(function.arguments[0].type_name.to_string(), "vec<str>");
            assert_eq!(function.arguments[1].name, "b");
            assert!(!function.arguments[1].is_by_reference);
            assert_eq!(function.return_type, Some(plain_type("str")));
            assert!(function.statements.is_empty());
        },
        other => panic!("Unexpected declaration {:?}", other),
    }
}

#[test]
fn function_without_return_type() {
    let module = parse("fn f() { }").unwrap();
    match &module.declarations[0] {
        Declaration::Function(function) => assert_eq!(function.return_type, None),
        other => panic!("Unexpected declaration {:?}", other),
    }
}

#[test]
fn missing_argument_separator() {
    assert!(matches!(parse_err("fn f(a: i32 b: i32) { }"), ParseErrorKind::UnexpectedToken(_, _)));
}

#[test]
fn struct_fields() {
    let module = parse("struct Point { x: i32, y: i32, }").unwrap();
    match &module.declarations[0] {
        Declaration::Struct(structure) => {
            assert_eq!(structure.name, "Point");
            assert_eq!(structure.fields, vec![
                Field { name: "x".to_string(), type_name: plain_type("i32") },
                Field { name: "y".to_string(), type_name: plain_type("i32") },
            ]);
        },
        other => panic!("Unexpected declaration {:?}", other),
    }
}

#[test]
fn missing_field_separator() {
    assert!(matches!(parse_err("struct Point { x: i32 y: i32 }"), ParseErrorKind::UnexpectedToken(_, _)));
}

#[test]
fn enum_variants() {
    let module = parse("enum Shape { Circle { radius: u32 }, Square { side: u32, }, Empty }").unwrap();
    match &module.declarations[0] {
        Declaration::Enum(enumeration) => {
            let names: Vec<_> = enumeration.variants.iter().map(|v| v.name.as_str()).collect();
            assert_eq!(names, [ "Circle", "Square", "Empty" ]);
            assert_eq!(enumeration.variants[0].fields.len(), 1);
            assert_eq!(enumeration.variants[1].fields[0].name, "side");
            assert!(enumeration.variants[2].fields.is_empty());
        },
        other => panic!("Unexpected declaration {:?}", other),
    }
}

#[test]
fn nested_generic_type_names() {
    let module = parse("struct S { a: vec<vec<Point>>, b: dict<str, i32>, c: set }").unwrap();
    match &module.declarations[0] {
        Declaration::Struct(structure) => {
            assert_eq!(structure.fields[0].type_name.to_string(), "vec<vec<Point>>");
            assert_eq!(structure.fields[1].type_name.parameters.len(), 2);
            assert_eq!(structure.fields[2].type_name, plain_type("set"));
        },
        other => panic!("Unexpected declaration {:?}", other),
    }
}

#[test]
fn invalid_declaration() {
    assert!(matches!(parse_err("let x = 1;"), ParseErrorKind::ExpectedDeclaration(_)));
}

#[test]
fn statements() {
    let body = parse_body("
        fn f() {
            let a = 1;
            if (a) { } else return a;
            while (a) a = a - 1;
            { }
            f();
        }
    ");
    assert_eq!(body.len(), 5);
    assert!(matches!(&body[0], Statement::Let(Let { name, .. }) if name == "a"));
    match &body[1] {
        Statement::If(if_statement) => {
            assert!(matches!(*if_statement.consequent, Statement::Block(_)));
            assert!(matches!(if_statement.alternate.as_deref(), Some(Statement::Return(_))));
        },
        other => panic!("Unexpected statement {:?}", other),
    }
    assert!(matches!(&body[2], Statement::While(While { body, .. }) if matches!(**body, Statement::Expression(_))));
    assert!(matches!(&body[3], Statement::Block(Block { statements }) if statements.is_empty()));
    assert!(matches!(&body[4], Statement::Expression(Expression::Call(_))));
}

#[test]
fn missing_semicolon() {
    assert!(matches!(parse_err("fn f() { let a = 1 }"), ParseErrorKind::UnexpectedToken(_, _)));
}

#[test]
fn unterminated_function_body() {
    assert!(matches!(parse_err("fn f() { let a = 1;"), ParseErrorKind::UnexpectedToken(_, _)));
}

#[test]
fn left_associative_operators() {
    assert_eq!(parse_expr("a - b - c"), binary(BinaryOperator::Sub,
        binary(BinaryOperator::Sub, name("a"), name("b")),
        name("c")
    ));
}

#[test]
fn operator_precedence() {
    assert_eq!(parse_expr("a || b && c == d + 1"), binary(BinaryOperator::Or,
        name("a"),
        binary(BinaryOperator::And,
            name("b"),
            binary(BinaryOperator::Equal,
                name("c"),
                binary(BinaryOperator::Add, name("d"), number("1"))
            )
        )
    ));
    assert_eq!(parse_expr("a < b != c >= d"), binary(BinaryOperator::NotEqual,
        binary(BinaryOperator::Less, name("a"), name("b")),
        binary(BinaryOperator::GreaterOrEqual, name("c"), name("d"))
    ));
}

#[test]
fn parenthesized_expression() {
    assert_eq!(parse_expr("(a + b) - c"), binary(BinaryOperator::Sub,
        binary(BinaryOperator::Add, name("a"), name("b")),
        name("c")
    ));
}

#[test]
fn right_associative_assignment() {
    assert_eq!(parse_expr("a = b = c || d"), binary(BinaryOperator::Assign,
        name("a"),
        binary(BinaryOperator::Assign, name("b"), binary(BinaryOperator::Or, name("c"), name("d")))
    ));
}

#[test]
fn identity_test() {
    assert_eq!(parse_expr("shape is Circle"), Expression::IdentityTest(Box::new(IdentityTest {
        operand: name("shape"),
        variant: Path::single("Circle"),
        is_negated: false,
    })));
    match parse_expr("a.b isnt Square && c") {
        Expression::BinaryOp(binary_op) => match binary_op.left {
            Expression::IdentityTest(test) => {
                assert!(test.is_negated);
                assert_eq!(test.operand, Expression::Name(Path(vec![ "a".to_string(), "b".to_string() ])));
            },
            other => panic!("Unexpected expression {:?}", other),
        },
        other => panic!("Unexpected expression {:?}", other),
    }
}

#[test]
fn unary_operations() {
    assert_eq!(parse_expr("-x"), Expression::UnaryOp(Box::new(UnaryOp { op: UnaryOperator::Negate, operand: name("x") })));
    assert_eq!(parse_expr("!x == y"), binary(BinaryOperator::Equal,
        Expression::UnaryOp(Box::new(UnaryOp { op: UnaryOperator::Not, operand: name("x") })),
        name("y")
    ));
}

#[test]
fn in_place_mutation() {
    assert_eq!(parse_expr("++i"), Expression::InPlace(Box::new(InPlace { op: InPlaceOperator::Increment, target: name("i"), is_prefix: true })));
    assert_eq!(parse_expr("i--"), Expression::InPlace(Box::new(InPlace { op: InPlaceOperator::Decrement, target: name("i"), is_prefix: false })));
    match parse_expr("v[i]++") {
        Expression::InPlace(in_place) => {
            assert!(!in_place.is_prefix);
            assert!(matches!(in_place.target, Expression::Access(_)));
        },
        other => panic!("Unexpected expression {:?}", other),
    }
}

#[test]
fn calls() {
    match parse_expr("f(a, ref b.c, 1,)") {
        Expression::Call(call) => {
            assert_eq!(call.path, Path::single("f"));
            assert_eq!(call.arguments.len(), 3);
            assert!(!call.arguments[0].is_by_reference);
            assert!(call.arguments[1].is_by_reference);
            assert_eq!(call.arguments[1].value.clone(), Expression::Name(Path(vec![ "b".to_string(), "c".to_string() ])));
            assert_eq!(call.arguments[2].value, number("1"));
        },
        other => panic!("Unexpected expression {:?}", other),
    }
    assert!(matches!(parse_expr("f()"), Expression::Call(Call { arguments, .. }) if arguments.is_empty()));
}

#[test]
fn collection_literals() {
    assert_eq!(parse_expr("vec[1, 2]"), Expression::Collection(Collection { kind: CollectionKind::Vec, elements: vec![ number("1"), number("2") ] }));
    assert_eq!(parse_expr("set['a',]"), Expression::Collection(Collection { kind: CollectionKind::Set, elements: vec![ Expression::Literal(Literal::Char('a')) ] }));
    assert_eq!(parse_expr("vec[]"), Expression::Collection(Collection { kind: CollectionKind::Vec, elements: Vec::new() }));
}

#[test]
fn collection_keyword_without_bracket() {
    assert!(matches!(parse_err("fn f() { return vec; }"), ParseErrorKind::ExpectedExpression(_)));
}

#[test]
fn object_literals() {
    assert_eq!(parse_expr("Point { x: 1, y }"), Expression::Object(Object {
        type_name: Some(Path::single("Point")),
        fields: vec![
            ObjectField { name: "x".to_string(), value: Some(number("1")) },
            ObjectField { name: "y".to_string(), value: None },
        ],
    }));
    assert_eq!(parse_expr("{ }"), Expression::Object(Object { type_name: None, fields: Vec::new() }));
}

#[test]
fn subscript() {
    assert_eq!(parse_expr("s.text[i + 1]"), Expression::Access(Box::new(Access {
        collection: Path(vec![ "s".to_string(), "text".to_string() ]),
        key: binary(BinaryOperator::Add, name("i"), number("1")),
    })));
}

#[test]
fn literals() {
    assert_eq!(parse_expr("true"), Expression::Literal(Literal::Bool(true)));
    assert_eq!(parse_expr("false"), Expression::Literal(Literal::Bool(false)));
    assert_eq!(parse_expr("'x'"), Expression::Literal(Literal::Char('x')));
    assert_eq!(parse_expr("'\\''"), Expression::Literal(Literal::Char('\'')));
    assert_eq!(parse_expr("42"), number("42"));
    assert_eq!(parse_expr("\"\""), Expression::Literal(Literal::String(String::new())));
}

#[test]
fn string_escapes() {
    assert_eq!(
        parse_expr(r#""a\n\t\"b\"\\ \0 \r \'""#),
        Expression::Literal(Literal::String("a\n\t\"b\"\\ \0 \r '".to_string()))
    );
}

#[test]
fn invalid_escape() {
    assert_eq!(parse_err(r#"fn f() { return "a\qb"; }"#), ParseErrorKind::InvalidEscape('q'));
    assert_eq!(parse_err(r#"fn f() { return '\q'; }"#), ParseErrorKind::InvalidEscape('q'));
}

#[test]
fn unterminated_literals() {
    assert_eq!(parse_err("fn f() { return \"abc; }"), ParseErrorKind::UnterminatedString);
    assert_eq!(parse_err("fn f() { return 'a"), ParseErrorKind::UnterminatedCharacter);
}

#[test]
fn invalid_character_literal() {
    assert_eq!(parse_err("fn f() { return 'ab'; }"), ParseErrorKind::InvalidCharacter("ab".to_string()));
    assert_eq!(parse_err("fn f() { return ''; }"), ParseErrorKind::InvalidCharacter(String::new()));
}

#[test]
fn unknown_character() {
    assert_eq!(parse_err("fn f() { return #; }"), ParseErrorKind::UnknownCharacter('#'));
}

#[test]
fn missing_expression() {
    assert!(matches!(parse_err("fn f() { return ; }"), ParseErrorKind::ExpectedExpression(_)));
}

#[test]
fn error_messages() {
    let err = parse("fn f( { }").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error: expected identifier, found '{'");
    let err = parse("struct").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error: expected identifier, found end of file");
}
