mod util;
use util::*;
use clover::Error;
use std::process::Command;

const UTILS: &str = "
    // helpers shared by the scripts
    struct Range { start: i32, end: i32 }

    enum Token {
        Word { text: str },
        Space,
    }

    fn is_word(token: Token): bool {
        return token is Word;
    }

    fn length(r: Range): i32 {
        return r.end - r.start;
    }

    fn words(ref tokens: vec<Token>): vec<Token> {
        let result = vec[];
        let i = 0;
        while (i < 10) {
            __push(result, Word { text: \"w\" });
            i++;
        }
        return result;
    }
";

fn source_file(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("clover_{}_{}.clv", name, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn compile_module() {
    let js = compile(UTILS).unwrap();
    assert!(js.starts_with("// GENERATED, DO NOT EDIT\n\nmodule.exports.is_word = __is_word;\n"));
    assert!(js.contains("module.exports.length = __length;\n"));
    assert!(js.contains("module.exports.words = __words;\n"));
    assert!(js.contains("    (result.push({text: \"w\", __type: \"Word\"}));\n"));
}

#[test]
fn parse_errors() {
    match compile("fn") {
        Err(Error::ParseError(err)) => assert!(matches!(err.kind(), ParseErrorKind::UnexpectedToken(_, _))),
        other => panic!("Unexpected result {:?}", other),
    }
    assert_eq!(compile("fn").unwrap_err().to_string(), "Syntax error: expected identifier, found end of file");
}

#[test]
fn resolve_errors() {
    match compile("fn f(): i32 { return 'c'; }") {
        Err(Error::ResolveError(err)) => assert_eq!(err.kind(), &ResolveErrorKind::TypeMismatch("i32".to_string(), "char".to_string())),
        other => panic!("Unexpected result {:?}", other),
    }
    assert_eq!(compile("fn f() { g(); }").unwrap_err().to_string(), "Undefined name 'g'");
}

#[test]
fn errors_produce_no_output() {
    assert!(compile("fn f() { } fn g() { nope(); }").is_err());
}

#[test]
fn binary_compiles_file() {
    let path = source_file("ok", UTILS);
    let output = Command::new(env!("CARGO_BIN_EXE_cloverc")).arg(&path).output().unwrap();
    std::fs::remove_file(&path).ok();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), compile(UTILS).unwrap());
}

#[test]
fn binary_reports_compile_errors() {
    let path = source_file("bad", "fn f() { return x; }");
    let output = Command::new(env!("CARGO_BIN_EXE_cloverc")).arg(&path).output().unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Undefined name 'x'"));
}

#[test]
fn binary_reports_missing_file() {
    let path = std::env::temp_dir().join("clover_missing_file_that_does_not_exist.clv");
    let output = Command::new(env!("CARGO_BIN_EXE_cloverc")).arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn binary_defaults_to_utils() {
    let dir = std::env::temp_dir().join(format!("clover_default_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("utils.clv"), "fn f() { }").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_cloverc")).current_dir(&dir).output().unwrap();
    std::fs::remove_dir_all(&dir).ok();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("function __f() {\n}"));
}
