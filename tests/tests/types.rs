// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use linescript::{ExecutionError, ValueType};
use linescript_interpreter::{DiagnosticTag, RuntimeError};
use rstest::rstest;
use tests::{run, run_with_input};

#[rstest]
#[case("0")]
#[case("42")]
#[case("0042")]
#[case("99999999999999999999999")]
fn int_read_stores_digits(#[case] input: &str) {
    let run = run_with_input("int v = 7;\nread(v);\nprint(\"{v}\");", &[input]);

    assert!(run.error.is_none());
    assert_eq!(run.prompts, ["v: "]);
    assert_eq!(run.output, [input]);
    assert_eq!(run.store.value("v"), Some(input));
}

#[rstest]
#[case("")]
#[case("-1")]
#[case("4.2")]
#[case("12a")]
#[case(" 12")]
fn int_read_rejects_non_digits(#[case] input: &str) {
    let run = run_with_input("int v = 7;\nread(v);\nprint(\"unreachable\");", &[input]);
    let error = run.error.expect("read should halt");

    assert_eq!(error.line, 2);
    assert_eq!(error.error.tag(), DiagnosticTag::Fatal);
    assert!(run.output.is_empty());
    assert_eq!(run.store.value("v"), Some("7"));
}

#[rstest]
#[case("int v = 7;", "v = 12;", true)]
#[case("int v = 7;", "v = \"12\";", true)]
#[case("int v = 7;", "v = \"twelve\";", false)]
#[case("int v = 7;", "v = 1.5;", false)]
#[case("float v = 7;", "v = 1.5;", true)]
#[case("float v = 7;", "v = \"x\";", false)]
#[case("str v = \"7\";", "v = 1.5;", true)]
fn assignment_is_type_checked(#[case] declaration: &str, #[case] assignment: &str, #[case] accepted: bool) {
    let run = run(&format!("{declaration}\n{assignment}"));

    assert_eq!(run.error.is_none(), accepted, "{:?}", run.error.map(|e| e.to_string()));
    if !accepted {
        assert_eq!(run.store.value("v"), Some("7"));
    }
}

#[test]
fn auto_round_trip() {
    let run = run("auto x = 5;\nx = 6;\nx = \"hi\";");
    let error = run.error.expect("string assignment should halt");

    assert_eq!(error.line, 3);
    assert!(matches!(
        error.error,
        RuntimeError::Execution(ExecutionError::TypeMismatch { expected: ValueType::Int, .. })
    ));
    assert_eq!(run.store.value_type("x"), Some(ValueType::Int));
    assert_eq!(run.store.value("x"), Some("6"));
}

#[rstest]
#[case("auto x = 5;", ValueType::Int, "5")]
#[case("auto x = 2.5;", ValueType::Float, "2.5")]
#[case("auto x = \"5\" + \".5\";", ValueType::Float, "5.500000")]
#[case("auto x = \"five\";", ValueType::Str, "five")]
#[case("auto x = 1 == 1;", ValueType::Int, "1")]
fn auto_resolves_its_type(#[case] program: &str, #[case] ty: ValueType, #[case] value: &str) {
    let run = run(program);

    assert!(run.error.is_none());
    assert_eq!(run.store.value_type("x"), Some(ty));
    assert_eq!(run.store.value("x"), Some(value));
}

#[rstest]
#[case("x = 1;")]
#[case("read(x);")]
fn undeclared_targets_halt(#[case] program: &str) {
    let run = run(program);
    let error = run.error.expect("program should halt");

    assert_eq!(error.error.tag(), DiagnosticTag::Error);
    assert!(matches!(error.error, RuntimeError::Execution(ExecutionError::UndeclaredVariable { .. })));
}

#[rstest]
#[case("auto x;", DiagnosticTag::ParseError)]
#[case("int = 5;", DiagnosticTag::ParseError)]
#[case("print(x);", DiagnosticTag::ParseError)]
#[case("int a = (1;", DiagnosticTag::ParseError)]
#[case("int a = 1 2;", DiagnosticTag::ParseError)]
#[case("hello;", DiagnosticTag::ParseError)]
#[case("42;", DiagnosticTag::Error)]
#[case("$;", DiagnosticTag::Error)]
fn malformed_statements_halt(#[case] program: &str, #[case] tag: DiagnosticTag) {
    let run = run(program);
    let error = run.error.expect("program should halt");

    assert_eq!(error.error.tag(), tag);
}
