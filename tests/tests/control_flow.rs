// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use linescript_interpreter::{ControlFlowError, RuntimeError};
use rstest::rstest;
use tests::{interpret_and_return_stdout, run, run_with_input};

/// Builds `if`, `else if`... for every condition, plus an `else` when asked.
fn chain(conditions: &[bool], with_else: bool, one_line: bool) -> String {
    let mut lines = Vec::new();

    for (index, condition) in conditions.iter().enumerate() {
        let keyword = if index == 0 { "if" } else { "} else if" };
        lines.push(format!("{keyword} ({}) {{", u8::from(*condition)));
        lines.push(format!("print(\"{index}\");"));
    }

    if with_else {
        lines.push("} else {".to_string());
        lines.push("print(\"else\");".to_string());
    }

    lines.push("}".to_string());
    lines.join(if one_line { " " } else { "\n" })
}

fn expected_branch(conditions: &[bool], with_else: bool) -> Vec<String> {
    match conditions.iter().position(|condition| *condition) {
        Some(index) => vec![index.to_string()],
        None if with_else => vec!["else".to_string()],
        None => Vec::new(),
    }
}

fn truth_assignments(count: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1u32 << count).map(move |bits| (0..count).map(|bit| bits & (1 << bit) != 0).collect())
}

#[rstest]
fn exactly_one_branch_runs(
    #[values(1, 2, 3, 4, 5)] conditions: usize,
    #[values(true, false)] with_else: bool,
    #[values(true, false)] one_line: bool,
) {
    for assignment in truth_assignments(conditions) {
        let program = chain(&assignment, with_else, one_line);
        assert_eq!(
            interpret_and_return_stdout(&program),
            expected_branch(&assignment, with_else),
            "program:\n{program}"
        );
    }
}

#[rstest]
fn nothing_runs_inside_a_skipped_scope(#[values(1, 2, 3)] conditions: usize) {
    for assignment in truth_assignments(conditions) {
        let program = format!("if (0) {{\n{}\n}}", chain(&assignment, true, false));
        assert_eq!(interpret_and_return_stdout(&program), Vec::<String>::new(), "program:\n{program}");
    }
}

#[rstest]
#[case("if (0) {\na = 2;\nint b = 3;\nread(a);\n}")]
#[case("if (0) { a = 2; int b = 3; read(a); }")]
#[case("if (1) {\n} else {\na = 2;\nint b = 3;\nread(a);\n}")]
#[case("if (0) {\n} else if (1) {\n} else if (1) {\na = 2;\nint b = 3;\nread(a);\n}")]
#[case("if (1) {\n} else if (1) {\na = 2;\n} else {\nint b = 3;\nread(a);\n}")]
#[case("if (0) {\nif (1) {\na = 2;\n} else {\nint b = 3;\nread(a);\n}\n}")]
fn skipped_statements_leave_the_stores_alone(#[case] body: &str) {
    let program = format!("int a = 1;\n{body}\nprint(\"{{a}}\");");
    let run = run_with_input(&program, &["9"]);

    assert!(run.error.is_none(), "program:\n{program}");
    assert_eq!(run.store.value("a"), Some("1"));
    assert!(!run.store.is_declared("b"));
    assert!(run.prompts.is_empty());
    assert_eq!(run.output, ["1"]);
}

#[rstest]
fn nested_chain_inside_every_branch(#[values(0, 1, 2)] outer: usize, #[values(0, 1)] inner: usize) {
    let program = format!(
        r#"
            int outer = {outer};
            int inner = {inner};
            if (outer == 0) {{
                if (inner == 0) {{
                    print("0.0");
                }} else {{
                    print("0.1");
                }}
            }} else if (outer == 1) {{
                if (inner == 0) {{ print("1.0"); }} else {{ print("1.1"); }}
            }} else {{
                if (inner == 0) {{
                    print("2.0");
                }}
                else {{
                    print("2.1");
                }}
            }}
            print("end");
        "#
    );

    assert_eq!(interpret_and_return_stdout(&program), [format!("{outer}.{inner}"), "end".to_string()]);
}

#[test]
fn satisfied_nested_chain_does_not_leak_into_the_next_chain() {
    let program = r#"
        if (1) {
            if (1) {
                print("inner");
            }
        }
        if (0) {
            print("wrong");
        } else {
            print("right");
        }
    "#;

    assert_eq!(interpret_and_return_stdout(program), ["inner", "right"]);
}

#[test]
fn conditions_see_assignments_from_earlier_branches() {
    let program = r#"
        int a = 1;
        if (a == 1) {
            a = 2;
        }
        if (a == 2) {
            print("updated");
        }
    "#;

    assert_eq!(interpret_and_return_stdout(program), ["updated"]);
}

#[rstest]
#[case("else {\nprint(\"x\");\n}")]
#[case("else if (1) {\n}")]
#[case("if (1) {\n}\nint a;\nelse {\n}")]
#[case("if (1) {\n}\nelse {\n}\nelse {\n}")]
fn dangling_else_halts(#[case] program: &str) {
    let run = run(program);
    let error = run.error.expect("program should halt");

    assert!(matches!(error.error, RuntimeError::ControlFlow(ControlFlowError::DanglingElse)));
}

#[rstest]
#[case("if 1 {", 1)]
#[case("print(\"before\");\nif (1 {", 2)]
#[case("if (1)\nprint(\"x\");", 1)]
#[case("if (1) {\n} else\n", 2)]
fn structural_errors_halt_with_line(#[case] program: &str, #[case] line: usize) {
    let run = run(program);
    let error = run.error.expect("program should halt");

    assert_eq!(error.line, line);
    assert!(matches!(error.error, RuntimeError::ControlFlow(..)));
}

#[test]
fn halting_stops_remaining_lines() {
    let run = run("print(\"a\");\nelse {\nprint(\"b\");");

    assert_eq!(run.output, ["a"]);
    assert_eq!(run.error.map(|error| error.line), Some(2));
}

#[rstest]
#[case(1_000)]
#[case(50_000)]
fn stray_braces_on_one_line_are_ignored(#[case] count: usize) {
    let program = format!("{}\nprint(\"after\");", "}".repeat(count));
    assert_eq!(interpret_and_return_stdout(&program), ["after"]);
}

#[test]
fn one_line_nesting_depth_is_not_limited() {
    let depth = 10_000;
    let program = format!("{} print(\"deep\"); {}\nprint(\"after\");", "if (1) { ".repeat(depth), "} ".repeat(depth));
    assert_eq!(interpret_and_return_stdout(&program), ["deep", "after"]);
}
