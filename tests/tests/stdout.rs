// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    r#"
        print("Hello!");
    "#,
    &[
        "Hello!",
    ],
)]
#[case(
    r#"
        int a = 5;
        print("{a}");
    "#,
    &[
        "5",
    ],
)]
#[case(
    r#"
        int a = 1;
        if (a == 1) {
            print("yes");
        } else {
            print("no");
        }
    "#,
    &[
        "yes",
    ],
)]
#[case(
    r#"
        int a = 0;
        if (a == 1) {
            print("A");
        } else if (a == 0) {
            print("B");
        } else {
            print("C");
        }
    "#,
    &[
        "B",
    ],
)]
#[case(
    r#"
        str name = "Ada";
        auto greeting = "Hello, " + name;
        print("{greeting}! {missing} {unterminated");
    "#,
    &[
        "Hello, Ada! undefined {unterminated",
    ],
)]
#[case(
    r#"
        int a = 3, b = 4;
        float c = 0.5;
        auto sum = a + b;
        auto mixed = sum + c;
        print("{sum} {mixed}");
    "#,
    &[
        "7 7.500000",
    ],
)]
#[case(
    r#"
        // line comment
        int a = 1; /* a block comment
        print("hidden");
        spanning lines */ print("visible {a}");
    "#,
    &[
        "visible 1",
    ],
)]
#[case(
    r#"
        int a = 2;
        if (a > 1) { print("big"); } else { print("small"); } print("done");
    "#,
    &[
        "big",
        "done",
    ],
)]
#[case(
    r#"
        if (1) {
            print("a");
        }
        if (0) {
            print("b");
        } else {
            print("c");
        }
    "#,
    &[
        "a",
        "c",
    ],
)]
#[case(
    r#"
        }
        print("still running");
    "#,
    &[
        "still running",
    ],
)]
#[case(
    r#"
        str s = "x";
        s = s + s;
        s = s + 1 + 2;
        print("{s}");
    "#,
    &[
        "xx12",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}
