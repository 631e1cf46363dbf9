// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("\"3\" + \"4\"", "7")]
#[case("\"3.0\" + \"4\"", "7.000000")]
#[case("\"a\" + \"b\"", "ab")]
#[case("\"3\" + \"b\"", "3b")]
#[case("9223372036854775807 + 1", "-9223372036854775808")]
fn addition(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_expression(input), expected);
}

#[rstest]
#[case("!\"0\"", "1")]
#[case("!\"0.0\"", "1")]
#[case("!\"\"", "1")]
#[case("!\"x\"", "0")]
fn negation(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_expression(input), expected);
}

#[rstest]
#[case("1 || 0 && 0", "1")]
#[case("(1 || 0) && 0", "0")]
#[case("1 + 1 == 2", "1")]
#[case("\"1\" + \"1\" == \"11\"", "0")]
#[case("2 < 10 == 1", "1")]
#[case("\"2\" < \"10\"", "1")]
#[case("\"b2\" < \"b10\"", "0")]
#[case("\"b\" < \"a\" || \"a\" < \"b\"", "1")]
#[case("!1 == 0", "1")]
#[case("!(1 == 0)", "1")]
fn precedence(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_expression(input), expected);
}

#[rstest]
#[case("\".\" == 0", "1")]
#[case("\"1.2.3\" == \"1.2.3\"", "1")]
#[case("\".\" + \".\"", "0.000000")]
#[case("ghost", "undefined")]
fn malformed_numbers_become_zero(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_expression(input), expected);
}
