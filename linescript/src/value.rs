// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Every scalar is stored and passed around as text. These helpers decide how
//! that text is interpreted by the evaluator and by the type checks.

use std::fmt::{Display, Formatter};

/// Value produced when an unknown variable is read.
pub const UNDEFINED: &str = "undefined";

pub const TRUE: &str = "1";
pub const FALSE: &str = "0";

#[must_use]
pub fn from_bool(value: bool) -> String {
    if value { TRUE } else { FALSE }.to_string()
}

/// Non-empty and made of ASCII digits only.
#[must_use]
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty, digits with at most one decimal point, no sign.
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let mut seen_dot = false;
    for b in text.bytes() {
        match b {
            b'.' if seen_dot => return false,
            b'.' => seen_dot = true,
            b'0'..=b'9' => (),
            _ => return false,
        }
    }

    true
}

#[must_use]
pub fn is_truthy(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    if is_numeric(text) {
        return parse_float_or_zero(text) != 0.0;
    }

    true
}

/// Malformed or out-of-range numbers (e.g. a lone `.`) silently become zero.
#[must_use]
pub fn parse_float_or_zero(text: &str) -> f64 {
    text.parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .unwrap_or(0.0)
}

/// Malformed or out-of-range integers silently become zero.
#[must_use]
pub fn parse_integer_or_zero(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::AsRefStr, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ValueType {
    Int,
    Str,
    Float,
}

impl ValueType {
    /// Whether `text` lexically belongs to this type.
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Self::Int => is_all_digits(text),
            Self::Float => is_numeric(text),
            Self::Str => true,
        }
    }

    /// The type `auto` resolves to for an initializer that evaluated to `text`.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if !is_numeric(text) {
            Self::Str
        } else if text.contains('.') {
            Self::Float
        } else {
            Self::Int
        }
    }

    #[must_use]
    pub const fn default_value(&self) -> &'static str {
        match self {
            Self::Int => "0",
            Self::Float => "0.0",
            Self::Str => "",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", true)]
    #[case("123", true)]
    #[case("1.5", true)]
    #[case(".5", true)]
    #[case("5.", true)]
    #[case(".", true)]
    #[case("1.2.3", false)]
    #[case("-1", false)]
    #[case("+1", false)]
    #[case("1e5", false)]
    #[case("", false)]
    #[case("abc", false)]
    fn numeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_numeric(input), expected);
    }

    #[rstest]
    #[case("", false)]
    #[case("0", false)]
    #[case("0.0", false)]
    #[case("000", false)]
    #[case(".", false)]
    #[case("1", true)]
    #[case("0.01", true)]
    #[case("x", true)]
    #[case("false", true)]
    #[case("undefined", true)]
    fn truthiness(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_truthy(input), expected);
    }

    #[rstest]
    #[case("5", ValueType::Int)]
    #[case("5.5", ValueType::Float)]
    #[case("hi", ValueType::Str)]
    #[case("", ValueType::Str)]
    #[case("-5", ValueType::Str)]
    fn infer(#[case] input: &str, #[case] expected: ValueType) {
        assert_eq!(ValueType::infer(input), expected);
    }

    #[rstest]
    #[case(ValueType::Int, "42", true)]
    #[case(ValueType::Int, "4.2", false)]
    #[case(ValueType::Int, "", false)]
    #[case(ValueType::Float, "4.2", true)]
    #[case(ValueType::Float, "42", true)]
    #[case(ValueType::Float, "four", false)]
    #[case(ValueType::Str, "", true)]
    #[case(ValueType::Str, "anything at all", true)]
    fn accepts(#[case] ty: ValueType, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(ty.accepts(input), expected);
    }

    #[test]
    fn malformed_numbers_fall_back_to_zero() {
        assert_eq!(parse_float_or_zero("."), 0.0);
        assert_eq!(parse_integer_or_zero("99999999999999999999999"), 0);
    }

    #[test]
    fn out_of_range_floats_fall_back_to_zero() {
        let huge = format!("{}.0", "9".repeat(400));
        assert!(is_numeric(&huge));
        assert_eq!(parse_float_or_zero(&huge), 0.0);
        assert!(!is_truthy(&huge));

        assert_eq!(parse_float_or_zero(&"9".repeat(400)), 0.0);
    }
}
