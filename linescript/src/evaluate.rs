// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{
    value::{self, UNDEFINED},
    BiExpression, BiOperator, Comparison, Expression, Store, UnaryExpression, UnaryOperator,
};

impl Expression {
    /// Evaluates the expression to its textual value.
    ///
    /// Evaluation never fails: unknown variables read as `undefined` and
    /// numbers that don't parse count as zero.
    #[must_use]
    pub fn evaluate(&self, store: &Store) -> String {
        match self {
            Self::IntegerLiteral(literal) | Self::FloatLiteral(literal) | Self::StringLiteral(literal) => {
                literal.clone()
            }

            Self::Reference(name) => store.value(name).unwrap_or(UNDEFINED).to_string(),

            Self::Unary(expr) => evaluate_unary_expression(expr, store),
            Self::BiExpression(expr) => evaluate_bi_expression(expr, store),
        }
    }
}

fn evaluate_unary_expression(expression: &UnaryExpression, store: &Store) -> String {
    let operand = expression.operand.evaluate(store);

    match expression.operator {
        UnaryOperator::Not => value::from_bool(!value::is_truthy(&operand)),
    }
}

fn evaluate_bi_expression(expression: &BiExpression, store: &Store) -> String {
    let lhs = expression.lhs.evaluate(store);
    let rhs = expression.rhs.evaluate(store);

    match expression.operator {
        BiOperator::Add => evaluate_add(lhs, rhs),
        BiOperator::Comparison(comparison) => evaluate_comparison(comparison, &lhs, &rhs),
        BiOperator::LogicalAnd => value::from_bool(value::is_truthy(&lhs) && value::is_truthy(&rhs)),
        BiOperator::LogicalOr => value::from_bool(value::is_truthy(&lhs) || value::is_truthy(&rhs)),
    }
}

/// Numeric addition when both sides are numeric, concatenation otherwise.
fn evaluate_add(mut lhs: String, rhs: String) -> String {
    if !value::is_numeric(&lhs) || !value::is_numeric(&rhs) {
        lhs.push_str(&rhs);
        return lhs;
    }

    if lhs.contains('.') || rhs.contains('.') {
        let sum = value::parse_float_or_zero(&lhs) + value::parse_float_or_zero(&rhs);
        return format!("{sum:.6}");
    }

    let sum = value::parse_integer_or_zero(&lhs).wrapping_add(value::parse_integer_or_zero(&rhs));
    sum.to_string()
}

fn evaluate_comparison(comparison: Comparison, lhs: &str, rhs: &str) -> String {
    let result = if value::is_numeric(lhs) && value::is_numeric(rhs) {
        comparison.compare(&value::parse_float_or_zero(lhs), &value::parse_float_or_zero(rhs))
    } else {
        comparison.compare(lhs, rhs)
    };

    value::from_bool(result)
}
