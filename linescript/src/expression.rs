// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    IntegerLiteral(String),
    FloatLiteral(String),
    StringLiteral(String),
    Reference(String),
    Unary(UnaryExpression),
    BiExpression(BiExpression),
}

impl Expression {
    #[must_use]
    pub fn bi(operator: BiOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::BiExpression(BiExpression {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    #[must_use]
    pub fn not(operand: Expression) -> Self {
        Self::Unary(UnaryExpression {
            operator: UnaryOperator::Not,
            operand: Box::new(operand),
        })
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntegerLiteral(literal) | Self::FloatLiteral(literal) => f.write_str(literal),
            Self::StringLiteral(literal) => write!(f, "\"{literal}\""),
            Self::Reference(name) => f.write_str(name),
            Self::Unary(expr) => Display::fmt(expr, f),
            Self::BiExpression(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

impl Display for UnaryExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operator, self.operand)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => f.write_str("!"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BiExpression {
    pub operator: BiOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

impl Display for BiExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.operator, self.rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiOperator {
    Add,
    Comparison(Comparison),
    LogicalAnd,
    LogicalOr,
}

impl Display for BiOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Comparison(comparison) => Display::fmt(comparison, f),
            Self::LogicalAnd => f.write_str("&&"),
            Self::LogicalOr => f.write_str("||"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Comparison {
    #[must_use]
    pub fn compare<T: PartialOrd + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        match self {
            Self::Equality => lhs == rhs,
            Self::Inequality => lhs != rhs,
            Self::LessThan => lhs < rhs,
            Self::LessThanOrEqual => lhs <= rhs,
            Self::GreaterThan => lhs > rhs,
            Self::GreaterThanOrEqual => lhs >= rhs,
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        })
    }
}
