// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{value::UNDEFINED, Expression, Store, ValueType};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(AssignStatement),
    Block(Vec<Statement>),
    Conditional(ConditionalStatement),
    Print(PrintStatement),
    Read(ReadStatement),
    TimeExec,
    Variable(VariableStatement),
}

/// `int a = 1` or `auto name = "x"`; several comma-joined declarations are
/// wrapped in a [`Statement::Block`].
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatement {
    pub type_specifier: TypeSpecifier,
    pub name: String,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStatement {
    pub name: String,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatement {
    pub content: String,
}

impl PrintStatement {
    /// Replaces every `{name}` with the variable's value, or `undefined` when
    /// it doesn't exist. An unterminated `{` and everything after it is kept
    /// verbatim, and substituted text is never scanned again.
    #[must_use]
    pub fn interpolate(&self, store: &Store) -> String {
        let mut output = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
                break;
            };

            output.push_str(&rest[..open]);

            let name = &rest[open + 1..close];
            output.push_str(store.value(name).unwrap_or(UNDEFINED));

            rest = &rest[close + 1..];
        }

        output.push_str(rest);
        output
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadStatement {
    pub name: String,
}

impl ReadStatement {
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}: ", self.name)
    }
}

/// A self-contained if/else. Conditionals spread over several lines are
/// handled by [`crate::ControlFlow`] instead and never become one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalStatement {
    pub condition: Expression,
    pub then_block: Vec<Statement>,
    pub else_block: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpecifier {
    Int,
    Str,
    Float,
    Auto,
}

impl TypeSpecifier {
    /// The fixed type, or `None` for `auto`.
    #[must_use]
    pub const fn value_type(&self) -> Option<ValueType> {
        match self {
            Self::Int => Some(ValueType::Int),
            Self::Str => Some(ValueType::Str),
            Self::Float => Some(ValueType::Float),
            Self::Auto => None,
        }
    }
}
