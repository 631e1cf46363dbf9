// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "open parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "close parenthesis")]
    RightParenthesis,
    #[strum(serialize = "open curly bracket")]
    LeftCurlyBracket,
    #[strum(serialize = "close curly bracket")]
    RightCurlyBracket,
    #[strum(serialize = "semicolon")]
    Semicolon,
    #[strum(serialize = "plus")]
    PlusSign,
    #[strum(serialize = "assignment")]
    Assignment,
    #[strum(serialize = "equals")]
    Equals,
    #[strum(serialize = "not-equals")]
    NotEquals,
    #[strum(serialize = "less-than")]
    LessThan,
    #[strum(serialize = "less-than-or-equal")]
    LessThanOrEqual,
    #[strum(serialize = "greater-than")]
    GreaterThan,
    #[strum(serialize = "greater-than-or-equal")]
    GreaterThanOrEqual,
    #[strum(serialize = "logical-and")]
    LogicalAnd,
    #[strum(serialize = "logical-or")]
    LogicalOr,
    #[strum(serialize = "not")]
    Not,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Comma => ",",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::Semicolon => ";",
            Self::PlusSign => "+",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Not => "!",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
