// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

use crate::TypeSpecifier;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Auto,
    Else,
    Float,
    If,
    Int,
    Print,
    Read,
    Str,
    Timeexec,
}

impl Keyword {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    /// The declaration type this keyword introduces, if it is one of
    /// `int`, `str`, `float` or `auto`.
    #[must_use]
    pub const fn as_type_specifier(&self) -> Option<TypeSpecifier> {
        match self {
            Self::Auto => Some(TypeSpecifier::Auto),
            Self::Float => Some(TypeSpecifier::Float),
            Self::Int => Some(TypeSpecifier::Int),
            Self::Str => Some(TypeSpecifier::Str),
            _ => None,
        }
    }
}
