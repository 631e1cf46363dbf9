// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator, TokenKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,

    /// Zero-based character index into the line.
    pub column: usize,
}

impl Token {
    #[must_use]
    pub const fn end_of_input(column: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            column,
        }
    }

    #[must_use]
    pub fn punctuator(&self) -> Option<Punctuator> {
        match self.kind {
            TokenKind::Punctuator(punctuator) => Some(punctuator),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.kind == TokenKind::Punctuator(punctuator)
    }

    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::EndOfInput => f.write_str("end of input"),
            kind => write!(f, "token '{kind}'"),
        }
    }
}
