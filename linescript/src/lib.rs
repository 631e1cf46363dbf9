// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod chunk;
mod control;
mod evaluate;
mod expression;
mod lexer;
mod parser;
mod statement;
mod store;
pub mod value;

pub use self::{
    chunk::{first_chunk_len, split_chunks, strip_end_of_input},
    control::{ControlChunk, ControlFlow, ControlFlowError, PendingElse},
    expression::*,
    lexer::{Keyword, Lexer, Punctuator, Token, TokenKind},
    parser::{ParseError, ParseResult, Parser},
    statement::{AssignStatement, ConditionalStatement, PrintStatement, ReadStatement, Statement, TypeSpecifier, VariableStatement},
    store::{ExecutionError, Store},
    value::ValueType,
};
