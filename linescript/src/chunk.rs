// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Punctuator, Token, TokenKind};

/// Splits the tokens of one line into statement-sized chunks.
///
/// A chunk ends right after a `;` seen while neither a parenthesis nor a curly
/// bracket is open. Both depths are tracked separately and may go negative
/// (a line starting with `}`), in which case no split happens until they are
/// balanced again. The end-of-input marker stops the scan and is never part of
/// a chunk.
#[must_use]
pub fn split_chunks(tokens: &[Token]) -> Vec<&[Token]> {
    let mut tokens = strip_end_of_input(tokens);
    let mut chunks = Vec::new();

    while !tokens.is_empty() {
        let (chunk, rest) = tokens.split_at(first_chunk_len(tokens));
        chunks.push(chunk);
        tokens = rest;
    }

    chunks
}

/// The tokens before the end-of-input marker.
#[must_use]
pub fn strip_end_of_input(tokens: &[Token]) -> &[Token] {
    let end = tokens.iter()
        .position(|token| token.kind == TokenKind::EndOfInput)
        .unwrap_or(tokens.len());
    &tokens[..end]
}

/// Length of the chunk at the front of `tokens`. Depths start at zero.
#[must_use]
pub fn first_chunk_len(tokens: &[Token]) -> usize {
    let mut parenthesis_depth = 0isize;
    let mut brace_depth = 0isize;

    for (index, token) in tokens.iter().enumerate() {
        match token.punctuator() {
            Some(Punctuator::LeftParenthesis) => parenthesis_depth += 1,
            Some(Punctuator::RightParenthesis) => parenthesis_depth -= 1,
            Some(Punctuator::LeftCurlyBracket) => brace_depth += 1,
            Some(Punctuator::RightCurlyBracket) => brace_depth -= 1,
            Some(Punctuator::Semicolon) if parenthesis_depth == 0 && brace_depth == 0 => return index + 1,
            _ => (),
        }
    }

    tokens.len()
}
