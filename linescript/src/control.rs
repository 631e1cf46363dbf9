// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, warn};
use strum::AsRefStr;
use thiserror::Error;

use crate::{first_chunk_len, Keyword, Punctuator, Token};

/// One open `{ ... }` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFrame {
    /// Whether the scope around this block was allowed to run.
    pub parent_exec: bool,

    /// Whether code inside this block runs.
    pub this_exec: bool,

    /// `if` and `else if` blocks; `false` for a plain `else`.
    pub is_if: bool,

    pub last_if_result: bool,

    /// Whether an earlier link of this block's chain already ran when the
    /// block was opened.
    pub chain_satisfied: bool,
}

/// What the most recently closed block leaves behind for a following
/// `else` or `else if`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingElse {
    pub valid: bool,
    pub parent_exec: bool,
    pub chain_satisfied: bool,
}

impl PendingElse {
    /// Whether the next link of the chain may run at all.
    #[must_use]
    pub const fn allows_next_link(&self) -> bool {
        self.parent_exec && !self.chain_satisfied
    }
}

/// The control stack and the pending-else state of one interpreter run.
#[derive(Debug, Default)]
pub struct ControlFlow {
    stack: Vec<ControlFrame>,
    pending_else: PendingElse,
}

impl ControlFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when every open block allows execution. A frame's `this_exec`
    /// already includes its parent's, so only the innermost one is read.
    #[must_use]
    pub fn is_executing(&self) -> bool {
        self.stack.last().map_or(true, |frame| frame.this_exec)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub const fn pending_else(&self) -> PendingElse {
        self.pending_else
    }

    pub fn invalidate_pending_else(&mut self) {
        self.pending_else = PendingElse::default();
    }

    /// Closes the innermost block and arms the pending else when that block
    /// belonged to an `if` chain. A `}` without an open block is ignored.
    pub fn close_block(&mut self) {
        let Some(frame) = self.stack.pop() else {
            warn!("Ignoring '}}' without an open block");
            self.invalidate_pending_else();
            return;
        };

        self.pending_else = if frame.is_if {
            PendingElse {
                valid: true,
                parent_exec: frame.parent_exec,
                chain_satisfied: frame.last_if_result || frame.chain_satisfied,
            }
        } else {
            PendingElse::default()
        };

        debug!("Closed block {frame:?}, depth is now {}, pending else {:?}", self.depth(), self.pending_else);
    }

    /// Opens a new chain with the truthiness of its condition.
    pub fn open_if(&mut self, condition: bool) {
        let parent_exec = self.is_executing();
        let this_exec = parent_exec && condition;

        self.invalidate_pending_else();
        self.push(ControlFrame {
            parent_exec,
            this_exec,
            is_if: true,
            last_if_result: this_exec,
            chain_satisfied: false,
        });
    }

    /// Returns the pending else, or fails when there is nothing to continue.
    pub fn expect_pending_else(&self) -> Result<PendingElse, ControlFlowError> {
        if self.pending_else.valid {
            Ok(self.pending_else)
        } else {
            Err(ControlFlowError::DanglingElse)
        }
    }

    pub fn open_else_if(&mut self, condition: bool) -> Result<(), ControlFlowError> {
        let pending = self.expect_pending_else()?;
        let this_exec = pending.allows_next_link() && condition;

        self.invalidate_pending_else();
        self.push(ControlFrame {
            parent_exec: pending.parent_exec,
            this_exec,
            is_if: true,
            last_if_result: this_exec,
            chain_satisfied: pending.chain_satisfied,
        });

        Ok(())
    }

    pub fn open_else(&mut self) -> Result<(), ControlFlowError> {
        let pending = self.expect_pending_else()?;

        self.invalidate_pending_else();
        self.push(ControlFrame {
            parent_exec: pending.parent_exec,
            this_exec: pending.allows_next_link(),
            is_if: false,
            last_if_result: false,
            chain_satisfied: pending.chain_satisfied,
        });

        Ok(())
    }

    fn push(&mut self, frame: ControlFrame) {
        debug!("Opened block {frame:?} at depth {}", self.depth() + 1);
        self.stack.push(frame);
    }
}

/// The shape of the front of a line as far as control flow is concerned.
/// Every variant carries the tokens that follow it on the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlChunk<'tokens> {
    /// `}` followed by the rest of the line.
    Close { rest: &'tokens [Token] },

    /// `if (condition) {` followed by the start of the body.
    If { condition: &'tokens [Token], body: &'tokens [Token] },

    ElseIf { condition: &'tokens [Token], body: &'tokens [Token] },

    Else { body: &'tokens [Token] },

    /// One chunk as cut by [`first_chunk_len`].
    Statement { tokens: &'tokens [Token], rest: &'tokens [Token] },
}

impl<'tokens> ControlChunk<'tokens> {
    /// Looks at the leading tokens of what is left of a line. Only the
    /// structure is checked here; conditions are parsed by the caller.
    pub fn classify(tokens: &'tokens [Token]) -> Result<Self, ControlFlowError> {
        let Some(first) = tokens.first() else {
            return Ok(Self::Statement { tokens, rest: &[] });
        };

        if first.is_punctuator(Punctuator::RightCurlyBracket) {
            return Ok(Self::Close { rest: &tokens[1..] });
        }

        if first.is_keyword(Keyword::If) {
            let (condition, body) = split_conditional("if", &tokens[1..])?;
            return Ok(Self::If { condition, body });
        }

        if !first.is_keyword(Keyword::Else) {
            let (tokens, rest) = tokens.split_at(first_chunk_len(tokens));
            return Ok(Self::Statement { tokens, rest });
        }

        let rest = &tokens[1..];
        match rest.first() {
            Some(token) if token.is_keyword(Keyword::If) => {
                let (condition, body) = split_conditional("else if", &rest[1..])?;
                Ok(Self::ElseIf { condition, body })
            }

            Some(token) if token.is_punctuator(Punctuator::LeftCurlyBracket) => {
                Ok(Self::Else { body: &rest[1..] })
            }

            _ => Err(ControlFlowError::ExpectedLeftCurlyBracket {
                context: "else",
                token: token_or_end(tokens, 1),
            }),
        }
    }
}

/// Splits `(condition) { body...` into the condition and the body tokens.
fn split_conditional<'a>(context: &'static str, tokens: &'a [Token]) -> Result<(&'a [Token], &'a [Token]), ControlFlowError> {
    match tokens.first() {
        Some(token) if token.is_punctuator(Punctuator::LeftParenthesis) => (),
        _ => {
            return Err(ControlFlowError::ExpectedLeftParenthesis {
                context,
                token: token_or_end(tokens, 0),
            });
        }
    }

    let mut depth = 0usize;
    let mut close = None;
    for (index, token) in tokens.iter().enumerate() {
        match token.punctuator() {
            Some(Punctuator::LeftParenthesis) => depth += 1,
            Some(Punctuator::RightParenthesis) => {
                depth -= 1;
                if depth == 0 {
                    close = Some(index);
                    break;
                }
            }
            _ => (),
        }
    }

    let Some(close) = close else {
        return Err(ControlFlowError::UnmatchedParenthesis { context });
    };

    match tokens.get(close + 1) {
        Some(token) if token.is_punctuator(Punctuator::LeftCurlyBracket) => {
            Ok((&tokens[1..close], &tokens[close + 2..]))
        }

        _ => Err(ControlFlowError::ExpectedLeftCurlyBracket {
            context: "condition",
            token: token_or_end(tokens, close + 1),
        }),
    }
}

fn token_or_end(tokens: &[Token], index: usize) -> Token {
    if let Some(token) = tokens.get(index) {
        return token.clone();
    }

    let column = tokens.last()
        .map(|token| token.column + token.kind.to_string().chars().count())
        .unwrap_or_default();
    Token::end_of_input(column)
}

#[derive(Clone, Debug, PartialEq, Error, AsRefStr)]
pub enum ControlFlowError {
    #[error("dangling else: no block was closed right before it")]
    DanglingElse,

    #[error("expected '(' after `{context}`, got {token}")]
    ExpectedLeftParenthesis { context: &'static str, token: Token },

    #[error("unmatched '(' in `{context}` condition")]
    UnmatchedParenthesis { context: &'static str },

    #[error("expected '{{' after {context}, got {token}")]
    ExpectedLeftCurlyBracket { context: &'static str, token: Token },
}

impl ControlFlowError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
