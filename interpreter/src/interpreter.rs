// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::time::Duration;

use linescript::{
    strip_end_of_input, value, ControlChunk, ControlFlow, ExecutionError, Lexer, Parser, ReadStatement,
    Statement, Store, Token,
};
use log::{debug, trace};

use crate::{timer, Console, ExecutionTimer, RuntimeError};

/// One run of a program, fed one physical line at a time.
pub struct Interpreter<C>
        where C: Console {
    lexer: Lexer,
    store: Store,
    control: ControlFlow,
    time_exec: bool,
    timer: ExecutionTimer,
    console: C,
}

impl<C> Interpreter<C>
        where C: Console {
    pub fn new(console: C) -> Self {
        Self {
            lexer: Lexer::new(),
            store: Store::new(),
            control: ControlFlow::new(),
            time_exec: false,
            timer: ExecutionTimer::start(),
            console,
        }
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn control_flow(&self) -> &ControlFlow {
        &self.control
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    #[must_use]
    pub const fn is_time_exec_enabled(&self) -> bool {
        self.time_exec
    }

    /// Time spent running so far, excluding time blocked in `read`.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    /// Prints the `[timeexec]` line when `timeexec()` ran or `force` is set.
    pub fn report_execution_time(&mut self, force: bool) -> Result<(), RuntimeError> {
        if self.time_exec || force {
            let report = timer::format_report(self.elapsed());
            self.console.print_line(&report)?;
        }

        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> Result<(), RuntimeError> {
        let tokens = self.lexer.tokenize(line);
        trace!("Tokens: {:?}", tokens.iter().map(|token| &token.kind).collect::<Vec<_>>());

        let mut remaining = strip_end_of_input(&tokens);
        while !remaining.is_empty() {
            remaining = self.execute_chunk(remaining)?;
        }

        Ok(())
    }

    /// Runs the control chunk or statement at the front of `tokens` and
    /// returns what is left of the line.
    fn execute_chunk<'tokens>(&mut self, tokens: &'tokens [Token]) -> Result<&'tokens [Token], RuntimeError> {
        match ControlChunk::classify(tokens)? {
            ControlChunk::Close { rest } => {
                self.control.close_block();
                Ok(rest)
            }

            ControlChunk::If { condition, body } => {
                let condition = self.evaluate_condition(condition)?;
                self.control.open_if(condition);
                Ok(body)
            }

            ControlChunk::ElseIf { condition, body } => {
                self.control.expect_pending_else()?;
                let condition = self.evaluate_condition(condition)?;
                self.control.open_else_if(condition)?;
                Ok(body)
            }

            ControlChunk::Else { body } => {
                self.control.open_else()?;
                Ok(body)
            }

            ControlChunk::Statement { tokens, rest } => {
                self.control.invalidate_pending_else();

                if !self.control.is_executing() {
                    debug!("Skipping chunk at depth {}", self.control.depth());
                    return Ok(rest);
                }

                let statement = Parser::new(tokens).parse_statement()?;
                self.execute_statement(&statement)?;
                Ok(rest)
            }
        }
    }

    fn evaluate_condition(&self, tokens: &[Token]) -> Result<bool, RuntimeError> {
        let expression = Parser::new(tokens).parse_expression_fully()?;
        let result = expression.evaluate(&self.store);
        trace!("Condition {expression} evaluated to {result:?}");
        Ok(value::is_truthy(&result))
    }

    pub fn execute_statement(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        match statement {
            Statement::Assignment(assignment) => {
                let value = assignment.expression.evaluate(&self.store);
                self.store.assign(&assignment.name, value)?;
            }

            Statement::Block(statements) => {
                for statement in statements {
                    self.execute_statement(statement)?;
                }
            }

            Statement::Conditional(conditional) => {
                let condition = conditional.condition.evaluate(&self.store);

                let block = if value::is_truthy(&condition) {
                    Some(&conditional.then_block)
                } else {
                    conditional.else_block.as_ref()
                };

                for statement in block.into_iter().flatten() {
                    self.execute_statement(statement)?;
                }
            }

            Statement::Print(print) => {
                let line = print.interpolate(&self.store);
                self.console.print_line(&line)?;
            }

            Statement::Read(read) => self.execute_read(read)?,

            Statement::TimeExec => {
                debug!("Execution time report enabled");
                self.time_exec = true;
            }

            Statement::Variable(variable) => {
                let initializer = variable.initializer.as_ref()
                    .map(|expression| expression.evaluate(&self.store));

                self.store.declare(&variable.name, variable.type_specifier, initializer)?;
            }
        }

        Ok(())
    }

    fn execute_read(&mut self, read: &ReadStatement) -> Result<(), RuntimeError> {
        if !self.store.is_declared(&read.name) {
            return Err(ExecutionError::UndeclaredVariable { name: read.name.clone() }.into());
        }

        self.timer.pause();
        let input = self.console.read_line(&read.prompt());
        self.timer.resume();

        let input = input?.unwrap_or_default();
        self.store.assign(&read.name, input)?;
        Ok(())
    }
}
