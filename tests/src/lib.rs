// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use linescript::{Lexer, Parser, Store};
use linescript_interpreter::{run_program, BufferedConsole, Interpreter, LineError};

/// The outcome of running a whole program against a [`BufferedConsole`].
pub struct ProgramRun {
    pub output: Vec<String>,
    pub prompts: Vec<String>,
    pub error: Option<LineError>,
    pub store: Store,
}

fn init_logger() {
    _ = env_logger::builder().is_test(true).try_init();
}

pub fn run_with_input(program: &str, input: &[&str]) -> ProgramRun {
    init_logger();

    let mut interpreter = Interpreter::new(BufferedConsole::with_input(input.iter().copied()));
    let error = run_program(&mut interpreter, program.as_bytes()).err();

    let store = interpreter.store().clone();
    let console = interpreter.into_console();

    ProgramRun {
        prompts: console.prompts().to_vec(),
        output: console.into_output(),
        error,
        store,
    }
}

pub fn run(program: &str) -> ProgramRun {
    run_with_input(program, &[])
}

/// Runs `program` and returns what it printed, panicking when it halted.
pub fn interpret_and_return_stdout(program: &str) -> Vec<String> {
    let run = run(program);

    if let Some(error) = run.error {
        panic!("Program halted: {error}");
    }

    run.output
}

/// Evaluates a single expression against an empty store.
pub fn interpret_expression(input: &str) -> String {
    let tokens = Lexer::new().tokenize(input);
    let expression = Parser::new(&tokens).parse_expression_fully()
        .unwrap_or_else(|e| panic!("Could not parse `{input}`: {e}"));

    expression.evaluate(&Store::new())
}
