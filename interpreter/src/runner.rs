// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, BufRead};

use log::debug;
use thiserror::Error;

use crate::{Console, Interpreter, RuntimeError};

/// The error that stopped a run, with the one-based line it happened on.
#[derive(Debug, Error)]
#[error("line {line}: {error}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub error: RuntimeError,
}

/// The physical lines of a program without their `\n` or `\r\n`. Bytes that
/// are not UTF-8 are replaced instead of failing the line.
pub struct SourceLines<R> {
    source: R,
    buffer: Vec<u8>,
}

impl<R> SourceLines<R>
        where R: BufRead {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: Vec::new(),
        }
    }
}

impl<R> Iterator for SourceLines<R>
        where R: BufRead {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();

        match self.source.read_until(b'\n', &mut self.buffer) {
            Ok(0) => return None,
            Ok(_) => (),
            Err(e) => return Some(Err(e)),
        }

        let mut line = self.buffer.as_slice();
        if let Some(stripped) = line.strip_suffix(b"\n") {
            line = stripped.strip_suffix(b"\r").unwrap_or(stripped);
        }

        Some(Ok(String::from_utf8_lossy(line).into_owned()))
    }
}

/// Feeds every line of `source` to the interpreter, stopping at the first
/// error.
pub fn run_program<C, R>(interpreter: &mut Interpreter<C>, source: R) -> Result<(), LineError>
        where C: Console,
              R: BufRead {
    let mut line_number = 0;

    for line in SourceLines::new(source) {
        line_number += 1;

        let result = line
            .map_err(RuntimeError::Source)
            .and_then(|line| interpreter.execute_line(&line));

        if let Err(error) = result {
            return Err(LineError { line: line_number, error });
        }
    }

    debug!("Program finished after {line_number} lines");
    Ok(())
}
